//! Typed clients for the mesh-security CosmWasm contracts.
//!
//! Each contract module provides its message types and two clients. The query
//! client wraps read-only smart queries. The signing client adds one method per
//! execute variant. Both forward every call, exactly once, to a transport that
//! implements [`CosmWasmClient`] or [`SigningCosmWasmClient`].
//!
//! ```ignore
//! use mesh_bindings::{ExecuteOptions, mesh_vault::{MeshVault, MeshVaultClient}};
//!
//! let vault = MeshVaultClient::new(&transport, sender, vault_address);
//! vault.bond(ExecuteOptions::default().with_funds(funds)).await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod fee;
pub mod mesh_consumer;
pub mod mesh_vault;
pub mod meta_staking;
pub mod testing;
pub mod transport;

pub use client::{ContractClient, ContractQueryClient};
pub use config::{ClientConfig, ConfigError};
pub use error::ClientError;
pub use fee::{ExecuteOptions, Fee, StdFee};
pub use transport::{CosmWasmClient, ExecuteResult, SigningCosmWasmClient};
