//! Bindings for the mesh-vault contract.
//!
//! The vault holds bonded tokens and lets leinholders (staking contracts) take
//! claims over them. Claims are later released or slashed by the leinholder.

pub mod client;
pub mod msg;

pub use client::{MeshVault, MeshVaultClient, MeshVaultQueryClient, MeshVaultReadOnly};
pub use msg::{BalanceResponse, ExecuteMsg, InstantiateMsg, Lein, QueryMsg};
