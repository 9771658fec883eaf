//! Bindings for the mesh-consumer contract.

pub mod client;
pub mod msg;

pub use client::{MeshConsumer, MeshConsumerClient, MeshConsumerQueryClient, MeshConsumerReadOnly};
pub use msg::{Config, ExecuteMsg, InstantiateMsg, ProviderInfo, QueryMsg};
