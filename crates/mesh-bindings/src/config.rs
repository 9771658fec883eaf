//! Configuration

use serde::{Deserialize, Serialize};
use std::env;

use crate::{
    mesh_consumer::{MeshConsumerClient, MeshConsumerQueryClient},
    mesh_vault::{MeshVaultClient, MeshVaultQueryClient},
    meta_staking::{MetaStakingClient, MetaStakingQueryClient},
    transport::{CosmWasmClient, SigningCosmWasmClient},
};

/// Sender address variable
pub const SENDER_VAR: &str = "MESH_SENDER";
/// Mesh-vault address variable
pub const MESH_VAULT_VAR: &str = "MESH_VAULT_ADDRESS";
/// Mesh-consumer address variable
pub const MESH_CONSUMER_VAR: &str = "MESH_CONSUMER_ADDRESS";
/// Meta-staking address variable
pub const META_STAKING_VAR: &str = "META_STAKING_ADDRESS";

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A value needed to build a client is not set
    #[error("{0} is not configured")]
    Missing(&'static str),
}

/// Contract addresses and signer identity for building clients
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Address signing execute messages
    pub sender: Option<String>,
    /// Mesh-vault contract address
    pub mesh_vault_address: Option<String>,
    /// Mesh-consumer contract address
    pub mesh_consumer_address: Option<String>,
    /// Meta-staking contract address
    pub meta_staking_address: Option<String>,
}

impl ClientConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load through `lookup`, which maps a variable name to its value
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            sender: lookup(SENDER_VAR),
            mesh_vault_address: lookup(MESH_VAULT_VAR),
            mesh_consumer_address: lookup(MESH_CONSUMER_VAR),
            meta_staking_address: lookup(META_STAKING_VAR),
        }
    }

    fn require<'a>(value: &'a Option<String>, var: &'static str) -> Result<&'a str, ConfigError> {
        value.as_deref().ok_or(ConfigError::Missing(var))
    }

    /// Query client for the configured mesh-vault
    pub fn mesh_vault_query<C: CosmWasmClient>(
        &self,
        client: C,
    ) -> Result<MeshVaultQueryClient<C>, ConfigError> {
        let address = Self::require(&self.mesh_vault_address, MESH_VAULT_VAR)?;
        Ok(MeshVaultQueryClient::new(client, address))
    }

    /// Signing client for the configured mesh-vault
    pub fn mesh_vault<C: SigningCosmWasmClient>(
        &self,
        client: C,
    ) -> Result<MeshVaultClient<C>, ConfigError> {
        let address = Self::require(&self.mesh_vault_address, MESH_VAULT_VAR)?;
        let sender = Self::require(&self.sender, SENDER_VAR)?;
        Ok(MeshVaultClient::new(client, sender, address))
    }

    /// Query client for the configured mesh-consumer
    pub fn mesh_consumer_query<C: CosmWasmClient>(
        &self,
        client: C,
    ) -> Result<MeshConsumerQueryClient<C>, ConfigError> {
        let address = Self::require(&self.mesh_consumer_address, MESH_CONSUMER_VAR)?;
        Ok(MeshConsumerQueryClient::new(client, address))
    }

    /// Signing client for the configured mesh-consumer
    pub fn mesh_consumer<C: SigningCosmWasmClient>(
        &self,
        client: C,
    ) -> Result<MeshConsumerClient<C>, ConfigError> {
        let address = Self::require(&self.mesh_consumer_address, MESH_CONSUMER_VAR)?;
        let sender = Self::require(&self.sender, SENDER_VAR)?;
        Ok(MeshConsumerClient::new(client, sender, address))
    }

    /// Query client for the configured meta-staking contract
    pub fn meta_staking_query<C: CosmWasmClient>(
        &self,
        client: C,
    ) -> Result<MetaStakingQueryClient<C>, ConfigError> {
        let address = Self::require(&self.meta_staking_address, META_STAKING_VAR)?;
        Ok(MetaStakingQueryClient::new(client, address))
    }

    /// Signing client for the configured meta-staking contract
    pub fn meta_staking<C: SigningCosmWasmClient>(
        &self,
        client: C,
    ) -> Result<MetaStakingClient<C>, ConfigError> {
        let address = Self::require(&self.meta_staking_address, META_STAKING_VAR)?;
        let sender = Self::require(&self.sender, SENDER_VAR)?;
        Ok(MetaStakingClient::new(client, sender, address))
    }
}
