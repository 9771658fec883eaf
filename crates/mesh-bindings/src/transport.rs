//! Transport seams the contract clients forward to.
//!
//! Implementations own network I/O, signing, gas estimation and broadcast.
//! The clients in this crate only build messages and hand them over.

use std::sync::Arc;

use async_trait::async_trait;
use cosmwasm_std::Coin;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fee::Fee;

/// Result of a successfully broadcast execute transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteResult {
    /// Raw ABCI message logs
    #[serde(default)]
    pub logs: Vec<Value>,
    /// Block height the transaction was included at
    pub height: u64,
    /// Hex encoded transaction hash
    pub transaction_hash: String,
    /// Raw ABCI events
    #[serde(default)]
    pub events: Vec<Value>,
    /// Gas limit of the transaction
    pub gas_wanted: u64,
    /// Gas consumed by the transaction
    pub gas_used: u64,
}

/// Read-only access to contracts on a chain.
#[async_trait]
pub trait CosmWasmClient: Send + Sync {
    /// Error produced by the transport. Clients pass it through unchanged.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Run a smart query against `contract_address` and return the raw JSON reply.
    async fn query_contract_smart(
        &self,
        contract_address: &str,
        query_msg: &Value,
    ) -> Result<Value, Self::Error>;
}

/// Signing access to contracts on a chain.
#[async_trait]
pub trait SigningCosmWasmClient: CosmWasmClient {
    /// Sign and broadcast an execute message from `sender_address`.
    async fn execute(
        &self,
        sender_address: &str,
        contract_address: &str,
        msg: &Value,
        fee: &Fee,
        memo: Option<&str>,
        funds: &[Coin],
    ) -> Result<ExecuteResult, Self::Error>;
}

#[async_trait]
impl<T: CosmWasmClient + ?Sized> CosmWasmClient for Arc<T> {
    type Error = T::Error;

    async fn query_contract_smart(
        &self,
        contract_address: &str,
        query_msg: &Value,
    ) -> Result<Value, Self::Error> {
        (**self).query_contract_smart(contract_address, query_msg).await
    }
}

#[async_trait]
impl<T: SigningCosmWasmClient + ?Sized> SigningCosmWasmClient for Arc<T> {
    async fn execute(
        &self,
        sender_address: &str,
        contract_address: &str,
        msg: &Value,
        fee: &Fee,
        memo: Option<&str>,
        funds: &[Coin],
    ) -> Result<ExecuteResult, Self::Error> {
        (**self).execute(sender_address, contract_address, msg, fee, memo, funds).await
    }
}

#[async_trait]
impl<T: CosmWasmClient + ?Sized> CosmWasmClient for &T {
    type Error = T::Error;

    async fn query_contract_smart(
        &self,
        contract_address: &str,
        query_msg: &Value,
    ) -> Result<Value, Self::Error> {
        (**self).query_contract_smart(contract_address, query_msg).await
    }
}

#[async_trait]
impl<T: SigningCosmWasmClient + ?Sized> SigningCosmWasmClient for &T {
    async fn execute(
        &self,
        sender_address: &str,
        contract_address: &str,
        msg: &Value,
        fee: &Fee,
        memo: Option<&str>,
        funds: &[Coin],
    ) -> Result<ExecuteResult, Self::Error> {
        (**self).execute(sender_address, contract_address, msg, fee, memo, funds).await
    }
}
