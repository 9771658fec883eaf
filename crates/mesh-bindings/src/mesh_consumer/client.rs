//! Query and signing clients for the mesh-consumer contract

use async_trait::async_trait;

use super::msg::{Config, ExecuteMsg, QueryMsg};
use crate::{
    client::{ContractClient, ContractQueryClient},
    error::ClientError,
    fee::ExecuteOptions,
    transport::{CosmWasmClient, ExecuteResult, SigningCosmWasmClient},
};

/// Read-only mesh-consumer interface.
#[async_trait]
pub trait MeshConsumerReadOnly: Send + Sync {
    /// Error returned by every call
    type Error: std::error::Error + Send + Sync + 'static;

    /// Address of the consumer contract.
    fn contract_address(&self) -> &str;

    /// Query `{"config": {}}`.
    async fn config(&self) -> Result<Config, Self::Error>;
}

/// Full mesh-consumer interface.
#[async_trait]
pub trait MeshConsumer: MeshConsumerReadOnly {
    /// Address the client signs as.
    fn sender(&self) -> &str;

    /// Execute `{"mesh_consumer_recieve_rewards_msg": {"validator": ...}}`.
    async fn mesh_consumer_recieve_rewards_msg(
        &self,
        validator: String,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, Self::Error>;
}

/// Query-only mesh-consumer client.
#[derive(Debug, Clone)]
pub struct MeshConsumerQueryClient<C> {
    inner: ContractQueryClient<C>,
}

impl<C: CosmWasmClient> MeshConsumerQueryClient<C> {
    /// Bind `client` to the consumer at `contract_address`.
    pub fn new(client: C, contract_address: impl Into<String>) -> Self {
        Self { inner: ContractQueryClient::new(client, contract_address) }
    }
}

#[async_trait]
impl<C: CosmWasmClient> MeshConsumerReadOnly for MeshConsumerQueryClient<C> {
    type Error = ClientError<C::Error>;

    fn contract_address(&self) -> &str {
        self.inner.contract_address()
    }

    async fn config(&self) -> Result<Config, Self::Error> {
        self.inner.query(&QueryMsg::Config {}).await
    }
}

/// Signing mesh-consumer client.
#[derive(Debug, Clone)]
pub struct MeshConsumerClient<C> {
    inner: ContractClient<C>,
}

impl<C: SigningCosmWasmClient> MeshConsumerClient<C> {
    /// Bind `client` to the consumer at `contract_address`, signing as `sender`.
    pub fn new(client: C, sender: impl Into<String>, contract_address: impl Into<String>) -> Self {
        Self { inner: ContractClient::new(client, sender, contract_address) }
    }
}

#[async_trait]
impl<C: SigningCosmWasmClient> MeshConsumerReadOnly for MeshConsumerClient<C> {
    type Error = ClientError<C::Error>;

    fn contract_address(&self) -> &str {
        self.inner.contract_address()
    }

    async fn config(&self) -> Result<Config, Self::Error> {
        self.inner.query(&QueryMsg::Config {}).await
    }
}

#[async_trait]
impl<C: SigningCosmWasmClient> MeshConsumer for MeshConsumerClient<C> {
    fn sender(&self) -> &str {
        self.inner.sender()
    }

    async fn mesh_consumer_recieve_rewards_msg(
        &self,
        validator: String,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, Self::Error> {
        self.inner.execute(&ExecuteMsg::MeshConsumerRecieveRewardsMsg { validator }, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockError, MockTransport, RecordedCall};
    use cosmwasm_std::Decimal;
    use serde_json::json;

    const CONSUMER: &str = "wasm1consumer";

    fn config_json() -> serde_json::Value {
        json!({
            "provider": { "port_id": "wasm.provider", "connection_id": "connection-0" },
            "remote_to_local_exchange_rate": "0.1",
            "meta_staking_contract_address": "wasm1meta",
            "ics20_channel": "channel-7"
        })
    }

    #[tokio::test]
    async fn test_config_query() {
        let transport = MockTransport::new().with_query_response(config_json());
        let client = MeshConsumerQueryClient::new(&transport, CONSUMER);

        let config = client.config().await.unwrap();

        assert_eq!(config.remote_to_local_exchange_rate, Decimal::percent(10));
        assert_eq!(config.ics20_channel, "channel-7");
        assert_eq!(
            transport.calls(),
            vec![RecordedCall::Query {
                contract_address: CONSUMER.to_string(),
                msg: json!({ "config": {} }),
            }]
        );
    }

    #[tokio::test]
    async fn test_config_query_surfaces_transport_error() {
        let transport = MockTransport::new();
        let client = MeshConsumerQueryClient::new(&transport, CONSUMER);

        let err = client.config().await.unwrap_err();

        assert_eq!(err.transport(), Some(&MockError::NoResponse));
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_rejected_config_query() {
        let transport = MockTransport::new().with_query_response(config_json()).rejecting("boom");
        let client = MeshConsumerQueryClient::new(&transport, CONSUMER);

        let err = client.config().await.unwrap_err();

        assert_eq!(err.into_transport(), Some(MockError::Rejected("boom".to_string())));
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_recieve_rewards_msg() {
        let transport = MockTransport::new();
        let client = MeshConsumerClient::new(&transport, "wasm1meta", CONSUMER);

        client
            .mesh_consumer_recieve_rewards_msg(
                "valoper1".to_string(),
                ExecuteOptions::default().with_memo("rewards"),
            )
            .await
            .unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        let RecordedCall::Execute { sender_address, msg, memo, .. } = &calls[0] else {
            panic!("expected an execute call");
        };
        assert_eq!(sender_address, "wasm1meta");
        assert_eq!(
            msg,
            &json!({ "mesh_consumer_recieve_rewards_msg": { "validator": "valoper1" } })
        );
        assert_eq!(memo.as_deref(), Some("rewards"));
    }
}
