//! Contract-agnostic forwarding layer shared by the per-contract clients.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{
    error::ClientError,
    fee::ExecuteOptions,
    transport::{CosmWasmClient, ExecuteResult, SigningCosmWasmClient},
};

/// Log target for every forwarded call
pub(crate) const LOG_TARGET: &str = "mesh_bindings";

/// Name of the operation a message selects: its single top-level key.
fn operation_name(msg: &Value) -> &str {
    msg.as_object().and_then(|obj| obj.keys().next()).map_or("<unknown>", String::as_str)
}

/// Query client bound to one contract address.
#[derive(Debug, Clone)]
pub struct ContractQueryClient<C> {
    client: C,
    contract_address: String,
}

impl<C: CosmWasmClient> ContractQueryClient<C> {
    /// Bind `client` to `contract_address`.
    pub fn new(client: C, contract_address: impl Into<String>) -> Self {
        Self { client, contract_address: contract_address.into() }
    }

    /// Address of the bound contract.
    pub fn contract_address(&self) -> &str {
        &self.contract_address
    }

    /// The underlying transport handle.
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// Encode `msg`, forward it as a single smart query and decode the reply as `R`.
    pub async fn query<Q, R>(&self, msg: &Q) -> Result<R, ClientError<C::Error>>
    where
        Q: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let msg = serde_json::to_value(msg).map_err(ClientError::Serialize)?;

        tracing::debug!(
            target: LOG_TARGET,
            contract = %self.contract_address,
            operation = operation_name(&msg),
            "forwarding contract query"
        );

        let response = self
            .client
            .query_contract_smart(&self.contract_address, &msg)
            .await
            .map_err(ClientError::Transport)?;

        serde_json::from_value(response).map_err(ClientError::Deserialize)
    }
}

/// Signing client bound to one contract address and one sender.
#[derive(Debug, Clone)]
pub struct ContractClient<C> {
    query: ContractQueryClient<C>,
    sender: String,
}

impl<C: SigningCosmWasmClient> ContractClient<C> {
    /// Bind `client` to `contract_address`, signing as `sender`.
    pub fn new(client: C, sender: impl Into<String>, contract_address: impl Into<String>) -> Self {
        Self { query: ContractQueryClient::new(client, contract_address), sender: sender.into() }
    }

    /// Address of the bound contract.
    pub fn contract_address(&self) -> &str {
        self.query.contract_address()
    }

    /// Address the client signs as.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Read-only view of this client.
    pub const fn query_client(&self) -> &ContractQueryClient<C> {
        &self.query
    }

    /// See [`ContractQueryClient::query`].
    pub async fn query<Q, R>(&self, msg: &Q) -> Result<R, ClientError<C::Error>>
    where
        Q: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        self.query.query(msg).await
    }

    /// Encode `msg` and forward it as a single execute call with `options`.
    pub async fn execute<M>(
        &self,
        msg: &M,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, ClientError<C::Error>>
    where
        M: Serialize + Sync + ?Sized,
    {
        let msg = serde_json::to_value(msg).map_err(ClientError::Serialize)?;
        let ExecuteOptions { fee, memo, funds } = options;

        tracing::debug!(
            target: LOG_TARGET,
            contract = %self.query.contract_address,
            sender = %self.sender,
            operation = operation_name(&msg),
            ?fee,
            "forwarding contract execute"
        );

        self.query
            .client
            .execute(
                &self.sender,
                &self.query.contract_address,
                &msg,
                &fee,
                memo.as_deref(),
                &funds,
            )
            .await
            .map_err(ClientError::Transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        fee::Fee,
        testing::{MockError, MockTransport, RecordedCall},
    };
    use cosmwasm_std::coin;
    use serde_json::json;

    const CONTRACT: &str = "wasm1contract";
    const SENDER: &str = "wasm1sender";

    #[test]
    fn test_operation_name() {
        assert_eq!(operation_name(&json!({ "bond": {} })), "bond");
        assert_eq!(operation_name(&json!("bond")), "<unknown>");
    }

    #[tokio::test]
    async fn test_query_forwards_once_and_decodes() {
        let transport = MockTransport::new().with_query_response(json!({ "value": 7 }));
        let client = ContractQueryClient::new(&transport, CONTRACT);

        let reply: Value = client.query(&json!({ "count": {} })).await.unwrap();

        assert_eq!(reply, json!({ "value": 7 }));
        assert_eq!(
            transport.calls(),
            vec![RecordedCall::Query {
                contract_address: CONTRACT.to_string(),
                msg: json!({ "count": {} }),
            }]
        );
    }

    #[tokio::test]
    async fn test_query_decode_failure_is_not_retried() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Count {
            value: u64,
        }

        let transport = MockTransport::new().with_query_response(json!({ "value": "seven" }));
        let client = ContractQueryClient::new(&transport, CONTRACT);

        let err = client.query::<_, Count>(&json!({ "count": {} })).await.unwrap_err();

        assert!(matches!(err, ClientError::Deserialize(_)));
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_execute_passes_options_through() {
        let transport = MockTransport::new();
        let client = ContractClient::new(&transport, SENDER, CONTRACT);

        let options = ExecuteOptions::default()
            .with_fee(2.0)
            .with_memo("hello")
            .with_funds(vec![coin(3, "ustake")]);
        client.execute(&json!({ "ping": {} }), options).await.unwrap();

        assert_eq!(
            transport.calls(),
            vec![RecordedCall::Execute {
                sender_address: SENDER.to_string(),
                contract_address: CONTRACT.to_string(),
                msg: json!({ "ping": {} }),
                fee: Fee::Multiplier(2.0),
                memo: Some("hello".to_string()),
                funds: vec![coin(3, "ustake")],
            }]
        );
    }

    #[tokio::test]
    async fn test_transport_error_is_passed_through() {
        let transport = MockTransport::new().rejecting("out of gas");
        let client = ContractClient::new(&transport, SENDER, CONTRACT);

        let err =
            client.execute(&json!({ "ping": {} }), ExecuteOptions::default()).await.unwrap_err();

        assert_eq!(err.into_transport(), Some(MockError::Rejected("out of gas".to_string())));
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_rejected_query_is_recorded_once() {
        let transport = MockTransport::new()
            .with_query_response(json!({ "value": 1 }))
            .rejecting("node unavailable");
        let client = ContractQueryClient::new(&transport, CONTRACT);

        let err = client.query::<_, Value>(&json!({ "count": {} })).await.unwrap_err();

        assert!(matches!(
            err,
            ClientError::Transport(MockError::Rejected(ref reason)) if reason == "node unavailable"
        ));
        assert_eq!(
            transport.calls(),
            vec![RecordedCall::Query {
                contract_address: CONTRACT.to_string(),
                msg: json!({ "count": {} }),
            }]
        );
    }
}
