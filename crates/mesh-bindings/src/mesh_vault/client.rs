//! Query and signing clients for the mesh-vault contract

use async_trait::async_trait;
use cosmwasm_std::Uint128;

use super::msg::{BalanceResponse, ExecuteMsg, QueryMsg};
use crate::{
    client::{ContractClient, ContractQueryClient},
    error::ClientError,
    fee::ExecuteOptions,
    transport::{CosmWasmClient, ExecuteResult, SigningCosmWasmClient},
};

/// Read-only mesh-vault interface.
#[async_trait]
pub trait MeshVaultReadOnly: Send + Sync {
    /// Error returned by every call
    type Error: std::error::Error + Send + Sync + 'static;

    /// Address of the vault contract.
    fn contract_address(&self) -> &str;

    /// Query `{"balance": {"account": ...}}`.
    async fn balance(&self, account: String) -> Result<BalanceResponse, Self::Error>;
}

/// Full mesh-vault interface: every query plus every execute variant.
#[async_trait]
pub trait MeshVault: MeshVaultReadOnly {
    /// Address the client signs as.
    fn sender(&self) -> &str;

    /// Execute `{"bond": {}}`.
    async fn bond(&self, options: ExecuteOptions) -> Result<ExecuteResult, Self::Error>;

    /// Execute `{"unbond": {"amount": ...}}`.
    async fn unbond(
        &self,
        amount: Uint128,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, Self::Error>;

    /// Execute `{"grant_claim": {...}}`.
    async fn grant_claim(
        &self,
        amount: Uint128,
        leinholder: String,
        validator: String,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, Self::Error>;

    /// Execute `{"release_claim": {...}}`.
    async fn release_claim(
        &self,
        amount: Uint128,
        owner: String,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, Self::Error>;

    /// Execute `{"slash_claim": {...}}`.
    async fn slash_claim(
        &self,
        amount: Uint128,
        owner: String,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, Self::Error>;
}

/// Query-only mesh-vault client.
#[derive(Debug, Clone)]
pub struct MeshVaultQueryClient<C> {
    inner: ContractQueryClient<C>,
}

impl<C: CosmWasmClient> MeshVaultQueryClient<C> {
    /// Bind `client` to the vault at `contract_address`.
    pub fn new(client: C, contract_address: impl Into<String>) -> Self {
        Self { inner: ContractQueryClient::new(client, contract_address) }
    }
}

#[async_trait]
impl<C: CosmWasmClient> MeshVaultReadOnly for MeshVaultQueryClient<C> {
    type Error = ClientError<C::Error>;

    fn contract_address(&self) -> &str {
        self.inner.contract_address()
    }

    async fn balance(&self, account: String) -> Result<BalanceResponse, Self::Error> {
        self.inner.query(&QueryMsg::Balance { account }).await
    }
}

/// Signing mesh-vault client.
#[derive(Debug, Clone)]
pub struct MeshVaultClient<C> {
    inner: ContractClient<C>,
}

impl<C: SigningCosmWasmClient> MeshVaultClient<C> {
    /// Bind `client` to the vault at `contract_address`, signing as `sender`.
    pub fn new(client: C, sender: impl Into<String>, contract_address: impl Into<String>) -> Self {
        Self { inner: ContractClient::new(client, sender, contract_address) }
    }
}

#[async_trait]
impl<C: SigningCosmWasmClient> MeshVaultReadOnly for MeshVaultClient<C> {
    type Error = ClientError<C::Error>;

    fn contract_address(&self) -> &str {
        self.inner.contract_address()
    }

    async fn balance(&self, account: String) -> Result<BalanceResponse, Self::Error> {
        self.inner.query(&QueryMsg::Balance { account }).await
    }
}

#[async_trait]
impl<C: SigningCosmWasmClient> MeshVault for MeshVaultClient<C> {
    fn sender(&self) -> &str {
        self.inner.sender()
    }

    async fn bond(&self, options: ExecuteOptions) -> Result<ExecuteResult, Self::Error> {
        self.inner.execute(&ExecuteMsg::Bond {}, options).await
    }

    async fn unbond(
        &self,
        amount: Uint128,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, Self::Error> {
        self.inner.execute(&ExecuteMsg::Unbond { amount }, options).await
    }

    async fn grant_claim(
        &self,
        amount: Uint128,
        leinholder: String,
        validator: String,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, Self::Error> {
        let msg = ExecuteMsg::GrantClaim { leinholder, amount, validator };
        self.inner.execute(&msg, options).await
    }

    async fn release_claim(
        &self,
        amount: Uint128,
        owner: String,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, Self::Error> {
        self.inner.execute(&ExecuteMsg::ReleaseClaim { owner, amount }, options).await
    }

    async fn slash_claim(
        &self,
        amount: Uint128,
        owner: String,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, Self::Error> {
        self.inner.execute(&ExecuteMsg::SlashClaim { owner, amount }, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        fee::{Fee, StdFee},
        testing::{MockTransport, RecordedCall},
    };
    use cosmwasm_std::coin;
    use serde_json::{Value, json};

    const VAULT: &str = "wasm1vault";
    const SENDER: &str = "wasm1alice";

    /// Exactly one execute call was made; returns its message.
    fn single_execute(transport: &MockTransport) -> Value {
        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        match &calls[0] {
            RecordedCall::Execute { sender_address, contract_address, msg, .. } => {
                assert_eq!(sender_address, SENDER);
                assert_eq!(contract_address, VAULT);
                assert_eq!(msg.as_object().unwrap().len(), 1);
                msg.clone()
            }
            other => panic!("expected an execute call, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_balance_query() {
        let transport = MockTransport::new()
            .with_query_response(json!({ "bonded": "10", "free": "10", "claims": [] }));
        let client = MeshVaultQueryClient::new(&transport, VAULT);

        let balance = client.balance("wasm1bob".to_string()).await.unwrap();

        assert_eq!(balance.bonded, Uint128::new(10));
        assert_eq!(
            transport.calls(),
            vec![RecordedCall::Query {
                contract_address: VAULT.to_string(),
                msg: json!({ "balance": { "account": "wasm1bob" } }),
            }]
        );
    }

    #[tokio::test]
    async fn test_balance_tolerates_extra_response_fields() {
        let transport = MockTransport::new().with_query_response(json!({
            "bonded": "10",
            "free": "4",
            "claims": [],
            "unbonding": "0"
        }));
        let client = MeshVaultQueryClient::new(&transport, VAULT);

        let balance = client.balance("wasm1bob".to_string()).await.unwrap();

        assert_eq!(balance.free, Uint128::new(4));
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_signing_client_also_queries() {
        let transport = MockTransport::new()
            .with_query_response(json!({ "bonded": "0", "free": "0", "claims": [] }));
        let client = MeshVaultClient::new(&transport, SENDER, VAULT);

        client.balance(SENDER.to_string()).await.unwrap();

        assert_eq!(client.contract_address(), VAULT);
        assert_eq!(client.sender(), SENDER);
        assert_eq!(transport.calls()[0].msg(), &json!({ "balance": { "account": SENDER } }));
    }

    #[tokio::test]
    async fn test_bond_defaults_to_auto_fee() {
        let transport = MockTransport::new();
        let client = MeshVaultClient::new(&transport, SENDER, VAULT);

        client.bond(ExecuteOptions::default()).await.unwrap();

        assert_eq!(single_execute(&transport), json!({ "bond": {} }));
        match &transport.calls()[0] {
            RecordedCall::Execute { fee, memo, funds, .. } => {
                assert_eq!(fee, &Fee::Auto);
                assert!(memo.is_none());
                assert!(funds.is_empty());
            }
            RecordedCall::Query { .. } => unreachable!(),
        }
    }

    #[tokio::test]
    async fn test_bond_forwards_funds_and_fixed_fee() {
        let transport = MockTransport::new();
        let client = MeshVaultClient::new(&transport, SENDER, VAULT);
        let fee = StdFee::new(vec![coin(2500, "ustake")], 250_000);

        let options = ExecuteOptions::default()
            .with_fee(fee.clone())
            .with_memo("bond")
            .with_funds(vec![coin(1000, "ustake")]);
        client.bond(options).await.unwrap();

        match &transport.calls()[0] {
            RecordedCall::Execute { fee: sent, memo, funds, .. } => {
                assert_eq!(sent, &Fee::Fixed(fee));
                assert_eq!(memo.as_deref(), Some("bond"));
                assert_eq!(funds, &vec![coin(1000, "ustake")]);
            }
            RecordedCall::Query { .. } => unreachable!(),
        }
    }

    #[tokio::test]
    async fn test_unbond() {
        let transport = MockTransport::new();
        let client = MeshVaultClient::new(&transport, SENDER, VAULT);

        client.unbond(Uint128::new(42), ExecuteOptions::default()).await.unwrap();

        assert_eq!(single_execute(&transport), json!({ "unbond": { "amount": "42" } }));
    }

    #[tokio::test]
    async fn test_grant_claim() {
        let transport = MockTransport::new();
        let client = MeshVaultClient::new(&transport, SENDER, VAULT);

        client
            .grant_claim(
                Uint128::new(300),
                "wasm1lein".to_string(),
                "valoper1".to_string(),
                ExecuteOptions::default(),
            )
            .await
            .unwrap();

        assert_eq!(
            single_execute(&transport),
            json!({
                "grant_claim": {
                    "amount": "300",
                    "leinholder": "wasm1lein",
                    "validator": "valoper1"
                }
            })
        );
    }

    #[tokio::test]
    async fn test_release_and_slash_claim() {
        let transport = MockTransport::new();
        let client = MeshVaultClient::new(&transport, SENDER, VAULT);

        client
            .release_claim(Uint128::new(5), "wasm1bob".to_string(), ExecuteOptions::default())
            .await
            .unwrap();
        client
            .slash_claim(Uint128::new(1), "wasm1bob".to_string(), ExecuteOptions::default())
            .await
            .unwrap();

        let msgs: Vec<_> = transport.calls().iter().map(|call| call.msg().clone()).collect();
        assert_eq!(
            msgs,
            vec![
                json!({ "release_claim": { "amount": "5", "owner": "wasm1bob" } }),
                json!({ "slash_claim": { "amount": "1", "owner": "wasm1bob" } }),
            ]
        );
    }

    #[tokio::test]
    async fn test_shared_transport_through_arc() {
        let transport = std::sync::Arc::new(MockTransport::new());
        let client = MeshVaultClient::new(transport.clone(), SENDER, VAULT);

        client.bond(ExecuteOptions::default()).await.unwrap();

        assert_eq!(transport.calls().len(), 1);
    }
}
