//! Query and signing clients for the meta-staking contract

use async_trait::async_trait;
use cosmwasm_std::Coin;

use super::msg::{
    AllDelegationsResponse, AllValidatorsResponse, ConsumerInfo, ConsumersResponse, ExecuteMsg,
    QueryMsg, ValidatorInfo,
};
use crate::{
    client::{ContractClient, ContractQueryClient},
    error::ClientError,
    fee::ExecuteOptions,
    transport::{CosmWasmClient, ExecuteResult, SigningCosmWasmClient},
};

/// Read-only meta-staking interface.
#[async_trait]
pub trait MetaStakingReadOnly: Send + Sync {
    /// Error returned by every call
    type Error: std::error::Error + Send + Sync + 'static;

    /// Address of the meta-staking contract.
    fn contract_address(&self) -> &str;

    /// Query `{"all_delegations": {"consumer": ...}}`.
    async fn all_delegations(
        &self,
        consumer: String,
    ) -> Result<AllDelegationsResponse, Self::Error>;

    /// Query `{"all_validators": {"consumer": ...}}`.
    async fn all_validators(&self, consumer: String) -> Result<AllValidatorsResponse, Self::Error>;

    /// Query `{"consumer": {"address": ...}}`.
    async fn consumer(&self, address: String) -> Result<ConsumerInfo, Self::Error>;

    /// Query `{"consumers": {}}`.
    async fn consumers(&self) -> Result<ConsumersResponse, Self::Error>;

    /// Query `{"delegation": {"consumer": ..., "validator": ...}}`.
    async fn delegation(
        &self,
        consumer: String,
        validator: String,
    ) -> Result<ValidatorInfo, Self::Error>;
}

/// Full meta-staking interface. The sender must be a registered consumer contract.
#[async_trait]
pub trait MetaStaking: MetaStakingReadOnly {
    /// Address the client signs as.
    fn sender(&self) -> &str;

    /// Execute `{"delegate": {"validator": ..., "amount": ...}}`.
    async fn delegate(
        &self,
        validator: String,
        amount: Coin,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, Self::Error>;

    /// Execute `{"undelegate": {"validator": ..., "amount": ...}}`.
    async fn undelegate(
        &self,
        validator: String,
        amount: Coin,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, Self::Error>;

    /// Execute `{"withdraw_delegator_reward": {"validator": ...}}`.
    async fn withdraw_delegator_reward(
        &self,
        validator: String,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, Self::Error>;
}

/// Query-only meta-staking client.
#[derive(Debug, Clone)]
pub struct MetaStakingQueryClient<C> {
    inner: ContractQueryClient<C>,
}

impl<C: CosmWasmClient> MetaStakingQueryClient<C> {
    /// Bind `client` to the meta-staking contract at `contract_address`.
    pub fn new(client: C, contract_address: impl Into<String>) -> Self {
        Self { inner: ContractQueryClient::new(client, contract_address) }
    }
}

#[async_trait]
impl<C: CosmWasmClient> MetaStakingReadOnly for MetaStakingQueryClient<C> {
    type Error = ClientError<C::Error>;

    fn contract_address(&self) -> &str {
        self.inner.contract_address()
    }

    async fn all_delegations(
        &self,
        consumer: String,
    ) -> Result<AllDelegationsResponse, Self::Error> {
        self.inner.query(&QueryMsg::AllDelegations { consumer }).await
    }

    async fn all_validators(&self, consumer: String) -> Result<AllValidatorsResponse, Self::Error> {
        self.inner.query(&QueryMsg::AllValidators { consumer }).await
    }

    async fn consumer(&self, address: String) -> Result<ConsumerInfo, Self::Error> {
        self.inner.query(&QueryMsg::Consumer { address }).await
    }

    async fn consumers(&self) -> Result<ConsumersResponse, Self::Error> {
        self.inner.query(&QueryMsg::Consumers {}).await
    }

    async fn delegation(
        &self,
        consumer: String,
        validator: String,
    ) -> Result<ValidatorInfo, Self::Error> {
        self.inner.query(&QueryMsg::Delegation { consumer, validator }).await
    }
}

/// Signing meta-staking client.
#[derive(Debug, Clone)]
pub struct MetaStakingClient<C> {
    inner: ContractClient<C>,
}

impl<C: SigningCosmWasmClient> MetaStakingClient<C> {
    /// Bind `client` to the meta-staking contract at `contract_address`, signing as `sender`.
    pub fn new(client: C, sender: impl Into<String>, contract_address: impl Into<String>) -> Self {
        Self { inner: ContractClient::new(client, sender, contract_address) }
    }
}

#[async_trait]
impl<C: SigningCosmWasmClient> MetaStakingReadOnly for MetaStakingClient<C> {
    type Error = ClientError<C::Error>;

    fn contract_address(&self) -> &str {
        self.inner.contract_address()
    }

    async fn all_delegations(
        &self,
        consumer: String,
    ) -> Result<AllDelegationsResponse, Self::Error> {
        self.inner.query(&QueryMsg::AllDelegations { consumer }).await
    }

    async fn all_validators(&self, consumer: String) -> Result<AllValidatorsResponse, Self::Error> {
        self.inner.query(&QueryMsg::AllValidators { consumer }).await
    }

    async fn consumer(&self, address: String) -> Result<ConsumerInfo, Self::Error> {
        self.inner.query(&QueryMsg::Consumer { address }).await
    }

    async fn consumers(&self) -> Result<ConsumersResponse, Self::Error> {
        self.inner.query(&QueryMsg::Consumers {}).await
    }

    async fn delegation(
        &self,
        consumer: String,
        validator: String,
    ) -> Result<ValidatorInfo, Self::Error> {
        self.inner.query(&QueryMsg::Delegation { consumer, validator }).await
    }
}

#[async_trait]
impl<C: SigningCosmWasmClient> MetaStaking for MetaStakingClient<C> {
    fn sender(&self) -> &str {
        self.inner.sender()
    }

    async fn delegate(
        &self,
        validator: String,
        amount: Coin,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, Self::Error> {
        self.inner.execute(&ExecuteMsg::Delegate { validator, amount }, options).await
    }

    async fn undelegate(
        &self,
        validator: String,
        amount: Coin,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, Self::Error> {
        self.inner.execute(&ExecuteMsg::Undelegate { validator, amount }, options).await
    }

    async fn withdraw_delegator_reward(
        &self,
        validator: String,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, Self::Error> {
        self.inner.execute(&ExecuteMsg::WithdrawDelegatorReward { validator }, options).await
    }
}
