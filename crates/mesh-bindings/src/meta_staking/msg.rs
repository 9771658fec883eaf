//! Message and response types of the meta-staking contract

use cosmwasm_schema::{QueryResponses, cw_serde};
use cosmwasm_std::{Addr, Coin, Uint128};

/// Meta-staking takes no instantiate parameters; the bonded denom is read from the chain.
#[cw_serde]
pub struct InstantiateMsg {}

/// Operations a registered consumer contract may execute.
#[cw_serde]
pub enum ExecuteMsg {
    /// Delegate part of the consumer's budget to `validator`
    Delegate {
        /// Validator operator address
        validator: String,
        /// Amount in the chain's bonded denom
        amount: Coin,
    },
    /// Undelegate from `validator`, returning the amount to the consumer's budget
    Undelegate {
        /// Validator operator address
        validator: String,
        /// Amount in the chain's bonded denom
        amount: Coin,
    },
    /// Withdraw staking rewards earned on `validator`
    WithdrawDelegatorReward {
        /// Validator operator address
        validator: String,
    },
}

/// Governance-only operations. Chains dispatch these through sudo, so no client sends them.
#[cw_serde]
pub enum SudoMsg {
    /// Register a consumer and fund its staking budget
    AddConsumer {
        /// Consumer contract address
        consumer_address: String,
        /// Budget the consumer may delegate
        funds_available_for_staking: Coin,
    },
    /// Deregister a consumer
    RemoveConsumer {
        /// Consumer contract address
        consumer_address: String,
    },
}

/// Read-only meta-staking queries.
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Every delegation made by one consumer
    #[returns(AllDelegationsResponse)]
    AllDelegations {
        /// Consumer contract address
        consumer: String,
    },
    /// Validators one consumer delegates to
    #[returns(AllValidatorsResponse)]
    AllValidators {
        /// Consumer contract address
        consumer: String,
    },
    /// Budget of one consumer
    #[returns(ConsumerInfo)]
    Consumer {
        /// Consumer contract address
        address: String,
    },
    /// Every registered consumer
    #[returns(ConsumersResponse)]
    Consumers {},
    /// Delegation of one consumer to one validator
    #[returns(ValidatorInfo)]
    Delegation {
        /// Consumer contract address
        consumer: String,
        /// Validator operator address
        validator: String,
    },
}

/// Staking budget of a registered consumer.
#[cw_serde]
pub struct ConsumerInfo {
    /// Consumer contract address
    pub address: Addr,
    /// Budget not yet delegated
    pub available_funds: Uint128,
    /// Amount currently delegated
    pub total_staked: Uint128,
}

/// Amount a consumer has delegated to one validator.
#[cw_serde]
pub struct ValidatorInfo {
    /// Validator operator address
    pub address: Addr,
    /// Consumer contract address
    pub consumer: Addr,
    /// Amount delegated
    pub total_delegated: Uint128,
}

/// Reply to [`QueryMsg::AllDelegations`].
#[cw_serde]
pub struct AllDelegationsResponse {
    /// One entry per validator
    pub delegations: Vec<ValidatorInfo>,
}

/// Reply to [`QueryMsg::AllValidators`].
#[cw_serde]
pub struct AllValidatorsResponse {
    /// Validator operator addresses
    pub validators: Vec<Addr>,
}

/// Reply to [`QueryMsg::Consumers`].
#[cw_serde]
pub struct ConsumersResponse {
    /// Registered consumers
    pub consumers: Vec<ConsumerInfo>,
}
