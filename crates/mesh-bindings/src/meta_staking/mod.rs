//! Bindings for the meta-staking contract.
//!
//! Meta-staking delegates native tokens on behalf of registered consumer
//! contracts, each within a budget granted by governance.

pub mod client;
pub mod msg;

pub use client::{MetaStaking, MetaStakingClient, MetaStakingQueryClient, MetaStakingReadOnly};
pub use msg::{
    AllDelegationsResponse, AllValidatorsResponse, ConsumerInfo, ConsumersResponse, ExecuteMsg,
    InstantiateMsg, QueryMsg, SudoMsg, ValidatorInfo,
};
