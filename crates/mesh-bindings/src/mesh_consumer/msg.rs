//! Message and response types of the mesh-consumer contract

use cosmwasm_schema::{QueryResponses, cw_serde};
use cosmwasm_std::{Addr, Decimal};

/// IBC endpoint of the provider chain's mesh-provider contract.
#[cw_serde]
pub struct ProviderInfo {
    /// Port of the provider contract
    pub port_id: String,
    /// Connection to the provider chain
    pub connection_id: String,
}

/// Instantiate a consumer linked to one provider.
#[cw_serde]
pub struct InstantiateMsg {
    /// Provider endpoint
    pub provider: ProviderInfo,
    /// Conversion rate from provider tokens to local staking tokens
    pub remote_to_local_exchange_rate: Decimal,
    /// Meta-staking contract that delegates on the consumer's behalf
    pub meta_staking_contract_address: String,
    /// Channel used to send rewards back to the provider
    pub ics20_channel: String,
    /// Lifetime of outgoing packets in seconds. May be omitted or null.
    #[serde(default)]
    pub packet_lifetime: Option<u64>,
}

/// State-changing consumer operations.
#[cw_serde]
pub enum ExecuteMsg {
    /// Forward rewards collected for `validator` to the provider.
    /// The variant name matches the deployed contract's spelling.
    MeshConsumerRecieveRewardsMsg {
        /// Validator the rewards were earned on
        validator: String,
    },
}

/// Read-only consumer queries.
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Current configuration
    #[returns(Config)]
    Config {},
}

/// Reply to [`QueryMsg::Config`].
#[cw_serde]
pub struct Config {
    /// Provider endpoint
    pub provider: ProviderInfo,
    /// Conversion rate from provider tokens to local staking tokens
    pub remote_to_local_exchange_rate: Decimal,
    /// Validated meta-staking address
    pub meta_staking_contract_address: Addr,
    /// Rewards channel
    pub ics20_channel: String,
}
