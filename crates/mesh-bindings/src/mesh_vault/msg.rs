//! Message and response types of the mesh-vault contract

use cosmwasm_schema::{QueryResponses, cw_serde};
use cosmwasm_std::Uint128;

/// Instantiate the vault for a single bondable denom.
#[cw_serde]
pub struct InstantiateMsg {
    /// Denom users bond into the vault
    pub denom: String,
}

/// State-changing vault operations.
#[cw_serde]
pub enum ExecuteMsg {
    /// Bond the funds sent with the message
    Bond {},
    /// Unbond free (unclaimed) tokens
    Unbond {
        /// Amount to unbond
        amount: Uint128,
    },
    /// Grant `leinholder` a claim over bonded tokens, to be staked on `validator`
    GrantClaim {
        /// Contract receiving the claim
        leinholder: String,
        /// Amount placed under the claim
        amount: Uint128,
        /// Validator the leinholder stakes to
        validator: String,
    },
    /// Called by a leinholder to release part of a claim it holds
    ReleaseClaim {
        /// Owner of the claimed tokens
        owner: String,
        /// Amount released
        amount: Uint128,
    },
    /// Called by a leinholder to slash part of a claim it holds
    SlashClaim {
        /// Owner of the claimed tokens
        owner: String,
        /// Amount slashed
        amount: Uint128,
    },
}

/// Read-only vault queries.
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Bonded, free and claimed balance of one account
    #[returns(BalanceResponse)]
    Balance {
        /// Account to inspect
        account: String,
    },
}

/// Reply to [`QueryMsg::Balance`].
#[cw_serde]
pub struct BalanceResponse {
    /// Total bonded by the account
    pub bonded: Uint128,
    /// Portion of `bonded` not under any claim
    pub free: Uint128,
    /// Outstanding claims
    pub claims: Vec<Lein>,
}

/// A claim held by one leinholder.
#[cw_serde]
pub struct Lein {
    /// Holder of the claim
    pub leinholder: String,
    /// Claimed amount
    pub amount: Uint128,
}
