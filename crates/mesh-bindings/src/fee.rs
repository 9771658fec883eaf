//! Fee specification and per-call execute options

use cosmwasm_std::Coin;
use serde::{Deserialize, Serialize, Serializer, ser::Error as _};

/// Explicit fee descriptor, the shape cosmjs calls `StdFee`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdFee {
    /// Fee amount, possibly in several denominations
    pub amount: Vec<Coin>,
    /// Gas limit as a decimal string
    pub gas: String,
    /// Address paying the fee through a fee grant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub granter: Option<String>,
    /// Address paying the fee directly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer: Option<String>,
}

impl StdFee {
    /// Fee of `amount` with the given gas limit and no granter or payer.
    pub fn new(amount: Vec<Coin>, gas: u64) -> Self {
        Self { amount, gas: gas.to_string(), granter: None, payer: None }
    }
}

/// How the transport should price an execute call.
///
/// Serializes untagged: `"auto"`, a bare number, or a [`StdFee`] object.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Fee {
    /// Let the transport simulate and estimate the fee
    #[default]
    Auto,
    /// Estimate the fee, then scale the gas by this multiplier. Must be finite.
    Multiplier(f64),
    /// Use exactly this fee
    Fixed(StdFee),
}

impl Fee {
    /// Returns true for the automatic-estimation sentinel.
    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }
}

impl From<f64> for Fee {
    fn from(multiplier: f64) -> Self {
        Self::Multiplier(multiplier)
    }
}

impl From<StdFee> for Fee {
    fn from(fee: StdFee) -> Self {
        Self::Fixed(fee)
    }
}

impl Serialize for Fee {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Auto => serializer.serialize_str("auto"),
            Self::Multiplier(multiplier) if !multiplier.is_finite() => {
                Err(S::Error::custom(format!("fee multiplier must be finite, got {multiplier}")))
            }
            Self::Multiplier(multiplier) => serializer.serialize_f64(*multiplier),
            Self::Fixed(fee) => fee.serialize(serializer),
        }
    }
}

/// Optional arguments accepted by every execute method.
///
/// `ExecuteOptions::default()` means fee [`Fee::Auto`], no memo and no funds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExecuteOptions {
    /// Fee specification forwarded to the transport
    pub fee: Fee,
    /// Transaction memo
    pub memo: Option<String>,
    /// Funds sent along with the message
    pub funds: Vec<Coin>,
}

impl ExecuteOptions {
    /// Replace the fee specification.
    pub fn with_fee(mut self, fee: impl Into<Fee>) -> Self {
        self.fee = fee.into();
        self
    }

    /// Attach a memo.
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    /// Attach funds to send with the message.
    pub fn with_funds(mut self, funds: Vec<Coin>) -> Self {
        self.funds = funds;
        self
    }
}
