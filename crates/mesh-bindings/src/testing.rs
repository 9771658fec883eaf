//! In-memory transport for exercising contract clients without a chain.

use std::{
    collections::VecDeque,
    sync::{Mutex, MutexGuard, PoisonError},
};

use async_trait::async_trait;
use cosmwasm_std::Coin;
use serde_json::Value;

use crate::{
    fee::Fee,
    transport::{CosmWasmClient, ExecuteResult, SigningCosmWasmClient},
};

/// A call observed by [`MockTransport`].
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedCall {
    /// A smart query
    Query {
        /// Queried contract
        contract_address: String,
        /// Query message as sent
        msg: Value,
    },
    /// A signed execute
    Execute {
        /// Signer
        sender_address: String,
        /// Executed contract
        contract_address: String,
        /// Execute message as sent
        msg: Value,
        /// Fee specification
        fee: Fee,
        /// Memo, if any
        memo: Option<String>,
        /// Attached funds
        funds: Vec<Coin>,
    },
}

impl RecordedCall {
    /// The message carried by the call.
    pub const fn msg(&self) -> &Value {
        match self {
            Self::Query { msg, .. } | Self::Execute { msg, .. } => msg,
        }
    }
}

/// Errors produced by [`MockTransport`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MockError {
    /// A query arrived with no canned response queued
    #[error("no query response queued")]
    NoResponse,
    /// Failure injection is enabled
    #[error("rejected: {0}")]
    Rejected(String),
}

/// Transport that records calls and replies with canned data.
#[derive(Debug, Default)]
pub struct MockTransport {
    calls: Mutex<Vec<RecordedCall>>,
    query_responses: Mutex<VecDeque<Value>>,
    execute_result: ExecuteResult,
    reject_with: Option<String>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockTransport {
    /// Transport with no queued responses and a default execute result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for the next query.
    pub fn with_query_response(self, response: Value) -> Self {
        self.push_query_response(response);
        self
    }

    /// Queue a reply for a later query.
    pub fn push_query_response(&self, response: Value) {
        lock(&self.query_responses).push_back(response);
    }

    /// Reply to every execute with `result`.
    pub fn with_execute_result(mut self, result: ExecuteResult) -> Self {
        self.execute_result = result;
        self
    }

    /// Fail every call with [`MockError::Rejected`].
    pub fn rejecting(mut self, reason: impl Into<String>) -> Self {
        self.reject_with = Some(reason.into());
        self
    }

    /// Snapshot of the calls seen so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    fn record(&self, call: RecordedCall) -> Result<(), MockError> {
        lock(&self.calls).push(call);
        match &self.reject_with {
            Some(reason) => Err(MockError::Rejected(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CosmWasmClient for MockTransport {
    type Error = MockError;

    async fn query_contract_smart(
        &self,
        contract_address: &str,
        query_msg: &Value,
    ) -> Result<Value, Self::Error> {
        self.record(RecordedCall::Query {
            contract_address: contract_address.to_string(),
            msg: query_msg.clone(),
        })?;
        lock(&self.query_responses).pop_front().ok_or(MockError::NoResponse)
    }
}

#[async_trait]
impl SigningCosmWasmClient for MockTransport {
    async fn execute(
        &self,
        sender_address: &str,
        contract_address: &str,
        msg: &Value,
        fee: &Fee,
        memo: Option<&str>,
        funds: &[Coin],
    ) -> Result<ExecuteResult, Self::Error> {
        self.record(RecordedCall::Execute {
            sender_address: sender_address.to_string(),
            contract_address: contract_address.to_string(),
            msg: msg.clone(),
            fee: fee.clone(),
            memo: memo.map(str::to_string),
            funds: funds.to_vec(),
        })?;
        Ok(self.execute_result.clone())
    }
}
