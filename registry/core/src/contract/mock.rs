//! Mock Contract Caller
//!
//! A programmable test double for [`ContractCaller`]. Outcomes are resolved
//! in this order for every call:
//!
//! 1. the next one-shot outcome queued with `mock_resolved_value_once` /
//!    `mock_rejected_value_once` (FIFO, regardless of function name)
//! 2. a persistent outcome registered for the function with `when_called`
//! 3. the default outcome set with `mock_resolved_value`
//!
//! A call that finds none of these fails with
//! `ContractError::NoResponseConfigured`. Every call is recorded, including
//! the failing ones.
//!
//! # Usage
//!
//! ```ignore
//! let mock = MockContractCaller::new();
//! mock.mock_resolved_value_once(1u64);
//!
//! let request = CallRequest::new("register-device")
//!     .arg("temperature-sensor")
//!     .arg("city-center");
//! let response = mock.call(&request).await?;
//! assert_eq!(response.value().as_u64(), Some(1));
//! ```

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, trace};

use super::error::ContractError;
use super::request::{CallRequest, CallResponse};
use super::traits::ContractCaller;
use super::value::ContractValue;
use crate::config::{ConfigError, Fixture};

/// A programmed mock outcome
#[derive(Clone, Debug, PartialEq)]
pub enum MockOutcome {
    /// Resolve with this value
    Resolve(ContractValue),
    /// Reject with this message
    Reject(String),
}

impl MockOutcome {
    fn into_result(self, function: &str) -> Result<CallResponse, ContractError> {
        match self {
            Self::Resolve(value) => Ok(CallResponse::ok(value)),
            Self::Reject(message) => Err(ContractError::rejected(function, message)),
        }
    }
}

#[derive(Debug, Default)]
struct MockState {
    once: VecDeque<MockOutcome>,
    by_function: HashMap<String, MockOutcome>,
    default: Option<MockOutcome>,
    calls: Vec<CallRequest>,
}

impl MockState {
    fn next_outcome(&mut self, function: &str) -> Option<MockOutcome> {
        if let Some(outcome) = self.once.pop_front() {
            return Some(outcome);
        }
        self.by_function
            .get(function)
            .or(self.default.as_ref())
            .cloned()
    }
}

/// Programmable contract caller for tests
///
/// Clones share the same queue and call history.
#[derive(Clone, Debug, Default)]
pub struct MockContractCaller {
    state: Arc<Mutex<MockState>>,
}

impl MockContractCaller {
    /// Create a mock with nothing programmed
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock seeded from configured fixtures
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidFixture` if a fixture sets both or
    /// neither of `value` and `error`.
    pub fn from_fixtures(fixtures: &[Fixture]) -> Result<Self, ConfigError> {
        let mock = Self::new();
        {
            let mut state = mock.state.lock();
            for fixture in fixtures {
                let outcome = fixture.outcome()?;
                if fixture.once {
                    state.once.push_back(outcome);
                } else {
                    state.by_function.insert(fixture.function.clone(), outcome);
                }
            }
        }
        debug!(count = fixtures.len(), "Mock seeded from fixtures");
        Ok(mock)
    }

    /// Queue a one-shot successful result
    pub fn mock_resolved_value_once(&self, value: impl Into<ContractValue>) -> &Self {
        self.state
            .lock()
            .once
            .push_back(MockOutcome::Resolve(value.into()));
        self
    }

    /// Queue a one-shot failure
    pub fn mock_rejected_value_once(&self, message: impl Into<String>) -> &Self {
        self.state
            .lock()
            .once
            .push_back(MockOutcome::Reject(message.into()));
        self
    }

    /// Set the result returned when nothing else matches
    pub fn mock_resolved_value(&self, value: impl Into<ContractValue>) -> &Self {
        self.state.lock().default = Some(MockOutcome::Resolve(value.into()));
        self
    }

    /// Always resolve calls to `function` with `value`
    pub fn when_called(
        &self,
        function: impl Into<String>,
        value: impl Into<ContractValue>,
    ) -> &Self {
        self.state
            .lock()
            .by_function
            .insert(function.into(), MockOutcome::Resolve(value.into()));
        self
    }

    /// Always reject calls to `function` with `message`
    pub fn when_called_reject(
        &self,
        function: impl Into<String>,
        message: impl Into<String>,
    ) -> &Self {
        self.state
            .lock()
            .by_function
            .insert(function.into(), MockOutcome::Reject(message.into()));
        self
    }

    /// Number of one-shot outcomes not yet consumed
    #[must_use]
    pub fn pending(&self) -> usize {
        self.state.lock().once.len()
    }

    /// All recorded calls, oldest first
    #[must_use]
    pub fn calls(&self) -> Vec<CallRequest> {
        self.state.lock().calls.clone()
    }

    /// Recorded calls to one function
    #[must_use]
    pub fn calls_to(&self, function: &str) -> Vec<CallRequest> {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|c| c.function == function)
            .cloned()
            .collect()
    }

    /// Number of recorded calls
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.state.lock().calls.len()
    }

    /// Most recent call
    #[must_use]
    pub fn last_call(&self) -> Option<CallRequest> {
        self.state.lock().calls.last().cloned()
    }

    /// Clear every programmed outcome and the call history
    pub fn reset(&self) {
        *self.state.lock() = MockState::default();
    }
}

#[async_trait]
impl ContractCaller for MockContractCaller {
    fn name(&self) -> &str {
        "Mock"
    }

    async fn call(&self, request: &CallRequest) -> Result<CallResponse, ContractError> {
        let outcome = {
            let mut state = self.state.lock();
            state.calls.push(request.clone());
            state.next_outcome(&request.function)
        };

        trace!(function = %request.function, args = request.args.len(), "Mock call");

        match outcome {
            Some(outcome) => outcome.into_result(&request.function),
            None => Err(ContractError::NoResponseConfigured {
                function: request.function.clone(),
            }),
        }
    }
}
