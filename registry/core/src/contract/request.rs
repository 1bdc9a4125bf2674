//! Call Requests and Responses
//!
//! The request is a function name plus positional arguments. The response
//! mirrors the envelope returned by contract-call clients:
//!
//! ```text
//! { "result": { "value": <T> } }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::ContractError;
use super::value::ContractValue;

/// A single contract function invocation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallRequest {
    /// Contract function name (e.g. `register-device`)
    pub function: String,
    /// Positional arguments
    #[serde(default)]
    pub args: Vec<ContractValue>,
}

impl CallRequest {
    /// Create a request with no arguments
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument
    #[must_use]
    pub fn arg(mut self, value: impl Into<ContractValue>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Append several arguments
    #[must_use]
    pub fn with_args<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ContractValue>,
    {
        self.args.extend(values.into_iter().map(Into::into));
        self
    }
}

/// Inner `result` object of a call response
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallResult {
    /// Value returned by the contract function
    pub value: ContractValue,
}

/// Response envelope returned by a contract call
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallResponse {
    /// The call result
    pub result: CallResult,
}

impl CallResponse {
    /// Wrap a value in the response envelope
    pub fn ok(value: impl Into<ContractValue>) -> Self {
        Self {
            result: CallResult {
                value: value.into(),
            },
        }
    }

    /// Borrow the returned value
    #[must_use]
    pub fn value(&self) -> &ContractValue {
        &self.result.value
    }

    /// Take the returned value
    #[must_use]
    pub fn into_value(self) -> ContractValue {
        self.result.value
    }

    /// Decode the returned value into a typed result
    ///
    /// # Errors
    ///
    /// Returns `ContractError::Decode` when the value does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ContractError> {
        self.result.value.decode()
    }
}
