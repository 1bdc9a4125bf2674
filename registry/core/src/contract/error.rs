//! Contract Call Errors

use thiserror::Error;

/// Errors produced at the contract-call boundary
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ContractError {
    /// The caller reported a failure for this call
    #[error("contract call `{function}` rejected: {message}")]
    Rejected {
        /// Function that was called
        function: String,
        /// Failure reported by the caller
        message: String,
    },

    /// The mock had no outcome programmed for this call
    #[error("no response configured for contract call `{function}`")]
    NoResponseConfigured {
        /// Function that was called
        function: String,
    },

    /// The call succeeded but returned a value of the wrong shape
    #[error("contract call `{function}` returned {found}, expected {expected}")]
    UnexpectedValue {
        /// Function that was called
        function: String,
        /// Shape the caller asked for
        expected: &'static str,
        /// Shape that came back
        found: String,
    },

    /// A contract identifier did not have the `ADDRESS.name` form
    #[error("invalid contract id `{0}`: expected ADDRESS.contract-name")]
    InvalidContractId(String),

    /// A value could not be decoded into the requested type
    #[error("failed to decode contract value: {0}")]
    Decode(String),
}

impl ContractError {
    /// Create a rejection error
    pub fn rejected(function: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Rejected {
            function: function.into(),
            message: message.into(),
        }
    }

    /// Name of the function the error is about, if any
    #[must_use]
    pub fn function(&self) -> Option<&str> {
        match self {
            Self::Rejected { function, .. }
            | Self::NoResponseConfigured { function }
            | Self::UnexpectedValue { function, .. } => Some(function),
            Self::InvalidContractId(_) | Self::Decode(_) => None,
        }
    }
}
