//! Contract Call Boundary
//!
//! This module provides the call surface of the registry contract through
//! a common trait interface, plus a programmable mock.
//!
//! # Available Callers
//!
//! - **Mock**: pre-programmed responses for tests and replays
//!
//! # Usage
//!
//! ```ignore
//! use registry_core::contract::{CallRequest, ContractCaller, MockContractCaller};
//!
//! let mock = MockContractCaller::new();
//! mock.mock_resolved_value_once(5u64);
//! let response = mock.call(&CallRequest::new("get-device-count")).await?;
//! ```

mod error;
mod id;
mod mock;
mod request;
mod traits;
mod value;

pub use error::ContractError;
pub use id::ContractId;
pub use mock::{MockContractCaller, MockOutcome};
pub use request::{CallRequest, CallResponse, CallResult};
pub use traits::ContractCaller;
pub use value::ContractValue;
