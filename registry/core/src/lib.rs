//! Registry Core - Contract-Call Client for the IoT Device Registry
//!
//! This crate models the call surface of an IoT device-registration smart
//! contract and ships a programmable mock for it. The contract itself is an
//! external collaborator: every interaction is a named function call with
//! positional arguments, answered by a `{ result: { value } }` envelope.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              DeviceRegistry<C>               │
//! │  register_device · get_device                │
//! │  update_device_status · get_device_count     │
//! └──────────────────────┬───────────────────────┘
//!                        │ CallRequest { function, args }
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │            ContractCaller (trait)            │
//! └──────────────────────┬───────────────────────┘
//!                        │
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │             MockContractCaller               │
//! │  once-queue · per-function · default         │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`ContractCaller`]: the async call boundary
//! - [`MockContractCaller`]: pre-programmed responses, with call history
//! - [`DeviceRegistry`]: typed facade over any caller
//! - [`DeviceInfo`]: device record returned by `get-device`
//! - [`RegistryConfig`]: layered TOML / env configuration
//!
//! # Quick Start
//!
//! ```ignore
//! use registry_core::{DeviceRegistry, MockContractCaller};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), registry_core::ContractError> {
//!     let mock = MockContractCaller::new();
//!     mock.mock_resolved_value_once(1u64);
//!
//!     let registry = DeviceRegistry::new(mock);
//!     let id = registry.register_device("temperature-sensor", "city-center").await?;
//!     assert_eq!(id, 1);
//!     Ok(())
//! }
//! ```
//!
//! # Module Overview
//!
//! - [`contract`]: call boundary, values, envelope, mock
//! - [`device`]: device record and function names
//! - [`registry`]: typed facade
//! - [`config`]: configuration loading

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod contract;
pub mod device;
pub mod registry;

// Re-exports for convenience
pub use contract::{
    CallRequest, CallResponse, CallResult, ContractCaller, ContractError, ContractId,
    ContractValue, MockContractCaller, MockOutcome,
};
pub use device::{functions, DeviceId, DeviceInfo};
pub use registry::DeviceRegistry;

// Config exports
pub use config::{
    default_config_path, load_config, load_config_from_path, ConfigError, ConfigOverrides,
    ConfigSource, ContractConfig, Fixture, RegistryConfig,
};
