//! Contract Caller Trait
//!
//! The single boundary between this crate and a deployed contract. Anything
//! that can take a function name plus arguments and hand back a
//! `{ result: { value } }` envelope implements [`ContractCaller`].

use std::sync::Arc;

use async_trait::async_trait;

use super::error::ContractError;
use super::request::{CallRequest, CallResponse};

/// Contract call client
///
/// Implement this trait to route calls to a different contract client.
#[async_trait]
pub trait ContractCaller: Send + Sync {
    /// Get the caller name (e.g., "Mock")
    fn name(&self) -> &str;

    /// Invoke a contract function and wait for its result
    async fn call(&self, request: &CallRequest) -> Result<CallResponse, ContractError>;
}

#[async_trait]
impl<T: ContractCaller + ?Sized> ContractCaller for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn call(&self, request: &CallRequest) -> Result<CallResponse, ContractError> {
        (**self).call(request).await
    }
}
