//! Device Registry Facade
//!
//! Typed wrapper over a [`ContractCaller`] for the four registry functions.
//! Each operation builds one request, makes one call, and decodes the
//! returned `value`. No contract logic lives here.

use tracing::{debug, warn};

use crate::contract::{CallRequest, CallResponse, ContractCaller, ContractError, ContractId};
use crate::device::{functions, DeviceId, DeviceInfo};

/// Typed client for the device registry contract
pub struct DeviceRegistry<C: ContractCaller> {
    caller: C,
    contract: ContractId,
}

impl<C: ContractCaller> DeviceRegistry<C> {
    /// Create a registry client for the default contract id
    pub fn new(caller: C) -> Self {
        Self::with_contract(caller, ContractId::default())
    }

    /// Create a registry client for a specific contract
    pub fn with_contract(caller: C, contract: ContractId) -> Self {
        Self { caller, contract }
    }

    /// Contract this client talks to
    pub fn contract(&self) -> &ContractId {
        &self.contract
    }

    /// Underlying caller
    pub fn caller(&self) -> &C {
        &self.caller
    }

    /// Register a device and return its new id
    ///
    /// # Errors
    ///
    /// Propagates caller errors; `UnexpectedValue` if the result is not an
    /// unsigned integer.
    pub async fn register_device(
        &self,
        device_type: &str,
        location: &str,
    ) -> Result<DeviceId, ContractError> {
        let request = CallRequest::new(functions::REGISTER_DEVICE)
            .arg(device_type)
            .arg(location);
        let response = self.call_raw(&request).await?;
        expect_u64(&request, &response)
    }

    /// Fetch the record for a device
    ///
    /// # Errors
    ///
    /// Propagates caller errors; `UnexpectedValue` if the result is not a
    /// device record.
    pub async fn get_device(&self, id: DeviceId) -> Result<DeviceInfo, ContractError> {
        let request = CallRequest::new(functions::GET_DEVICE).arg(id);
        let response = self.call_raw(&request).await?;
        if response.value().as_record().is_none() {
            return Err(unexpected(&request, "record", &response));
        }
        response.decode().map_err(|e| {
            let detail = match e {
                ContractError::Decode(detail) => detail,
                other => other.to_string(),
            };
            ContractError::UnexpectedValue {
                function: request.function.clone(),
                expected: "device record",
                found: format!("record ({detail})"),
            }
        })
    }

    /// Set a device's status, returning the contract's success flag
    ///
    /// # Errors
    ///
    /// Propagates caller errors; `UnexpectedValue` if the result is not a
    /// boolean.
    pub async fn update_device_status(
        &self,
        id: DeviceId,
        status: &str,
    ) -> Result<bool, ContractError> {
        let request = CallRequest::new(functions::UPDATE_DEVICE_STATUS)
            .arg(id)
            .arg(status);
        let response = self.call_raw(&request).await?;
        response
            .value()
            .as_bool()
            .ok_or_else(|| unexpected(&request, "bool", &response))
    }

    /// Number of registered devices
    ///
    /// # Errors
    ///
    /// Propagates caller errors; `UnexpectedValue` if the result is not an
    /// unsigned integer.
    pub async fn get_device_count(&self) -> Result<u64, ContractError> {
        let request = CallRequest::new(functions::GET_DEVICE_COUNT);
        let response = self.call_raw(&request).await?;
        expect_u64(&request, &response)
    }

    /// Pass a request straight through to the caller
    ///
    /// # Errors
    ///
    /// Returns whatever the caller returns.
    pub async fn call_raw(&self, request: &CallRequest) -> Result<CallResponse, ContractError> {
        debug!(
            contract = %self.contract,
            caller = self.caller.name(),
            function = %request.function,
            args = request.args.len(),
            "Contract call"
        );

        let result = self.caller.call(request).await;
        if let Err(ref e) = result {
            warn!(
                contract = %self.contract,
                function = %request.function,
                error = %e,
                "Contract call failed"
            );
        }
        result
    }
}

fn expect_u64(request: &CallRequest, response: &CallResponse) -> Result<u64, ContractError> {
    response
        .value()
        .as_u64()
        .ok_or_else(|| unexpected(request, "uint", response))
}

fn unexpected(
    request: &CallRequest,
    expected: &'static str,
    response: &CallResponse,
) -> ContractError {
    ContractError::UnexpectedValue {
        function: request.function.clone(),
        expected,
        found: response.value().type_name().to_string(),
    }
}
