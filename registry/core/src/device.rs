//! Device Records
//!
//! Shapes returned by the registry contract. Records are passed through
//! verbatim; nothing here validates owners, types or statuses.

use serde::{Deserialize, Serialize};

use crate::contract::ContractValue;

/// Numeric device identifier assigned by `register-device`
pub type DeviceId = u64;

/// Contract function names
pub mod functions {
    /// Register a device: `[device-type, location] -> id`
    pub const REGISTER_DEVICE: &str = "register-device";
    /// Fetch a device record: `[id] -> record`
    pub const GET_DEVICE: &str = "get-device";
    /// Change a device status: `[id, status] -> bool`
    pub const UPDATE_DEVICE_STATUS: &str = "update-device-status";
    /// Number of registered devices: `[] -> count`
    pub const GET_DEVICE_COUNT: &str = "get-device-count";
}

/// Device record as stored by the contract
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Principal that registered the device
    pub owner: String,
    /// Device type (e.g. `temperature-sensor`)
    #[serde(rename = "device-type")]
    pub device_type: String,
    /// Deployment location
    pub location: String,
    /// Current status (e.g. `active`)
    pub status: String,
}

impl From<&DeviceInfo> for ContractValue {
    fn from(info: &DeviceInfo) -> Self {
        ContractValue::record([
            ("owner", info.owner.as_str()),
            ("device-type", info.device_type.as_str()),
            ("location", info.location.as_str()),
            ("status", info.status.as_str()),
        ])
    }
}

impl From<DeviceInfo> for ContractValue {
    fn from(info: DeviceInfo) -> Self {
        Self::from(&info)
    }
}
