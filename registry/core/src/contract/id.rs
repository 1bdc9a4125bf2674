//! Contract Identifiers
//!
//! A deployed contract is named `ADDRESS.contract-name`, e.g.
//! `ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM.iot-device-registration`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::ContractError;

/// Fully-qualified contract identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContractId {
    /// Deployer address
    pub address: String,
    /// Contract name
    pub name: String,
}

impl ContractId {
    /// Create from parts
    pub fn new(address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: name.into(),
        }
    }
}

impl Default for ContractId {
    fn default() -> Self {
        Self::new(
            "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM",
            "iot-device-registration",
        )
    }
}

impl FromStr for ContractId {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once('.') {
            Some((address, name))
                if !address.is_empty() && !name.is_empty() && !name.contains('.') =>
            {
                Ok(Self::new(address, name))
            }
            _ => Err(ContractError::InvalidContractId(s.to_string())),
        }
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.address, self.name)
    }
}

impl Serialize for ContractId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ContractId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
