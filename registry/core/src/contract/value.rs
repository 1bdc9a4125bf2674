//! Contract Values
//!
//! The dynamically-shaped value carried by contract arguments and results.
//! A contract function may return a number, a flag, a string, or a record,
//! so values are kept untyped until a caller decodes them.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::ContractError;

/// A value passed to or returned from a contract function
///
/// Serialized untagged, so `ContractValue::UInt(1)` is the JSON literal `1`
/// and a record is a plain JSON object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContractValue {
    /// Absent value (`null`)
    #[default]
    None,
    /// Boolean flag
    Bool(bool),
    /// Unsigned integer (ids, counts)
    UInt(u64),
    /// Negative integer
    Int(i64),
    /// Non-integer number, or an integer outside the `i64`/`u64` range
    Float(f64),
    /// String
    Text(String),
    /// Ordered list of values
    List(Vec<ContractValue>),
    /// Record with named fields
    Record(BTreeMap<String, ContractValue>),
}

impl ContractValue {
    /// Build a record from `(key, value)` pairs
    pub fn record<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: Into<ContractValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Record(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Short name of the variant, used in error messages
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bool(_) => "bool",
            Self::UInt(_) => "uint",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Record(_) => "record",
        }
    }

    /// Check for the absent value
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Get the value as a boolean
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the value as an unsigned integer
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::UInt(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the value as a floating-point number
    ///
    /// Integers convert too, possibly losing precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            Self::UInt(n) => Some(*n as f64),
            Self::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Get the value as a string slice
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as a record
    #[must_use]
    pub fn as_record(&self) -> Option<&BTreeMap<String, ContractValue>> {
        match self {
            Self::Record(fields) => Some(fields),
            _ => None,
        }
    }

    /// Decode into any deserializable type
    ///
    /// # Errors
    ///
    /// Returns `ContractError::Decode` when the shape does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ContractError> {
        let json =
            serde_json::to_value(self).map_err(|e| ContractError::Decode(e.to_string()))?;
        serde_json::from_value(json).map_err(|e| ContractError::Decode(e.to_string()))
    }
}

impl fmt::Display for ContractValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(s) => f.write_str(&s),
            Err(_) => f.write_str(self.type_name()),
        }
    }
}

impl From<bool> for ContractValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u64> for ContractValue {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<u32> for ContractValue {
    fn from(value: u32) -> Self {
        Self::UInt(u64::from(value))
    }
}

impl From<i64> for ContractValue {
    fn from(value: i64) -> Self {
        // Non-negative integers always travel as UInt so equality is stable
        match u64::try_from(value) {
            Ok(n) => Self::UInt(n),
            Err(_) => Self::Int(value),
        }
    }
}

impl From<f64> for ContractValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ContractValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ContractValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<ContractValue>> for ContractValue {
    fn from(value: Vec<ContractValue>) -> Self {
        Self::List(value)
    }
}

impl From<BTreeMap<String, ContractValue>> for ContractValue {
    fn from(value: BTreeMap<String, ContractValue>) -> Self {
        Self::Record(value)
    }
}

impl<T: Into<ContractValue>> From<Option<T>> for ContractValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Into::into)
    }
}
