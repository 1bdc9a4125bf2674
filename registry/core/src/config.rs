//! Registry Configuration
//!
//! Configuration is layered, later layers winning:
//!
//! 1. built-in defaults
//! 2. TOML file (`$XDG_CONFIG_HOME/iot-registry/registry.toml` or an
//!    explicit path)
//! 3. environment variables
//! 4. explicit overrides (CLI flags)
//!
//! # File Format
//!
//! ```toml
//! [contract]
//! id = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM.iot-device-registration"
//! sender = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM"
//!
//! [[fixtures]]
//! function = "register-device"
//! value = 1
//!
//! [[fixtures]]
//! function = "get-device-count"
//! value = 5
//! once = false
//! ```
//!
//! # Environment Variables
//!
//! - `REGISTRY_CONTRACT_ID`: contract id (`ADDRESS.contract-name`)
//! - `REGISTRY_SENDER`: sender principal

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::contract::{ContractId, ContractValue, MockOutcome};

/// Errors related to loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A fixture does not describe exactly one outcome
    #[error("invalid fixture for `{function}`: {reason}")]
    InvalidFixture {
        /// Function the fixture is for
        function: String,
        /// What is wrong with it
        reason: &'static str,
    },

    /// A contract id override could not be parsed
    #[error("invalid contract id `{0}`")]
    InvalidContractId(String),
}

/// Contract section
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractConfig {
    /// Contract to call
    pub id: ContractId,
    /// Sender principal, if set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
}

/// A programmed mock outcome loaded from configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    /// Function the fixture answers
    pub function: String,
    /// Value to resolve with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ContractValue>,
    /// Message to reject with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Consumed by a single call (queued) rather than answering every call
    #[serde(default = "default_once")]
    pub once: bool,
}

fn default_once() -> bool {
    true
}

impl Fixture {
    /// One-shot fixture resolving with `value`
    pub fn resolve(function: impl Into<String>, value: impl Into<ContractValue>) -> Self {
        Self {
            function: function.into(),
            value: Some(value.into()),
            error: None,
            once: true,
        }
    }

    /// One-shot fixture rejecting with `message`
    pub fn reject(function: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            value: None,
            error: Some(message.into()),
            once: true,
        }
    }

    /// Make the fixture answer every call to its function
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.once = false;
        self
    }

    /// The outcome this fixture programs
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidFixture` unless exactly one of `value`
    /// and `error` is set.
    pub fn outcome(&self) -> Result<MockOutcome, ConfigError> {
        match (&self.value, &self.error) {
            (Some(value), None) => Ok(MockOutcome::Resolve(value.clone())),
            (None, Some(message)) => Ok(MockOutcome::Reject(message.clone())),
            (Some(_), Some(_)) => Err(self.invalid("both `value` and `error` are set")),
            (None, None) => Err(self.invalid("one of `value` or `error` is required")),
        }
    }

    fn invalid(&self, reason: &'static str) -> ConfigError {
        ConfigError::InvalidFixture {
            function: self.function.clone(),
            reason,
        }
    }
}

/// Complete registry configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Contract settings
    pub contract: ContractConfig,
    /// Mock fixtures, in file order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fixtures: Vec<Fixture>,
}

impl RegistryConfig {
    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::InvalidFixture` for fixtures that do not describe one
    /// outcome.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every fixture
    ///
    /// # Errors
    ///
    /// Returns the first invalid fixture.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.fixtures.iter().try_for_each(|f| f.outcome().map(|_| ()))
    }

    /// Apply environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidContractId` if `REGISTRY_CONTRACT_ID`
    /// is malformed.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(&ConfigOverrides {
            contract_id: std::env::var("REGISTRY_CONTRACT_ID").ok(),
            sender: std::env::var("REGISTRY_SENDER").ok(),
            ..ConfigOverrides::default()
        })
    }

    /// Apply explicit overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidContractId` if the override is
    /// malformed.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) -> Result<(), ConfigError> {
        if let Some(ref id) = overrides.contract_id {
            self.contract.id = id
                .parse()
                .map_err(|_| ConfigError::InvalidContractId(id.clone()))?;
        }
        if let Some(ref sender) = overrides.sender {
            self.contract.sender = Some(sender.clone());
        }
        Ok(())
    }
}

/// Values that take precedence over the file and environment
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// Explicit config file path
    pub config_path: Option<PathBuf>,
    /// Contract id override
    pub contract_id: Option<String>,
    /// Sender override
    pub sender: Option<String>,
}

/// Where the configuration file came from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    /// Loaded from this file
    File(PathBuf),
    /// No file; built-in defaults
    Defaults,
}

/// Default config file path
///
/// `$XDG_CONFIG_HOME/iot-registry/registry.toml`, or `None` when no config
/// directory is known.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("iot-registry").join("registry.toml"))
}

/// Load configuration from one file, without env or overrides
///
/// # Errors
///
/// Returns `ConfigError::Io` if the file cannot be read, otherwise any
/// error from [`RegistryConfig::from_toml`].
pub fn load_config_from_path(path: &Path) -> Result<RegistryConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = RegistryConfig::from_toml(&text)?;
    debug!(path = ?path, fixtures = config.fixtures.len(), "Config file parsed");
    Ok(config)
}

/// Load the full layered configuration
///
/// An explicit `config_path` must exist; the default path may be absent.
///
/// # Errors
///
/// Returns any file, parse, fixture or override error.
pub fn load_config(
    overrides: &ConfigOverrides,
) -> Result<(RegistryConfig, ConfigSource), ConfigError> {
    let (mut config, source) = match overrides.config_path {
        Some(ref path) => (load_config_from_path(path)?, ConfigSource::File(path.clone())),
        None => match default_config_path() {
            Some(path) if path.exists() => {
                (load_config_from_path(&path)?, ConfigSource::File(path))
            }
            _ => (RegistryConfig::default(), ConfigSource::Defaults),
        },
    };

    config.apply_env()?;
    config.apply_overrides(overrides)?;

    info!(contract = %config.contract.id, source = ?source, "Configuration loaded");
    Ok((config, source))
}
