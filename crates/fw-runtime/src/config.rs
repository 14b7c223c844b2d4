//! # Platform Configuration
//!
//! Defaults with environment overrides.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `FW_CHAIN_ID` | `1` | chain id in every permit domain |
//! | `FW_DEPLOYER` | `0x…de` | account that initializes the registry |
//! | `FW_REGISTRY_ADDRESS` | `0x…c0` | registry address |
//! | `FW_FACTORY_ADDRESS` | `0x…fa` | factory address (feeds address derivation) |
//! | `FW_LOG_LEVEL` / `RUST_LOG` | `info` | tracing filter |
//! | `FW_JSON_LOGS` | `false` | JSON log lines |

use fw_03_token_factory::config::FactoryConfig;
use serde::{Deserialize, Serialize};
use shared_types::Address;
use std::env;
use thiserror::Error;

/// Complete platform configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Chain id handed to the factory.
    pub chain_id: u64,
    /// Registry owner.
    pub deployer: Address,
    /// Registry address.
    pub registry_address: Address,
    /// Factory address.
    pub factory_address: Address,
    /// `EnvFilter` directive.
    pub log_level: String,
    /// Emit JSON instead of human-readable logs.
    pub json_logs: bool,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            chain_id: 1,
            deployer: Address::repeat_byte(0xde),
            registry_address: Address::repeat_byte(0xc0),
            factory_address: Address::repeat_byte(0xfa),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable could not be parsed.
    #[error("{var}: invalid value {value:?}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },

    /// Chain id 0 is not a valid EIP-155 chain.
    #[error("chain id must be non-zero")]
    ZeroChainId,

    /// An address that must be set is zero.
    #[error("{0} must not be the zero address")]
    ZeroAddress(&'static str),

    /// Registry and factory were given the same address.
    #[error("registry and factory share address {0:?}")]
    AddressClash(Address),
}

impl PlatformConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is malformed or the result fails
    /// [`PlatformConfig::validate`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, starting from defaults.
    ///
    /// # Errors
    ///
    /// See [`PlatformConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("FW_CHAIN_ID") {
            config.chain_id = value.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    var: "FW_CHAIN_ID",
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }
        if let Some(value) = lookup("FW_DEPLOYER") {
            config.deployer = parse_address("FW_DEPLOYER", &value)?;
        }
        if let Some(value) = lookup("FW_REGISTRY_ADDRESS") {
            config.registry_address = parse_address("FW_REGISTRY_ADDRESS", &value)?;
        }
        if let Some(value) = lookup("FW_FACTORY_ADDRESS") {
            config.factory_address = parse_address("FW_FACTORY_ADDRESS", &value)?;
        }
        if let Some(level) = lookup("FW_LOG_LEVEL").or_else(|| lookup("RUST_LOG")) {
            config.log_level = level;
        }
        if let Some(value) = lookup("FW_JSON_LOGS") {
            config.json_logs = value.eq_ignore_ascii_case("true") || value == "1";
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// `ZeroChainId`, `ZeroAddress` or `AddressClash`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chain_id == 0 {
            return Err(ConfigError::ZeroChainId);
        }
        for (name, address) in [
            ("deployer", self.deployer),
            ("registry address", self.registry_address),
            ("factory address", self.factory_address),
        ] {
            if address.is_zero() {
                return Err(ConfigError::ZeroAddress(name));
            }
        }
        if self.registry_address == self.factory_address {
            return Err(ConfigError::AddressClash(self.factory_address));
        }
        Ok(())
    }

    /// Factory settings derived from this config.
    #[must_use]
    pub fn factory_config(&self) -> FactoryConfig {
        FactoryConfig::with_chain_id(self.chain_id)
    }
}

fn parse_address(var: &'static str, value: &str) -> Result<Address, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|e: shared_types::ParseError| ConfigError::InvalidValue {
            var,
            value: value.to_string(),
            reason: e.to_string(),
        })
}
