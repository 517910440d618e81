//! Network configuration.
//!
//! Loads a `NetworkConfig` from YAML. Every field is optional and falls back
//! to the public Stellar testnet values below.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Deployed poll contract address.
pub const CONTRACT_ID: &str = "CCYUDN6JWI7AMYGE7GL6EPDUN6ITAAPDUGM4GKXZQ4PK63C6RK5XJ77KS";

/// Horizon REST endpoint (account lookup, transaction submission).
pub const HORIZON_TESTNET_URL: &str = "https://horizon-testnet.stellar.org";

/// Soroban RPC endpoint (liveness checks, contract reads).
pub const SOROBAN_TESTNET_URL: &str = "https://soroban-testnet.stellar.org";

/// Network passphrase transactions are signed against.
pub const TESTNET_PASSPHRASE: &str = "Test SDF Network ; September 2015";

/// Fee per transaction, in stroops.
pub const BASE_FEE: u32 = 100;

/// Validity window of a vote transaction, in seconds from build time.
pub const TX_TIMEOUT_SECS: u64 = 300;

/// Default HTTP request timeout, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Endpoints and constants for one Stellar network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub horizon_url: String,
    pub soroban_rpc_url: String,
    pub network_passphrase: String,
    pub contract_id: String,
    /// Fee per transaction, in stroops.
    pub base_fee: u32,
    pub tx_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            horizon_url: HORIZON_TESTNET_URL.to_string(),
            soroban_rpc_url: SOROBAN_TESTNET_URL.to_string(),
            network_passphrase: TESTNET_PASSPHRASE.to_string(),
            contract_id: CONTRACT_ID.to_string(),
            base_fee: BASE_FEE,
            tx_timeout_secs: TX_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl NetworkConfig {
    /// Parse a config from a YAML string and validate it.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Config pointing both endpoints at local base URLs, testnet constants otherwise.
    pub fn local(horizon_url: impl Into<String>, soroban_rpc_url: impl Into<String>) -> Self {
        Self {
            horizon_url: horizon_url.into(),
            soroban_rpc_url: soroban_rpc_url.into(),
            ..Default::default()
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.horizon_url.trim().is_empty() {
            return Err(ConfigError::Invalid("horizon_url is empty".into()));
        }
        if self.soroban_rpc_url.trim().is_empty() {
            return Err(ConfigError::Invalid("soroban_rpc_url is empty".into()));
        }
        if self.network_passphrase.is_empty() {
            return Err(ConfigError::Invalid("network_passphrase is empty".into()));
        }
        if self.base_fee == 0 {
            return Err(ConfigError::Invalid("base_fee must be positive".into()));
        }
        if self.tx_timeout_secs == 0 {
            return Err(ConfigError::Invalid("tx_timeout_secs must be positive".into()));
        }
        Ok(())
    }
}
