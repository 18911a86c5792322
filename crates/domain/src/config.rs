//! Configuration structures
//!
//! Every section has defaults so a missing file or a partial file still
//! yields a usable configuration. Loading lives in `mailtriage-infra`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_API_BASE_URL;

/// Top-level client configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Classification service connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the classification service (e.g. `http://localhost:8000`)
    pub base_url: String,
    /// Transport timeout in seconds; `None` leaves requests unbounded
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_string(), timeout_secs: None, user_agent: None }
    }
}

/// Local persistence settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the history record; platform data dir when unset
    pub data_dir: Option<PathBuf>,
    /// Keep history in memory only (nothing written to disk)
    pub ephemeral: bool,
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}
