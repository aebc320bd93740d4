use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_BACKEND_URL;
use crate::filter::CountryMatch;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the user-directory backend lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL (scheme + host + port), e.g. "http://localhost:5001".
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout in seconds. 0 disables the timeout.
    #[serde(default)]
    pub timeout_seconds: u64,
}

/// Session state persistence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// State file path. Defaults to the platform data directory.
    #[serde(default)]
    pub state_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Country filter behaviour: "substring" (default) or "exact".
    #[serde(default)]
    pub country_match: CountryMatch,
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to the platform data directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_base_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_tick_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: 0,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            country_match: CountryMatch::default(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
