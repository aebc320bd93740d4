use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use crate::config::types::Config;
use crate::store::StateFile;

/// Environment variable overriding `backend.base_url`.
pub const BACKEND_URL_ENV: &str = "USERDECK_BACKEND_URL";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Values given on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub backend_url: Option<String>,
    pub state_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/userdeck/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("userdeck").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides through `lookup` (normally `std::env::var`).
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(BACKEND_URL_ENV).filter(|url| !url.trim().is_empty()) {
            self.backend.base_url = url;
        }
        self
    }

    /// Apply command-line overrides. These win over file and environment.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(url) = &overrides.backend_url {
            self.backend.base_url = url.clone();
        }
        if let Some(path) = &overrides.state_file {
            self.storage.state_file = Some(path.clone());
        }
        if let Some(path) = &overrides.log_file {
            self.logging.file = Some(path.clone());
        }
        self
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The backend URL is http(s)
    /// - The tick interval is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.backend.base_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::ValidationError {
                message: format!("backend.base_url must start with http:// or https://, got '{}'", url),
            });
        }

        if self.ui.tick_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_ms must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        match self.backend.timeout_seconds {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_ms)
    }

    pub fn state_file_path(&self) -> PathBuf {
        self.storage
            .state_file
            .clone()
            .unwrap_or_else(StateFile::default_path)
    }

    /// `<data dir>/userdeck/userdeck.log` unless configured.
    pub fn log_file_path(&self) -> PathBuf {
        self.logging.file.clone().unwrap_or_else(|| {
            let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
            data_dir.join("userdeck").join("userdeck.log")
        })
    }
}
