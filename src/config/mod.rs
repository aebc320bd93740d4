//! Configuration loaded from `config.toml`, environment and CLI flags.

mod loader;
mod types;

pub use loader::{ConfigError, ConfigOverrides, BACKEND_URL_ENV};
pub use types::{BackendConfig, Config, LoggingConfig, StorageConfig, UiConfig};
