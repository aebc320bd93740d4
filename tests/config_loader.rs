use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempDir;
use userdeck::api::DEFAULT_BACKEND_URL;
use userdeck::config::{Config, ConfigError, ConfigOverrides, BACKEND_URL_ENV};
use userdeck::filter::CountryMatch;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.backend.base_url, DEFAULT_BACKEND_URL);
    assert_eq!(config.request_timeout(), None);
    assert_eq!(config.tick_rate(), Duration::from_millis(250));
    assert_eq!(config.ui.country_match, CountryMatch::Substring);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn full_file_is_parsed() {
    let (_dir, path) = write_config(
        r#"
[backend]
base_url = "https://users.example.com"
timeout_seconds = 10

[storage]
state_file = "/tmp/userdeck-state.json"

[ui]
country_match = "exact"
tick_ms = 100

[logging]
level = "debug"
file = "/tmp/userdeck.log"
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.backend.base_url, "https://users.example.com");
    assert_eq!(config.request_timeout(), Some(Duration::from_secs(10)));
    assert_eq!(config.state_file_path(), PathBuf::from("/tmp/userdeck-state.json"));
    assert_eq!(config.ui.country_match, CountryMatch::Exact);
    assert_eq!(config.tick_rate(), Duration::from_millis(100));
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.log_file_path(), PathBuf::from("/tmp/userdeck.log"));
}

#[test]
fn partial_file_keeps_other_defaults() {
    let (_dir, path) = write_config("[ui]\ncountry_match = \"exact\"\n");

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.ui.country_match, CountryMatch::Exact);
    assert_eq!(config.ui.tick_ms, 250);
    assert_eq!(config.backend.base_url, DEFAULT_BACKEND_URL);
}

#[test]
fn invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[backend\nbase_url = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn unknown_country_mode_is_parse_error() {
    let (_dir, path) = write_config("[ui]\ncountry_match = \"fuzzy\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn non_http_url_fails_validation() {
    let (_dir, path) = write_config("[backend]\nbase_url = \"ftp://example.com\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn zero_tick_fails_validation() {
    let (_dir, path) = write_config("[ui]\ntick_ms = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn env_overrides_file() {
    let (_dir, path) = write_config("[backend]\nbase_url = \"http://file:1\"\n");
    let config = Config::load_from(&path)
        .unwrap()
        .with_env_overrides(|key| (key == BACKEND_URL_ENV).then(|| "http://env:2".to_string()));
    assert_eq!(config.backend.base_url, "http://env:2");
}

#[test]
fn blank_env_value_is_ignored() {
    let config = Config::default().with_env_overrides(|_| Some("  ".to_string()));
    assert_eq!(config.backend.base_url, DEFAULT_BACKEND_URL);
}

#[test]
fn cli_overrides_env_and_file() {
    let (_dir, path) = write_config("[backend]\nbase_url = \"http://file:1\"\n");
    let overrides = ConfigOverrides {
        backend_url: Some("http://cli:3".to_string()),
        state_file: Some(PathBuf::from("/tmp/cli-state.json")),
        log_file: None,
    };

    let config = Config::load_from(&path)
        .unwrap()
        .with_env_overrides(|_| Some("http://env:2".to_string()))
        .with_overrides(&overrides);

    assert_eq!(config.backend.base_url, "http://cli:3");
    assert_eq!(config.state_file_path(), PathBuf::from("/tmp/cli-state.json"));
    assert!(config.validate().is_ok());
}

#[test]
fn overridden_url_is_validated() {
    let config = Config::default().with_overrides(&ConfigOverrides {
        backend_url: Some("localhost:5001".to_string()),
        ..ConfigOverrides::default()
    });
    assert!(config.with_env_overrides(no_env).validate().is_err());
}

#[test]
fn default_paths_live_under_userdeck() {
    let config = Config::default();
    assert!(config.state_file_path().ends_with("userdeck/user-storage.json"));
    assert!(config.log_file_path().ends_with("userdeck/userdeck.log"));
    assert!(Config::config_path().ends_with("userdeck/config.toml"));
}
