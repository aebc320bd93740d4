use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use userdeck::api::ApiClient;
use userdeck::config::{Config, ConfigOverrides};
use userdeck::logging::init_tracing;
use userdeck::store::{SessionStore, StateFile};
use userdeck::ui::{self, Route, UiOptions};

#[derive(Parser, Debug)]
#[command(name = "userdeck", version)]
#[command(about = "Browse, save and edit random user profiles", long_about = None)]
struct Cli {
    /// Screen to open first: /, /random-users, /saved-users or /user/<id>
    #[arg(default_value = "/")]
    route: Route,

    /// Backend base URL (overrides config and USERDECK_BACKEND_URL)
    #[arg(long, value_name = "URL")]
    backend_url: Option<String>,

    /// Configuration file path
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Session state file path
    #[arg(long, value_name = "PATH")]
    state_file: Option<PathBuf>,

    /// Log file path
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            backend_url: self.backend_url.clone(),
            state_file: self.state_file.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }?
    .with_env_overrides(|key| std::env::var(key).ok())
    .with_overrides(&cli.overrides());
    config.validate()?;

    let log_path = config.log_file_path();
    init_tracing(&log_path, &config.logging.level)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;
    tracing::info!(
        backend = %config.backend.base_url,
        route = %cli.route,
        "Starting userdeck"
    );

    let api = ApiClient::new(&config.backend.base_url, config.request_timeout())
        .context("failed to build HTTP client")?;
    let store = SessionStore::open(api, StateFile::new(config.state_file_path()));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("userdeck-worker")
        .build()
        .context("failed to start async runtime")?;

    ui::run(
        store,
        runtime.handle(),
        UiOptions {
            start: cli.route,
            tick_rate: config.tick_rate(),
            country_match: config.ui.country_match,
        },
    )?;

    runtime.shutdown_timeout(Duration::from_secs(1));
    tracing::info!("userdeck exited");
    Ok(())
}
