//! Insight application binary - composition root.
//!
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Initialize tracing
//! 3. Build the in-memory store and API state
//! 4. Serve the REST API and search page

mod cli;

use std::sync::Arc;

use clap::Parser;

use insight_api::routes;
use insight_api::state::AppState;
use insight_core::config::InsightConfig;
use insight_storage::MemStorage;

use crate::cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config. Loaded before tracing so the file can set the log level; a
    // load failure is reported once the subscriber is up.
    let config_file = args.resolve_config_path();
    let loaded = InsightConfig::load(&config_file);
    let mut config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => InsightConfig::default(),
    };
    config.general.log_level = args.resolve_log_level(&config.general.log_level);
    config.server.host = args.resolve_host(&config.server.host);
    config.server.port = args.resolve_port(config.server.port);

    // Tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.general.log_level)),
        )
        .init();

    tracing::info!("Starting Insight v{}", env!("CARGO_PKG_VERSION"));
    match loaded {
        Ok(_) => tracing::info!(path = %config_file.display(), "Configuration loaded"),
        Err(e) => tracing::warn!(
            path = %config_file.display(),
            error = %e,
            "Failed to load config, using defaults"
        ),
    }

    // Storage lives for the whole process; nothing is persisted.
    let storage = Arc::new(MemStorage::new());
    tracing::info!("In-memory store initialized");

    let state = AppState::new(config, storage);

    if let Err(e) = routes::start_server(state).await {
        tracing::error!(error = %e, "API server stopped");
        return Err(e.into());
    }

    Ok(())
}
