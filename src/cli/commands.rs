//! CLI command implementation
//!
//! Boot sequence: configuration, logging, store, then the HTTP server.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::http_server::{HttpServer, ServerConfig};
use crate::store::{SharedStore, SqliteRecipeStore, UnavailableStore};

use super::args::Cli;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the server
pub async fn run() -> CliResult<()> {
    serve(Cli::parse_args()).await
}

/// Boot and serve until Ctrl-C or SIGTERM
pub async fn serve(cli: Cli) -> CliResult<()> {
    let config = load_config(&cli)?;
    init_logging(&config.log_filter)?;

    let store = open_store();
    let server = HttpServer::new(config, store);

    server.start(shutdown_signal()).await?;
    Ok(())
}

/// Resolve configuration: defaults, then the config file, then CLI/env overrides
pub fn load_config(cli: &Cli) -> CliResult<ServerConfig> {
    let mut config = match &cli.config {
        Some(path) => read_config_file(path)?,
        None => ServerConfig::default(),
    };

    if let Some(host) = &cli.host {
        config.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    config.validate().map_err(CliError::Config)?;
    Ok(config)
}

fn read_config_file(path: &Path) -> CliResult<ServerConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::Config(format!("Failed to read config: {}", e)))?;

    serde_json::from_str(&content)
        .map_err(|e| CliError::Config(format!("Invalid config JSON: {}", e)))
}

/// Open the in-memory SQLite store.
///
/// A failure is logged and replaced by a store that rejects every request;
/// the server still starts.
pub fn open_store() -> SharedStore {
    match SqliteRecipeStore::open_in_memory() {
        Ok(store) => {
            info!("connected to in-memory SQLite database");
            Arc::new(store)
        }
        Err(e) => {
            error!(error = %e, "failed to open database");
            Arc::new(UnavailableStore::new(e.to_string()))
        }
    }
}

fn init_logging(filter: &str) -> CliResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .map_err(|e| CliError::Config(format!("Invalid log filter: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| CliError::Boot(format!("Failed to install logger: {}", e)))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
