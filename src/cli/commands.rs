//! CLI command implementations
//!
//! `serve` resolves configuration (file, then CLI overrides), builds
//! the runtime, and runs the HTTP server until it exits.

use std::path::PathBuf;

use crate::http_server::{HttpServer, HttpServerConfig};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve { config, host, port } => serve(config, host, port),
    }
}

/// Run the HTTP server
fn serve(config_path: Option<PathBuf>, host: Option<String>, port: Option<u16>) -> CliResult<()> {
    let mut config = match config_path {
        Some(path) => HttpServerConfig::load(&path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to start runtime: {}", e)))?;

    runtime
        .block_on(HttpServer::with_config(config).start())
        .map_err(|e| CliError::serve_failed(e.to_string()))
}
