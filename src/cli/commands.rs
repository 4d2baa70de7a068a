//! CLI command implementations

use std::path::PathBuf;

use super::errors::CliResult;
use crate::http_server::{HttpServer, HttpServerConfig};

/// Run the parsed command
pub async fn run_command(command: super::Command) -> CliResult<()> {
    match command {
        super::Command::Serve { config, host, port } => serve(config, host, port).await,
    }
}

/// Load config (defaults if no file given), apply CLI overrides, serve.
pub async fn serve(
    config: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<()> {
    let mut config = match config {
        Some(path) => HttpServerConfig::load(&path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    HttpServer::with_config(config).start().await?;
    Ok(())
}
