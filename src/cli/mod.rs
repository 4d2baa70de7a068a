//! CLI module for Dogshouse
//!
//! Provides the command-line interface:
//! - serve: boot the HTTP server and enter the serving loop

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run_command, serve};
pub use errors::{CliError, CliResult};

use tracing_subscriber::EnvFilter;

/// Parse arguments, initialize logging, and dispatch.
pub async fn run() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse_args();
    run_command(cli.command).await
}
