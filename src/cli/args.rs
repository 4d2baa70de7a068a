//! CLI argument definitions using clap
//!
//! Commands:
//! - dogshouse serve [--config <path>] [--host <host>] [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dogshouse - a small HTTP service managing a catalog of dog records
#[derive(Parser, Debug)]
#[command(name = "dogshouse")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the Dogshouse HTTP server
    Serve {
        /// Path to configuration file (optional; defaults apply if absent)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Override the port to bind to
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
