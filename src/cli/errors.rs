//! CLI-specific error types
//!
//! Everything here is fatal: the process prints the error and exits
//! non-zero.

use thiserror::Error;

use crate::http_server::{ConfigError, ServerError};

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Server failed to start or serve
    #[error(transparent)]
    Server(#[from] ServerError),
}
