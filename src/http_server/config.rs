//! HTTP Server Configuration
//!
//! Configuration for the HTTP server including host, port, CORS settings,
//! and the fixed-window rate limit, loadable from a JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::rate_limit::FixedWindowConfig;

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (default: empty, permissive for development)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Fixed-window rate limit applied to the whole API
    #[serde(default)]
    pub rate_limit: FixedWindowConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            rate_limit: FixedWindowConfig::default(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Load configuration from a JSON file; absent fields take defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&raw).map_err(|e| ConfigError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration file failure
#[derive(Debug, Clone, thiserror::Error)]
#[error("failed to load config {path}: {message}")]
pub struct ConfigError {
    path: String,
    message: String,
}
