//! # HTTP Server
//!
//! Main HTTP server wiring the dog routes behind the rate limiter.
//!
//! This is the unified entry point for the Dogshouse API.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::config::HttpServerConfig;
use super::dog_routes::{dog_routes, DogState};
use super::middleware::rate_limit;
use crate::rate_limit::FixedWindowLimiter;
use crate::store::DogStore;

/// Server start failure
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Bind address did not parse
    #[error("invalid socket address {0}")]
    InvalidAddr(String),

    /// Listener or serve loop failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// HTTP server for the Dogshouse API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        let router = Self::build_router(&config, Arc::new(DogState::new()));
        Self { config, router }
    }

    /// Create a new HTTP server over an existing store (for tests and embedding)
    pub fn with_store(config: HttpServerConfig, store: Arc<dyn DogStore>) -> Self {
        let router = Self::build_router(&config, Arc::new(DogState::with_store(store)));
        Self { config, router }
    }

    /// Build the router: routes, rate limiter, CORS, request tracing
    fn build_router(config: &HttpServerConfig, state: Arc<DogState>) -> Router {
        let limiter = Arc::new(FixedWindowLimiter::new(config.rate_limit.clone()));

        // No configured origins means an open CORS policy
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            // Unparseable origins are skipped rather than failing startup
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        dog_routes(state)
            // Limiter runs before every handler, ping included
            .layer(middleware::from_fn_with_state(limiter, rate_limit))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), ServerError> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|_| ServerError::InvalidAddr(self.config.socket_addr()))?;

        tracing::info!(%addr, "starting Dogshouse HTTP server");
        tracing::info!("  GET  /ping - liveness probe");
        tracing::info!("  GET  /dogs - list records");
        tracing::info!("  POST /dog  - create record");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}
