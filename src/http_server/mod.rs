//! # Dogshouse HTTP Server Module
//!
//! HTTP surface of the service: route handlers, rate-limit middleware,
//! server assembly, and configuration.
//!
//! # Endpoints
//!
//! - `GET /ping` - liveness probe returning the version string
//! - `GET /dogs` - sorted, paginated record listing
//! - `POST /dog` - validated record creation
//!
//! All endpoints sit behind a global fixed-window rate limiter (429 on
//! rejection).

pub mod config;
pub mod dog_routes;
pub mod middleware;
pub mod server;

pub use config::{ConfigError, HttpServerConfig};
pub use dog_routes::{dog_routes, DogState, SERVICE_VERSION};
pub use server::{HttpServer, ServerError};
