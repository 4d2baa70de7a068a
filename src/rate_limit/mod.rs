//! # Rate Limiter
//!
//! Fixed-window request admission control per logical bucket. All API
//! traffic shares one global bucket named "fixed": 10 permits per 10-second
//! window, no queuing.

pub mod config;
pub mod limiter;

pub use config::FixedWindowConfig;
pub use limiter::{Decision, FixedWindowLimiter};

/// Bucket shared by every API operation
pub const GLOBAL_BUCKET: &str = "fixed";
