//! dogshouse - A small HTTP service managing a catalog of dog records
//!
//! List with sorting/pagination, create with validation, a liveness probe,
//! and a fixed-window rate limiter protecting the whole API.

pub mod cli;
pub mod dogs;
pub mod http_server;
pub mod query;
pub mod rate_limit;
pub mod store;
