//! # Store Errors
//!
//! Error types for the record store seam.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures surfaced by a record store
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Unique-name constraint violated at insert time
    #[error("A dog with this name already exists.")]
    DuplicateName {
        /// The conflicting name
        name: String,
    },

    /// Backing store unreachable or failed mid-operation
    #[error("Record store unavailable: {0}")]
    Unavailable(String),
}
