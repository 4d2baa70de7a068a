//! # Validation Errors
//!
//! Error types for the creation-validation pipeline. The display strings are
//! the exact single-sentence reasons returned to clients in 400 responses.

use thiserror::Error;

/// Result type for validation decisions
pub type ValidationResult = Result<(), ValidationError>;

/// Rejection reasons for a candidate record, in check order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name collides with an existing record (case-sensitive exact match)
    #[error("A dog with this name already exists.")]
    DuplicateName,

    /// Tail length below zero
    #[error("Tail length must be a positive number.")]
    NegativeTailLength,

    /// Weight at or below zero
    #[error("Weight must be a positive number.")]
    NonPositiveWeight,
}
