//! Creation-validation pipeline
//!
//! A pure decision function over the candidate and a point-in-time snapshot
//! of existing records. Check order is fixed: a candidate failing several
//! checks reports only the first reason.

use super::errors::{ValidationError, ValidationResult};
use super::model::{Dog, NewDog};

/// Validate a candidate against the current store contents.
///
/// Checks, in order:
/// 1. name uniqueness (case-sensitive exact match)
/// 2. tail length >= 0
/// 3. weight > 0
///
/// Does not persist; the caller stages the candidate only on `Ok`.
pub fn validate(candidate: &NewDog, existing: &[Dog]) -> ValidationResult {
    if existing.iter().any(|d| d.name == candidate.name) {
        return Err(ValidationError::DuplicateName);
    }

    if candidate.tail_length < 0 {
        return Err(ValidationError::NegativeTailLength);
    }

    if candidate.weight <= 0 {
        return Err(ValidationError::NonPositiveWeight);
    }

    Ok(())
}
