//! # Dog Domain
//!
//! Record wire types and the creation-validation pipeline.

pub mod errors;
pub mod model;
pub mod validator;

pub use errors::{ValidationError, ValidationResult};
pub use model::{Dog, NewDog};
pub use validator::validate;
