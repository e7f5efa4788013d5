use thiserror::Error;

mod domain_types;

pub use domain_types::*;

/// Raw-input validation failures, always naming the offending field.
///
/// A `ValidationError` means the normalizer rejected the input record;
/// no partial `Product` exists when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Field '{field}' is not a valid number: {value}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Field '{field}' has the wrong type: expected {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Field '{field}' is out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}
