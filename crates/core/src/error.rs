//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is local to the operation that raised it: nothing is retried
/// inside the domain, callers correct their input and try again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation at construction time (e.g. a star rating of 6).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A range was constructed with its lower bound above its upper bound.
    #[error("invalid range: minimum {min} is greater than maximum {max}")]
    InvalidRange { min: String, max: String },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// No record matched the requested identifier.
    #[error("not found: {0}")]
    NotFound(String),

    /// The adjustment would drive a quantity below zero.
    #[error("insufficient quantity: requested {requested}, available {available}")]
    InsufficientQuantity { requested: u64, available: u32 },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_range(min: impl ToString, max: impl ToString) -> Self {
        Self::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(what: impl ToString) -> Self {
        Self::NotFound(what.to_string())
    }

    pub fn insufficient_quantity(requested: u64, available: u32) -> Self {
        Self::InsufficientQuantity {
            requested,
            available,
        }
    }

    /// Bad constructor arguments, as opposed to a failed lookup or mutation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidRange { .. })
    }
}
