//! Unified error type for the domain layer
//!
//! Every fallible domain operation reports through [`DomainError`], so callers
//! can match on a single enum instead of juggling strings.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A caller supplied an argument outside the operation's domain
    /// (non-positive bound, zero-sized dimension, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DomainError {
    /// Creates an invalid argument error.
    ///
    /// Use this when a caller passes a value the operation cannot work with:
    /// - Bounds that leave no value to draw from
    /// - Sizes that are zero or negative
    ///
    /// # Example
    /// ```ignore
    /// if bound <= 0 {
    ///     return Err(DomainError::invalid_argument("Bound must be positive"));
    /// }
    /// ```
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
