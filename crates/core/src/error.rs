//! Store error model.

use thiserror::Error;

/// Result type used across the store and its callers.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error.
///
/// Every variant is recoverable: the collection is left in a valid state and
/// the caller decides how to surface the failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// User input failed validation (empty name, bad quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An operation targeted an id that is not in the collection.
    #[error("item not found")]
    NotFound,

    /// An import payload was not parseable as a record array.
    #[error("invalid import format: {0}")]
    Format(String),

    /// An import payload parsed but contained invalid records.
    #[error("invalid import data: {0}")]
    Schema(String),

    /// Export was requested on a collection with zero records.
    #[error("nothing to export")]
    EmptyCollection,

    /// The persistence blob could not be read or written.
    #[error("persistence failed: {0}")]
    Persistence(String),
}

impl StoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
