//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("body is empty, please supply elements.")]
    EmptyBody,

    #[error("Validation failed: {}", .0.join(" "))]
    Validation(Vec<String>),

    #[error("{0} is not provided")]
    MissingParameter(&'static str),

    #[error("Invalid value {value:?} for parameter '{name}'")]
    InvalidParameter { name: &'static str, value: String },

    #[error("Post with id {id} not found")]
    NotFound { id: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Store-level errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store connection failed: {0}")]
    Connection(String),

    #[error("Store operation failed: {0}")]
    Query(String),

    #[error("Conditional check failed")]
    ConditionFailed,

    #[error("Record (de)serialization failed: {0}")]
    Serialization(String),
}
