//! Repository error kinds

use thiserror::Error;

/// Failures reported by repository implementations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A uniqueness constraint was violated
    #[error("not unique")]
    Unique,

    /// The entity failed a storage-level validation rule
    #[error("invalid: {0}")]
    Validation(String),

    #[error("not found")]
    NotFound,

    /// Any other backend failure
    #[error("database error: {0}")]
    Database(String),
}
