//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, PasswordError, TokenError};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
