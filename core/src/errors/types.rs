//! Error kinds for authentication, token handling and password hashing
//!
//! Every kind is a plain enum so callers branch on the variant rather than
//! on error identity or message text.

use thiserror::Error;

/// Token issuance and validation failures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// Signature is valid but the expiry time has passed
    #[error("token expired")]
    Expired,

    /// Bad signature, malformed structure, wrong kind or unparseable issuer
    #[error("invalid token")]
    Invalid,

    /// The signing primitive failed while issuing a token
    #[error("token signing failed")]
    SigningFailure,
}

/// Authentication failures surfaced by the auth service
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("incorrect input")]
    IncorrectInput,

    #[error("user not found")]
    UserNotFound,

    #[error("user already exists")]
    UserAlreadyExists,
}

/// Password hashing failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    /// Input longer than the hashing algorithm accepts
    #[error("password exceeds {max} bytes")]
    TooLong { max: usize },

    #[error("password hashing failed: {0}")]
    Hashing(String),
}
