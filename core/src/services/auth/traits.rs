//! Collaborator traits injected into the authentication service

use uuid::Uuid;

use crate::domain::entities::token::{RefreshPayload, TokenPair};
use crate::errors::{PasswordError, TokenError};

/// One-way password hashing
///
/// Implementations must be safe to share across request handlers.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password for storage
    fn hash(&self, password: &str) -> Result<String, PasswordError>;

    /// Check a plaintext password against a stored hash
    ///
    /// # Returns
    /// * `Ok(true)` - Password matches
    /// * `Ok(false)` - Password does not match
    /// * `Err(PasswordError)` - Input or hash could not be processed
    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError>;
}

/// Issues token pairs and validates refresh tokens
pub trait Authenticator: Send + Sync {
    fn issue_pair(&self, user_id: Uuid) -> Result<TokenPair, TokenError>;

    fn verify_refresh(&self, token: &str) -> Result<RefreshPayload, TokenError>;
}
