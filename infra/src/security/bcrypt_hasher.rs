//! bcrypt implementation of the PasswordHasher trait

use cs_core::errors::PasswordError;
use cs_core::services::auth::PasswordHasher;

/// Work factor used unless configured otherwise
pub const DEFAULT_COST: u32 = 8;

/// bcrypt only reads this many bytes of input
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Password hasher backed by bcrypt
///
/// Inputs longer than [`MAX_PASSWORD_BYTES`] are rejected instead of being
/// truncated, so two passwords sharing a 72-byte prefix never collide.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new() -> Self {
        Self::with_cost(DEFAULT_COST)
    }

    /// Create a hasher with an explicit work factor (4..=31)
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    fn check_length(password: &str) -> Result<(), PasswordError> {
        if password.len() > MAX_PASSWORD_BYTES {
            return Err(PasswordError::TooLong {
                max: MAX_PASSWORD_BYTES,
            });
        }
        Ok(())
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, PasswordError> {
        Self::check_length(password)?;
        bcrypt::hash(password, self.cost).map_err(|e| PasswordError::Hashing(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        Self::check_length(password)?;
        bcrypt::verify(password, hash).map_err(|e| PasswordError::Hashing(e.to_string()))
    }
}
