use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use cs_core::domain::entities::token::TokenPair;
use cs_core::domain::entities::user::Credentials;

/// Accepted login length in bytes
pub const LOGIN_BYTES: RangeInclusive<usize> = 7..=31;
/// Accepted password length in bytes
pub const PASSWORD_BYTES: RangeInclusive<usize> = 9..=23;

/// Body of `signUp` and `signIn`
///
/// Lengths are counted in UTF-8 bytes, not characters.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[validate(custom(function = "validate_login"))]
    pub login: String,

    #[validate(custom(function = "validate_password"))]
    pub password: String,
}

fn validate_login(login: &str) -> Result<(), ValidationError> {
    byte_length(login, LOGIN_BYTES)
}

fn validate_password(password: &str) -> Result<(), ValidationError> {
    byte_length(password, PASSWORD_BYTES)
}

fn byte_length(value: &str, range: RangeInclusive<usize>) -> Result<(), ValidationError> {
    if range.contains(&value.len()) {
        Ok(())
    } else {
        Err(ValidationError::new("length"))
    }
}

impl std::fmt::Debug for CredentialsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsRequest")
            .field("login", &self.login)
            .finish_non_exhaustive()
    }
}

impl From<CredentialsRequest> for Credentials {
    fn from(request: CredentialsRequest) -> Self {
        Credentials::new(request.login, request.password)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<TokenPair> for TokenPairResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub user_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(login: &str, password: &str) -> CredentialsRequest {
        CredentialsRequest {
            login: login.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_credentials_bounds() {
        assert!(request("1234567", "123456789").validate().is_ok());
        assert!(request(&"l".repeat(31), &"p".repeat(23)).validate().is_ok());

        assert!(request("123456", "123456789").validate().is_err());
        assert!(request(&"l".repeat(32), "123456789").validate().is_err());
        assert!(request("1234567", "12345678").validate().is_err());
        assert!(request("1234567", &"p".repeat(24)).validate().is_err());
    }

    #[test]
    fn test_lengths_counted_in_bytes() {
        // 16 Cyrillic letters are 32 bytes
        assert!(request(&"л".repeat(16), "123456789").validate().is_err());
        assert!(request(&"л".repeat(15), "123456789").validate().is_ok());

        // 8 characters, 14 bytes
        assert!(request("1234567", "пароль12").validate().is_ok());
        // 12 characters, 24 bytes
        assert!(request("1234567", &"п".repeat(12)).validate().is_err());
    }

    #[test]
    fn test_debug_hides_password() {
        let debug = format!("{:?}", request("some_login", "super-secret"));
        assert!(debug.contains("some_login"));
        assert!(!debug.contains("super-secret"));
    }
}
