//! User entity representing a registered account.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity as stored by a [`UserRepository`](crate::repositories::UserRepository)
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user, independent of the login
    pub id: Uuid,

    /// Login name, unique across users
    pub login: String,

    /// Password hash produced by a [`PasswordHasher`](crate::services::auth::PasswordHasher)
    pub password_hash: String,
}

impl User {
    /// Creates a new User with a freshly generated identifier
    pub fn new(login: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            login: login.into(),
            password_hash: password_hash.into(),
        }
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("login", &self.login)
            .finish_non_exhaustive()
    }
}

/// Login and plaintext password submitted by a client
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

impl Credentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_gets_unique_id() {
        let a = User::new("first_login", "hash");
        let b = User::new("first_login", "hash");
        assert_ne!(a.id, b.id);
        assert_eq!(a.login, "first_login");
    }

    #[test]
    fn test_debug_hides_secrets() {
        let user = User::new("somebody", "$2b$08$secrethash");
        assert!(!format!("{:?}", user).contains("secrethash"));

        let credentials = Credentials::new("somebody", "plaintext-password");
        assert!(!format!("{:?}", credentials).contains("plaintext-password"));
    }
}
