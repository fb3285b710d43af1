//! User repository trait defining the interface for user persistence.
//!
//! The auth service depends only on this trait; concrete storage is
//! injected at construction.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::repositories::RepositoryError;

/// Repository trait for User entity persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use cs_core::domain::entities::user::User;
/// use cs_core::repositories::{RepositoryError, UserRepository};
///
/// struct PgUserRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl UserRepository for PgUserRepository {
///     async fn create_user(&self, user: User) -> Result<User, RepositoryError> {
///         // Implementation here
///         Ok(user)
///     }
///
///     async fn find_user_by_login(&self, login: &str) -> Result<User, RepositoryError> {
///         Err(RepositoryError::NotFound)
///     }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(RepositoryError::Unique)` - Login already taken
    /// * `Err(RepositoryError::Validation)` - User rejected by storage rules
    async fn create_user(&self, user: User) -> Result<User, RepositoryError>;

    /// Find a user by login
    ///
    /// # Returns
    /// * `Ok(User)` - User found
    /// * `Err(RepositoryError::NotFound)` - No user with that login
    async fn find_user_by_login(&self, login: &str) -> Result<User, RepositoryError>;
}
