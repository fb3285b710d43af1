//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::{Credentials, User};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{RepositoryError, UserRepository};

use super::traits::{Authenticator, PasswordHasher};

/// Authentication service for sign-up, sign-in and token refresh
pub struct AuthService<U, H, A>
where
    U: UserRepository,
    H: PasswordHasher,
    A: Authenticator,
{
    /// User repository for persistence
    user_repository: Arc<U>,
    /// Password hasher
    hasher: Arc<H>,
    /// Token pair issuer
    authenticator: Arc<A>,
}

impl<U, H, A> Clone for AuthService<U, H, A>
where
    U: UserRepository,
    H: PasswordHasher,
    A: Authenticator,
{
    fn clone(&self) -> Self {
        Self {
            user_repository: Arc::clone(&self.user_repository),
            hasher: Arc::clone(&self.hasher),
            authenticator: Arc::clone(&self.authenticator),
        }
    }
}

impl<U, H, A> AuthService<U, H, A>
where
    U: UserRepository,
    H: PasswordHasher + 'static,
    A: Authenticator,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `hasher` - Password hashing implementation
    /// * `authenticator` - Token pair issuer
    pub fn new(user_repository: Arc<U>, hasher: Arc<H>, authenticator: Arc<A>) -> Self {
        Self {
            user_repository,
            hasher,
            authenticator,
        }
    }

    /// Register a new user and issue their first token pair
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - User stored and tokens issued
    /// * `Err(AuthError::UserAlreadyExists)` - Login already taken
    /// * `Err(AuthError::IncorrectInput)` - Password unusable or user rejected by storage
    pub async fn sign_up(&self, credentials: Credentials) -> DomainResult<TokenPair> {
        let Credentials { login, password } = credentials;
        let hasher = Arc::clone(&self.hasher);
        let password_hash = run_blocking(move || hasher.hash(&password))
            .await?
            .map_err(|e| {
                tracing::debug!(%login, error = %e, "password hashing rejected");
                AuthError::IncorrectInput
            })?;

        let user = self
            .user_repository
            .create_user(User::new(login, password_hash))
            .await
            .map_err(map_repository_error)?;

        tracing::info!(user_id = %user.id, login = %user.login, "user registered");

        Ok(self.authenticator.issue_pair(user.id)?)
    }

    /// Authenticate an existing user and issue a token pair
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Credentials accepted
    /// * `Err(AuthError::UserNotFound)` - No user with that login
    /// * `Err(AuthError::IncorrectInput)` - Password did not match
    pub async fn sign_in(&self, credentials: Credentials) -> DomainResult<TokenPair> {
        let user = self
            .user_repository
            .find_user_by_login(&credentials.login)
            .await
            .map_err(map_repository_error)?;

        let hasher = Arc::clone(&self.hasher);
        let password = credentials.password;
        let password_hash = user.password_hash.clone();
        let verified = run_blocking(move || hasher.verify(&password, &password_hash)).await?;

        match verified {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!(user_id = %user.id, "password mismatch");
                return Err(AuthError::IncorrectInput.into());
            }
            Err(e) => {
                tracing::debug!(user_id = %user.id, error = %e, "password verification failed");
                return Err(AuthError::IncorrectInput.into());
            }
        }

        tracing::info!(user_id = %user.id, "user signed in");

        Ok(self.authenticator.issue_pair(user.id)?)
    }

    /// Exchange a valid refresh token for a new token pair
    ///
    /// Earlier pairs remain valid until they expire.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - New pair for the token's user
    /// * `Err(TokenError::Expired)` - Refresh token expired
    /// * `Err(TokenError::Invalid)` - Refresh token rejected
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        let payload = self.authenticator.verify_refresh(refresh_token).map_err(|e| {
            tracing::debug!(error = %e, "refresh token rejected");
            e
        })?;

        tracing::info!(user_id = %payload.user_id, "token pair refreshed");

        Ok(self.authenticator.issue_pair(payload.user_id)?)
    }
}

/// Run CPU-bound hashing on the blocking pool
async fn run_blocking<T, F>(task: F) -> DomainResult<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task).await.map_err(|e| {
        tracing::error!(error = %e, "password hashing task failed");
        DomainError::internal(format!("password hashing task failed: {}", e))
    })
}

fn map_repository_error(error: RepositoryError) -> DomainError {
    match error {
        RepositoryError::Unique => AuthError::UserAlreadyExists.into(),
        RepositoryError::Validation(reason) => {
            tracing::debug!(%reason, "user rejected by repository");
            AuthError::IncorrectInput.into()
        }
        RepositoryError::NotFound => AuthError::UserNotFound.into(),
        RepositoryError::Database(message) => {
            tracing::error!(%message, "user repository failure");
            DomainError::internal(message)
        }
    }
}
