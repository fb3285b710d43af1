//! Authentication route handlers
//!
//! - Registration and login
//! - Token refresh
//! - Current user lookup (bearer protected)

pub mod me;
pub mod refresh;
pub mod sign_in;
pub mod sign_up;

use std::sync::Arc;

use actix_web::{error::InternalError, web};

use cs_core::repositories::UserRepository;
use cs_core::services::auth::{AuthService, Authenticator, PasswordHasher};

use crate::handlers::{invalid_credentials_response, invalid_request_response};

/// Application state that holds shared services
pub struct AppState<U, H, A>
where
    U: UserRepository,
    H: PasswordHasher,
    A: Authenticator,
{
    pub auth_service: Arc<AuthService<U, H, A>>,
}

impl<U, H, A> AppState<U, H, A>
where
    U: UserRepository,
    H: PasswordHasher,
    A: Authenticator,
{
    pub fn new(auth_service: Arc<AuthService<U, H, A>>) -> Self {
        Self { auth_service }
    }
}

/// JSON extractor config for credential bodies
///
/// Malformed bodies get the same answer as failed validation.
pub fn credentials_json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Malformed credentials body");
        InternalError::from_response(err, invalid_credentials_response()).into()
    })
}

/// JSON extractor config for the refresh body
pub fn refresh_json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Malformed refresh body");
        InternalError::from_response(err, invalid_request_response()).into()
    })
}
