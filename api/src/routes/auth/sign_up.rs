use actix_web::{web, HttpResponse};
use validator::Validate;

use cs_core::repositories::UserRepository;
use cs_core::services::auth::{Authenticator, PasswordHasher};

use crate::dto::{CredentialsRequest, TokenPairResponse};
use crate::handlers::{handle_domain_error, invalid_credentials_response};

use super::AppState;

/// Handler for POST /api/v1/signUp
///
/// Registers a new user and returns their first token pair.
///
/// # Request Body
///
/// ```json
/// {
///     "login": "string (7-31 bytes)",
///     "password": "string (9-23 bytes)"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "refresh_token": "eyJ..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Invalid login or password, or login already taken
/// - 500 Internal Server Error: Storage or signing failure
pub async fn sign_up<U, H, A>(
    state: web::Data<AppState<U, H, A>>,
    request: web::Json<CredentialsRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    A: Authenticator + 'static,
{
    if let Err(errors) = request.validate() {
        tracing::debug!(login = %request.login, %errors, "signUp validation failed");
        return invalid_credentials_response();
    }

    match state.auth_service.sign_up(request.into_inner().into()).await {
        Ok(pair) => HttpResponse::Ok().json(TokenPairResponse::from(pair)),
        Err(error) => handle_domain_error(error),
    }
}
