use actix_web::{web, HttpResponse};
use validator::Validate;

use cs_core::repositories::UserRepository;
use cs_core::services::auth::{Authenticator, PasswordHasher};

use crate::dto::{CredentialsRequest, TokenPairResponse};
use crate::handlers::{handle_domain_error, invalid_credentials_response};

use super::AppState;

/// Handler for POST /api/v1/signIn
///
/// Checks the credentials and returns a fresh token pair.
///
/// ## Errors
/// - 400 Bad Request: Invalid login or password
/// - 404 Not Found: No user with this login
pub async fn sign_in<U, H, A>(
    state: web::Data<AppState<U, H, A>>,
    request: web::Json<CredentialsRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    A: Authenticator + 'static,
{
    if let Err(errors) = request.validate() {
        tracing::debug!(login = %request.login, %errors, "signIn validation failed");
        return invalid_credentials_response();
    }

    match state.auth_service.sign_in(request.into_inner().into()).await {
        Ok(pair) => HttpResponse::Ok().json(TokenPairResponse::from(pair)),
        Err(error) => handle_domain_error(error),
    }
}
