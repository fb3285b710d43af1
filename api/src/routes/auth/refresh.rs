use actix_web::{web, HttpResponse};

use cs_core::repositories::UserRepository;
use cs_core::services::auth::{Authenticator, PasswordHasher};

use crate::dto::{RefreshTokenRequest, TokenPairResponse};
use crate::handlers::handle_domain_error;

use super::AppState;

/// Handler for POST /api/v1/refresh
///
/// Exchanges a valid refresh token for a new token pair.
///
/// # Request Body
///
/// ```json
/// {
///     "refresh_token": "string"
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: `TOKEN_EXPIRED` or `TOKEN_INVALID`
/// - 500 Internal Server Error: Token generation failure
pub async fn refresh<U, H, A>(
    state: web::Data<AppState<U, H, A>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    A: Authenticator + 'static,
{
    match state.auth_service.refresh(&request.refresh_token).await {
        Ok(pair) => HttpResponse::Ok().json(TokenPairResponse::from(pair)),
        Err(error) => handle_domain_error(error),
    }
}
