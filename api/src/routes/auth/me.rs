use actix_web::HttpResponse;

use crate::dto::MeResponse;
use crate::middleware::AuthContext;

/// Handler for GET /api/v1/me
///
/// Requires a valid access token; returns the user it was issued for.
pub async fn me(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(MeResponse {
        user_id: auth.user_id,
    })
}
