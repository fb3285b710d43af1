//! Application factory
//!
//! Builds the Actix-web application from prepared state.

use std::sync::Arc;

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use cs_core::repositories::UserRepository;
use cs_core::services::auth::{Authenticator, PasswordHasher};
use cs_core::services::token::TokenIssuer;
use cs_shared::errors::error_codes;

use crate::dto::ErrorResponse;
use crate::middleware::auth::JwtAuth;
use crate::routes::auth::{
    credentials_json_config, me::me, refresh::refresh, refresh_json_config, sign_in::sign_in,
    sign_up::sign_up, AppState,
};

/// Create and configure the application with all dependencies
///
/// `issuer` verifies bearer tokens on protected routes and should be the same
/// issuer the auth service signs with.
pub fn create_app<U, H, A>(
    app_state: web::Data<AppState<U, H, A>>,
    issuer: Arc<TokenIssuer>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    A: Authenticator + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::resource("/signUp")
                        .app_data(credentials_json_config())
                        .route(web::post().to(sign_up::<U, H, A>)),
                )
                .service(
                    web::resource("/signIn")
                        .app_data(credentials_json_config())
                        .route(web::post().to(sign_in::<U, H, A>)),
                )
                .service(
                    web::resource("/refresh")
                        .app_data(refresh_json_config())
                        .route(web::post().to(refresh::<U, H, A>)),
                )
                .service(
                    web::resource("/me")
                        .wrap(JwtAuth::new(issuer))
                        .route(web::get().to(me)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "cloud-storage-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
