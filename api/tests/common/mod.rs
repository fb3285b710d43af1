//! Shared fixtures for HTTP integration tests

use std::sync::Arc;
use std::time::Duration;

use actix_web::web;
use serde_json::{json, Value};

use cs_api::routes::auth::AppState;
use cs_core::repositories::MockUserRepository;
use cs_core::services::auth::AuthService;
use cs_core::services::token::TokenIssuer;
use cs_infra::security::BcryptPasswordHasher;

pub type TestState = AppState<MockUserRepository, BcryptPasswordHasher, TokenIssuer>;

pub const LOGIN: &str = "test_login";
pub const PASSWORD: &str = "password123";

/// App state with an in-memory repository and a cheap bcrypt cost
pub fn create_state(access: Duration, refresh: Duration) -> (web::Data<TestState>, Arc<TokenIssuer>) {
    let issuer = Arc::new(TokenIssuer::new("accessSecret", access, "refreshSecret", refresh));
    let auth_service = Arc::new(AuthService::new(
        Arc::new(MockUserRepository::new()),
        Arc::new(BcryptPasswordHasher::with_cost(4)),
        Arc::clone(&issuer),
    ));
    (web::Data::new(AppState::new(auth_service)), issuer)
}

pub fn default_state() -> (web::Data<TestState>, Arc<TokenIssuer>) {
    create_state(Duration::from_secs(60), Duration::from_secs(120))
}

pub fn credentials(login: &str, password: &str) -> Value {
    json!({ "login": login, "password": password })
}
