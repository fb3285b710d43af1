use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;

use cs_api::app::create_app;
use cs_api::routes::auth::AppState;
use cs_api::telemetry::init_tracing;
use cs_core::services::auth::AuthService;
use cs_core::services::token::TokenIssuer;
use cs_infra::database::{DatabasePool, PgUserRepository};
use cs_infra::security::BcryptPasswordHasher;
use cs_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.logging()).context("failed to initialize tracing")?;

    tracing::info!(env = %config.env, "Starting cloud storage API server");

    if config.jwt.shares_secret() {
        tracing::warn!("Access and refresh tokens share a signing secret");
    }

    let pool = DatabasePool::new(&config.database)
        .await
        .context("failed to connect to database")?;
    pool.run_migrations()
        .await
        .context("failed to run database migrations")?;
    if !pool
        .health_check()
        .await
        .context("database health check failed")?
    {
        anyhow::bail!("database health check returned an unexpected value");
    }
    tracing::info!(stats = %pool.get_statistics(), "Database ready");

    let issuer = Arc::new(TokenIssuer::new(
        config.jwt.access_secret.as_bytes(),
        config.jwt.access_expire_duration(),
        config.jwt.refresh_secret.as_bytes(),
        config.jwt.refresh_expire_duration(),
    ));
    let auth_service = Arc::new(AuthService::new(
        Arc::new(PgUserRepository::new(pool.get_pool().clone())),
        Arc::new(BcryptPasswordHasher::new()),
        Arc::clone(&issuer),
    ));
    let app_state = web::Data::new(AppState::new(auth_service));

    tracing::info!(bind_addr = %config.server.bind_addr, "Server will bind");

    let mut server = HttpServer::new(move || create_app(app_state.clone(), Arc::clone(&issuer)))
        .client_request_timeout(config.server.timeout_duration())
        .keep_alive(config.server.idle_timeout_duration());
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&config.server.bind_addr)
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?
        .run()
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}
