//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborator traits defined in `cs_core`:
//!
//! - **Database**: PostgreSQL connection pool, migrations and the user repository (SQLx)
//! - **Security**: bcrypt password hashing

// Re-export core types for convenience
pub use cs_core::errors::*;

/// Database module - PostgreSQL implementations using SQLx
pub mod database;

/// Security module - password hashing
pub mod security;

pub use database::{DatabasePool, PgUserRepository, PoolStatistics};
pub use security::BcryptPasswordHasher;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
