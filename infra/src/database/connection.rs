//! Database connection pool management
//!
//! Connection pooling with SQLx over PostgreSQL, plus health checks and the
//! embedded migrations in `infra/migrations`.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::time::Duration;

use cs_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Database connection pool wrapper
#[derive(Clone)]
pub struct DatabasePool {
    /// SQLx PostgreSQL connection pool
    pool: PgPool,
}

impl DatabasePool {
    /// Create a new database connection pool
    ///
    /// # Arguments
    /// * `config` - Database configuration settings
    ///
    /// # Example
    /// ```no_run
    /// use cs_infra::database::DatabasePool;
    /// use cs_shared::config::DatabaseConfig;
    ///
    /// async fn create_pool() -> Result<DatabasePool, Box<dyn std::error::Error>> {
    ///     let config = DatabaseConfig::new("localhost", "storage", "cloud", "secret");
    ///     let pool = DatabasePool::new(&config).await?;
    ///     Ok(pool)
    /// }
    /// ```
    pub async fn new(config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        tracing::info!(
            url = %config.display_url(),
            max_connections = config.max_connections,
            "Creating database connection pool"
        );

        let connect_options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.db_name);

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .test_before_acquire(true)
            .connect_with(connect_options)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to create database pool");
                InfrastructureError::Database(e)
            })?;

        tracing::info!("Database connection pool created successfully");

        Ok(Self { pool })
    }

    /// Get a reference to the underlying SQLx pool
    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check if the database connection is healthy
    ///
    /// # Returns
    /// * `Ok(true)` - `SELECT 1` round-tripped
    /// * `Ok(false)` - Query ran but returned something unexpected
    /// * `Err(InfrastructureError)` - Query failed
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        tracing::debug!("Performing database health check");

        let value: i32 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Database health check failed");
                InfrastructureError::Database(e)
            })?;

        if value == 1 {
            Ok(true)
        } else {
            tracing::warn!(value, "Database health check returned unexpected value");
            Ok(false)
        }
    }

    /// Get connection pool statistics
    pub fn get_statistics(&self) -> PoolStatistics {
        PoolStatistics {
            connections: self.pool.size(),
            idle_connections: self.pool.num_idle(),
            max_connections: self.pool.options().get_max_connections(),
        }
    }

    /// Close all connections in the pool
    pub async fn close(&self) {
        tracing::info!("Closing database connection pool");
        self.pool.close().await;
    }

    /// Apply the embedded schema migrations
    pub async fn run_migrations(&self) -> Result<(), InfrastructureError> {
        tracing::info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Database migrations completed");
        Ok(())
    }
}

/// Snapshot of pool usage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatistics {
    /// Open connections, idle or in use
    pub connections: u32,
    pub idle_connections: usize,
    pub max_connections: u32,
}

impl std::fmt::Display for PoolStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Connections: {}/{} ({} idle)",
            self.connections, self.max_connections, self.idle_connections
        )
    }
}
