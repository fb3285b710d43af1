//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Token signing secrets and expiries
//! - `database` - PostgreSQL connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration
//!
//! Configuration is read from the file named by `CONFIG_PATH` (format picked
//! from the extension), overlaid with `APP__SECTION__KEY` environment
//! variables. Secrets come from `ACCESS_SECRET`, `REFRESH_SECRET` and
//! `DATABASE_PASSWORD` when set.

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use std::env;
use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export commonly used types
pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;

/// Environment variable naming the configuration file
pub const CONFIG_PATH_VAR: &str = "CONFIG_PATH";

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("env CONFIG_PATH not provided")]
    MissingPath,

    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config read error: {0}")]
    Read(#[from] config::ConfigError),
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Deployment environment
    #[serde(default)]
    pub env: Environment,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Token signing configuration
    pub jwt: JwtConfig,

    /// Logging configuration; derived from `env` when absent
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
}

impl AppConfig {
    /// Load configuration from the file named by `CONFIG_PATH`
    pub fn load() -> Result<Self, ConfigLoadError> {
        let path = env::var(CONFIG_PATH_VAR).map_err(|_| ConfigLoadError::MissingPath)?;
        Self::load_from_path(path)
    }

    /// Load configuration from an explicit file path
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigLoadError::FileNotFound(path.to_path_buf()));
        }
        Self::build(Config::builder().add_source(File::from(path)))
    }

    /// Load configuration from in-memory file contents
    pub fn from_source_str(contents: &str, format: FileFormat) -> Result<Self, ConfigLoadError> {
        Self::build(Config::builder().add_source(File::from_str(contents, format)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigLoadError> {
        let settings = builder
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("jwt.access_secret", env::var("ACCESS_SECRET").ok())?
            .set_override_option("jwt.refresh_secret", env::var("REFRESH_SECRET").ok())?
            .set_override_option("database.password", env::var("DATABASE_PASSWORD").ok())?
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Effective logging configuration
    pub fn logging(&self) -> LoggingConfig {
        self.logging
            .clone()
            .unwrap_or_else(|| LoggingConfig::for_environment(self.env))
    }
}
