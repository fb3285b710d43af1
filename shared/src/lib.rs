//! Shared configuration and wire types for the cloud storage backend
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types and loading
//! - Error response structures and error codes

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigLoadError, DatabaseConfig, Environment, JwtConfig, LogFormat,
    LoggingConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
