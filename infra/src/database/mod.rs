//! Database module - PostgreSQL implementations using SQLx
//!
//! This module provides:
//! - Connection pool management
//! - Embedded schema migrations
//! - Repository implementations

pub mod connection;
pub mod postgres;


// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use postgres::PgUserRepository;
