//! Repository interfaces for persistence.

pub mod error;
pub mod user;

pub use error::RepositoryError;
pub use user::{MockUserRepository, UserRepository};
