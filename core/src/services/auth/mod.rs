//! Authentication service module
//!
//! Registration, login and refresh on top of three injected collaborators:
//! a [`UserRepository`](crate::repositories::UserRepository), a
//! [`PasswordHasher`] and an [`Authenticator`].

mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use service::AuthService;
pub use traits::{Authenticator, PasswordHasher};
