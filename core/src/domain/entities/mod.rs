//! Domain entities representing core business objects.

pub mod token;
pub mod user;

// Re-export commonly used types
pub use token::{AccessPayload, Claims, RefreshPayload, SignedToken, TokenKind, TokenPair};
pub use user::{Credentials, User};
