pub mod auth;
pub mod error;

pub use auth::{CredentialsRequest, MeResponse, RefreshTokenRequest, TokenPairResponse};
pub use error::{ErrorResponse, ErrorResponseExt};
