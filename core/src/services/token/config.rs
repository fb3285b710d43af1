//! Configuration for the token issuer

use std::time::Duration;

/// Secrets and lifetimes for both token kinds
///
/// Fixed for the lifetime of a [`TokenIssuer`](super::TokenIssuer). Empty
/// secrets are accepted.
#[derive(Clone)]
pub struct TokenIssuerConfig {
    /// HMAC secret for access tokens
    pub access_secret: Vec<u8>,
    /// Access token lifetime
    pub access_expire: Duration,
    /// HMAC secret for refresh tokens
    pub refresh_secret: Vec<u8>,
    /// Refresh token lifetime
    pub refresh_expire: Duration,
}

impl TokenIssuerConfig {
    pub fn new(
        access_secret: impl AsRef<[u8]>,
        access_expire: Duration,
        refresh_secret: impl AsRef<[u8]>,
        refresh_expire: Duration,
    ) -> Self {
        Self {
            access_secret: access_secret.as_ref().to_vec(),
            access_expire,
            refresh_secret: refresh_secret.as_ref().to_vec(),
            refresh_expire,
        }
    }
}

impl std::fmt::Debug for TokenIssuerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuerConfig")
            .field("access_expire", &self.access_expire)
            .field("refresh_expire", &self.refresh_expire)
            .finish_non_exhaustive()
    }
}
