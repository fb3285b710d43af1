//! Token entities for JWT-based authentication.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An encoded and signed JWT in compact serialization
pub type SignedToken = String;

/// The two kinds of token the issuer produces
///
/// Both kinds share the same claim shape; the kind is carried in the `aud`
/// claim and checked on every decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    /// Audience claim value for this kind
    pub fn audience(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.audience())
    }
}

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer (the user ID, hyphenated)
    pub iss: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Audience (token kind)
    pub aud: String,
}

impl Claims {
    /// Creates claims for `user_id` issued at `issued_at` (unix seconds)
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    /// * `kind` - Which token kind the claims are for
    /// * `issued_at` - Issue time as unix seconds
    /// * `lifetime_secs` - Seconds until expiry
    pub fn new(user_id: Uuid, kind: TokenKind, issued_at: i64, lifetime_secs: u64) -> Self {
        let lifetime = i64::try_from(lifetime_secs).unwrap_or(i64::MAX);
        Self {
            iss: user_id.to_string(),
            iat: issued_at,
            exp: issued_at.saturating_add(lifetime),
            aud: kind.audience().to_string(),
        }
    }

    /// Gets the user ID from the issuer claim
    ///
    /// # Returns
    ///
    /// `Ok(Uuid)` if the issuer can be parsed as a UUID, `Err` otherwise
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.iss)
    }
}

/// Token pair returned after successful authentication
///
/// Always created in one piece from a single user ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived JWT access token
    pub access_token: SignedToken,

    /// Long-lived JWT refresh token
    pub refresh_token: SignedToken,
}

impl TokenPair {
    pub fn new(access_token: SignedToken, refresh_token: SignedToken) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}

/// Decoded contents of a valid access token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessPayload {
    pub user_id: Uuid,
}

/// Decoded contents of a valid refresh token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshPayload {
    pub user_id: Uuid,
}
