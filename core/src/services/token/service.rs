//! Token issuer implementation

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{
    AccessPayload, Claims, RefreshPayload, SignedToken, TokenKind, TokenPair,
};
use crate::errors::TokenError;
use crate::services::auth::Authenticator;

use super::config::TokenIssuerConfig;

/// Signing algorithm for both token kinds
const ALGORITHM: Algorithm = Algorithm::HS512;

/// Issues and verifies access/refresh token pairs
///
/// Holds only immutable keys and lifetimes, so a single instance can be shared
/// across threads without locking. Never logs; every failure is returned as a
/// [`TokenError`].
#[derive(Clone)]
pub struct TokenIssuer {
    access: KindKeys,
    refresh: KindKeys,
}

/// Keys, validation rules and lifetime for one token kind
#[derive(Clone)]
struct KindKeys {
    kind: TokenKind,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expire: Duration,
}

impl KindKeys {
    fn new(kind: TokenKind, secret: &[u8], expire: Duration) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_audience(&[kind.audience()]);
        validation.set_required_spec_claims(&["exp", "iss", "aud"]);

        Self {
            kind,
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            expire,
        }
    }

    fn sign(&self, user_id: Uuid, issued_at: i64) -> Result<SignedToken, TokenError> {
        let claims = Claims::new(user_id, self.kind, issued_at, self.expire.as_secs());
        encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)
            .map_err(|_| TokenError::SigningFailure)
    }

    fn user_id(&self, token: &str) -> Result<Uuid, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })?;

        token_data
            .claims
            .user_id()
            .map_err(|_| TokenError::Invalid)
    }
}

impl TokenIssuer {
    /// Creates a new token issuer
    ///
    /// # Arguments
    ///
    /// * `access_secret` - HMAC secret for access tokens
    /// * `access_expire` - Access token lifetime (whole seconds)
    /// * `refresh_secret` - HMAC secret for refresh tokens
    /// * `refresh_expire` - Refresh token lifetime (whole seconds)
    pub fn new(
        access_secret: impl AsRef<[u8]>,
        access_expire: Duration,
        refresh_secret: impl AsRef<[u8]>,
        refresh_expire: Duration,
    ) -> Self {
        Self {
            access: KindKeys::new(TokenKind::Access, access_secret.as_ref(), access_expire),
            refresh: KindKeys::new(TokenKind::Refresh, refresh_secret.as_ref(), refresh_expire),
        }
    }

    /// Creates a token issuer from a configuration value
    pub fn with_config(config: &TokenIssuerConfig) -> Self {
        Self::new(
            &config.access_secret,
            config.access_expire,
            &config.refresh_secret,
            config.refresh_expire,
        )
    }

    /// Issues a fresh access + refresh token pair for a user
    ///
    /// Both claim sets share one clock reading and the same issuer. If either
    /// signature fails no token is returned.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - The signed pair
    /// * `Err(TokenError::SigningFailure)` - The signing primitive failed
    pub fn issue_pair(&self, user_id: Uuid) -> Result<TokenPair, TokenError> {
        let issued_at = Utc::now().timestamp();
        let access_token = self.access.sign(user_id, issued_at)?;
        let refresh_token = self.refresh.sign(user_id, issued_at)?;

        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Verifies an access token and returns the user it was issued for
    ///
    /// # Returns
    ///
    /// * `Ok(AccessPayload)` - Token is valid
    /// * `Err(TokenError::Expired)` - Signature valid but token expired
    /// * `Err(TokenError::Invalid)` - Any other validation failure
    pub fn verify_access(&self, token: &str) -> Result<AccessPayload, TokenError> {
        let user_id = self.access.user_id(token)?;
        Ok(AccessPayload { user_id })
    }

    /// Verifies a refresh token and returns the user it was issued for
    ///
    /// Same classification as [`verify_access`](Self::verify_access).
    pub fn verify_refresh(&self, token: &str) -> Result<RefreshPayload, TokenError> {
        let user_id = self.refresh.user_id(token)?;
        Ok(RefreshPayload { user_id })
    }

    pub fn access_expire(&self) -> Duration {
        self.access.expire
    }

    pub fn refresh_expire(&self) -> Duration {
        self.refresh.expire
    }
}

impl Authenticator for TokenIssuer {
    fn issue_pair(&self, user_id: Uuid) -> Result<TokenPair, TokenError> {
        TokenIssuer::issue_pair(self, user_id)
    }

    fn verify_refresh(&self, token: &str) -> Result<RefreshPayload, TokenError> {
        TokenIssuer::verify_refresh(self, token)
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("algorithm", &ALGORITHM)
            .field("access_expire", &self.access.expire)
            .field("refresh_expire", &self.refresh.expire)
            .finish_non_exhaustive()
    }
}
