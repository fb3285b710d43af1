//! Token signing configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// JWT configuration
///
/// Access and refresh tokens are signed with independent secrets. Empty
/// secrets are accepted.
#[derive(Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret for signing access tokens
    pub access_secret: String,

    /// Access token expiry time in seconds
    #[serde(default = "default_access_expire")]
    pub access_expire: u64,

    /// Secret for signing refresh tokens
    pub refresh_secret: String,

    /// Refresh token expiry time in seconds
    #[serde(default = "default_refresh_expire")]
    pub refresh_expire: u64,
}

impl JwtConfig {
    /// Create a new JWT configuration with default expiries
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            access_expire: default_access_expire(),
            refresh_secret: refresh_secret.into(),
            refresh_expire: default_refresh_expire(),
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: u64) -> Self {
        self.access_expire = minutes * 60;
        self
    }

    /// Set refresh token expiry in hours
    pub fn with_refresh_expiry_hours(mut self, hours: u64) -> Self {
        self.refresh_expire = hours * 3600;
        self
    }

    pub fn access_expire_duration(&self) -> Duration {
        Duration::from_secs(self.access_expire)
    }

    pub fn refresh_expire_duration(&self) -> Duration {
        Duration::from_secs(self.refresh_expire)
    }

    /// Check whether both kinds share a secret (security warning)
    pub fn shares_secret(&self) -> bool {
        self.access_secret == self.refresh_secret
    }
}

// Secrets stay out of logs.
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("access_secret", &"<redacted>")
            .field("access_expire", &self.access_expire)
            .field("refresh_secret", &"<redacted>")
            .field("refresh_expire", &self.refresh_expire)
            .finish()
    }
}

fn default_access_expire() -> u64 {
    20 * 60 // 20 minutes
}

fn default_refresh_expire() -> u64 {
    144 * 3600 // 6 days
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_defaults() {
        let config = JwtConfig::new("access", "refresh");
        assert_eq!(config.access_expire, 1200);
        assert_eq!(config.refresh_expire, 518_400);
        assert_eq!(config.access_expire_duration(), Duration::from_secs(1200));
        assert!(!config.shares_secret());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("same", "same")
            .with_access_expiry_minutes(5)
            .with_refresh_expiry_hours(24);

        assert_eq!(config.access_expire, 300);
        assert_eq!(config.refresh_expire, 86_400);
        assert!(config.shares_secret());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = JwtConfig::new("top-secret-access", "top-secret-refresh");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("top-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
