//! Unit tests for the token issuer

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, TokenKind};
use crate::errors::TokenError;
use crate::services::auth::Authenticator;
use crate::services::token::{TokenIssuer, TokenIssuerConfig};

const ACCESS_SECRET: &str = "accessSecret";
const REFRESH_SECRET: &str = "refreshSecret";

fn create_test_issuer(access_secs: u64, refresh_secs: u64) -> TokenIssuer {
    TokenIssuer::new(
        ACCESS_SECRET,
        Duration::from_secs(access_secs),
        REFRESH_SECRET,
        Duration::from_secs(refresh_secs),
    )
}

/// Signs arbitrary claims the way the issuer would, for crafting edge cases
fn sign_claims<T: serde::Serialize>(claims: &T, secret: &str, algorithm: Algorithm) -> String {
    encode(
        &Header::new(algorithm),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

#[test]
fn test_issue_pair() {
    let issuer = create_test_issuer(5, 10);

    let pair = issuer.issue_pair(Uuid::new_v4()).unwrap();

    assert!(!pair.access_token.is_empty());
    assert!(!pair.refresh_token.is_empty());
    assert_ne!(pair.access_token, pair.refresh_token);
}

#[test]
fn test_verify_access_token() {
    let issuer = create_test_issuer(5, 10);
    let user_id = Uuid::new_v4();

    let pair = issuer.issue_pair(user_id).unwrap();
    let payload = issuer.verify_access(&pair.access_token).unwrap();

    assert_eq!(payload.user_id, user_id);
}

#[test]
fn test_verify_refresh_token() {
    let issuer = create_test_issuer(5, 10);
    let user_id = Uuid::new_v4();

    let pair = issuer.issue_pair(user_id).unwrap();
    let payload = issuer.verify_refresh(&pair.refresh_token).unwrap();

    assert_eq!(payload.user_id, user_id);
}

#[test]
fn test_verify_access_is_repeatable() {
    let issuer = create_test_issuer(5, 10);
    let pair = issuer.issue_pair(Uuid::new_v4()).unwrap();

    let first = issuer.verify_access(&pair.access_token).unwrap();
    let second = issuer.verify_access(&pair.access_token).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_access_token_expires() {
    let issuer = create_test_issuer(1, 3);
    let pair = issuer.issue_pair(Uuid::new_v4()).unwrap();

    thread::sleep(Duration::from_secs(2));

    assert_eq!(
        issuer.verify_access(&pair.access_token).unwrap_err(),
        TokenError::Expired
    );
    // Refresh lifetime is longer and still valid.
    assert!(issuer.verify_refresh(&pair.refresh_token).is_ok());
}

#[test]
fn test_refresh_token_expires() {
    let issuer = create_test_issuer(1, 1);
    let pair = issuer.issue_pair(Uuid::new_v4()).unwrap();

    thread::sleep(Duration::from_secs(2));

    assert_eq!(
        issuer.verify_refresh(&pair.refresh_token).unwrap_err(),
        TokenError::Expired
    );
}

#[test]
fn test_expired_claims_without_waiting() {
    let issuer = create_test_issuer(5, 10);
    let now = Utc::now().timestamp();
    let claims = Claims {
        iss: Uuid::new_v4().to_string(),
        iat: now - 120,
        exp: now - 60,
        aud: TokenKind::Access.audience().to_string(),
    };
    let token = sign_claims(&claims, ACCESS_SECRET, Algorithm::HS512);

    assert_eq!(issuer.verify_access(&token).unwrap_err(), TokenError::Expired);
}

#[test]
fn test_wrong_secret_is_invalid() {
    let issuer_a = create_test_issuer(5, 10);
    let issuer_b = TokenIssuer::new(
        "otherAccessSecret",
        Duration::from_secs(5),
        "otherRefreshSecret",
        Duration::from_secs(10),
    );
    let pair = issuer_a.issue_pair(Uuid::new_v4()).unwrap();

    assert_eq!(
        issuer_b.verify_access(&pair.access_token).unwrap_err(),
        TokenError::Invalid
    );
    assert_eq!(
        issuer_b.verify_refresh(&pair.refresh_token).unwrap_err(),
        TokenError::Invalid
    );
}

#[test]
fn test_expired_token_with_wrong_secret_is_invalid() {
    let issuer = create_test_issuer(5, 10);
    let now = Utc::now().timestamp();
    let claims = Claims {
        iss: Uuid::new_v4().to_string(),
        iat: now - 120,
        exp: now - 60,
        aud: TokenKind::Access.audience().to_string(),
    };
    let token = sign_claims(&claims, "someone-else", Algorithm::HS512);

    assert_eq!(issuer.verify_access(&token).unwrap_err(), TokenError::Invalid);
}

#[test]
fn test_swapped_kinds_are_invalid() {
    let issuer = create_test_issuer(5, 10);
    let pair = issuer.issue_pair(Uuid::new_v4()).unwrap();

    assert_eq!(
        issuer.verify_access(&pair.refresh_token).unwrap_err(),
        TokenError::Invalid
    );
    assert_eq!(
        issuer.verify_refresh(&pair.access_token).unwrap_err(),
        TokenError::Invalid
    );
}

#[test]
fn test_swapped_kinds_are_invalid_with_shared_secret() {
    let issuer = TokenIssuer::new(
        "sharedSecret",
        Duration::from_secs(5),
        "sharedSecret",
        Duration::from_secs(10),
    );
    let pair = issuer.issue_pair(Uuid::new_v4()).unwrap();

    assert_eq!(
        issuer.verify_access(&pair.refresh_token).unwrap_err(),
        TokenError::Invalid
    );
    assert_eq!(
        issuer.verify_refresh(&pair.access_token).unwrap_err(),
        TokenError::Invalid
    );
}

#[test]
fn test_malformed_tokens_are_invalid() {
    let issuer = create_test_issuer(5, 10);

    for token in ["not-a-token", "", "a.b.c", "....", "eyJhbGciOiJIUzUxMiJ9.e30."] {
        assert_eq!(
            issuer.verify_access(token).unwrap_err(),
            TokenError::Invalid,
            "token {:?} should be invalid",
            token
        );
        assert_eq!(issuer.verify_refresh(token).unwrap_err(), TokenError::Invalid);
    }
}

#[test]
fn test_tampered_payload_is_invalid() {
    let issuer = create_test_issuer(5, 10);
    let pair = issuer.issue_pair(Uuid::new_v4()).unwrap();
    let other = issuer.issue_pair(Uuid::new_v4()).unwrap();

    // Splice the payload of one token onto the signature of another.
    let mut parts: Vec<&str> = pair.access_token.split('.').collect();
    let other_parts: Vec<&str> = other.access_token.split('.').collect();
    parts[1] = other_parts[1];
    let spliced = parts.join(".");

    assert_eq!(issuer.verify_access(&spliced).unwrap_err(), TokenError::Invalid);
}

#[test]
fn test_other_algorithm_is_invalid() {
    let issuer = create_test_issuer(5, 10);
    let claims = Claims::new(
        Uuid::new_v4(),
        TokenKind::Access,
        Utc::now().timestamp(),
        60,
    );
    let token = sign_claims(&claims, ACCESS_SECRET, Algorithm::HS256);

    assert_eq!(issuer.verify_access(&token).unwrap_err(), TokenError::Invalid);
}

#[test]
fn test_unparseable_issuer_is_invalid() {
    let issuer = create_test_issuer(5, 10);
    let mut claims = Claims::new(
        Uuid::new_v4(),
        TokenKind::Access,
        Utc::now().timestamp(),
        60,
    );
    claims.iss = "definitely-not-a-uuid".to_string();
    let token = sign_claims(&claims, ACCESS_SECRET, Algorithm::HS512);

    assert_eq!(issuer.verify_access(&token).unwrap_err(), TokenError::Invalid);
}

#[test]
fn test_missing_claims_are_invalid() {
    let issuer = create_test_issuer(5, 10);
    let now = Utc::now().timestamp();
    let no_expiry = serde_json::json!({
        "iss": Uuid::new_v4().to_string(),
        "iat": now,
        "aud": "access",
    });
    let no_audience = serde_json::json!({
        "iss": Uuid::new_v4().to_string(),
        "iat": now,
        "exp": now + 60,
    });

    for claims in [no_expiry, no_audience] {
        let token = sign_claims(&claims, ACCESS_SECRET, Algorithm::HS512);
        assert_eq!(issuer.verify_access(&token).unwrap_err(), TokenError::Invalid);
    }
}

#[test]
fn test_empty_secrets_are_accepted() {
    let issuer = TokenIssuer::new("", Duration::from_secs(5), "", Duration::from_secs(10));
    let user_id = Uuid::new_v4();

    let pair = issuer.issue_pair(user_id).unwrap();

    assert_eq!(issuer.verify_access(&pair.access_token).unwrap().user_id, user_id);
    assert_eq!(issuer.verify_refresh(&pair.refresh_token).unwrap().user_id, user_id);
}

#[test]
fn test_with_config_matches_new() {
    let config = TokenIssuerConfig::new(
        ACCESS_SECRET,
        Duration::from_secs(5),
        REFRESH_SECRET,
        Duration::from_secs(10),
    );
    let from_config = TokenIssuer::with_config(&config);
    let direct = create_test_issuer(5, 10);

    let pair = from_config.issue_pair(Uuid::new_v4()).unwrap();

    assert!(direct.verify_access(&pair.access_token).is_ok());
    assert!(direct.verify_refresh(&pair.refresh_token).is_ok());
    assert_eq!(from_config.access_expire(), Duration::from_secs(5));
    assert_eq!(from_config.refresh_expire(), Duration::from_secs(10));
}

#[test]
fn test_debug_output_hides_keys() {
    let config = TokenIssuerConfig::new(
        "very-secret-access",
        Duration::from_secs(5),
        "very-secret-refresh",
        Duration::from_secs(10),
    );
    let issuer = TokenIssuer::with_config(&config);

    assert!(!format!("{:?}", config).contains("very-secret"));
    assert!(!format!("{:?}", issuer).contains("very-secret"));
}

#[test]
fn test_concurrent_use() {
    let issuer = Arc::new(create_test_issuer(5, 10));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let issuer = Arc::clone(&issuer);
            thread::spawn(move || {
                let user_id = Uuid::new_v4();
                let pair = issuer.issue_pair(user_id).unwrap();
                assert_eq!(issuer.verify_access(&pair.access_token).unwrap().user_id, user_id);
                assert_eq!(issuer.verify_refresh(&pair.refresh_token).unwrap().user_id, user_id);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_authenticator_trait_dispatch() {
    let issuer = create_test_issuer(5, 10);
    let authenticator: &dyn Authenticator = &issuer;
    let user_id = Uuid::new_v4();

    let pair = authenticator.issue_pair(user_id).unwrap();

    assert_eq!(authenticator.verify_refresh(&pair.refresh_token).unwrap().user_id, user_id);
}
