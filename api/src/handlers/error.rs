//! Mapping of domain errors to HTTP responses

use actix_web::{http::StatusCode, HttpResponse};
use cs_core::errors::{AuthError, DomainError, TokenError};
use cs_shared::errors::error_codes;

use crate::dto::{ErrorResponse, ErrorResponseExt};

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid login or password";
pub const USER_EXISTS_MESSAGE: &str = "User with login already exist";
pub const USER_NOT_FOUND_MESSAGE: &str = "User with this login not found";

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::IncorrectInput => invalid_credentials_response(),
            AuthError::UserAlreadyExists => {
                ErrorResponse::new(error_codes::USER_EXISTS, USER_EXISTS_MESSAGE)
                    .to_response(StatusCode::BAD_REQUEST)
            }
            AuthError::UserNotFound => {
                ErrorResponse::new(error_codes::NOT_FOUND, USER_NOT_FOUND_MESSAGE)
                    .to_response(StatusCode::NOT_FOUND)
            }
        },
        DomainError::Token(token_error) => token_error_response(token_error),
        DomainError::Internal { message } => {
            tracing::error!(%message, "Internal error");
            internal_error_response()
        }
    }
}

/// 401 for a rejected token, 500 for a signing failure
pub fn token_error_response(error: TokenError) -> HttpResponse {
    match error {
        TokenError::Expired => ErrorResponse::new(error_codes::TOKEN_EXPIRED, "Token expired")
            .to_response(StatusCode::UNAUTHORIZED),
        TokenError::Invalid => ErrorResponse::new(error_codes::TOKEN_INVALID, "Invalid token")
            .to_response(StatusCode::UNAUTHORIZED),
        TokenError::SigningFailure => {
            tracing::error!("Token signing failed");
            internal_error_response()
        }
    }
}

pub fn invalid_credentials_response() -> HttpResponse {
    ErrorResponse::new(error_codes::INCORRECT_INPUT, INVALID_CREDENTIALS_MESSAGE)
        .to_response(StatusCode::BAD_REQUEST)
}

pub fn invalid_request_response() -> HttpResponse {
    ErrorResponse::new(error_codes::INCORRECT_INPUT, "Invalid request body")
        .to_response(StatusCode::BAD_REQUEST)
}

fn internal_error_response() -> HttpResponse {
    ErrorResponse::new(error_codes::INTERNAL_ERROR, "Internal server error")
        .to_response(StatusCode::INTERNAL_SERVER_ERROR)
}
