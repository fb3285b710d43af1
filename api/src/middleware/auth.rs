//! JWT authentication middleware for protecting API endpoints.
//!
//! Extracts the bearer token from the `Authorization` header, verifies it as
//! an access token with the shared [`TokenIssuer`] and injects an
//! [`AuthContext`] into the request.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::{header::AUTHORIZATION, StatusCode},
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use cs_core::services::token::TokenIssuer;
use cs_shared::errors::error_codes;
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

use crate::dto::{ErrorResponse, ErrorResponseExt};
use crate::handlers::token_error_response;

/// User authentication context injected into requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    /// User ID taken from the access token
    pub user_id: Uuid,
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    issuer: Arc<TokenIssuer>,
}

impl JwtAuth {
    /// Creates a new JWT authentication middleware backed by `issuer`
    pub fn new(issuer: Arc<TokenIssuer>) -> Self {
        Self { issuer }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            issuer: Arc::clone(&self.issuer),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    issuer: Arc<TokenIssuer>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let issuer = Arc::clone(&self.issuer);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    let response = ErrorResponse::new(
                        error_codes::UNAUTHORIZED,
                        "Missing or invalid Authorization header",
                    )
                    .to_response(StatusCode::UNAUTHORIZED);
                    return Ok(reject(req, response));
                }
            };

            let payload = match issuer.verify_access(&token) {
                Ok(payload) => payload,
                Err(e) => {
                    tracing::debug!(error = %e, "Access token rejected");
                    return Ok(reject(req, token_error_response(e)));
                }
            };

            req.extensions_mut().insert(AuthContext {
                user_id: payload.user_id,
            });

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Short-circuits the request with an error response
fn reject<B>(req: ServiceRequest, response: HttpResponse) -> ServiceResponse<EitherBody<B>> {
    req.into_response(response.map_into_right_body())
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .copied()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        use actix_web::test;

        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();

        assert_eq!(extract_bearer_token(&req), Some("test_token_123".to_string()));

        let req_no_bearer = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();

        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_empty = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer "))
            .to_srv_request();

        assert_eq!(extract_bearer_token(&req_empty), None);

        let req_no_header = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }
}
