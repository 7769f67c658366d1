//! JWT authentication middleware for protecting API endpoints.
//!
//! Extracts the bearer token from the Authorization header, verifies it
//! against the token service in application state, and injects an
//! [`AuthContext`] into the request. Expired tokens surface the
//! distinguished session-timeout message the client uses to force a
//! re-login.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, HttpMessage,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};
use uuid::Uuid;

use sm_core::errors::{DomainError, TokenError};

use crate::app::AppState;
use crate::handlers::error::ApiError;

/// User authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID extracted from JWT claims
    pub user_id: Uuid,
    /// Role at token-issue time ("guest" or "resident")
    pub role: String,
}

/// JWT authentication middleware factory
pub struct RequireAuth;

impl<S, B> Transform<S, ServiceRequest> for RequireAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// JWT authentication middleware service
pub struct RequireAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let Some(token) = extract_bearer_token(&req) else {
                return Err(ApiError(DomainError::Token(TokenError::MissingToken)).into());
            };

            let Some(state) = req.app_data::<web::Data<AppState>>() else {
                return Err(ApiError(DomainError::Internal {
                    message: "Token service not configured".to_string(),
                })
                .into());
            };

            let claims = match state.token_service.verify(&token) {
                Ok(claims) => claims,
                Err(e) => return Err(ApiError(e).into()),
            };

            let user_id = claims
                .user_id()
                .map_err(|_| ApiError(DomainError::Token(TokenError::InvalidToken)))?;

            req.extensions_mut().insert(AuthContext {
                user_id,
                role: claims.role,
            });

            service.call(req).await
        })
    }
}

/// Extracts the bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
