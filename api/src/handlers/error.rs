//! Mapping of domain errors onto HTTP responses.
//!
//! The boundary is deliberately coarse: request-shape problems are 400
//! with field-level messages, authorization problems are 401 (with the
//! session-timeout message distinguished for the client), and every
//! domain failure is a 500 whose body carries the error's message as
//! the sole structured field.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use std::fmt;

use sm_core::errors::DomainError;
use sm_shared::types::FieldErrors;

/// Wrapper making [`DomainError`] usable as an actix error.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            DomainError::Validation { .. } | DomainError::ValidationErr(_) => {
                StatusCode::BAD_REQUEST
            }
            DomainError::Token(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match &self.0 {
            // Never leak storage details to the client.
            DomainError::Database { .. } | DomainError::Internal { .. } => {
                "Internal server error".to_string()
            }
            e => e.to_string(),
        };
        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }
}

/// Map a service failure to its HTTP response.
pub fn domain_error_response(err: DomainError) -> HttpResponse {
    ApiError(err).error_response()
}

/// Map request-body validation failures to the 400 shape the client
/// renders per field.
pub fn validation_error_response(errors: &validator::ValidationErrors) -> HttpResponse {
    let mut field_errors = FieldErrors::new();
    for (field, errs) in errors.field_errors() {
        for err in errs.iter() {
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value for {}", field));
            field_errors.add(field.to_string(), message);
        }
    }
    HttpResponse::BadRequest().json(field_errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sm_core::errors::{PaymentError, TokenError, ValidationError};

    #[test]
    fn test_validation_maps_to_400() {
        let err = ApiError(DomainError::ValidationErr(ValidationError::RequiredField {
            field: "email".to_string(),
        }));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_token_maps_to_401() {
        let err = ApiError(DomainError::Token(TokenError::TokenExpired));
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_domain_failure_maps_to_500() {
        let err = ApiError(DomainError::Payment(PaymentError::SignatureMismatch));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_detail_is_not_leaked() {
        let err = ApiError(DomainError::Database {
            message: "connection refused to mysql://...".to_string(),
        });
        let body = err.error_response();
        assert_eq!(body.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
