//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, JWT_AUDIENCE, JWT_ISSUER};
use crate::domain::entities::user::UserRole;
use crate::errors::{DomainError, TokenError};

/// Service issuing and verifying HS256 session tokens.
///
/// Tokens carry the user id and role and live for the configured
/// expiry (7 days by default). There are no refresh tokens: an expired
/// token surfaces the distinguished session-timeout error and the
/// client logs the user back in.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiry_secs: i64,
}

impl TokenService {
    /// Creates a new token service from the JWT secret and expiry.
    pub fn new(jwt_secret: &str, expiry_secs: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.set_audience(&[JWT_AUDIENCE]);
        validation.validate_exp = true;

        Self {
            encoding_key: EncodingKey::from_secret(jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(jwt_secret.as_bytes()),
            validation,
            expiry_secs,
        }
    }

    /// Issues a session token for a user.
    pub fn issue(&self, user_id: Uuid, role: UserRole) -> Result<String, DomainError> {
        let claims = Claims::new(user_id, role, self.expiry_secs);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies a token and returns its claims.
    ///
    /// Expiry maps to [`TokenError::TokenExpired`] so the API layer can
    /// surface the session-timeout message the client matches on.
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                    DomainError::Token(TokenError::TokenExpired)
                } else {
                    DomainError::Token(TokenError::InvalidToken)
                }
            })?;
        Ok(token_data.claims)
    }
}
