//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserRole;

/// Token expiration time (7 days), matching the client session length
pub const TOKEN_EXPIRY_DAYS: i64 = 7;

/// JWT issuer
pub const JWT_ISSUER: &str = "staymate";

/// JWT audience
pub const JWT_AUDIENCE: &str = "staymate-api";

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,

    /// Role at issue time ("guest" or "resident")
    pub role: String,
}

impl Claims {
    /// Creates claims for a session token with the default expiry.
    pub fn new(user_id: Uuid, role: UserRole, expiry_secs: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(expiry_secs);
        let role = match role {
            UserRole::Guest => "guest",
            UserRole::Resident => "resident",
        };

        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
            role: role.to_string(),
        }
    }

    /// Checks if the claims have expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the user ID from the claims.
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, UserRole::Resident, TOKEN_EXPIRY_DAYS * 86400);

        assert_eq!(claims.user_id().unwrap(), user_id);
        assert_eq!(claims.role, "resident");
        assert_eq!(claims.iss, JWT_ISSUER);
        assert_eq!(claims.aud, JWT_AUDIENCE);
        assert!(!claims.is_expired());
        assert_eq!(claims.exp - claims.iat, TOKEN_EXPIRY_DAYS * 86400);
    }

    #[test]
    fn test_expired_claims() {
        let claims = Claims::new(Uuid::new_v4(), UserRole::Guest, -60);
        assert!(claims.is_expired());
    }
}
