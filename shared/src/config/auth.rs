//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

/// JWT and password-hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT secret key for signing tokens
    pub jwt_secret: String,

    /// Token expiry time in seconds
    pub token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,

    /// bcrypt cost factor for password hashing
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from("change-me-in-production"),
            token_expiry: 7 * 24 * 3600, // 7 days, matching the client session length
            issuer: String::from("staymate"),
            audience: String::from("staymate-api"),
            bcrypt_cost: 10,
        }
    }
}

impl AuthConfig {
    /// Create a new configuration with a secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            jwt_secret: std::env::var("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            token_expiry: std::env::var("JWT_TOKEN_EXPIRY_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.token_expiry),
            issuer: defaults.issuer,
            audience: defaults.audience,
            bcrypt_cost: std::env::var("BCRYPT_COST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.bcrypt_cost),
        }
    }

    /// Check if still using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.jwt_secret == "change-me-in-production"
    }
}
