//! Redis cache configuration

use serde::{Deserialize, Serialize};

/// Redis connection configuration for OTP storage
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub redis_url: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            redis_url: String::from("redis://127.0.0.1:6379"),
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            redis_url: std::env::var("REDIS_URL")
                .unwrap_or_else(|_| Self::default().redis_url),
        }
    }
}
