//! Configuration module with business-specific sub-modules
//!
//! Configuration is organized into logical areas:
//! - `server` - HTTP server bind address and workers
//! - `database` - MySQL connection and pool settings
//! - `auth` - JWT signing and bcrypt cost
//! - `email` - SMTP delivery for OTP mail
//! - `payment` - Payment gateway credentials
//! - `rent` - Rent due-date and fine policy

pub mod auth;
pub mod cache;
pub mod database;
pub mod email;
pub mod payment;
pub mod rent;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::AuthConfig;
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use payment::PaymentGatewayConfig;
pub use rent::RentPolicyConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Redis cache configuration
    pub cache: CacheConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// SMTP configuration for OTP delivery
    pub email: EmailConfig,

    /// Payment gateway configuration
    pub payment: PaymentGatewayConfig,

    /// Rent policy configuration
    #[serde(default)]
    pub rent: RentPolicyConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            auth: AuthConfig::from_env(),
            email: EmailConfig::from_env(),
            payment: PaymentGatewayConfig::from_env(),
            rent: RentPolicyConfig::default(),
        }
    }
}
