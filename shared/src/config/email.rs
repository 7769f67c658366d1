//! SMTP configuration for OTP email delivery

use serde::{Deserialize, Serialize};

/// SMTP delivery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// SMTP relay host (e.g. "smtp.gmail.com")
    pub smtp_host: String,

    /// SMTP port (587 for STARTTLS, 465 for TLS)
    pub smtp_port: u16,

    /// SMTP authentication username
    pub username: String,

    /// SMTP authentication password
    pub password: String,

    /// Sender address placed in the From header
    pub from_address: String,

    /// Sender display name
    pub from_name: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: String::from("localhost"),
            smtp_port: 587,
            username: String::new(),
            password: String::new(),
            from_address: String::from("noreply@staymate.in"),
            from_name: String::from("StayMate"),
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            smtp_host: std::env::var("SMTP_HOST").unwrap_or(defaults.smtp_host),
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.smtp_port),
            username: std::env::var("SMTP_USERNAME").unwrap_or(defaults.username),
            password: std::env::var("SMTP_PASSWORD").unwrap_or(defaults.password),
            from_address: std::env::var("SMTP_FROM_ADDRESS").unwrap_or(defaults.from_address),
            from_name: std::env::var("SMTP_FROM_NAME").unwrap_or(defaults.from_name),
        }
    }
}
