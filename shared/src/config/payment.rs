//! Payment gateway configuration

use serde::{Deserialize, Serialize};

/// Razorpay-style gateway credentials
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentGatewayConfig {
    /// API key id, used as the basic-auth username
    pub key_id: String,

    /// API key secret; also keys the HMAC signature over order|payment ids
    pub key_secret: String,

    /// Gateway REST endpoint base URL
    pub base_url: String,

    /// ISO currency code for created orders
    pub currency: String,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for PaymentGatewayConfig {
    fn default() -> Self {
        Self {
            key_id: String::new(),
            key_secret: String::new(),
            base_url: String::from("https://api.razorpay.com/v1"),
            currency: String::from("INR"),
            request_timeout_secs: 30,
        }
    }
}

impl PaymentGatewayConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            key_id: std::env::var("RAZORPAY_KEY_ID").unwrap_or(defaults.key_id),
            key_secret: std::env::var("RAZORPAY_KEY_SECRET").unwrap_or(defaults.key_secret),
            base_url: std::env::var("RAZORPAY_BASE_URL").unwrap_or(defaults.base_url),
            currency: defaults.currency,
            request_timeout_secs: std::env::var("RAZORPAY_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
        }
    }
}
