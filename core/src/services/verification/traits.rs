//! Traits for email delivery and OTP storage integration

use async_trait::async_trait;

use crate::domain::entities::verification_code::OtpPurpose;

/// Trait for email delivery integration
#[async_trait]
pub trait MailService: Send + Sync {
    /// Send a verification code to an email address
    async fn send_otp(&self, to: &str, code: &str, purpose: OtpPurpose) -> Result<(), String>;
}

/// Trait for OTP storage integration.
///
/// Codes are keyed by (email, purpose) and expire with their TTL, so a
/// stale entry simply stops existing.
#[async_trait]
pub trait OtpStore: Send + Sync {
    /// Store a verification code with an expiration
    async fn store_code(
        &self,
        email: &str,
        purpose: OtpPurpose,
        code: &str,
        ttl_secs: u64,
    ) -> Result<(), String>;

    /// Fetch the live code for an email, if any
    async fn get_code(&self, email: &str, purpose: OtpPurpose) -> Result<Option<String>, String>;

    /// Count a failed attempt; returns the total so far
    async fn increment_attempts(&self, email: &str, purpose: OtpPurpose) -> Result<i64, String>;

    /// Remove the code and its attempt counter
    async fn remove_code(&self, email: &str, purpose: OtpPurpose) -> Result<(), String>;
}
