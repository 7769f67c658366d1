//! Verification code entity for email OTP flows.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of verification attempts allowed
pub const MAX_ATTEMPTS: i32 = 3;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for verification codes (10 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 10;

/// What a code was issued for. Codes are scoped so a signup OTP can
/// never complete a password reset and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtpPurpose {
    Signup,
    PasswordReset,
}

impl OtpPurpose {
    /// Stable key fragment for store lookups.
    pub fn as_str(&self) -> &'static str {
        match self {
            OtpPurpose::Signup => "signup",
            OtpPurpose::PasswordReset => "password_reset",
        }
    }
}

/// Verification code entity for email OTP verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    /// Unique identifier for the verification code
    pub id: Uuid,

    /// Email address this code was sent to
    pub email: String,

    /// What the code unlocks
    pub purpose: OtpPurpose,

    /// The 6-digit verification code
    pub code: String,

    /// Number of verification attempts made
    pub attempts: i32,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl VerificationCode {
    /// Creates a new verification code with a random 6-digit code and
    /// the default expiration.
    pub fn new(email: String, purpose: OtpPurpose) -> Self {
        Self::new_with_expiration(email, purpose, DEFAULT_EXPIRATION_MINUTES)
    }

    /// Creates a new verification code with a custom expiration time.
    pub fn new_with_expiration(email: String, purpose: OtpPurpose, expiration_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            purpose,
            code: Self::generate_code(),
            attempts: 0,
            created_at: now,
            expires_at: now + Duration::minutes(expiration_minutes),
        }
    }

    /// Generates a random 6-digit code, zero-padded.
    fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        let code: u32 = rng.gen_range(0..1_000_000);
        format!("{:06}", code)
    }

    /// Checks if the verification code has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// A code is verifiable while it is unexpired and under the attempt cap.
    pub fn is_verifiable(&self) -> bool {
        !self.is_expired() && self.attempts < MAX_ATTEMPTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_shape() {
        let code = VerificationCode::new("user@example.com".to_string(), OtpPurpose::Signup);
        assert_eq!(code.code.len(), CODE_LENGTH);
        assert!(code.code.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(code.attempts, 0);
        assert!(!code.is_expired());
        assert!(code.is_verifiable());
    }

    #[test]
    fn test_expired_code_is_not_verifiable() {
        let code = VerificationCode::new_with_expiration(
            "user@example.com".to_string(),
            OtpPurpose::PasswordReset,
            -1,
        );
        assert!(code.is_expired());
        assert!(!code.is_verifiable());
    }

    #[test]
    fn test_attempt_cap() {
        let mut code = VerificationCode::new("user@example.com".to_string(), OtpPurpose::Signup);
        code.attempts = MAX_ATTEMPTS;
        assert!(!code.is_verifiable());
    }
}
