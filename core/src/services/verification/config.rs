//! Verification service configuration

/// Configuration for OTP generation and verification
#[derive(Debug, Clone, Copy)]
pub struct VerificationConfig {
    /// Minutes a code stays valid
    pub code_expiration_minutes: i64,

    /// Failed attempts before the code is invalidated
    pub max_attempts: i64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: 10,
            max_attempts: 3,
        }
    }
}
