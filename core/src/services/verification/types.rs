//! Result types for the verification service

use chrono::{DateTime, Utc};

/// Result of sending a verification code
#[derive(Debug, Clone)]
pub struct SendOtpResult {
    /// Email the code was sent to
    pub email: String,
    /// When the code stops being accepted
    pub expires_at: DateTime<Utc>,
}
