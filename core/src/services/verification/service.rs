//! Main verification service implementation

use constant_time_eq::constant_time_eq;
use std::sync::Arc;

use crate::domain::entities::verification_code::{OtpPurpose, VerificationCode, CODE_LENGTH};
use crate::errors::{AuthError, DomainError, DomainResult};

use super::config::VerificationConfig;
use super::traits::{MailService, OtpStore};
use super::types::SendOtpResult;

/// Verification service for handling email OTP codes.
///
/// Codes live in the [`OtpStore`] keyed by (email, purpose) and are
/// time-boxed by the store's TTL — there is no global OTP state.
pub struct VerificationService<M: MailService, C: OtpStore> {
    /// Mailer for delivering codes
    mail_service: Arc<M>,
    /// Store holding live codes
    otp_store: Arc<C>,
    /// Service configuration
    config: VerificationConfig,
}

impl<M: MailService, C: OtpStore> VerificationService<M, C> {
    pub fn new(mail_service: Arc<M>, otp_store: Arc<C>, config: VerificationConfig) -> Self {
        Self {
            mail_service,
            otp_store,
            config,
        }
    }

    /// Generate a fresh code for an email, store it, and mail it.
    ///
    /// Any previous code for the same (email, purpose) is replaced, so
    /// only the newest code verifies.
    pub async fn send_code(&self, email: &str, purpose: OtpPurpose) -> DomainResult<SendOtpResult> {
        let code = VerificationCode::new_with_expiration(
            email.to_string(),
            purpose,
            self.config.code_expiration_minutes,
        );

        tracing::info!(
            email = email,
            purpose = purpose.as_str(),
            event = "otp_generated",
            "Generated new verification code"
        );

        let ttl_secs = (self.config.code_expiration_minutes * 60) as u64;
        self.otp_store
            .store_code(email, purpose, &code.code, ttl_secs)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = email,
                    error = %e,
                    event = "otp_storage_failed",
                    "Failed to store verification code"
                );
                DomainError::Internal {
                    message: format!("Failed to store verification code: {}", e),
                }
            })?;

        self.mail_service
            .send_otp(email, &code.code, purpose)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = email,
                    error = %e,
                    event = "otp_mail_failed",
                    "Failed to send verification email"
                );
                DomainError::Auth(AuthError::MailServiceFailure)
            })?;

        Ok(SendOtpResult {
            email: email.to_string(),
            expires_at: code.expires_at,
        })
    }

    /// Verify a submitted code against the stored one.
    ///
    /// A successful verification consumes the code. A failed one counts
    /// an attempt; hitting the cap invalidates the code entirely.
    pub async fn verify_code(
        &self,
        email: &str,
        purpose: OtpPurpose,
        submitted: &str,
    ) -> DomainResult<()> {
        if submitted.len() != CODE_LENGTH || !submitted.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::Auth(AuthError::InvalidOtp));
        }

        let stored = self
            .otp_store
            .get_code(email, purpose)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to read verification code: {}", e),
            })?;

        let Some(stored) = stored else {
            // Expired codes fall out of the store with their TTL.
            return Err(DomainError::Auth(AuthError::OtpExpired));
        };

        if constant_time_eq(stored.as_bytes(), submitted.as_bytes()) {
            self.otp_store
                .remove_code(email, purpose)
                .await
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to consume verification code: {}", e),
                })?;
            tracing::info!(
                email = email,
                purpose = purpose.as_str(),
                event = "otp_verified",
                "Verification code accepted"
            );
            return Ok(());
        }

        let attempts = self
            .otp_store
            .increment_attempts(email, purpose)
            .await
            .unwrap_or(i64::MAX);

        if attempts >= self.config.max_attempts {
            let _ = self.otp_store.remove_code(email, purpose).await;
            tracing::warn!(
                email = email,
                attempts = attempts,
                event = "otp_attempts_exhausted",
                "Verification code invalidated after too many attempts"
            );
            return Err(DomainError::Auth(AuthError::MaxOtpAttemptsExceeded));
        }

        tracing::warn!(
            email = email,
            attempts = attempts,
            event = "otp_mismatch",
            "Verification code mismatch"
        );
        Err(DomainError::Auth(AuthError::InvalidOtp))
    }
}
