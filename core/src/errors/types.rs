//! Error type definitions for authentication, tokens, payments, and
//! input validation. Controllers map these onto HTTP responses at the
//! API boundary.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Incorrect email or password")]
    IncorrectCredentials,

    #[error("Invalid OTP")]
    InvalidOtp,

    #[error("OTP expired. Please request a new one")]
    OtpExpired,

    #[error("Maximum OTP attempts exceeded. Please request a new code")]
    MaxOtpAttemptsExceeded,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Please check the Email address and try again.")]
    UnknownEmail,

    #[error("Incorrect password")]
    IncorrectPassword,

    #[error("Password not strong enough")]
    WeakPassword,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("You used this password recently. Please choose a different one.")]
    PasswordReused,

    #[error("Email delivery failure. Please try again later")]
    MailServiceFailure,
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    /// Distinguished message: the client forces a re-login when it sees it.
    #[error("Session timed out. Please login again.")]
    TokenExpired,

    #[error("Request is not authorized")]
    InvalidToken,

    #[error("Authorization token required")]
    MissingToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Payment and room-inventory errors
#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Payment verification failed.")]
    SignatureMismatch,

    #[error("No rooms available for booking.")]
    NoRoomAvailable,

    #[error("No rooms available for this room type")]
    NoRoomOfType,

    #[error("You already have a room booked.")]
    AlreadyBooked,

    #[error("No unpaid rent found for the current month")]
    NoUnpaidRent,

    #[error("Payment gateway failure: {message}")]
    GatewayFailure { message: String },
}

/// Input validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{field} is required")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("{field} should not exceed {max} characters")]
    TooLong { field: String, max: usize },

    #[error("Duplicate value: {field}")]
    DuplicateValue { field: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;

    #[test]
    fn test_session_timeout_message_is_distinguished() {
        // The client matches on this exact string to force a logout.
        assert_eq!(
            TokenError::TokenExpired.to_string(),
            "Session timed out. Please login again."
        );
    }

    #[test]
    fn test_transparent_bridging() {
        let err: DomainError = AuthError::InvalidOtp.into();
        assert_eq!(err.to_string(), "Invalid OTP");

        let err: DomainError = PaymentError::SignatureMismatch.into();
        assert_eq!(err.to_string(), "Payment verification failed.");
    }

    #[test]
    fn test_validation_error_fields() {
        let err = ValidationError::TooLong {
            field: "fullName".to_string(),
            max: 50,
        };
        assert_eq!(err.to_string(), "fullName should not exceed 50 characters");
    }
}
