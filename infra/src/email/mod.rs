//! Email module - SMTP delivery for OTP mail

mod smtp;

pub use smtp::SmtpMailer;
