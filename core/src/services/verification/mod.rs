//! Email OTP verification service.

mod config;
mod service;
mod traits;
mod types;

pub use config::VerificationConfig;
pub use service::VerificationService;
pub use traits::{MailService, OtpStore};
pub use types::SendOtpResult;
