//! Shared utilities and common types for the StayMate server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Field-error response body shared by the validation layers
//! - Validation helpers (email, mobile number, password strength, etc.)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CacheConfig, DatabaseConfig, EmailConfig, PaymentGatewayConfig,
    RentPolicyConfig, ServerConfig,
};
pub use types::response::FieldErrors;
pub use utils::validation;
