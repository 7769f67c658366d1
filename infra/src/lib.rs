//! # Infrastructure Layer
//!
//! Concrete implementations of the traits the core crate depends on:
//! - **Database**: MySQL repositories using SQLx
//! - **Cache**: Redis-backed OTP storage
//! - **Email**: SMTP mailer for OTP delivery
//! - **Payment**: Razorpay REST client

pub mod cache;
pub mod database;
pub mod email;
pub mod payment;

use thiserror::Error;

/// Errors raised while constructing infrastructure services.
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Email error: {0}")]
    Email(String),
}
