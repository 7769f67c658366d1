//! Resident profile service.

mod service;

pub use service::{ProfileService, ProfileUpdate};
