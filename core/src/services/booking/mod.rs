//! Room booking, payment confirmation, and reassignment service.

mod service;
mod types;

#[cfg(test)]
mod tests;

pub use service::BookingService;
pub use types::{BookingConfirmation, Reassignment};
