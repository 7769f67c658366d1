//! Residence-life service: mess menu, reviews, leave letters, complaints.

mod service;

pub use service::{NewComplaint, NewLeaveLetter, NewReview, ResidenceService};
