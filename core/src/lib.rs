//! Core business logic and domain layer for the StayMate backend.
//!
//! This crate holds the domain entities, the repository traits that
//! abstract persistence, and the services implementing admission, rent
//! collection, booking, and residence-life workflows. It depends on no
//! database or HTTP machinery; infrastructure is injected through the
//! traits in [`repositories`] and [`services`].

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
