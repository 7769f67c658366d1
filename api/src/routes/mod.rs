//! Route handlers, grouped by API area.

pub mod auth;
pub mod booking;
pub mod profile;
pub mod rent;
pub mod residence;
pub mod rooms;
