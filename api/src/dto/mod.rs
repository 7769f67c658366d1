//! Request body and query types, validated with `validator`.
//!
//! Wire names stay camelCase (or the gateway's snake_case) to match the
//! client the original API shipped with.

pub mod auth;
pub mod booking;
pub mod profile;
pub mod rent;
pub mod residence;
pub mod rooms;
