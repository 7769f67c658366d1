//! Request handling support: error mapping to HTTP responses.

pub mod error;
