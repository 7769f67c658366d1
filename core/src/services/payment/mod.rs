//! Payment gateway integration: the gateway trait, order types, and
//! checkout signature verification.

pub mod signature;
mod traits;

pub use traits::{GatewayOrder, PaymentGateway};
