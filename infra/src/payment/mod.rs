//! Payment module - Razorpay REST client

mod razorpay;

pub use razorpay::RazorpayClient;
