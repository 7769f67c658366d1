//! Payment gateway trait and wire types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// An order created at the payment gateway. The client completes the
/// checkout against it and posts the whole object back alongside the
/// gateway's payment id and signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayOrder {
    /// Gateway order id, e.g. "order_EKwxwAgItmmXdp"
    pub id: String,

    /// Amount in the smallest currency unit (paise)
    pub amount: u64,

    /// ISO currency code
    pub currency: String,

    /// Merchant receipt reference
    pub receipt: String,

    /// Gateway-side order status
    pub status: String,
}

impl GatewayOrder {
    /// Amount in whole currency units, as recorded in the ledger.
    pub fn amount_in_units(&self) -> u32 {
        (self.amount / 100) as u32
    }
}

/// Contract for the external payment gateway.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create an order for `amount` whole currency units.
    async fn create_order(&self, amount: u32) -> Result<GatewayOrder, DomainError>;

    /// The key secret; also keys the checkout HMAC signature.
    fn key_secret(&self) -> &str;
}
