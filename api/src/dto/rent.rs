//! Rent request bodies and queries.

use serde::Deserialize;
use uuid::Uuid;

use sm_core::services::payment::GatewayOrder;

/// Query string carrying the acting user, e.g. `?userId=...`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRentOrderDto {
    pub total_rent: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifyRentPaymentDto {
    pub razorpay_payment_id: String,
    pub razorpay_order_id: String,
    pub razorpay_signature: String,
    pub order: GatewayOrder,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
}
