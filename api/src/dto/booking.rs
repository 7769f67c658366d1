//! Booking request bodies.

use serde::Deserialize;
use uuid::Uuid;

use sm_core::services::payment::GatewayOrder;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingOrderDto {
    pub total_rent: u32,
    pub room_type_id: Uuid,
    pub user_id: Uuid,
}

/// Checkout confirmation posted by the client. The gateway fields keep
/// their snake_case wire names.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyBookingPaymentDto {
    pub razorpay_payment_id: String,
    pub razorpay_order_id: String,
    pub razorpay_signature: String,
    pub order: GatewayOrder,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    #[serde(rename = "roomTypeId")]
    pub room_type_id: Uuid,
}
