//! Room booking endpoints: order creation and payment confirmation.

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::info;

use crate::app::AppState;
use crate::dto::booking::{CreateBookingOrderDto, VerifyBookingPaymentDto};
use crate::handlers::error::domain_error_response;

/// Handler for POST /api/v1/createBookingOrder
pub async fn create_booking_order(
    state: web::Data<AppState>,
    body: web::Json<CreateBookingOrderDto>,
) -> HttpResponse {
    match state
        .booking_service
        .create_booking_order(body.user_id, body.room_type_id, body.total_rent)
        .await
    {
        Ok(order) => HttpResponse::Ok().json(json!({ "order": order })),
        Err(e) => domain_error_response(e),
    }
}

/// Handler for POST /api/v1/verifyBookingPayment
///
/// Verifies the checkout signature, assigns a room, and promotes the
/// guest to resident. The fresh token replaces the guest-role session.
pub async fn verify_booking_payment(
    state: web::Data<AppState>,
    body: web::Json<VerifyBookingPaymentDto>,
) -> HttpResponse {
    let dto = body.0;
    match state
        .booking_service
        .confirm_booking(
            dto.user_id,
            dto.room_type_id,
            &dto.order,
            &dto.razorpay_order_id,
            &dto.razorpay_payment_id,
            &dto.razorpay_signature,
        )
        .await
    {
        Ok(confirmation) => {
            info!(user_id = %dto.user_id, room_no = %confirmation.room_no, "Room booked");
            HttpResponse::Ok().json(json!({
                "status": "success",
                "message": "Room booked successfully.",
                "token": confirmation.token,
                "id": dto.user_id,
                "roomNo": confirmation.room_no,
            }))
        }
        Err(e) => domain_error_response(e),
    }
}
