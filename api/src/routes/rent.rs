//! Rent endpoints: dues, orders, payment confirmation, and the status
//! check that drives the monthly state machine.

use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};
use chrono::Utc;
use serde_json::json;

use sm_core::errors::{DomainError, TokenError};

use crate::app::AppState;
use crate::dto::rent::{CreateRentOrderDto, UserQuery, VerifyRentPaymentDto};
use crate::handlers::error::domain_error_response;
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/v1/rentDue?userId=
///
/// Returns the current month's unpaid due, or an empty object when
/// nothing is owed.
pub async fn rent_due(state: web::Data<AppState>, query: web::Query<UserQuery>) -> HttpResponse {
    let today = Utc::now().date_naive();
    match state.rent_service.current_due(query.user_id, today).await {
        Ok(Some(due)) => HttpResponse::Ok().json(json!({ "rentDue": due })),
        Ok(None) => HttpResponse::Ok().json(json!({ "rentDue": {} })),
        Err(e) => domain_error_response(e),
    }
}

/// Handler for POST /api/v1/createRentOrder
pub async fn create_rent_order(
    state: web::Data<AppState>,
    body: web::Json<CreateRentOrderDto>,
) -> HttpResponse {
    match state.booking_service.create_rent_order(body.total_rent).await {
        Ok(order) => HttpResponse::Ok().json(json!({ "order": order })),
        Err(e) => domain_error_response(e),
    }
}

/// Handler for POST /api/v1/verifyRentPayment
pub async fn verify_rent_payment(
    state: web::Data<AppState>,
    body: web::Json<VerifyRentPaymentDto>,
) -> HttpResponse {
    let today = Utc::now().date_naive();
    let dto = body.0;
    match state
        .booking_service
        .confirm_rent_payment(
            dto.user_id,
            today,
            &dto.order,
            &dto.razorpay_order_id,
            &dto.razorpay_payment_id,
            &dto.razorpay_signature,
        )
        .await
    {
        Ok(()) => HttpResponse::Ok().json(json!({
            "status": "success",
            "message": "Rent Payment Successful",
        })),
        Err(e) => domain_error_response(e),
    }
}

/// Handler for GET /api/v1/rentPaid?userId=
pub async fn rent_paid(state: web::Data<AppState>, query: web::Query<UserQuery>) -> HttpResponse {
    match state.rent_service.payment_history(query.user_id).await {
        Ok(payments) => HttpResponse::Ok().json(json!({ "rentPaid": payments })),
        Err(e) => domain_error_response(e),
    }
}

/// Handler for GET /api/v1/rentPaymentStatus
///
/// Evaluates the month's rent status for the authenticated resident.
/// This check carries the state machine's side effects: the first check
/// of a month creates the due, and a check past the fine deadline
/// evicts.
pub async fn rent_payment_status(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let Some(user_id) = req.extensions().get::<AuthContext>().map(|c| c.user_id) else {
        return domain_error_response(DomainError::Token(TokenError::InvalidToken));
    };

    let today = Utc::now().date_naive();
    match state.rent_service.check_payment_status(user_id, today).await {
        Ok(status) => HttpResponse::Ok().json(json!({ "status": status })),
        Err(e) => domain_error_response(e),
    }
}
