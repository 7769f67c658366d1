//! Room-type browsing and reassignment endpoints.

use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use crate::app::AppState;
use crate::dto::rent::UserQuery;
use crate::dto::rooms::AssignNewRoomTypeDto;
use crate::handlers::error::domain_error_response;

/// Handler for GET /api/v1/roomTypes
pub async fn room_types(state: web::Data<AppState>) -> HttpResponse {
    match state.booking_service.room_types().await {
        Ok(types) => HttpResponse::Ok().json(types),
        Err(e) => domain_error_response(e),
    }
}

/// Handler for GET /api/v1/roomDetails/{id}
///
/// Returns the room type with a first-month quote: the rent prorated
/// over the days remaining in the current month, plus admission fees.
pub async fn room_details(state: web::Data<AppState>, path: web::Path<Uuid>) -> HttpResponse {
    let today = Utc::now().date_naive();
    match state.rent_service.quote(path.into_inner(), today).await {
        Ok(quote) => HttpResponse::Ok().json(json!({
            "roomDetails": quote.room_type,
            "dynamicRent": quote.dynamic_rent,
            "totalRent": quote.total_rent,
        })),
        Err(e) => domain_error_response(e),
    }
}

/// Handler for GET /api/v1/availableRoomTypes
pub async fn available_room_types(state: web::Data<AppState>) -> HttpResponse {
    match state.booking_service.available_room_types().await {
        Ok(types) => HttpResponse::Ok().json(json!({ "availableRoomTypes": types })),
        Err(e) => domain_error_response(e),
    }
}

/// Handler for GET /api/v1/roomTypeDetails?userId=
pub async fn room_type_details(
    state: web::Data<AppState>,
    query: web::Query<UserQuery>,
) -> HttpResponse {
    match state.rent_service.resident_room_type(query.user_id).await {
        Ok(room_type) => HttpResponse::Ok().json(json!({ "roomTypeDetails": room_type })),
        Err(e) => domain_error_response(e),
    }
}

/// Handler for POST /api/v1/assignNewRoomType
///
/// Reassigning to the current type is a no-op signalled with
/// `{"status": false}` rather than an error.
pub async fn assign_new_room_type(
    state: web::Data<AppState>,
    body: web::Json<AssignNewRoomTypeDto>,
) -> HttpResponse {
    match state
        .booking_service
        .reassign_room_type(body.user_id, &body.room_no, body.new_room_type_id)
        .await
    {
        Ok(Some(reassignment)) => HttpResponse::Ok().json(json!({
            "newRoomNo": reassignment.new_room_no,
            "newRoomType": reassignment.new_room_type,
            "status": true,
        })),
        Ok(None) => HttpResponse::Ok().json(json!({ "status": false })),
        Err(e) => domain_error_response(e),
    }
}
