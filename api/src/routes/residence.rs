//! Residence-life endpoints: mess menu, reviews, leave letters, and
//! complaints.

use actix_web::{web, HttpResponse};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::dto::rent::UserQuery;
use crate::dto::residence::{ComplaintDto, LeaveLetterDto, ReviewDto};
use crate::handlers::error::{domain_error_response, validation_error_response};

/// Handler for GET /api/v1/fetchHostelMenu
pub async fn fetch_hostel_menu(state: web::Data<AppState>) -> HttpResponse {
    match state.residence_service.hostel_menu().await {
        Ok(menu) => HttpResponse::Ok().json(json!({ "hostelMenu": menu })),
        Err(e) => domain_error_response(e),
    }
}

/// Handler for POST /api/v1/hostelReview
pub async fn post_hostel_review(
    state: web::Data<AppState>,
    body: web::Json<ReviewDto>,
) -> HttpResponse {
    if let Err(errors) = body.values.validate() {
        return validation_error_response(&errors);
    }

    match state
        .residence_service
        .post_review(body.user_id, body.0.values.into())
        .await
    {
        Ok(_) => HttpResponse::Ok().json(json!({ "message": "Review posted successfully" })),
        Err(e) => domain_error_response(e),
    }
}

/// Handler for GET /api/v1/hostelReview/{id}
///
/// The path id is the reviewing user's id, matching the client's usage.
pub async fn get_hostel_review(state: web::Data<AppState>, path: web::Path<Uuid>) -> HttpResponse {
    match state
        .residence_service
        .review_for_user(path.into_inner())
        .await
    {
        Ok(review) => HttpResponse::Ok().json(json!({ "hostelReview": review })),
        Err(e) => domain_error_response(e),
    }
}

/// Handler for PUT /api/v1/hostelReview/{id}
pub async fn update_hostel_review(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<ReviewDto>,
) -> HttpResponse {
    if let Err(errors) = body.values.validate() {
        return validation_error_response(&errors);
    }

    match state
        .residence_service
        .update_review(path.into_inner(), body.user_id, body.0.values.into())
        .await
    {
        Ok(_) => HttpResponse::Ok().json(json!({ "message": "Review updated successfully" })),
        Err(e) => domain_error_response(e),
    }
}

/// Handler for DELETE /api/v1/hostelReview/{id}
pub async fn delete_hostel_review(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    match state.residence_service.delete_review(path.into_inner()).await {
        Ok(_) => HttpResponse::Ok().json(json!({ "message": "Review deleted successfully" })),
        Err(e) => domain_error_response(e),
    }
}

/// Handler for GET /api/v1/leaveLetters?userId=
pub async fn get_leave_letters(
    state: web::Data<AppState>,
    query: web::Query<UserQuery>,
) -> HttpResponse {
    match state.residence_service.leave_letters(query.user_id).await {
        Ok(letters) => HttpResponse::Ok().json(json!({ "leaveLetters": letters })),
        Err(e) => domain_error_response(e),
    }
}

/// Handler for POST /api/v1/leaveLetters
pub async fn post_leave_letter(
    state: web::Data<AppState>,
    body: web::Json<LeaveLetterDto>,
) -> HttpResponse {
    if let Err(errors) = body.values.validate() {
        return validation_error_response(&errors);
    }

    match state
        .residence_service
        .submit_leave_letter(body.user_id, body.0.values.into())
        .await
    {
        Ok(_) => {
            HttpResponse::Ok().json(json!({ "message": "Leave Letter submitted successfully" }))
        }
        Err(e) => domain_error_response(e),
    }
}

/// Handler for GET /api/v1/complaints?userId=
pub async fn get_complaints(
    state: web::Data<AppState>,
    query: web::Query<UserQuery>,
) -> HttpResponse {
    match state.residence_service.complaints(query.user_id).await {
        Ok(complaints) => HttpResponse::Ok().json(json!({ "complaints": complaints })),
        Err(e) => domain_error_response(e),
    }
}

/// Handler for POST /api/v1/complaints
pub async fn post_complaint(
    state: web::Data<AppState>,
    body: web::Json<ComplaintDto>,
) -> HttpResponse {
    if let Err(errors) = body.values.validate() {
        return validation_error_response(&errors);
    }

    match state
        .residence_service
        .submit_complaint(body.user_id, body.0.values.into())
        .await
    {
        Ok(_) => HttpResponse::Ok().json(json!({ "message": "Complaint submitted successfully" })),
        Err(e) => domain_error_response(e),
    }
}
