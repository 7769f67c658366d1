//! Resident profile endpoints.

use actix_web::{web, HttpResponse};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::dto::profile::{ChangePasswordDto, UpdateProfileDto};
use crate::handlers::error::{domain_error_response, validation_error_response};

/// Handler for GET /api/v1/userProfile/{id}
///
/// The password hash is skipped by the entity's serializer, so the
/// response never carries it.
pub async fn user_profile(state: web::Data<AppState>, path: web::Path<Uuid>) -> HttpResponse {
    match state.profile_service.user_details(path.into_inner()).await {
        Ok(user) => HttpResponse::Ok().json(json!({ "userDetails": user })),
        Err(e) => domain_error_response(e),
    }
}

/// Handler for PATCH /api/v1/updateProfile/{id}
pub async fn update_profile(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateProfileDto>,
) -> HttpResponse {
    if let Err(errors) = body.validate() {
        return validation_error_response(&errors);
    }

    match state
        .profile_service
        .update_profile(path.into_inner(), body.0.into())
        .await
    {
        Ok(()) => HttpResponse::Ok().json(json!({ "message": "Profile updated successfully" })),
        Err(e) => domain_error_response(e),
    }
}

/// Handler for POST /api/v1/changePassword/{id}
pub async fn change_password(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<ChangePasswordDto>,
) -> HttpResponse {
    match state
        .auth_service
        .change_password(
            path.into_inner(),
            &body.current_password,
            &body.new_password,
            &body.confirm_password,
        )
        .await
    {
        Ok(()) => HttpResponse::Ok().json(json!({
            "message": "Your password has been changed successfully",
        })),
        Err(e) => domain_error_response(e),
    }
}
