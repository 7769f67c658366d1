//! Admission, OTP verification, login, and password-reset endpoints.

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::info;
use validator::Validate;

use sm_core::errors::{DomainError, ValidationError};
use sm_core::services::auth::AdmissionRequest;

use crate::app::AppState;
use crate::dto::auth::{
    AdmissionDto, ForgotPasswordDto, LoginDto, ResetPasswordDto, VerifyOtpDto,
};
use crate::handlers::error::{domain_error_response, validation_error_response};

/// Handler for POST /api/v1/admission
///
/// Validates the signup form and sends an OTP to the applicant's email.
/// The form is echoed back; the client holds it until OTP verification.
pub async fn admission(
    state: web::Data<AppState>,
    body: web::Json<AdmissionDto>,
) -> HttpResponse {
    if let Err(errors) = body.validate() {
        return validation_error_response(&errors);
    }

    let form: AdmissionRequest = body.0.clone().into();
    match state.auth_service.begin_admission(&form).await {
        Ok(_) => {
            info!(email = %form.email, "Admission form accepted, OTP sent");
            HttpResponse::Ok().json(json!({
                "message": "Form submitted successfully",
                "values": body.0,
            }))
        }
        Err(e) => domain_error_response(e),
    }
}

/// Handler for POST /api/v1/verifyOtp
///
/// Completes a signup when the held form is present, or verifies a
/// password-reset OTP when only the email is.
pub async fn verify_otp(state: web::Data<AppState>, body: web::Json<VerifyOtpDto>) -> HttpResponse {
    let dto = body.0;

    match (dto.user_data, dto.user_email) {
        (Some(form_dto), _) => {
            if let Err(errors) = form_dto.validate() {
                return validation_error_response(&errors);
            }
            let form: AdmissionRequest = form_dto.into();
            match state.auth_service.complete_signup(&form, &dto.otp).await {
                Ok(_) => HttpResponse::Ok().json(json!({
                    "message": "OTP verified successfully",
                })),
                Err(e) => domain_error_response(e),
            }
        }
        (None, Some(email)) => {
            match state
                .auth_service
                .verify_password_reset_otp(&email, &dto.otp)
                .await
            {
                Ok(_) => HttpResponse::Ok().json(json!({
                    "message": "OTP verified successfully",
                    "email": email,
                })),
                Err(e) => domain_error_response(e),
            }
        }
        (None, None) => domain_error_response(DomainError::ValidationErr(
            ValidationError::RequiredField {
                field: "userData".to_string(),
            },
        )),
    }
}

/// Handler for POST /api/v1/login
pub async fn login(state: web::Data<AppState>, body: web::Json<LoginDto>) -> HttpResponse {
    match state.auth_service.login(&body.email, &body.password).await {
        Ok(result) => HttpResponse::Ok().json(json!({
            "id": result.user_id,
            "role": result.role,
            "token": result.token,
        })),
        Err(e) => domain_error_response(e),
    }
}

/// Handler for POST /api/v1/forgotPassword
pub async fn forgot_password(
    state: web::Data<AppState>,
    body: web::Json<ForgotPasswordDto>,
) -> HttpResponse {
    match state.auth_service.forgot_password(&body.email).await {
        Ok(_) => HttpResponse::Ok().json(json!({
            "message": "OTP sent to your email address",
            "email": body.email,
        })),
        Err(e) => domain_error_response(e),
    }
}

/// Handler for POST /api/v1/resetPassword
pub async fn reset_password(
    state: web::Data<AppState>,
    body: web::Json<ResetPasswordDto>,
) -> HttpResponse {
    match state
        .auth_service
        .reset_password(&body.email, &body.password, &body.confirm_password)
        .await
    {
        Ok(_) => HttpResponse::Ok().json(json!({
            "message": "Your password has been changed successfully",
        })),
        Err(e) => domain_error_response(e),
    }
}
