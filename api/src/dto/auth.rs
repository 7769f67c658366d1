//! Auth request bodies: admission form, OTP verification, login, and
//! the password-reset pair.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use sm_core::services::auth::AdmissionRequest;
use sm_shared::validation;

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

fn validate_mobile(value: &str) -> Result<(), ValidationError> {
    if validation::is_valid_mobile(value) {
        Ok(())
    } else {
        Err(field_error("mobile", "Must be exactly 10 digits"))
    }
}

fn validate_aadhar(value: &str) -> Result<(), ValidationError> {
    if validation::is_valid_aadhar(value) {
        Ok(())
    } else {
        Err(field_error("aadhar", "Aadhar number should be 12 digits"))
    }
}

fn validate_pincode(value: &str) -> Result<(), ValidationError> {
    if validation::is_valid_pincode(value) {
        Ok(())
    } else {
        Err(field_error("pincode", "Pincode should be 6 digits"))
    }
}

fn validate_password_strength(value: &str) -> Result<(), ValidationError> {
    if validation::is_strong_password(value) {
        Ok(())
    } else {
        Err(field_error("password", "Please create a stronger password"))
    }
}

/// The admission (signup) form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionDto {
    #[validate(length(min = 1, max = 50, message = "Name should not exceed 50 characters"))]
    pub full_name: String,

    #[validate(email(message = "Invalid email"))]
    pub email: String,

    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "Passwords must match"))]
    pub confirm_password: String,

    pub date_of_birth: NaiveDate,

    #[validate(length(min = 1, message = "Gender is required"))]
    pub gender: String,

    #[validate(custom(function = "validate_mobile"))]
    pub mobile_number: String,

    #[validate(custom(function = "validate_aadhar"))]
    pub aadhar_number: String,

    #[validate(length(min = 1, max = 50, message = "Name should not exceed 50 characters"))]
    pub parent_name: String,

    #[validate(custom(function = "validate_mobile"))]
    pub parent_mobile_number: String,

    #[validate(length(min = 1, message = "Blood group is required"))]
    pub blood_group: String,

    #[validate(length(min = 1, max = 50, message = "House name should not exceed 50 characters"))]
    pub house_name: String,

    #[validate(length(min = 1, max = 50, message = "Area should not exceed 50 characters"))]
    pub area: String,

    #[validate(length(min = 1, max = 100, message = "Landmark should not exceed 100 characters"))]
    pub landmark: String,

    #[validate(length(min = 1, max = 50, message = "City should not exceed 50 characters"))]
    pub city: String,

    #[validate(length(min = 1, max = 50, message = "State should not exceed 50 characters"))]
    pub state: String,

    #[validate(length(min = 1, max = 50, message = "Country should not exceed 50 characters"))]
    pub country: String,

    #[validate(custom(function = "validate_pincode"))]
    pub pincode: String,
}

impl From<AdmissionDto> for AdmissionRequest {
    fn from(dto: AdmissionDto) -> Self {
        AdmissionRequest {
            full_name: dto.full_name,
            email: dto.email,
            password: dto.password,
            date_of_birth: dto.date_of_birth,
            gender: dto.gender,
            mobile_number: dto.mobile_number,
            aadhar_number: dto.aadhar_number,
            parent_name: dto.parent_name,
            parent_mobile_number: dto.parent_mobile_number,
            blood_group: dto.blood_group,
            house_name: dto.house_name,
            area: dto.area,
            landmark: dto.landmark,
            city: dto.city,
            state: dto.state,
            country: dto.country,
            pincode: dto.pincode,
        }
    }
}

/// OTP verification body. With `user_data` present this completes a
/// signup; with only `user_email` it verifies a password reset.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpDto {
    pub otp: String,
    pub user_email: Option<String>,
    pub user_data: Option<AdmissionDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForgotPasswordDto {
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordDto {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}
