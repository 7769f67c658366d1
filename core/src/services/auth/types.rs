//! Input and output types for the auth service

use chrono::NaiveDate;

use crate::domain::entities::user::{User, UserRole};

/// The validated admission form, as held by the client between the OTP
/// request and its verification.
#[derive(Debug, Clone)]
pub struct AdmissionRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub mobile_number: String,
    pub aadhar_number: String,
    pub parent_name: String,
    pub parent_mobile_number: String,
    pub blood_group: String,
    pub house_name: String,
    pub area: String,
    pub landmark: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pincode: String,
}

/// A successful login: the user and their session token.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user_id: uuid::Uuid,
    pub role: UserRole,
    pub token: String,
}

impl LoginResult {
    pub fn for_user(user: &User, token: String) -> Self {
        Self {
            user_id: user.id,
            role: user.role,
            token,
        }
    }
}
