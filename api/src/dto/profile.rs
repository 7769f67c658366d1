//! Profile update and password-change bodies.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use sm_core::domain::entities::user::Address;
use sm_core::services::profile::ProfileUpdate;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileDto {
    #[validate(length(min = 1, max = 50, message = "Name should not exceed 50 characters"))]
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    #[validate(length(equal = 10, message = "Must be exactly 10 digits"))]
    pub mobile_number: String,
    #[validate(length(equal = 12, message = "Aadhar number should be 12 digits"))]
    pub aadhar_number: String,
    #[validate(length(min = 1, max = 50, message = "Name should not exceed 50 characters"))]
    pub parent_name: String,
    #[validate(length(equal = 10, message = "Must be exactly 10 digits"))]
    pub parent_mobile_number: String,
    pub blood_group: String,
    pub house_name: String,
    pub area: String,
    pub landmark: String,
    pub city: String,
    pub state: String,
    pub country: String,
    #[validate(length(equal = 6, message = "Pincode should be 6 digits"))]
    pub pincode: String,
}

impl From<UpdateProfileDto> for ProfileUpdate {
    fn from(dto: UpdateProfileDto) -> Self {
        ProfileUpdate {
            full_name: dto.full_name,
            date_of_birth: dto.date_of_birth,
            gender: dto.gender,
            mobile_number: dto.mobile_number,
            aadhar_number: dto.aadhar_number,
            parent_name: dto.parent_name,
            parent_mobile_number: dto.parent_mobile_number,
            blood_group: dto.blood_group,
            address: Address {
                house_name: dto.house_name,
                area: dto.area,
                landmark: dto.landmark,
                city: dto.city,
                state: dto.state,
                country: dto.country,
                pincode: dto.pincode,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordDto {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}
