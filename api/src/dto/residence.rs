//! Residence-life bodies: reviews, leave letters, complaints.

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use sm_core::services::residence::{NewComplaint, NewLeaveLetter, NewReview};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReviewValues {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: u8,
    #[validate(length(min = 1, max = 100, message = "Title should not exceed 100 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 1000, message = "Review should not exceed 1000 characters"))]
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub user_id: Uuid,
    pub values: ReviewValues,
}

impl From<ReviewValues> for NewReview {
    fn from(values: ReviewValues) -> Self {
        NewReview {
            rating: values.rating,
            title: values.title,
            body: values.body,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LeaveLetterValues {
    #[validate(length(min = 1, max = 500, message = "Reason should not exceed 500 characters"))]
    pub reason: String,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveLetterDto {
    pub user_id: Uuid,
    pub values: LeaveLetterValues,
}

impl From<LeaveLetterValues> for NewLeaveLetter {
    fn from(values: LeaveLetterValues) -> Self {
        NewLeaveLetter {
            reason: values.reason,
            departure_date: values.departure_date,
            return_date: values.return_date,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ComplaintValues {
    #[validate(length(min = 1, max = 50, message = "Category is required"))]
    pub category: String,
    #[validate(length(min = 1, max = 1000, message = "Description should not exceed 1000 characters"))]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintDto {
    pub user_id: Uuid,
    pub values: ComplaintValues,
}

impl From<ComplaintValues> for NewComplaint {
    fn from(values: ComplaintValues) -> Self {
        NewComplaint {
            category: values.category,
            description: values.description,
        }
    }
}
