//! Residence-life entities: mess menu, reviews, leave letters, complaints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One weekday's mess menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuDay {
    pub id: Uuid,
    /// Weekday name, e.g. "Sunday"
    pub day: String,
    pub breakfast: String,
    pub lunch: String,
    pub snacks: String,
    pub dinner: String,
}

/// A resident's review of the hostel. At most one per user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Star rating, 1..=5
    pub rating: u8,
    pub title: String,
    pub body: String,
    pub posted_at: DateTime<Utc>,
}

/// A leave letter filed by a resident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveLetter {
    pub id: Uuid,
    pub user_id: Uuid,
    pub reason: String,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    pub submitted_at: DateTime<Utc>,
}

/// A complaint filed by a resident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Complaint area, e.g. "Maintenance", "Food"
    pub category: String,
    pub description: String,
    pub submitted_at: DateTime<Utc>,
}
