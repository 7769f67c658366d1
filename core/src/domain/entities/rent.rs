//! Rent obligation and payment entities.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a rent-due record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RentDueStatus {
    Unpaid,
    Paid,
}

/// Outcome of a rent payment-status check for the current month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RentStatus {
    /// Rent for the month is settled (or exempt: admission month)
    Paid,
    /// An unpaid obligation exists and is still payable
    Unpaid,
    /// The fine deadline has passed; the resident has been evicted
    Late,
}

/// The unpaid-rent obligation for one user for one month.
///
/// Exists only while relevant: created lazily on the first status check
/// of a month, flipped to Paid on payment, deleted on eviction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentDue {
    pub id: Uuid,

    pub user_id: Uuid,

    /// Month name, e.g. "January"
    pub rent_month: String,

    /// First day of the month the rent is due for
    pub rent_date: NaiveDate,

    /// Monthly rent of the resident's room type
    pub rent_amount: u32,

    /// Fine accrued at creation time (re-derived on later checks)
    pub fine: u32,

    /// Last day payable without any fine
    pub last_date_without_fine: NaiveDate,

    /// Last day payable at all; past this the resident is evicted
    pub last_date_with_fine: NaiveDate,

    pub status: RentDueStatus,
}

impl RentDue {
    pub fn is_unpaid(&self) -> bool {
        self.status == RentDueStatus::Unpaid
    }

    /// Mark the obligation settled.
    pub fn mark_paid(&mut self) {
        self.status = RentDueStatus::Paid;
    }
}

/// Immutable record of a completed payment (booking or rent).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Uuid,

    pub user_id: Uuid,

    /// Amount paid in whole currency units
    pub rent_amount: u32,

    pub date_of_payment: DateTime<Utc>,

    /// Month name the payment covers, e.g. "March"
    pub month_of_payment: String,
}

impl Payment {
    /// Record a payment of `amount` made now, labelled with the current month.
    pub fn record(user_id: Uuid, amount: u32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            rent_amount: amount,
            date_of_payment: now,
            month_of_payment: now.format("%B").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_paid() {
        let mut due = RentDue {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            rent_month: "March".to_string(),
            rent_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            rent_amount: 5000,
            fine: 0,
            last_date_without_fine: NaiveDate::from_ymd_opt(2026, 3, 5).unwrap(),
            last_date_with_fine: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
            status: RentDueStatus::Unpaid,
        };
        assert!(due.is_unpaid());
        due.mark_paid();
        assert_eq!(due.status, RentDueStatus::Paid);
    }

    #[test]
    fn test_payment_record_carries_month_label() {
        let payment = Payment::record(Uuid::new_v4(), 5000);
        assert_eq!(
            payment.month_of_payment,
            payment.date_of_payment.format("%B").to_string()
        );
        assert_eq!(payment.rent_amount, 5000);
    }

    #[test]
    fn test_rent_status_serialization() {
        assert_eq!(serde_json::to_string(&RentStatus::Paid).unwrap(), "\"Paid\"");
        assert_eq!(
            serde_json::to_string(&RentStatus::Unpaid).unwrap(),
            "\"Unpaid\""
        );
        assert_eq!(serde_json::to_string(&RentStatus::Late).unwrap(), "\"Late\"");
    }
}
