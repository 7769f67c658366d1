//! Rent due-date and late-fine policy

use serde::{Deserialize, Serialize};

/// Business policy for monthly rent collection.
///
/// Rent falls due on the first of the month. A grace window follows in
/// which no fine accrues; after it a daily fine accrues until the fine
/// window closes, at which point the fine is flat and the resident is
/// eligible for eviction on the next status check.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct RentPolicyConfig {
    /// Days past the due date with no fine (inclusive)
    pub grace_days: i64,

    /// Days past the due date after which rent is no longer payable
    pub fine_window_days: i64,

    /// Fine accrued per late day inside the fine window
    pub daily_fine: u32,

    /// Flat fine once the fine window has closed
    pub max_fine: u32,
}

impl Default for RentPolicyConfig {
    fn default() -> Self {
        Self {
            grace_days: 4,
            fine_window_days: 9,
            daily_fine: 100,
            max_fine: 500,
        }
    }
}
