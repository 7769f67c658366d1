//! Pure calendar math for rent collection.
//!
//! Everything here is a function of dates and the rent policy — no
//! storage, no clocks. The rent service feeds in "today" so the rules
//! stay independently testable.

use chrono::{Datelike, Days, NaiveDate};
use sm_shared::config::RentPolicyConfig;

/// First day of the month `today` falls in. This is the due date and
/// the anchor every rent-due record is keyed on.
pub fn month_start(today: NaiveDate) -> NaiveDate {
    today.with_day(1).expect("day 1 exists in every month")
}

/// English month name, e.g. "January".
pub fn month_name(date: NaiveDate) -> String {
    date.format("%B").to_string()
}

/// Whether two dates fall in the same calendar month and year.
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// The two deadlines of a month: last day payable without a fine, and
/// last day payable at all.
pub fn deadlines(policy: &RentPolicyConfig, due_date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let last_without_fine = due_date + Days::new(policy.grace_days as u64);
    let last_with_fine = due_date + Days::new(policy.fine_window_days as u64);
    (last_without_fine, last_with_fine)
}

/// Fine owed when paying on `today`.
///
/// Zero through the grace window, then the daily fine per day past it,
/// flat `max_fine` once the fine window has closed.
pub fn fine_on(
    policy: &RentPolicyConfig,
    today: NaiveDate,
    last_date_without_fine: NaiveDate,
    last_date_with_fine: NaiveDate,
) -> u32 {
    if today <= last_date_without_fine {
        return 0;
    }
    if today > last_date_with_fine {
        return policy.max_fine;
    }
    let days_late = (today - last_date_without_fine).num_days() as u32;
    days_late * policy.daily_fine
}

/// Past the final deadline: the obligation is no longer payable and the
/// resident is eviction-eligible.
pub fn is_evictable(today: NaiveDate, last_date_with_fine: NaiveDate) -> bool {
    today > last_date_with_fine
}

/// Number of days in the month `date` falls in.
fn days_in_month(date: NaiveDate) -> u32 {
    let first = month_start(date);
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    }
    .expect("first of next month exists");
    (next_month - first).num_days() as u32
}

/// First-month rent prorated over the days remaining in the current
/// month, inclusive of `today`, rounded to the nearest unit.
pub fn prorated_rent(monthly_rent: u32, today: NaiveDate) -> u32 {
    let days = days_in_month(today);
    let days_remaining = days - today.day() + 1;
    let rent_per_day = monthly_rent as f64 / days as f64;
    (rent_per_day * days_remaining as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn policy() -> RentPolicyConfig {
        RentPolicyConfig::default()
    }

    #[test]
    fn test_month_start() {
        assert_eq!(month_start(d(2026, 3, 17)), d(2026, 3, 1));
        assert_eq!(month_start(d(2026, 3, 1)), d(2026, 3, 1));
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(d(2026, 1, 15)), "January");
        assert_eq!(month_name(d(2026, 12, 3)), "December");
    }

    #[test]
    fn test_same_month() {
        assert!(same_month(d(2026, 3, 1), d(2026, 3, 31)));
        assert!(!same_month(d(2026, 3, 1), d(2026, 4, 1)));
        // Same month number, different year
        assert!(!same_month(d(2025, 3, 1), d(2026, 3, 1)));
    }

    #[test]
    fn test_deadlines() {
        let (without, with) = deadlines(&policy(), d(2026, 3, 1));
        assert_eq!(without, d(2026, 3, 5));
        assert_eq!(with, d(2026, 3, 10));
    }

    #[test]
    fn test_fine_zero_through_grace_window() {
        let (without, with) = deadlines(&policy(), d(2026, 3, 1));
        // Days 0..=4 past the due date
        for day in 1..=5 {
            assert_eq!(fine_on(&policy(), d(2026, 3, day), without, with), 0);
        }
    }

    #[test]
    fn test_fine_escalates_daily_inside_fine_window() {
        let (without, with) = deadlines(&policy(), d(2026, 3, 1));
        assert_eq!(fine_on(&policy(), d(2026, 3, 6), without, with), 100);
        assert_eq!(fine_on(&policy(), d(2026, 3, 7), without, with), 200);
        assert_eq!(fine_on(&policy(), d(2026, 3, 8), without, with), 300);
        assert_eq!(fine_on(&policy(), d(2026, 3, 9), without, with), 400);
        assert_eq!(fine_on(&policy(), d(2026, 3, 10), without, with), 500);
    }

    #[test]
    fn test_fine_flat_past_fine_window() {
        let (without, with) = deadlines(&policy(), d(2026, 3, 1));
        assert_eq!(fine_on(&policy(), d(2026, 3, 11), without, with), 500);
        assert_eq!(fine_on(&policy(), d(2026, 3, 25), without, with), 500);
    }

    #[test]
    fn test_evictable_only_after_final_deadline() {
        let (_, with) = deadlines(&policy(), d(2026, 3, 1));
        assert!(!is_evictable(d(2026, 3, 10), with));
        assert!(is_evictable(d(2026, 3, 11), with));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(d(2026, 2, 10)), 28);
        assert_eq!(days_in_month(d(2024, 2, 10)), 29); // leap year
        assert_eq!(days_in_month(d(2026, 12, 25)), 31);
    }

    #[test]
    fn test_prorated_rent_full_month() {
        // Booking on the 1st pays the whole month.
        assert_eq!(prorated_rent(6200, d(2026, 3, 1)), 6200);
    }

    #[test]
    fn test_prorated_rent_mid_month() {
        // 31-day month, booking on the 17th: 15 days remain.
        // 6200 / 31 = 200 per day -> 3000.
        assert_eq!(prorated_rent(6200, d(2026, 3, 17)), 3000);
    }

    #[test]
    fn test_prorated_rent_last_day() {
        // One day remaining, rounded.
        assert_eq!(prorated_rent(6200, d(2026, 3, 31)), 200);
    }

    #[test]
    fn test_prorated_rent_rounds() {
        // 5000 / 30 = 166.67 per day; 2 days -> 333.33 -> 333.
        assert_eq!(prorated_rent(5000, d(2026, 4, 29)), 333);
    }
}
