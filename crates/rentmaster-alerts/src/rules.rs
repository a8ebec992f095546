//! Threshold table and per-field evaluators
//!
//! All temporal reasoning of the engine lives here; the derivation layer only
//! assembles notifications from what these evaluators return.

use chrono::{Datelike, NaiveDate};

use crate::types::AlertState;

/// Days of advance notice for the per-category payment rule
pub const PAYMENT_NOTICE_DAYS: i32 = 1;
/// Warning window before a contract expires
pub const CONTRACT_NOTICE_DAYS: i64 = 30;
/// Warning window before a tenant visa expires
pub const VISA_NOTICE_DAYS: i64 = 14;

/// Evaluate one payment category's day-of-month against today.
///
/// `None` when the day is unset, the category is already paid, or today is
/// still outside the notice window. This compares day-of-month only — it does
/// not account for month rollover (day 31 in a 30-day month, or a due day
/// early next month), matching the behavior of the stored schedule's
/// consumers to date.
pub fn evaluate_payment_day(
    day: Option<u8>,
    is_paid: bool,
    today: NaiveDate,
) -> Option<AlertState> {
    let day = day?;
    if is_paid {
        return None;
    }

    let diff = i32::from(day) - today.day() as i32;
    if diff == PAYMENT_NOTICE_DAYS {
        Some(AlertState::Pre)
    } else if diff == 0 {
        Some(AlertState::Today)
    } else if diff < 0 {
        Some(AlertState::Overdue(diff.unsigned_abs()))
    } else {
        None
    }
}

/// Whole days from `today` until `expiry`, if the date falls inside the
/// warning window `0..=window_days`.
///
/// Already-expired dates (negative diff) return `None`: the window rule cuts
/// off once the date has passed.
pub fn within_expiry_window(
    expiry: NaiveDate,
    today: NaiveDate,
    window_days: i64,
) -> Option<i64> {
    let diff = (expiry - today).num_days();
    (0..=window_days).contains(&diff).then_some(diff)
}
