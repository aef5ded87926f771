use chrono::NaiveDate;

use crate::calendar::{days_between, days_in_period};
use crate::frequency::BillingFrequency;

/// Amount owed for the partial period `[starts_on, ends_on)`, scaling
/// `base_amount` linearly by elapsed days over the full period length at the
/// given frequency. Covering exactly one full period returns `base_amount`
/// (up to floating point).
///
/// The range is not validated: an inverted range produces a negative amount.
/// The billing routers that call this guarantee ordering; the lease schedule
/// in [`crate::schedule`] adds the guard for external input.
pub fn calculate_pro_rated_amount(
    base_amount: f64,
    starts_on: NaiveDate,
    ends_on: NaiveDate,
    frequency: BillingFrequency,
) -> f64 {
    let total_days = days_in_period(starts_on, frequency);
    let actual_days = days_between(starts_on, ends_on);
    if actual_days < 0 {
        tracing::warn!(%starts_on, %ends_on, "Pro-rating an inverted date range");
    }
    base_amount * actual_days as f64 / total_days as f64
}
