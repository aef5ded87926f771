use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{calculate_next_payment_date, validated_custom_days};
use crate::error::BillingResult;
use crate::frequency::BillingFrequency;
use crate::proration::calculate_pro_rated_amount;

/// One billing period in a generated schedule. Immutable once produced; the
/// caller decides whether it becomes a collection record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingPeriod {
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub amount: f64,
}

/// Lazy, finite iterator over the billing periods covering a date range.
///
/// Periods are contiguous and non-overlapping, and the final period is
/// clamped to the requested end date. The iterator is deterministic for its
/// inputs; restarting means cloning or recreating it.
#[derive(Debug, Clone)]
pub struct PaymentPeriods {
    cursor: NaiveDate,
    ends_on: NaiveDate,
    base_amount: f64,
    frequency: BillingFrequency,
    custom_days: Option<Vec<u32>>,
}

impl Iterator for PaymentPeriods {
    type Item = BillingPeriod;

    fn next(&mut self) -> Option<BillingPeriod> {
        if self.cursor >= self.ends_on {
            return None;
        }
        // Cannot fail: custom day lists are validated at construction. The
        // ok()? only trips on calendar overflow, which ends the sequence.
        let period_end =
            calculate_next_payment_date(self.cursor, self.frequency, self.custom_days.as_deref())
                .ok()?;
        let clamped = period_end.min(self.ends_on);
        let period = BillingPeriod {
            starts_on: self.cursor,
            ends_on: clamped,
            amount: calculate_pro_rated_amount(
                self.base_amount,
                self.cursor,
                clamped,
                self.frequency,
            ),
        };
        self.cursor = period_end;
        Some(period)
    }
}

/// Billing periods covering `[starts_on, ends_on)` at the given frequency,
/// each pro-rated from `base_amount` (the full-period amount).
///
/// Fails with [`crate::BillingError::InvalidConfiguration`] when `frequency`
/// is `Custom` and `custom_days` is missing or empty; the day list is
/// validated once here so iteration itself cannot fail.
pub fn generate_payment_periods(
    starts_on: NaiveDate,
    ends_on: NaiveDate,
    base_amount: f64,
    frequency: BillingFrequency,
    custom_days: Option<&[u32]>,
) -> BillingResult<PaymentPeriods> {
    let custom_days = match frequency {
        BillingFrequency::Custom => Some(validated_custom_days(custom_days)?),
        _ => None,
    };
    Ok(PaymentPeriods {
        cursor: starts_on,
        ends_on,
        base_amount,
        frequency,
        custom_days,
    })
}
