use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::error::{BillingError, BillingResult};
use crate::frequency::BillingFrequency;

/// Gregorian leap-year rule: divisible by 4, except centuries not divisible
/// by 400.
pub(crate) fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Length of a calendar month (1-based).
pub(crate) fn days_in_month(year: i32, month: u32) -> i64 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if is_leap_year(year) => 29,
        _ => 28,
    }
}

/// Whole days from `start` to `end`. Negative when the range is inverted;
/// callers that need a guard layer one on top of this single helper.
pub(crate) fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Calendar-month addition with chrono's clamping semantics
/// (Jan 31 + 1 month = Feb 28/29).
fn add_months(date: NaiveDate, months: u32) -> BillingResult<NaiveDate> {
    date.checked_add_months(Months::new(months)).ok_or_else(|| {
        BillingError::InvalidConfiguration(format!("Date out of range: {date} + {months} months"))
    })
}

/// Next occurrence of a charge after `current` at the given frequency.
///
/// For [`BillingFrequency::Custom`] the next charge falls on the smallest
/// listed day strictly after `current`'s day of month; when none remains in
/// the month, the schedule rolls over to the smallest listed day of the next
/// month. A missing or empty day list is an `InvalidConfiguration` error.
pub fn calculate_next_payment_date(
    current: NaiveDate,
    frequency: BillingFrequency,
    custom_days: Option<&[u32]>,
) -> BillingResult<NaiveDate> {
    match frequency {
        BillingFrequency::Daily => Ok(current + Duration::days(1)),
        BillingFrequency::Weekly => Ok(current + Duration::days(7)),
        BillingFrequency::Biweekly => Ok(current + Duration::days(14)),
        BillingFrequency::Monthly => add_months(current, 1),
        BillingFrequency::Quarterly => add_months(current, 3),
        BillingFrequency::Semiannual => add_months(current, 6),
        BillingFrequency::Annual => add_months(current, 12),
        BillingFrequency::Custom => {
            let days = validated_custom_days(custom_days)?;
            next_custom_day(current, &days)
        }
    }
}

/// Validate a custom day-of-month list: present, non-empty, all within 1–31.
/// Returns the days sorted ascending with duplicates removed.
pub(crate) fn validated_custom_days(custom_days: Option<&[u32]>) -> BillingResult<Vec<u32>> {
    let days = custom_days.unwrap_or_default();
    if days.is_empty() {
        return Err(BillingError::InvalidConfiguration(
            "CUSTOM billing frequency requires a non-empty custom_payment_days list".to_string(),
        ));
    }
    if let Some(bad) = days.iter().find(|day| !(1..=31).contains(*day)) {
        return Err(BillingError::InvalidConfiguration(format!(
            "custom_payment_days entries must be between 1 and 31, got {bad}"
        )));
    }
    let mut sorted = days.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    Ok(sorted)
}

/// `days` must be sorted, deduplicated and within 1–31.
fn next_custom_day(current: NaiveDate, days: &[u32]) -> BillingResult<NaiveDate> {
    if let Some(day) = days.iter().copied().find(|&day| day > current.day()) {
        let candidate = clamped_day_in_month(current.year(), current.month(), day);
        // A list like [30] anchored on Feb 28 clamps back onto the cursor;
        // fall through to the rollover so the schedule always moves forward.
        if candidate > current {
            return Ok(candidate);
        }
    }
    let next_month = add_months(first_of_month(current), 1)?;
    Ok(clamped_day_in_month(
        next_month.year(),
        next_month.month(),
        days[0],
    ))
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn clamped_day_in_month(year: i32, month: u32, day: u32) -> NaiveDate {
    let last = days_in_month(year, month) as u32;
    NaiveDate::from_ymd_opt(year, month, day.min(last)).expect("clamped day fits its month")
}

/// Number of calendar days in one billing period anchored at `date`.
///
/// Monthly (and custom, as a monthly approximation) periods use the anchor
/// month's length. Quarterly and semiannual periods sum the months of the
/// calendar quarter / half-year containing the anchor: quarters start in
/// Jan, Apr, Jul and Oct, half-years in Jan and Jul. Annual periods are
/// leap-year aware.
pub fn days_in_period(date: NaiveDate, frequency: BillingFrequency) -> i64 {
    match frequency {
        BillingFrequency::Daily => 1,
        BillingFrequency::Weekly => 7,
        BillingFrequency::Biweekly => 14,
        BillingFrequency::Monthly | BillingFrequency::Custom => {
            days_in_month(date.year(), date.month())
        }
        BillingFrequency::Quarterly => aligned_span_days(date, 3),
        BillingFrequency::Semiannual => aligned_span_days(date, 6),
        BillingFrequency::Annual => {
            if is_leap_year(date.year()) {
                366
            } else {
                365
            }
        }
    }
}

/// Sum of month lengths for the `span`-month block containing `date`,
/// aligned to calendar boundaries.
fn aligned_span_days(date: NaiveDate, span: u32) -> i64 {
    let start_month0 = (date.month0() / span) * span;
    (0..span)
        .map(|offset| days_in_month(date.year(), start_month0 + offset + 1))
        .sum()
}
