use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{BillingError, BillingResult};
use crate::frequency::{adjust_amount_for_frequency, BillingFrequency};
use crate::periods::{generate_payment_periods, BillingPeriod};

/// Validate a caller-facing input struct, mapping validator errors into the
/// crate error type.
pub fn validate_input<T: Validate>(input: &T) -> BillingResult<()> {
    input
        .validate()
        .map_err(|errors| BillingError::UnprocessableInput(format!("Validation failed: {errors}")))
}

fn default_zero_offset() -> i32 {
    0
}

/// Property-level billing configuration, as stored on a property row.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BillingConfig {
    pub frequency: BillingFrequency,
    /// Days of the month charges fall on; required when `frequency` is
    /// `Custom`, ignored otherwise.
    #[validate(length(min = 1, max = 31))]
    pub custom_payment_days: Option<Vec<u32>>,
    /// Signed shift, in days, from a period's start to its due date
    /// (e.g. 5 = rent due five days into the period).
    #[serde(default = "default_zero_offset")]
    #[validate(range(min = -28, max = 28))]
    pub due_date_offset_days: i32,
}

/// The slice of a lease the scheduler needs: when it runs and the canonical
/// monthly rent.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LeaseTerms {
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    #[validate(range(min = 0.0))]
    pub monthly_rent: f64,
}

/// A billing period paired with the date its payment falls due. This is what
/// the billing router turns into a collection record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledPayment {
    pub period: BillingPeriod,
    pub due_on: NaiveDate,
}

/// Build the full payment schedule for a lease: adjust the canonical monthly
/// rent to the configured frequency, cover the lease range with pro-rated
/// billing periods, and stamp each period with its due date.
///
/// Unlike the raw period generator this is a validating entry point: lease
/// dates must be ordered and inputs must pass their declared validations.
pub fn generate_lease_schedule(
    terms: &LeaseTerms,
    config: &BillingConfig,
) -> BillingResult<Vec<ScheduledPayment>> {
    validate_input(terms)?;
    validate_input(config)?;
    if terms.ends_on < terms.starts_on {
        return Err(BillingError::InvalidConfiguration(format!(
            "Lease ends_on {} precedes starts_on {}",
            terms.ends_on, terms.starts_on
        )));
    }

    let per_period_amount = adjust_amount_for_frequency(terms.monthly_rent, config.frequency);
    let periods = generate_payment_periods(
        terms.starts_on,
        terms.ends_on,
        per_period_amount,
        config.frequency,
        config.custom_payment_days.as_deref(),
    )?;

    let offset = Duration::days(config.due_date_offset_days.into());
    let schedule: Vec<ScheduledPayment> = periods
        .map(|period| ScheduledPayment {
            due_on: period.starts_on + offset,
            period,
        })
        .collect();

    tracing::debug!(
        payments = schedule.len(),
        frequency = config.frequency.as_str(),
        "Generated lease payment schedule"
    );

    Ok(schedule)
}
