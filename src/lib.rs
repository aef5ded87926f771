//! Pure scheduling and proration engine for Casaora's recurring rent billing.
//!
//! This crate computes next-due-dates across heterogeneous billing
//! frequencies, pro-rates partial periods, converts canonical monthly amounts
//! between frequencies, assembles full lease payment schedules, selects
//! duration-keyed room price tiers, and classifies collection reminder
//! milestones.
//!
//! Everything here is synchronous, deterministic and side-effect free: the
//! engine consumes plain value types ([`BillingConfig`], [`LeaseTerms`],
//! [`PriceTier`]) and returns plain value types ([`BillingPeriod`],
//! [`ScheduledPayment`]). Persistence, notification dispatch and presentation
//! belong to the callers (billing routers, the collection cycle, UI), which
//! may invoke these functions concurrently without coordination.

mod calendar;
mod error;
mod frequency;
mod periods;
mod pricing;
mod proration;
mod reminders;
mod schedule;

pub use calendar::{calculate_next_payment_date, days_in_period};
pub use error::{BillingError, BillingResult};
pub use frequency::{adjust_amount_for_frequency, BillingFrequency};
pub use periods::{generate_payment_periods, BillingPeriod, PaymentPeriods};
pub use pricing::{
    calculate_price_with_frequency, calculate_total_lease_price,
    find_appropriate_room_price_tier, PriceTier,
};
pub use proration::calculate_pro_rated_amount;
pub use reminders::{days_until_due, reminder_for, ReminderKind};
pub use schedule::{
    generate_lease_schedule, validate_input, BillingConfig, LeaseTerms, ScheduledPayment,
};
