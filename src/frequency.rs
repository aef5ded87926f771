use serde::{Deserialize, Serialize};

use crate::error::BillingError;

/// How often a charge recurs.
///
/// This enum is owned by the billing core; callers map the storage
/// representation (the Postgres `billing_frequency` enum) to and from it at
/// the boundary. The serde spelling matches the storage spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingFrequency {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
    Semiannual,
    Annual,
    /// Charges fall on an explicit list of days of the month. A non-empty
    /// `custom_payment_days` list must accompany this variant everywhere it
    /// is used; absence is an error, never a silent default.
    Custom,
}

impl BillingFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "DAILY",
            Self::Weekly => "WEEKLY",
            Self::Biweekly => "BIWEEKLY",
            Self::Monthly => "MONTHLY",
            Self::Quarterly => "QUARTERLY",
            Self::Semiannual => "SEMIANNUAL",
            Self::Annual => "ANNUAL",
            Self::Custom => "CUSTOM",
        }
    }
}

impl std::str::FromStr for BillingFrequency {
    type Err = BillingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "DAILY" => Ok(Self::Daily),
            "WEEKLY" => Ok(Self::Weekly),
            // Older rows carry the two-word spellings; accept both, emit one.
            "BIWEEKLY" | "BI_WEEKLY" => Ok(Self::Biweekly),
            "MONTHLY" => Ok(Self::Monthly),
            "QUARTERLY" => Ok(Self::Quarterly),
            "SEMIANNUAL" | "SEMI_ANNUAL" => Ok(Self::Semiannual),
            "ANNUAL" => Ok(Self::Annual),
            "CUSTOM" => Ok(Self::Custom),
            other => Err(BillingError::InvalidConfiguration(format!(
                "Unknown billing frequency: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for BillingFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a canonical monthly amount into the equivalent amount at another
/// frequency, using fixed calendar-average ratios (weekly = monthly × 12/52,
/// biweekly = monthly × 12/26). `Custom` schedules bill the monthly base.
pub fn adjust_amount_for_frequency(monthly_amount: f64, frequency: BillingFrequency) -> f64 {
    match frequency {
        BillingFrequency::Daily => monthly_amount / 30.0,
        BillingFrequency::Weekly => monthly_amount * 12.0 / 52.0,
        BillingFrequency::Biweekly => monthly_amount * 12.0 / 26.0,
        BillingFrequency::Monthly | BillingFrequency::Custom => monthly_amount,
        BillingFrequency::Quarterly => monthly_amount * 3.0,
        BillingFrequency::Semiannual => monthly_amount * 6.0,
        BillingFrequency::Annual => monthly_amount * 12.0,
    }
}
