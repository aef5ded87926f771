use serde::{Deserialize, Serialize};

use crate::frequency::{adjust_amount_for_frequency, BillingFrequency};

/// A duration-keyed price option for a room: the total price for committing
/// to `duration_months` months (e.g. a cheaper effective monthly rate on a
/// six-month commitment).
///
/// At most one tier per room should carry `is_default`; the selector does not
/// enforce that invariant, it simply picks the first default it finds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTier {
    pub id: String,
    pub room_id: String,
    /// Lease duration in months this tier prices, at least 1.
    pub duration_months: u32,
    /// Total price for the full tier duration, non-negative.
    pub price: f64,
    #[serde(default)]
    pub is_default: bool,
}

/// Pick the tier that best matches a requested lease duration.
///
/// An exact duration match wins regardless of defaults; otherwise the first
/// default tier; otherwise the closest tier not exceeding the requested
/// duration, falling back to the shortest tier when every tier exceeds it.
/// An empty tier set yields `None`, never an error.
pub fn find_appropriate_room_price_tier(
    tiers: &[PriceTier],
    lease_duration_months: u32,
) -> Option<&PriceTier> {
    if let Some(exact) = tiers
        .iter()
        .find(|tier| tier.duration_months == lease_duration_months)
    {
        return Some(exact);
    }
    if let Some(default) = tiers.iter().find(|tier| tier.is_default) {
        return Some(default);
    }

    let mut sorted: Vec<&PriceTier> = tiers.iter().collect();
    sorted.sort_by_key(|tier| tier.duration_months);
    let mut candidate = *sorted.first()?;
    for tier in sorted {
        if tier.duration_months <= lease_duration_months {
            candidate = tier;
        }
    }
    Some(candidate)
}

/// Monthly-equivalent price for a tier when applied to a lease of
/// `lease_duration_months`.
fn adjusted_monthly_price(tier: &PriceTier, lease_duration_months: u32) -> f64 {
    let monthly_price = tier.price / tier.duration_months as f64;
    // Implied discount embedded in non-uniform tier pricing. With a single
    // total price per tier this reduces to zero; kept so repriced legacy
    // tiers keep their historical behavior.
    let discount = 1.0 - tier.price / (monthly_price * tier.duration_months as f64);
    if lease_duration_months == tier.duration_months {
        monthly_price
    } else {
        monthly_price * (1.0 - discount)
    }
}

/// Per-period price for a tier at the target billing frequency. A missing
/// tier prices at zero.
pub fn calculate_price_with_frequency(
    tier: Option<&PriceTier>,
    frequency: BillingFrequency,
    lease_duration_months: u32,
) -> f64 {
    match tier {
        Some(tier) => adjust_amount_for_frequency(
            adjusted_monthly_price(tier, lease_duration_months),
            frequency,
        ),
        None => 0.0,
    }
}

/// Total cost of the lease at the tier's monthly-equivalent price. No
/// frequency adjustment is applied. A missing tier prices at zero.
pub fn calculate_total_lease_price(tier: Option<&PriceTier>, lease_duration_months: u32) -> f64 {
    match tier {
        Some(tier) => adjusted_monthly_price(tier, lease_duration_months) * lease_duration_months as f64,
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(id: &str, duration_months: u32, price: f64, is_default: bool) -> PriceTier {
        PriceTier {
            id: id.to_string(),
            room_id: "room-1".to_string(),
            duration_months,
            price,
            is_default,
        }
    }

    fn sample_tiers() -> Vec<PriceTier> {
        vec![
            tier("t-1m", 1, 1_000_000.0, true),
            tier("t-6m", 6, 5_400_000.0, false),
        ]
    }

    #[test]
    fn exact_duration_match_beats_the_default() {
        let tiers = sample_tiers();
        let selected = find_appropriate_room_price_tier(&tiers, 6).unwrap();
        assert_eq!(selected.id, "t-6m");
    }

    #[test]
    fn falls_back_to_the_default_tier() {
        let tiers = sample_tiers();
        let selected = find_appropriate_room_price_tier(&tiers, 3).unwrap();
        assert_eq!(selected.id, "t-1m");
    }

    #[test]
    fn without_a_default_picks_the_closest_shorter_tier() {
        let tiers = vec![
            tier("t-3m", 3, 2_700_000.0, false),
            tier("t-6m", 6, 5_100_000.0, false),
            tier("t-12m", 12, 9_600_000.0, false),
        ];
        let selected = find_appropriate_room_price_tier(&tiers, 8).unwrap();
        assert_eq!(selected.id, "t-6m");
    }

    #[test]
    fn when_every_tier_is_longer_the_shortest_wins() {
        let tiers = vec![
            tier("t-6m", 6, 5_100_000.0, false),
            tier("t-12m", 12, 9_600_000.0, false),
        ];
        let selected = find_appropriate_room_price_tier(&tiers, 2).unwrap();
        assert_eq!(selected.id, "t-6m");
    }

    #[test]
    fn empty_tier_set_selects_nothing_and_prices_at_zero() {
        assert!(find_appropriate_room_price_tier(&[], 12).is_none());
        assert_eq!(calculate_total_lease_price(None, 12), 0.0);
        assert_eq!(
            calculate_price_with_frequency(None, BillingFrequency::Monthly, 12),
            0.0
        );
    }

    #[test]
    fn matching_duration_prices_at_the_tier_monthly_rate() {
        let six = tier("t-6m", 6, 5_400_000.0, false);
        let monthly = calculate_price_with_frequency(Some(&six), BillingFrequency::Monthly, 6);
        assert!((monthly - 900_000.0).abs() < 1e-6);
    }

    #[test]
    fn non_matching_duration_still_uses_the_monthly_equivalent() {
        // The implied discount is zero, so the adjusted price equals the
        // tier's monthly rate.
        let six = tier("t-6m", 6, 5_400_000.0, false);
        let monthly = calculate_price_with_frequency(Some(&six), BillingFrequency::Monthly, 4);
        assert!((monthly - 900_000.0).abs() < 1e-6);
    }

    #[test]
    fn frequency_adjustment_applies_to_the_tier_price() {
        let one = tier("t-1m", 1, 1_040_000.0, true);
        let weekly = calculate_price_with_frequency(Some(&one), BillingFrequency::Weekly, 1);
        assert!((weekly - 1_040_000.0 * 12.0 / 52.0).abs() < 1e-6);
        let quarterly = calculate_price_with_frequency(Some(&one), BillingFrequency::Quarterly, 1);
        assert!((quarterly - 3_120_000.0).abs() < 1e-6);
    }

    #[test]
    fn total_lease_price_multiplies_out_the_duration() {
        let six = tier("t-6m", 6, 5_400_000.0, false);
        let total = calculate_total_lease_price(Some(&six), 12);
        assert!((total - 10_800_000.0).abs() < 1e-6);

        // At the tier's own duration the total is the tier price itself.
        let own = calculate_total_lease_price(Some(&six), 6);
        assert!((own - 5_400_000.0).abs() < 1e-6);
    }
}
