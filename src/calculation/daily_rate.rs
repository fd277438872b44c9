//! Daily rate lookup functionality.
//!
//! This module resolves the per-day rate for a (payment type, bed type) pair
//! and a stay length from a snapshot of rate configurations.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{BedType, PaymentType, RateConfig};

use super::tier_lookup::find_applicable_tier;

/// Finds the first active configuration for a payment type and bed type.
///
/// When more than one active configuration exists for the pair, the first
/// one in `configs` is returned.
pub fn find_active_config(
    configs: &[RateConfig],
    payment_type: PaymentType,
    bed_type: BedType,
) -> Option<&RateConfig> {
    configs
        .iter()
        .find(|config| config.applies_to(payment_type, bed_type))
}

/// Determines the daily rate for a stay.
///
/// The rate is resolved as follows:
/// 1. If no active configuration exists for the pair, the rate is zero
/// 2. Otherwise, the rate of the first tier containing `days` is used
/// 3. If no tier contains `days`, the configuration's base rate is used
///
/// `days` is not validated; zero or negative values usually fall through to
/// the base rate because tiers start at day one.
///
/// # Examples
///
/// ```
/// use daily_rate_engine::calculation::calculate_rate;
/// use daily_rate_engine::models::{BedType, PaymentType};
/// use rust_decimal::Decimal;
///
/// let rate = calculate_rate(&[], PaymentType::Private, BedType::Standard, 15);
/// assert_eq!(rate, Decimal::ZERO);
/// ```
pub fn calculate_rate(
    configs: &[RateConfig],
    payment_type: PaymentType,
    bed_type: BedType,
    days: i64,
) -> Decimal {
    let Some(config) = find_active_config(configs, payment_type, bed_type) else {
        debug!(%payment_type, %bed_type, "No active rate configuration");
        return Decimal::ZERO;
    };

    match find_applicable_tier(config, days) {
        Some(tier) => tier.rate,
        None => {
            debug!(config_id = %config.id, days, "No tier matched, using base rate");
            config.base_rate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RateTier;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_config(
        id: &str,
        payment_type: PaymentType,
        bed_type: BedType,
        base_rate: &str,
        is_active: bool,
        tiers: &[(i64, Option<i64>, &str)],
    ) -> RateConfig {
        RateConfig {
            id: id.to_string(),
            payment_type,
            bed_type,
            base_rate: dec(base_rate),
            is_active,
            tiers: tiers
                .iter()
                .enumerate()
                .map(|(i, (min_days, max_days, rate))| RateTier {
                    id: format!("{}_tier_{}", id, i + 1),
                    config_id: id.to_string(),
                    min_days: *min_days,
                    max_days: *max_days,
                    rate: dec(rate),
                    discount_percentage: Decimal::ZERO,
                })
                .collect(),
        }
    }

    fn create_test_configs() -> Vec<RateConfig> {
        vec![
            create_config(
                "private_standard",
                PaymentType::Private,
                BedType::Standard,
                "350.00",
                true,
                &[
                    (1, Some(30), "350.00"),
                    (31, Some(60), "315.00"),
                    (61, Some(90), "280.00"),
                    (91, None, "245.00"),
                ],
            ),
            create_config(
                "insurance_icu",
                PaymentType::Insurance,
                BedType::Icu,
                "650.00",
                false,
                &[(1, None, "650.00")],
            ),
        ]
    }

    #[test]
    fn test_rate_from_first_tier() {
        let configs = create_test_configs();
        let rate = calculate_rate(&configs, PaymentType::Private, BedType::Standard, 15);
        assert_eq!(rate, dec("350.00"));
    }

    #[test]
    fn test_rate_from_open_ended_tier() {
        let configs = create_test_configs();
        let rate = calculate_rate(&configs, PaymentType::Private, BedType::Standard, 100);
        assert_eq!(rate, dec("245.00"));
    }

    #[test]
    fn test_no_config_returns_zero() {
        let configs = create_test_configs();
        let rate = calculate_rate(&configs, PaymentType::Sus, BedType::Standard, 10);
        assert_eq!(rate, Decimal::ZERO);
    }

    #[test]
    fn test_inactive_config_is_ignored() {
        let configs = create_test_configs();
        let rate = calculate_rate(&configs, PaymentType::Insurance, BedType::Icu, 10);
        assert_eq!(rate, Decimal::ZERO);
    }

    #[test]
    fn test_empty_tiers_use_base_rate() {
        let configs = vec![create_config(
            "sus_icu",
            PaymentType::Sus,
            BedType::Icu,
            "500.00",
            true,
            &[],
        )];
        let rate = calculate_rate(&configs, PaymentType::Sus, BedType::Icu, 7);
        assert_eq!(rate, dec("500.00"));
    }

    #[test]
    fn test_zero_days_falls_back_to_base_rate() {
        let configs = create_test_configs();
        let rate = calculate_rate(&configs, PaymentType::Private, BedType::Standard, 0);
        assert_eq!(rate, dec("350.00"));
    }

    #[test]
    fn test_first_active_config_wins() {
        let configs = vec![
            create_config("a", PaymentType::Sus, BedType::Standard, "100.00", false, &[]),
            create_config("b", PaymentType::Sus, BedType::Standard, "180.00", true, &[]),
            create_config("c", PaymentType::Sus, BedType::Standard, "999.00", true, &[]),
        ];

        let found = find_active_config(&configs, PaymentType::Sus, BedType::Standard).unwrap();
        assert_eq!(found.id, "b");
        assert_eq!(
            calculate_rate(&configs, PaymentType::Sus, BedType::Standard, 3),
            dec("180.00")
        );
    }
}
