//! Tier selection functionality.
//!
//! This module provides the lookup that maps a stay length onto one of a
//! rate configuration's day-range tiers.

use crate::models::{RateConfig, RateTier};

/// Finds the tier that applies to a stay of `days`.
///
/// Tiers are scanned in list order and the first one whose range contains
/// `days` is returned. The list is not sorted first, so when ranges overlap
/// the earliest-listed tier takes precedence. Returns `None` when no tier
/// matches, in which case the caller charges the configuration's base rate.
///
/// # Examples
///
/// ```
/// use daily_rate_engine::calculation::find_applicable_tier;
/// use daily_rate_engine::models::{BedType, PaymentType, RateConfig, RateTier};
/// use rust_decimal::Decimal;
///
/// let config = RateConfig {
///     id: "cfg_1".to_string(),
///     payment_type: PaymentType::Private,
///     bed_type: BedType::Standard,
///     base_rate: Decimal::from(350),
///     is_active: true,
///     tiers: vec![RateTier {
///         id: "tier_1".to_string(),
///         config_id: "cfg_1".to_string(),
///         min_days: 1,
///         max_days: Some(30),
///         rate: Decimal::from(350),
///         discount_percentage: Decimal::ZERO,
///     }],
/// };
///
/// assert!(find_applicable_tier(&config, 15).is_some());
/// assert!(find_applicable_tier(&config, 31).is_none());
/// ```
pub fn find_applicable_tier(config: &RateConfig, days: i64) -> Option<&RateTier> {
    config.tiers.iter().find(|tier| tier.contains_day(days))
}
