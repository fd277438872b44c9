//! Structural validation for rate configurations.
//!
//! Applied when a rate table is loaded and whenever the store accepts a
//! write. The calculator does not call into this module.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{RateConfig, RateTier};

fn invalid(field: impl Into<String>, message: impl Into<String>) -> EngineError {
    EngineError::InvalidRateConfig {
        field: field.into(),
        message: message.into(),
    }
}

fn ranges_overlap(a: &RateTier, b: &RateTier) -> bool {
    let a_max = a.max_days.unwrap_or(i64::MAX);
    let b_max = b.max_days.unwrap_or(i64::MAX);
    a.min_days <= b_max && b.min_days <= a_max
}

/// Checks the structural rules a stored rate configuration must satisfy.
///
/// - `base_rate` is not negative
/// - every tier starts at day one or later
/// - a bounded tier's `max_days` is not less than its `min_days`
/// - tier rates are not negative
/// - discount percentages lie within 0 to 100
/// - no two tiers cover the same day
///
/// The consistency between a tier's `discount_percentage` and its rate is
/// not checked.
pub fn validate_rate_config(config: &RateConfig) -> EngineResult<()> {
    if config.base_rate < Decimal::ZERO {
        return Err(invalid("base_rate", "must not be negative"));
    }

    for (i, tier) in config.tiers.iter().enumerate() {
        if tier.min_days < 1 {
            return Err(invalid(format!("tiers[{}].min_days", i), "must be at least 1"));
        }
        if let Some(max) = tier.max_days {
            if max < tier.min_days {
                return Err(invalid(
                    format!("tiers[{}].max_days", i),
                    "must not be less than min_days",
                ));
            }
        }
        if tier.rate < Decimal::ZERO {
            return Err(invalid(format!("tiers[{}].rate", i), "must not be negative"));
        }
        if tier.discount_percentage < Decimal::ZERO
            || tier.discount_percentage > Decimal::ONE_HUNDRED
        {
            return Err(invalid(
                format!("tiers[{}].discount_percentage", i),
                "must be between 0 and 100",
            ));
        }
    }

    for (i, a) in config.tiers.iter().enumerate() {
        for (j, b) in config.tiers.iter().enumerate().skip(i + 1) {
            if ranges_overlap(a, b) {
                return Err(invalid(
                    "tiers",
                    format!("tier {} ({}) overlaps tier {} ({})", i, a.label(), j, b.label()),
                ));
            }
        }
    }

    Ok(())
}
