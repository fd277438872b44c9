//! Billing simulation functionality.
//!
//! This module computes the full billing breakdown for a stay: the daily
//! rate, the total amount, and the discount relative to the base rate.

use std::time::Instant;

use rust_decimal::Decimal;

use crate::models::{
    AuditStep, AuditTrace, BedType, PaymentType, RateConfig, RateSimulation, RateTier,
};

use super::daily_rate::find_active_config;
use super::tier_lookup::find_applicable_tier;

/// A simulation together with the audit trace that produced it.
#[derive(Debug, Clone)]
pub struct AuditedSimulation {
    /// The billing breakdown.
    pub simulation: RateSimulation,
    /// The decisions made while computing it.
    pub audit_trace: AuditTrace,
}

/// The configuration and tier a simulation was computed from.
struct StayBreakdown<'a> {
    config: &'a RateConfig,
    tier: Option<&'a RateTier>,
    base_amount: Decimal,
    simulation: RateSimulation,
}

/// Computes the billing of a stay against an already resolved configuration.
///
/// Amounts saturate at `Decimal::MAX`/`Decimal::MIN` instead of panicking, so
/// `total_amount == daily_rate * days` only holds while the product fits.
fn compute_breakdown(config: &RateConfig, days: i64) -> StayBreakdown<'_> {
    let tier = find_applicable_tier(config, days);
    let (daily_rate, discount_percentage, label) = match tier {
        Some(t) => (t.rate, t.discount_percentage, t.label()),
        None => (config.base_rate, Decimal::ZERO, String::new()),
    };

    let day_count = Decimal::from(days);
    let total_amount = daily_rate.saturating_mul(day_count);
    let base_amount = config.base_rate.saturating_mul(day_count);
    let discount_amount = base_amount.saturating_sub(total_amount);

    StayBreakdown {
        config,
        tier,
        base_amount,
        simulation: RateSimulation {
            daily_rate,
            total_amount,
            discount_percentage,
            discount_amount,
            tier: Some(label),
        },
    }
}

/// Simulates the billing of a stay.
///
/// - `daily_rate` is the matched tier's rate, or the base rate when no tier matches
/// - `total_amount` is `daily_rate * days`
/// - `discount_amount` is `base_rate * days - total_amount` and is not clamped
/// - `discount_percentage` is read from the matched tier, never recomputed
///
/// When no active configuration exists for the pair, every amount is zero
/// and `tier` is `None`.
///
/// # Examples
///
/// ```
/// use daily_rate_engine::calculation::simulate_calculation;
/// use daily_rate_engine::models::{BedType, PaymentType, RateSimulation};
///
/// let result = simulate_calculation(&[], PaymentType::Sus, BedType::Standard, 10);
/// assert_eq!(result, RateSimulation::zero());
/// ```
pub fn simulate_calculation(
    configs: &[RateConfig],
    payment_type: PaymentType,
    bed_type: BedType,
    days: i64,
) -> RateSimulation {
    match find_active_config(configs, payment_type, bed_type) {
        Some(config) => compute_breakdown(config, days).simulation,
        None => RateSimulation::zero(),
    }
}

/// Simulates the billing of a stay and records each decision.
///
/// Produces the same [`RateSimulation`] as [`simulate_calculation`].
pub fn simulate_with_audit(
    configs: &[RateConfig],
    payment_type: PaymentType,
    bed_type: BedType,
    days: i64,
) -> AuditedSimulation {
    let start_time = Instant::now();
    let config = find_active_config(configs, payment_type, bed_type);
    let breakdown = config.map(|c| compute_breakdown(c, days));

    let mut steps = vec![AuditStep {
        step_number: 1,
        rule_id: "config_lookup".to_string(),
        rule_name: "Rate Configuration Lookup".to_string(),
        input: serde_json::json!({
            "payment_type": payment_type,
            "bed_type": bed_type,
            "candidates": configs.len()
        }),
        output: serde_json::json!({
            "config_id": config.map(|c| c.id.as_str()),
            "base_rate": config.map(|c| c.base_rate.to_string())
        }),
        reasoning: match config {
            Some(c) => format!(
                "Active configuration '{}' found for {}/{}",
                c.id, payment_type, bed_type
            ),
            None => format!(
                "No active configuration for {}/{}, reporting zero amounts",
                payment_type, bed_type
            ),
        },
    }];

    let Some(breakdown) = breakdown else {
        return AuditedSimulation {
            simulation: RateSimulation::zero(),
            audit_trace: AuditTrace {
                steps,
                duration_us: start_time.elapsed().as_micros() as u64,
            },
        };
    };

    let StayBreakdown {
        config,
        tier,
        base_amount,
        simulation,
    } = breakdown;

    steps.push(AuditStep {
        step_number: 2,
        rule_id: "tier_selection".to_string(),
        rule_name: "Daily Rate Tier Selection".to_string(),
        input: serde_json::json!({
            "days": days,
            "tier_count": config.tiers.len()
        }),
        output: serde_json::json!({
            "tier_id": tier.map(|t| t.id.as_str()),
            "daily_rate": simulation.daily_rate.to_string(),
            "discount_percentage": simulation.discount_percentage.to_string()
        }),
        reasoning: match tier {
            Some(t) => format!("{} days falls in tier {}: ${}/day", days, t.label(), t.rate),
            None => format!(
                "No tier covers {} days, using base rate ${}/day",
                days, config.base_rate
            ),
        },
    });

    steps.push(AuditStep {
        step_number: 3,
        rule_id: "amount_calculation".to_string(),
        rule_name: "Stay Amount Calculation".to_string(),
        input: serde_json::json!({
            "daily_rate": simulation.daily_rate.to_string(),
            "base_rate": config.base_rate.to_string(),
            "days": days
        }),
        output: serde_json::json!({
            "total_amount": simulation.total_amount.to_string(),
            "base_amount": base_amount.to_string(),
            "discount_amount": simulation.discount_amount.to_string()
        }),
        reasoning: format!(
            "${} x {} = ${}; base ${} - ${} = ${} discount",
            simulation.daily_rate,
            days,
            simulation.total_amount,
            base_amount,
            simulation.total_amount,
            simulation.discount_amount
        ),
    });

    AuditedSimulation {
        simulation,
        audit_trace: AuditTrace {
            steps,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    }
}
