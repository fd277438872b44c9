//! Simulation result models.
//!
//! This module contains the [`RateSimulation`] type produced by the rate
//! calculator and the audit types that record how a result was reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The billing breakdown for a stay.
///
/// `tier` is `None` when no active configuration matched at all, and an empty
/// string when a configuration matched but its base rate applied.
///
/// # Example
///
/// ```
/// use daily_rate_engine::models::RateSimulation;
/// use rust_decimal::Decimal;
///
/// let simulation = RateSimulation::zero();
/// assert_eq!(simulation.total_amount, Decimal::ZERO);
/// assert!(simulation.tier.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateSimulation {
    /// The per-day rate applied.
    pub daily_rate: Decimal,
    /// `daily_rate * days`.
    pub total_amount: Decimal,
    /// The discount percentage stored on the matched tier.
    pub discount_percentage: Decimal,
    /// `base_rate * days - total_amount`. Negative when the tier rate exceeds the base rate.
    pub discount_amount: Decimal,
    /// Label of the matched tier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
}

impl RateSimulation {
    /// The result reported when no active configuration matches.
    pub fn zero() -> Self {
        Self {
            daily_rate: Decimal::ZERO,
            total_amount: Decimal::ZERO,
            discount_percentage: Decimal::ZERO,
            discount_amount: Decimal::ZERO,
            tier: None,
        }
    }
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_simulation_serializes_camel_case() {
        let simulation = RateSimulation {
            daily_rate: dec("180.00"),
            total_amount: dec("1800.00"),
            discount_percentage: Decimal::ZERO,
            discount_amount: Decimal::ZERO,
            tier: Some("1+ dias".to_string()),
        };

        let json = serde_json::to_value(&simulation).unwrap();
        assert_eq!(json["dailyRate"], "180.00");
        assert_eq!(json["totalAmount"], "1800.00");
        assert_eq!(json["discountPercentage"], "0");
        assert_eq!(json["discountAmount"], "0");
        assert_eq!(json["tier"], "1+ dias");
    }

    #[test]
    fn test_zero_simulation_omits_tier() {
        let json = serde_json::to_string(&RateSimulation::zero()).unwrap();
        assert!(!json.contains("tier"));
    }

    #[test]
    fn test_empty_tier_label_is_serialized() {
        let simulation = RateSimulation {
            tier: Some(String::new()),
            ..RateSimulation::zero()
        };
        let json = serde_json::to_value(&simulation).unwrap();
        assert_eq!(json["tier"], "");
    }

    #[test]
    fn test_audit_trace_round_trip() {
        let trace = AuditTrace {
            steps: vec![AuditStep {
                step_number: 1,
                rule_id: "config_lookup".to_string(),
                rule_name: "Rate Configuration Lookup".to_string(),
                input: serde_json::json!({ "payment_type": "PRIVATE" }),
                output: serde_json::json!({ "config_id": "cfg_001" }),
                reasoning: "Found active configuration cfg_001".to_string(),
            }],
            duration_us: 12,
        };

        let json = serde_json::to_string(&trace).unwrap();
        let deserialized: AuditTrace = serde_json::from_str(&json).unwrap();
        assert_eq!(trace, deserialized);
    }
}
