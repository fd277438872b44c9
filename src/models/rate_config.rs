//! Rate configuration models.
//!
//! This module defines the [`RateConfig`] and [`RateTier`] types that make up
//! the daily-rate lookup table, along with the closed [`PaymentType`] and
//! [`BedType`] categories that key it.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The payer category for an admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    /// Self-paying patient.
    Private,
    /// Private health insurance.
    Insurance,
    /// Public health system (Sistema Único de Saúde).
    Sus,
}

impl PaymentType {
    /// Returns the wire identifier for this payment type.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Private => "PRIVATE",
            PaymentType::Insurance => "INSURANCE",
            PaymentType::Sus => "SUS",
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of bed an admission occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BedType {
    /// General ward bed.
    Standard,
    /// Intensive care unit bed.
    Icu,
}

impl BedType {
    /// Returns the wire identifier for this bed type.
    pub fn as_str(&self) -> &'static str {
        match self {
            BedType::Standard => "STANDARD",
            BedType::Icu => "ICU",
        }
    }
}

impl fmt::Display for BedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A day-count range with its own per-day rate.
///
/// Both bounds are inclusive. A tier without `max_days` is open-ended and
/// matches every stay of at least `min_days`.
///
/// # Example
///
/// ```
/// use daily_rate_engine::models::RateTier;
/// use rust_decimal::Decimal;
///
/// let tier = RateTier {
///     id: "tier_1".to_string(),
///     config_id: "cfg_1".to_string(),
///     min_days: 31,
///     max_days: Some(60),
///     rate: Decimal::new(31500, 2),
///     discount_percentage: Decimal::from(10),
/// };
///
/// assert!(tier.contains_day(45));
/// assert!(!tier.contains_day(61));
/// assert_eq!(tier.label(), "31-60 dias");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTier {
    /// Unique identifier for the tier.
    pub id: String,
    /// The ID of the rate configuration this tier belongs to.
    pub config_id: String,
    /// First day covered by this tier (inclusive).
    pub min_days: i64,
    /// Last day covered by this tier (inclusive), or `None` if unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_days: Option<i64>,
    /// The daily rate charged within this tier.
    pub rate: Decimal,
    /// The advertised discount relative to the base rate. Stored, not derived.
    pub discount_percentage: Decimal,
}

impl RateTier {
    /// Returns true if a stay of `days` falls within this tier's range.
    pub fn contains_day(&self, days: i64) -> bool {
        days >= self.min_days && self.max_days.is_none_or(|max| days <= max)
    }

    /// Returns the display label for this tier, e.g. `"1-30 dias"` or `"91+ dias"`.
    pub fn label(&self) -> String {
        match self.max_days {
            Some(max) => format!("{}-{} dias", self.min_days, max),
            None => format!("{}+ dias", self.min_days),
        }
    }
}

/// The daily-rate configuration for one (payment type, bed type) pair.
///
/// Tier order is significant: the first tier whose range contains the stay
/// length wins, even if a later tier would also match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateConfig {
    /// Unique identifier for the configuration.
    pub id: String,
    /// The payer category this configuration applies to.
    pub payment_type: PaymentType,
    /// The bed type this configuration applies to.
    pub bed_type: BedType,
    /// The per-day rate used when no tier matches.
    pub base_rate: Decimal,
    /// Whether this configuration takes part in lookups.
    pub is_active: bool,
    /// The ordered day-range tiers.
    #[serde(default)]
    pub tiers: Vec<RateTier>,
}

impl RateConfig {
    /// Returns true if this configuration is active for the given pair.
    pub fn applies_to(&self, payment_type: PaymentType, bed_type: BedType) -> bool {
        self.is_active && self.payment_type == payment_type && self.bed_type == bed_type
    }
}
