//! A calculator bound to one rate table snapshot.

use rust_decimal::Decimal;

use crate::models::{BedType, PaymentType, RateConfig, RateSimulation};

use super::daily_rate::calculate_rate;
use super::simulation::{AuditedSimulation, simulate_calculation, simulate_with_audit};

/// Borrowed view over a list of rate configurations.
///
/// The calculator never mutates or reloads the table; callers take a fresh
/// snapshot from their [`RateConfigSource`](crate::config::RateConfigSource)
/// when the configuration changes.
///
/// # Examples
///
/// ```
/// use daily_rate_engine::calculation::RateCalculator;
/// use daily_rate_engine::models::{BedType, PaymentType, RateConfig};
/// use rust_decimal::Decimal;
///
/// let configs = vec![RateConfig {
///     id: "cfg_sus_standard".to_string(),
///     payment_type: PaymentType::Sus,
///     bed_type: BedType::Standard,
///     base_rate: Decimal::from(180),
///     is_active: true,
///     tiers: vec![],
/// }];
///
/// let calculator = RateCalculator::new(&configs);
/// let simulation = calculator.simulate(PaymentType::Sus, BedType::Standard, 10);
/// assert_eq!(simulation.total_amount, Decimal::from(1800));
/// assert_eq!(simulation.tier.as_deref(), Some(""));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RateCalculator<'a> {
    configs: &'a [RateConfig],
}

impl<'a> RateCalculator<'a> {
    /// Creates a calculator over the given configurations.
    pub fn new(configs: &'a [RateConfig]) -> Self {
        Self { configs }
    }

    /// Returns the daily rate for a stay. See [`calculate_rate`].
    pub fn rate(&self, payment_type: PaymentType, bed_type: BedType, days: i64) -> Decimal {
        calculate_rate(self.configs, payment_type, bed_type, days)
    }

    /// Returns the billing breakdown for a stay. See [`simulate_calculation`].
    pub fn simulate(
        &self,
        payment_type: PaymentType,
        bed_type: BedType,
        days: i64,
    ) -> RateSimulation {
        simulate_calculation(self.configs, payment_type, bed_type, days)
    }

    /// Returns the billing breakdown with its audit trace.
    pub fn simulate_audited(
        &self,
        payment_type: PaymentType,
        bed_type: BedType,
        days: i64,
    ) -> AuditedSimulation {
        simulate_with_audit(self.configs, payment_type, bed_type, days)
    }
}
