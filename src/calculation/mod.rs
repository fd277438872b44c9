//! Calculation logic for the Daily Rate Engine.
//!
//! This module contains the tiered daily-rate calculator: tier selection by
//! stay length, daily rate lookup per payment type and bed type, and the
//! billing simulation that reports totals and discounts.

mod calculator;
mod daily_rate;
mod simulation;
mod tier_lookup;

pub use calculator::RateCalculator;
pub use daily_rate::{calculate_rate, find_active_config};
pub use simulation::{AuditedSimulation, simulate_calculation, simulate_with_audit};
pub use tier_lookup::find_applicable_tier;
