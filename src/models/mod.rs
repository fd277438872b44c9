//! Core data models for the Daily Rate Engine.
//!
//! This module contains the rate table types and the results the calculator produces.

mod rate_config;
mod simulation;

pub use rate_config::{BedType, PaymentType, RateConfig, RateTier};
pub use simulation::{AuditStep, AuditTrace, RateSimulation};
