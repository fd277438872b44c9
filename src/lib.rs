//! Daily Rate Engine for hospital admissions
//!
//! This crate computes admission billing from tiered daily-rate tables: each
//! (payment type, bed type) pair has a base rate and an ordered list of
//! day-range tiers that apply long-stay discounts.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
