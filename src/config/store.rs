//! In-memory rate configuration store.
//!
//! The store owns the live rate table behind a lock and validates every
//! write. Readers take a [`RateConfigSource::snapshot`] and compute on their
//! own copy.

use std::sync::{Arc, PoisonError, RwLock};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{BedType, PaymentType, RateConfig, RateTier};

use super::source::RateConfigSource;
use super::validation::validate_rate_config;

/// A tier as submitted for creation or update; IDs are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRateTier {
    /// First day covered by this tier (inclusive).
    pub min_days: i64,
    /// Last day covered by this tier (inclusive), or `None` if unbounded.
    #[serde(default)]
    pub max_days: Option<i64>,
    /// The daily rate charged within this tier.
    pub rate: Decimal,
    /// The advertised discount relative to the base rate.
    #[serde(default)]
    pub discount_percentage: Decimal,
}

/// A rate configuration as submitted for creation or update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRateConfig {
    /// The payer category this configuration applies to.
    pub payment_type: PaymentType,
    /// The bed type this configuration applies to.
    pub bed_type: BedType,
    /// The per-day rate used when no tier matches.
    pub base_rate: Decimal,
    /// Whether this configuration takes part in lookups.
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// The ordered day-range tiers.
    #[serde(default)]
    pub tiers: Vec<NewRateTier>,
}

fn default_active() -> bool {
    true
}

impl NewRateConfig {
    fn into_rate_config(self, id: String) -> RateConfig {
        let tiers = self
            .tiers
            .into_iter()
            .map(|tier| RateTier {
                id: Uuid::new_v4().to_string(),
                config_id: id.clone(),
                min_days: tier.min_days,
                max_days: tier.max_days,
                rate: tier.rate,
                discount_percentage: tier.discount_percentage,
            })
            .collect();

        RateConfig {
            id,
            payment_type: self.payment_type,
            bed_type: self.bed_type,
            base_rate: self.base_rate,
            is_active: self.is_active,
            tiers,
        }
    }
}

/// Thread-safe holder of the live rate table.
///
/// Cloning a store yields another handle to the same table.
#[derive(Debug, Clone, Default)]
pub struct RateStore {
    configs: Arc<RwLock<Vec<RateConfig>>>,
}

impl RateStore {
    /// Creates a store seeded with the given configurations.
    pub fn new(configs: Vec<RateConfig>) -> Self {
        Self {
            configs: Arc::new(RwLock::new(configs)),
        }
    }

    /// Returns every configuration in lookup order.
    pub fn list(&self) -> Vec<RateConfig> {
        self.snapshot()
    }

    /// Gets a configuration by its ID.
    pub fn get(&self, id: &str) -> EngineResult<RateConfig> {
        let configs = self.configs.read().unwrap_or_else(PoisonError::into_inner);
        configs
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| EngineError::RateConfigNotFound { id: id.to_string() })
    }

    /// Adds a configuration, assigning fresh IDs to it and its tiers.
    ///
    /// Fails with `DuplicateActiveConfig` if the new configuration is active
    /// and another active one already covers the same pair.
    pub fn create(&self, new_config: NewRateConfig) -> EngineResult<RateConfig> {
        let config = new_config.into_rate_config(Uuid::new_v4().to_string());
        validate_rate_config(&config)?;

        let mut configs = self.configs.write().unwrap_or_else(PoisonError::into_inner);
        Self::check_unique_active(&configs, &config)?;
        configs.push(config.clone());

        info!(
            config_id = %config.id,
            payment_type = %config.payment_type,
            bed_type = %config.bed_type,
            "Created rate configuration"
        );
        Ok(config)
    }

    /// Replaces a configuration's fields and tiers, keeping its ID and position.
    pub fn update(&self, id: &str, new_config: NewRateConfig) -> EngineResult<RateConfig> {
        let config = new_config.into_rate_config(id.to_string());
        validate_rate_config(&config)?;

        let mut configs = self.configs.write().unwrap_or_else(PoisonError::into_inner);
        let index = configs
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| EngineError::RateConfigNotFound { id: id.to_string() })?;
        Self::check_unique_active(&configs, &config)?;
        configs[index] = config.clone();

        info!(config_id = %id, "Updated rate configuration");
        Ok(config)
    }

    /// Removes a configuration together with its tiers.
    pub fn delete(&self, id: &str) -> EngineResult<()> {
        let mut configs = self.configs.write().unwrap_or_else(PoisonError::into_inner);
        let index = configs
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| EngineError::RateConfigNotFound { id: id.to_string() })?;
        configs.remove(index);

        info!(config_id = %id, "Deleted rate configuration");
        Ok(())
    }

    fn check_unique_active(configs: &[RateConfig], candidate: &RateConfig) -> EngineResult<()> {
        if !candidate.is_active {
            return Ok(());
        }
        let conflict = configs.iter().any(|c| {
            c.id != candidate.id && c.applies_to(candidate.payment_type, candidate.bed_type)
        });
        if conflict {
            return Err(EngineError::DuplicateActiveConfig {
                payment_type: candidate.payment_type,
                bed_type: candidate.bed_type,
            });
        }
        Ok(())
    }
}

impl RateConfigSource for RateStore {
    fn snapshot(&self) -> Vec<RateConfig> {
        self.configs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
