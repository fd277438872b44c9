//! Rate table loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading rate
//! configurations from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::RateConfig;

use super::source::RateConfigSource;
use super::validation::validate_rate_config;

/// The layout of a single rate file.
#[derive(Debug, Deserialize)]
struct RateTableFile {
    rate_configs: Vec<RateConfig>,
}

/// Loads and provides access to a rate table.
///
/// # Directory Structure
///
/// Every `*.yaml` file in the directory contributes its `rate_configs` list.
/// Files are read in file-name order, which fixes lookup precedence when two
/// active configurations cover the same pair.
/// ```text
/// config/rates/
/// ├── private.yaml
/// └── public.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use daily_rate_engine::config::ConfigLoader;
/// use daily_rate_engine::models::{BedType, PaymentType};
///
/// let loader = ConfigLoader::load("./config/rates")?;
/// let rate = loader
///     .calculator()
///     .rate(PaymentType::Private, BedType::Standard, 15);
/// println!("Daily rate: R${}", rate);
/// # Ok::<(), daily_rate_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    configs: Vec<RateConfig>,
}

impl ConfigLoader {
    /// Loads every rate file from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The directory is missing or contains no YAML files
    /// - Any file contains invalid YAML
    /// - Any configuration fails structural validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let rates_dir = path.as_ref();
        let mut configs = Vec::new();

        for file in Self::rate_files(rates_dir)? {
            let table = Self::load_yaml::<RateTableFile>(&file)?;
            configs.extend(table.rate_configs);
        }

        for config in &configs {
            validate_rate_config(config)?;
        }
        Self::warn_on_shadowed_configs(&configs);

        info!(
            path = %rates_dir.display(),
            configs = configs.len(),
            "Loaded rate table"
        );
        Ok(Self { configs })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Lists the YAML files of the rates directory in file-name order.
    fn rate_files(rates_dir: &Path) -> EngineResult<Vec<PathBuf>> {
        let rates_dir_str = rates_dir.display().to_string();

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                files.push(path);
            }
        }

        if files.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        files.sort();
        Ok(files)
    }

    /// Logs every active configuration that an earlier one hides from lookups.
    fn warn_on_shadowed_configs(configs: &[RateConfig]) {
        let mut seen = HashSet::new();
        for config in configs.iter().filter(|c| c.is_active) {
            if !seen.insert((config.payment_type, config.bed_type)) {
                warn!(
                    config_id = %config.id,
                    payment_type = %config.payment_type,
                    bed_type = %config.bed_type,
                    "Active rate configuration is shadowed by an earlier one"
                );
            }
        }
    }

    /// Returns the loaded configurations in lookup order.
    pub fn configs(&self) -> &[RateConfig] {
        &self.configs
    }

    /// Returns a calculator over the loaded configurations.
    pub fn calculator(&self) -> crate::calculation::RateCalculator<'_> {
        crate::calculation::RateCalculator::new(&self.configs)
    }

    /// Gets a configuration by its ID.
    pub fn get_config(&self, id: &str) -> EngineResult<&RateConfig> {
        self.configs
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| EngineError::RateConfigNotFound { id: id.to_string() })
    }
}

impl RateConfigSource for ConfigLoader {
    fn snapshot(&self) -> Vec<RateConfig> {
        self.configs.clone()
    }
}
