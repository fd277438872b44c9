//! Configuration loading and management for the Daily Rate Engine.
//!
//! This module loads rate tables from YAML files, keeps the live table in an
//! in-memory store, and reads the server's runtime settings.
//!
//! # Example
//!
//! ```no_run
//! use daily_rate_engine::config::{ConfigLoader, RateConfigSource, RateStore};
//!
//! let loader = ConfigLoader::load("./config/rates").unwrap();
//! let store = RateStore::new(loader.snapshot());
//! println!("Loaded {} rate configurations", store.list().len());
//! ```

mod loader;
mod settings;
mod source;
mod store;
mod validation;

pub use loader::ConfigLoader;
pub use settings::ServerSettings;
pub use source::RateConfigSource;
pub use store::{NewRateConfig, NewRateTier, RateStore};
pub use validation::validate_rate_config;
