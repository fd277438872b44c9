//! Server settings.
//!
//! Settings come from built-in defaults, an optional `daily_rates.yaml`
//! file in the working directory, and `DAILY_RATES__*` environment
//! variables, in increasing order of precedence.

use std::net::SocketAddr;
use std::path::PathBuf;

use ::config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory holding the rate table YAML files.
    pub rates_dir: PathBuf,
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl ServerSettings {
    /// Loads settings from `daily_rates.yaml` (if present) and the environment.
    pub fn load() -> EngineResult<Self> {
        Self::load_from("daily_rates")
    }

    /// Loads settings using `file_stem` as the optional settings file.
    pub fn load_from(file_stem: &str) -> EngineResult<Self> {
        let settings = Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080)?
            .set_default("rates_dir", "./config/rates")?
            .set_default("log_filter", "info")?
            .add_source(File::with_name(file_stem).required(false))
            .add_source(
                Environment::with_prefix("DAILY_RATES")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Returns the socket address to bind.
    pub fn bind_address(&self) -> EngineResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| EngineError::SettingsError {
                message: format!("invalid bind address {}:{}", self.host, self.port),
            })
    }
}
