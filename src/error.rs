//! Error types for the Daily Rate Engine.
//!
//! The calculator itself is total and never fails. These errors cover
//! loading the rate table and maintaining it through the store.

use thiserror::Error;

use crate::models::{BedType, PaymentType};

/// The main error type for the Daily Rate Engine.
///
/// # Example
///
/// ```
/// use daily_rate_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file or directory was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Server settings could not be assembled from file and environment.
    #[error("Invalid server settings: {message}")]
    SettingsError {
        /// A description of the settings error.
        message: String,
    },

    /// No rate configuration exists with the given ID.
    #[error("Rate configuration not found: {id}")]
    RateConfigNotFound {
        /// The ID that was not found.
        id: String,
    },

    /// Another active configuration already covers the same pair.
    #[error("An active rate configuration already exists for {payment_type}/{bed_type}")]
    DuplicateActiveConfig {
        /// The payment type of the conflicting pair.
        payment_type: PaymentType,
        /// The bed type of the conflicting pair.
        bed_type: BedType,
    },

    /// A rate configuration failed structural validation.
    #[error("Invalid rate configuration field '{field}': {message}")]
    InvalidRateConfig {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

impl From<::config::ConfigError> for EngineError {
    fn from(error: ::config::ConfigError) -> Self {
        EngineError::SettingsError {
            message: error.to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/rates/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/rates/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_rate_config_not_found_displays_id() {
        let error = EngineError::RateConfigNotFound {
            id: "cfg_missing".to_string(),
        };
        assert_eq!(error.to_string(), "Rate configuration not found: cfg_missing");
    }

    #[test]
    fn test_duplicate_active_config_displays_pair() {
        let error = EngineError::DuplicateActiveConfig {
            payment_type: PaymentType::Private,
            bed_type: BedType::Icu,
        };
        assert_eq!(
            error.to_string(),
            "An active rate configuration already exists for PRIVATE/ICU"
        );
    }

    #[test]
    fn test_invalid_rate_config_displays_field_and_message() {
        let error = EngineError::InvalidRateConfig {
            field: "tiers[1].max_days".to_string(),
            message: "must not be less than min_days".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid rate configuration field 'tiers[1].max_days': must not be less than min_days"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::RateConfigNotFound {
                id: "cfg_001".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
