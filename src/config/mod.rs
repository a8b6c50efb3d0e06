// ABOUTME: Environment-driven configuration for the planner
// ABOUTME: Aggregates estimator, pace calculator, CSV and profile settings with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Configuration
//!
//! All settings come from environment variables; there is no config file.
//! Unset or unparsable variables fall back to their defaults with a warning,
//! and [`PlannerConfig::validate`] rejects combinations that make no sense.

mod error;
mod planner;

pub use error::ConfigError;
pub use planner::{
    parse_delimiter, CsvConfig, EstimatorConfig, PaceCalculatorConfig, ProfileConfig,
    DEFAULT_EASY_PACE_FACTOR, DEFAULT_PACE_CALCULATOR_CONNECT_TIMEOUT_SECS,
    DEFAULT_PACE_CALCULATOR_TIMEOUT_SECS,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Complete planner configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Warm-up and cool-down defaults
    pub estimator: EstimatorConfig,
    /// Pace calculator client
    pub pace_calculator: PaceCalculatorConfig,
    /// CSV input
    pub csv: CsvConfig,
    /// Pace profile derivation
    pub profile: ProfileConfig,
}

impl PlannerConfig {
    /// Load every section from the environment
    #[must_use]
    pub fn from_env() -> Self {
        let config = Self {
            estimator: EstimatorConfig::from_env(),
            pace_calculator: PaceCalculatorConfig::from_env(),
            csv: CsvConfig::from_env(),
            profile: ProfileConfig::from_env(),
        };
        debug!(?config, "Loaded planner configuration");
        config
    }

    /// Check cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for a zero timeout, a connect timeout longer than
    /// the request timeout, an easy pace factor below 1, or a non-http base URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        let client = &self.pace_calculator;
        if client.timeout_secs == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "pace calculator timeout must be at least 1 second",
            ));
        }
        if client.connect_timeout_secs > client.timeout_secs {
            return Err(ConfigError::InvalidRange(
                "pace calculator connect timeout exceeds the request timeout",
            ));
        }
        if let Some(url) = &client.base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Parse(format!(
                    "pace calculator URL must start with http:// or https://, got '{url}'"
                )));
            }
        }
        let factor = self.profile.easy_pace_factor;
        if !factor.is_finite() || factor < 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "easy pace factor must be a finite number >= 1.0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = PlannerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.estimator.default_warm_up_secs, 900);
        assert_eq!(config.csv.delimiter, b',');
    }

    #[test]
    fn test_validate_rejects_inconsistent_timeouts() {
        let mut config = PlannerConfig::default();
        config.pace_calculator.connect_timeout_secs = 60;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
        config.pace_calculator.timeout_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_factor_and_url() {
        let mut config = PlannerConfig::default();
        config.profile.easy_pace_factor = 0.8;
        assert!(config.validate().is_err());

        let mut config = PlannerConfig::default();
        config.pace_calculator.base_url = Some("localhost:8080".into());
        assert!(matches!(config.validate(), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(";"), Ok(b';'));
        assert_eq!(parse_delimiter("TAB"), Ok(b'\t'));
        assert!(parse_delimiter(",,").is_err());
        assert!(parse_delimiter("é").is_err());
    }
}
