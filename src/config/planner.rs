// ABOUTME: Planner configuration sections loaded from environment variables
// ABOUTME: Estimator defaults, pace calculator client, CSV input, and profile derivation settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use stride_core::constants::warm_up::{DEFAULT_COOL_DOWN_SECONDS, DEFAULT_WARM_UP_SECONDS};
use tracing::warn;

use super::ConfigError;

/// Default request timeout for the pace calculator service
pub const DEFAULT_PACE_CALCULATOR_TIMEOUT_SECS: u64 = 30;
/// Default connect timeout for the pace calculator service
pub const DEFAULT_PACE_CALCULATOR_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Easy pace is the marathon pace slowed by this factor
pub const DEFAULT_EASY_PACE_FACTOR: f64 = 1.25;

/// Warm-up and cool-down used when the athlete has no preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Default warm-up in seconds
    pub default_warm_up_secs: u32,
    /// Default cool-down in seconds
    pub default_cool_down_secs: u32,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            default_warm_up_secs: DEFAULT_WARM_UP_SECONDS,
            default_cool_down_secs: DEFAULT_COOL_DOWN_SECONDS,
        }
    }
}

impl EstimatorConfig {
    /// Load from `STRIDE_DEFAULT_WARM_UP_SECS` / `STRIDE_DEFAULT_COOL_DOWN_SECS`
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_warm_up_secs: parse_env_or(
                "STRIDE_DEFAULT_WARM_UP_SECS",
                defaults.default_warm_up_secs,
            ),
            default_cool_down_secs: parse_env_or(
                "STRIDE_DEFAULT_COOL_DOWN_SECS",
                defaults.default_cool_down_secs,
            ),
        }
    }
}

/// Remote pace calculator client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaceCalculatorConfig {
    /// Base URL of the service; `None` uses the in-process calculator
    pub base_url: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for PaceCalculatorConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: DEFAULT_PACE_CALCULATOR_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_PACE_CALCULATOR_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl PaceCalculatorConfig {
    /// Load from `STRIDE_PACE_CALCULATOR_*`
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("STRIDE_PACE_CALCULATOR_URL")
                .ok()
                .map(|url| url.trim().trim_end_matches('/').to_owned())
                .filter(|url| !url.is_empty()),
            timeout_secs: parse_env_or("STRIDE_PACE_CALCULATOR_TIMEOUT_SECS", defaults.timeout_secs),
            connect_timeout_secs: parse_env_or(
                "STRIDE_PACE_CALCULATOR_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            ),
        }
    }

    /// Request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connect timeout
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// CSV plan file settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvConfig {
    /// Field delimiter (single ASCII byte)
    pub delimiter: u8,
    /// Whether the first record is a header row
    pub has_headers: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: false,
        }
    }
}

impl CsvConfig {
    /// Load from `STRIDE_CSV_DELIMITER` / `STRIDE_CSV_HAS_HEADERS`
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let delimiter = env::var("STRIDE_CSV_DELIMITER").map_or(defaults.delimiter, |value| {
            parse_delimiter(&value).unwrap_or_else(|e| {
                warn!(key = "STRIDE_CSV_DELIMITER", value = %value, error = %e, "Invalid value, using default");
                defaults.delimiter
            })
        });
        Self {
            delimiter,
            has_headers: parse_env_or("STRIDE_CSV_HAS_HEADERS", defaults.has_headers),
        }
    }
}

/// Parse a delimiter given as one ASCII character or `tab`
///
/// # Errors
///
/// Returns `ConfigError::Parse` for anything else
pub fn parse_delimiter(value: &str) -> Result<u8, ConfigError> {
    if value.eq_ignore_ascii_case("tab") || value == "\t" {
        return Ok(b'\t');
    }
    match value.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(ConfigError::Parse(format!(
            "delimiter must be a single ASCII character, got '{value}'"
        ))),
    }
}

/// Pace profile derivation settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Easy pace = marathon pace multiplied by this factor
    pub easy_pace_factor: f64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            easy_pace_factor: DEFAULT_EASY_PACE_FACTOR,
        }
    }
}

impl ProfileConfig {
    /// Load from `STRIDE_EASY_PACE_FACTOR`
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            easy_pace_factor: parse_env_or("STRIDE_EASY_PACE_FACTOR", DEFAULT_EASY_PACE_FACTOR),
        }
    }
}

/// Parse an environment variable, keeping the default when unset or invalid
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy,
    T::Err: Display,
{
    match env::var(key) {
        Ok(value) => value.trim().parse().unwrap_or_else(|e: T::Err| {
            warn!(key, value = %value, error = %e, "Invalid value, using default");
            default
        }),
        Err(_) => default,
    }
}
