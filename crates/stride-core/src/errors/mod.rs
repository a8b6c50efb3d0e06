// ABOUTME: Error taxonomy shared by every planner component
// ABOUTME: Defines PlanError variants and the stable ErrorCode each one maps to
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Planner Error Types
//!
//! Every core component fails fast with a [`PlanError`]. The computations are
//! deterministic, so none of these errors is retryable: the caller has to
//! change its input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::RunType;

/// Standard error codes exposed to callers (CLI output, HTTP wrappers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Malformed or out-of-range input value
    #[serde(rename = "INVALID_ARGUMENT")]
    InvalidArgument = 3000,
    /// Detail string or CSV row does not match the grammar
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// Training template violates its constraints
    #[serde(rename = "INVALID_TEMPLATE")]
    InvalidTemplate = 3004,
    /// No day left to schedule a workout on
    #[serde(rename = "SCHEDULING_FAILED")]
    SchedulingFailed = 4100,
    /// No estimation strategy claims the run type
    #[serde(rename = "UNKNOWN_RUN_TYPE")]
    UnknownRunType = 9000,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "The provided input value is invalid",
            Self::InvalidFormat => "The data does not match the expected format",
            Self::InvalidTemplate => "The training template violates its scheduling rules",
            Self::SchedulingFailed => "No day is left to schedule the workout on",
            Self::UnknownRunType => "No estimation strategy is registered for the run type",
        }
    }
}

/// Errors raised by the planner core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// Malformed or out-of-range input value (negative pace, non-finite scalar)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Detail string or CSV row does not match the grammar
    #[error("Format error: {0}")]
    Format(String),

    /// Template construction broke the long-run or quality-day rule
    #[error(
        "Invalid template: {reason} (long run days: {long_run_days}, quality days: {quality_days}, \
         max quality days: {max_quality_days}, training days: {training_days})"
    )]
    InvalidTemplate {
        /// Which rule was violated
        reason: &'static str,
        /// Days whose allowance includes `LongRun`
        long_run_days: usize,
        /// Days whose allowance intersects the quality run types
        quality_days: usize,
        /// Quality-day cap derived from the number of training days
        max_quality_days: usize,
        /// Non-rest days in the template
        training_days: usize,
    },

    /// A week holds more workouts than there are days
    #[error("Scheduling error: {0}")]
    Scheduling(String),

    /// No estimation strategy claims the run type
    #[error("No estimation strategy registered for run type {0}")]
    UnknownRunType(RunType),
}

impl PlanError {
    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a format error
    #[must_use]
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }

    /// Create a scheduling error
    #[must_use]
    pub fn scheduling(message: impl Into<String>) -> Self {
        Self::Scheduling(message.into())
    }

    /// Stable error code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Self::Format(_) => ErrorCode::InvalidFormat,
            Self::InvalidTemplate { .. } => ErrorCode::InvalidTemplate,
            Self::Scheduling(_) => ErrorCode::SchedulingFailed,
            Self::UnknownRunType(_) => ErrorCode::UnknownRunType,
        }
    }
}

/// Result alias used across the planner crates
pub type PlanResult<T> = Result<T, PlanError>;
