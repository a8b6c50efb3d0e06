// ABOUTME: Error type for pace calculator clients
// ABOUTME: Transport failures, non-success API responses and domain validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use stride_core::{ErrorCode, PlanError};
use thiserror::Error;

/// Failure of a pace calculator call
#[derive(Debug, Error)]
pub enum PaceCalculatorError {
    /// The request could not be sent or the response could not be decoded
    #[error("Pace calculator request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("Pace calculator returned status {status_code}: {message}")]
    Api {
        /// HTTP status code
        status_code: u16,
        /// Response body
        message: String,
    },

    /// Invalid input or prediction
    #[error(transparent)]
    Plan(#[from] PlanError),
}

impl PaceCalculatorError {
    /// Domain error code, when the failure is a domain error
    #[must_use]
    pub const fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Plan(error) => Some(error.code()),
            Self::Http(_) | Self::Api { .. } => None,
        }
    }

    /// Whether retrying could succeed
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(error) => error.is_timeout() || error.is_connect(),
            Self::Api { status_code, .. } => *status_code >= 500,
            Self::Plan(_) => false,
        }
    }
}
