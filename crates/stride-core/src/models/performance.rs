// ABOUTME: Reference race performance used to fit pace predictions
// ABOUTME: Distance in meters and time in seconds, validated on construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::errors::{PlanError, PlanResult};
use crate::pace::Pace;

/// A completed effort over a known distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    /// Distance in meters
    pub distance: f64,
    /// Time in seconds
    pub time: f64,
}

impl Performance {
    /// Create a validated performance
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidArgument` unless distance and time are finite and positive
    pub fn new(distance: f64, time: f64) -> PlanResult<Self> {
        let performance = Self { distance, time };
        performance.validate()?;
        Ok(performance)
    }

    /// Check that distance and time are finite and positive
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidArgument` for a non-positive or non-finite field
    pub fn validate(&self) -> PlanResult<()> {
        if !self.distance.is_finite() || self.distance <= 0.0 {
            return Err(PlanError::invalid_argument(format!(
                "Performance distance must be positive, got {}",
                self.distance
            )));
        }
        if !self.time.is_finite() || self.time <= 0.0 {
            return Err(PlanError::invalid_argument(format!(
                "Performance time must be positive, got {}",
                self.time
            )));
        }
        Ok(())
    }

    /// Average pace over the performance
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidArgument` for an invalid performance
    pub fn pace(&self) -> PlanResult<Pace> {
        Pace::from_time_and_distance(self.time, self.distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates() {
        assert!(Performance::new(5000.0, 1200.0).is_ok());
        assert!(Performance::new(0.0, 1200.0).is_err());
        assert!(Performance::new(5000.0, f64::NAN).is_err());
        assert_eq!(
            Performance::new(5000.0, 1200.0).unwrap().pace().unwrap(),
            Pace::from_seconds(240)
        );
    }
}
