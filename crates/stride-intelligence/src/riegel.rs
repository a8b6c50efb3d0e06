// ABOUTME: Riegel race-time prediction fitted from one or more reference performances
// ABOUTME: Log-log least squares for the exponent, 1.06 fallback, parallel batch prediction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Riegel Predictor
//!
//! Riegel's formula predicts the time over a distance `D` as `T = a * D^b`.
//! With a single reference `(D1, T1)` the exponent defaults to 1.06 so that
//! `T2 = T1 * (D2 / D1)^1.06`. With several references both parameters are
//! fitted by ordinary least squares on `ln T = ln a + b ln D`.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use stride_core::constants::riegel::DEFAULT_EXPONENT;
use stride_core::models::Performance;
use stride_core::{Pace, PlanError, PlanResult};
use tracing::debug;

/// Fitted Riegel parameters: `T = a * D^b`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiegelParameters {
    /// Scale factor
    pub a: f64,
    /// Fatigue exponent
    pub b: f64,
}

/// Predicted performance at a target distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformancePrediction {
    /// Target distance in meters
    pub distance: f64,
    /// Predicted time in seconds
    pub time: f64,
    /// Average pace over the distance
    pub pace: Pace,
    /// Parameters the prediction was made with
    pub parameters: RiegelParameters,
}

/// A fitted Riegel model, reusable across target distances
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiegelModel {
    parameters: RiegelParameters,
}

impl RiegelModel {
    /// Fit the model to the reference performances
    ///
    /// One reference, or references all at the same distance, use the default
    /// exponent of 1.06.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidArgument` when there is no reference or a
    /// reference has a non-positive distance or time
    pub fn fit(references: &[Performance]) -> PlanResult<Self> {
        let points = log_points(references)?;
        let (mean_x, mean_y) = means(&points);

        let (sxy, sxx) = points.iter().fold((0.0, 0.0), |(sxy, sxx), (x, y)| {
            let dx = x - mean_x;
            (dx.mul_add(y - mean_y, sxy), dx.mul_add(dx, sxx))
        });

        let b = if points.len() < 2 || sxx.abs() < f64::EPSILON {
            DEFAULT_EXPONENT
        } else {
            sxy / sxx
        };
        let a = b.mul_add(-mean_x, mean_y).exp();

        debug!(references = references.len(), a, b, "Fitted Riegel model");
        Ok(Self {
            parameters: RiegelParameters { a, b },
        })
    }

    /// Fit only the scale factor for a caller-supplied exponent
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidArgument` for invalid references or an
    /// exponent that is not finite and positive
    pub fn with_exponent(references: &[Performance], b: f64) -> PlanResult<Self> {
        if !b.is_finite() || b <= 0.0 {
            return Err(PlanError::invalid_argument(format!(
                "Riegel exponent must be positive, got {b}"
            )));
        }
        let points = log_points(references)?;
        let (mean_x, mean_y) = means(&points);
        let a = b.mul_add(-mean_x, mean_y).exp();
        Ok(Self {
            parameters: RiegelParameters { a, b },
        })
    }

    /// Use known parameters directly
    #[must_use]
    pub const fn from_parameters(parameters: RiegelParameters) -> Self {
        Self { parameters }
    }

    /// Fitted parameters
    #[must_use]
    pub const fn parameters(&self) -> RiegelParameters {
        self.parameters
    }

    /// Predicted time in seconds over `distance` meters
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidArgument` for a non-positive or non-finite distance
    pub fn predict_time(&self, distance: f64) -> PlanResult<f64> {
        if !distance.is_finite() || distance <= 0.0 {
            return Err(PlanError::invalid_argument(format!(
                "Target distance must be positive, got {distance}"
            )));
        }
        Ok(self.parameters.a * distance.powf(self.parameters.b))
    }

    /// Predicted time and pace over `distance` meters
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidArgument` for a non-positive or non-finite distance
    pub fn predict(&self, distance: f64) -> PlanResult<PerformancePrediction> {
        let time = self.predict_time(distance)?;
        Ok(PerformancePrediction {
            distance,
            time,
            pace: Pace::from_time_and_distance(time, distance)?,
            parameters: self.parameters,
        })
    }

    /// Predict many distances in parallel; results keep the input order
    ///
    /// # Errors
    ///
    /// Returns the first `PlanError::InvalidArgument` raised by an invalid distance
    pub fn predict_many(&self, distances: &[f64]) -> PlanResult<Vec<PerformancePrediction>> {
        distances
            .par_iter()
            .map(|distance| self.predict(*distance))
            .collect()
    }
}

/// Fit and predict in one step
///
/// # Errors
///
/// Returns `PlanError::InvalidArgument` for invalid references or target distance
pub fn predict(references: &[Performance], distance: f64) -> PlanResult<PerformancePrediction> {
    RiegelModel::fit(references)?.predict(distance)
}

/// Fit with an explicit exponent and predict in one step
///
/// # Errors
///
/// Returns `PlanError::InvalidArgument` for invalid references, exponent or target distance
pub fn predict_with_exponent(
    references: &[Performance],
    b: f64,
    distance: f64,
) -> PlanResult<PerformancePrediction> {
    RiegelModel::with_exponent(references, b)?.predict(distance)
}

fn log_points(references: &[Performance]) -> PlanResult<Vec<(f64, f64)>> {
    if references.is_empty() {
        return Err(PlanError::invalid_argument(
            "At least one reference performance is required",
        ));
    }
    references
        .iter()
        .map(|performance| {
            performance.validate()?;
            Ok((performance.distance.ln(), performance.time.ln()))
        })
        .collect()
}

fn means(points: &[(f64, f64)]) -> (f64, f64) {
    let n = points.len() as f64;
    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), (x, y)| (sx + x, sy + y));
    (sum_x / n, sum_y / n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perf(distance: f64, time: f64) -> Performance {
        Performance { distance, time }
    }

    #[test]
    fn test_single_reference_uses_default_exponent() {
        let model = RiegelModel::fit(&[perf(5000.0, 1200.0)]).unwrap();
        assert!((model.parameters().b - 1.06).abs() < f64::EPSILON);
        let predicted = model.predict_time(10_000.0).unwrap();
        assert!((predicted - 1200.0 * 2.0_f64.powf(1.06)).abs() < 1e-6);
    }

    #[test]
    fn test_least_squares_recovers_exponent() {
        let a = 0.05;
        let b = 1.08;
        let references: Vec<_> = [3000.0, 5000.0, 10_000.0]
            .into_iter()
            .map(|d: f64| perf(d, a * d.powf(b)))
            .collect();
        let model = RiegelModel::fit(&references).unwrap();
        assert!((model.parameters().b - b).abs() < 1e-9);
        assert!((model.parameters().a - a).abs() < 1e-9);
    }

    #[test]
    fn test_identical_distances_fall_back() {
        let model = RiegelModel::fit(&[perf(5000.0, 1200.0), perf(5000.0, 1300.0)]).unwrap();
        assert!((model.parameters().b - DEFAULT_EXPONENT).abs() < f64::EPSILON);
        assert!(model.parameters().a.is_finite());
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(RiegelModel::fit(&[]).is_err());
        assert!(RiegelModel::fit(&[perf(-1.0, 1200.0)]).is_err());
        assert!(RiegelModel::fit(&[perf(5000.0, 0.0)]).is_err());
        let model = RiegelModel::fit(&[perf(5000.0, 1200.0)]).unwrap();
        assert!(model.predict(0.0).is_err());
        assert!(RiegelModel::with_exponent(&[perf(5000.0, 1200.0)], 0.0).is_err());
    }

    #[test]
    fn test_predict_many_keeps_order() {
        let model = RiegelModel::fit(&[perf(5000.0, 1200.0)]).unwrap();
        let distances = [42_195.0, 2000.0, 10_000.0, 5000.0];
        let predictions = model.predict_many(&distances).unwrap();
        for (prediction, distance) in predictions.iter().zip(distances) {
            assert!((prediction.distance - distance).abs() < f64::EPSILON);
        }
        assert!(model.predict_many(&[5000.0, -1.0]).is_err());
    }
}
