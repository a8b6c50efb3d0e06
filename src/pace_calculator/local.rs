// ABOUTME: In-process pace calculator running the Riegel model directly
// ABOUTME: Used when no remote pace service is configured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use stride_core::models::Performance;
use stride_intelligence::{riegel, PerformancePrediction, RiegelModel};

use super::{PaceCalculator, PaceCalculatorError};

/// Pace calculator computing predictions locally
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPaceCalculator;

#[async_trait]
impl PaceCalculator for LocalPaceCalculator {
    async fn estimate(
        &self,
        performances: &[Performance],
        distance: f64,
    ) -> Result<PerformancePrediction, PaceCalculatorError> {
        Ok(riegel::predict(performances, distance)?)
    }

    async fn estimate_with_exponent(
        &self,
        performances: &[Performance],
        exponent: f64,
        distance: f64,
    ) -> Result<PerformancePrediction, PaceCalculatorError> {
        Ok(riegel::predict_with_exponent(performances, exponent, distance)?)
    }

    async fn estimate_multiple(
        &self,
        performances: &[Performance],
        distances: &[f64],
    ) -> Result<Vec<PerformancePrediction>, PaceCalculatorError> {
        Ok(RiegelModel::fit(performances)?.predict_many(distances)?)
    }
}
