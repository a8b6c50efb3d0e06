// ABOUTME: Wire types for the pace prediction HTTP service
// ABOUTME: camelCase request and response bodies with conversions to domain predictions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use stride_core::models::Performance;
use stride_core::Pace;
use stride_intelligence::{PerformancePrediction, RiegelParameters};

/// A reference performance on the wire
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceDto {
    /// Distance in meters
    pub distance_meters: f64,
    /// Time in seconds
    pub time_seconds: f64,
}

impl From<&Performance> for PerformanceDto {
    fn from(performance: &Performance) -> Self {
        Self {
            distance_meters: performance.distance,
            time_seconds: performance.time,
        }
    }
}

impl From<PerformanceDto> for Performance {
    fn from(dto: PerformanceDto) -> Self {
        Self {
            distance: dto.distance_meters,
            time: dto.time_seconds,
        }
    }
}

/// `POST /estimate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationRequest {
    /// Target distance in meters
    pub distance_meters: f64,
    /// Reference performances
    pub performances: Vec<PerformanceDto>,
}

/// `POST /estimate-with-r`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationWithExponentRequest {
    /// Target distance in meters
    pub distance_meters: f64,
    /// Riegel exponent to use instead of a fitted one
    pub r_parameter: f64,
    /// Reference performances
    pub performances: Vec<PerformanceDto>,
}

/// `POST /estimate-multiple`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleEstimationRequest {
    /// Target distances in meters
    pub distances: Vec<f64>,
    /// Reference performances
    pub performances: Vec<PerformanceDto>,
}

/// Riegel parameters on the wire
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiegelParametersDto {
    /// Scale factor
    pub a: f64,
    /// Exponent
    pub b: f64,
}

impl From<RiegelParameters> for RiegelParametersDto {
    fn from(parameters: RiegelParameters) -> Self {
        Self {
            a: parameters.a,
            b: parameters.b,
        }
    }
}

impl From<RiegelParametersDto> for RiegelParameters {
    fn from(dto: RiegelParametersDto) -> Self {
        Self { a: dto.a, b: dto.b }
    }
}

/// Response of `/estimate` and `/estimate-with-r`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformancePredictionDto {
    /// Target distance in meters
    pub distance: f64,
    /// Predicted time in seconds
    pub time: f64,
    /// Predicted pace
    pub pace: Pace,
    /// Parameters used
    pub riegel_parameters: RiegelParametersDto,
}

impl From<PerformancePrediction> for PerformancePredictionDto {
    fn from(prediction: PerformancePrediction) -> Self {
        Self {
            distance: prediction.distance,
            time: prediction.time,
            pace: prediction.pace,
            riegel_parameters: prediction.parameters.into(),
        }
    }
}

impl From<PerformancePredictionDto> for PerformancePrediction {
    fn from(dto: PerformancePredictionDto) -> Self {
        Self {
            distance: dto.distance,
            time: dto.time,
            pace: dto.pace,
            parameters: dto.riegel_parameters.into(),
        }
    }
}

/// One entry of an `/estimate-multiple` response
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimplePredictionDto {
    /// Target distance in meters
    pub distance: f64,
    /// Predicted pace
    pub pace: Pace,
}

/// Response of `/estimate-multiple`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiplePredictionDto {
    /// Predictions in request order
    pub predictions: Vec<SimplePredictionDto>,
    /// Parameters shared by every prediction
    pub riegel_parameters: RiegelParametersDto,
}

impl MultiplePredictionDto {
    /// Expand into full predictions; times are derived from the pace
    #[must_use]
    pub fn into_predictions(self) -> Vec<PerformancePrediction> {
        let parameters = self.riegel_parameters.into();
        self.predictions
            .into_iter()
            .map(|entry| PerformancePrediction {
                distance: entry.distance,
                time: f64::from(entry.pace.total_seconds()) * entry.distance / 1000.0,
                pace: entry.pace,
                parameters,
            })
            .collect()
    }
}

/// Convert domain performances for a request body
#[must_use]
pub fn performances_to_dto(performances: &[Performance]) -> Vec<PerformanceDto> {
    performances.iter().map(PerformanceDto::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_bodies_are_camel_case() {
        let body = serde_json::to_value(EstimationWithExponentRequest {
            distance_meters: 10_000.0,
            r_parameter: 1.08,
            performances: vec![PerformanceDto {
                distance_meters: 5_000.0,
                time_seconds: 1_200.0,
            }],
        })
        .unwrap();
        assert_eq!(
            body,
            json!({
                "distanceMeters": 10000.0,
                "rParameter": 1.08,
                "performances": [{"distanceMeters": 5000.0, "timeSeconds": 1200.0}]
            })
        );
    }

    #[test]
    fn test_multiple_response_expands_times() {
        let dto: MultiplePredictionDto = serde_json::from_value(json!({
            "predictions": [{"distance": 10000.0, "pace": "4:00"}],
            "riegelParameters": {"a": 0.5, "b": 1.06}
        }))
        .unwrap();
        let predictions = dto.into_predictions();
        assert!((predictions[0].time - 2400.0).abs() < f64::EPSILON);
        assert!((predictions[0].parameters.b - 1.06).abs() < f64::EPSILON);
    }
}
