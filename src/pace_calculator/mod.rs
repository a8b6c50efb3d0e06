// ABOUTME: Pace calculator abstraction with remote and in-process implementations
// ABOUTME: Concurrent multi-distance estimation and athlete pace profile derivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pace Calculator
//!
//! [`PaceCalculator`] is implemented by [`HttpPaceCalculator`], which talks to
//! the pace prediction service, and by [`LocalPaceCalculator`], which runs
//! the Riegel model in process.
//!
//! [`derive_pace_profile`] turns reference performances into a full
//! [`AthletePaceProfile`]: 2 000 m pace is the MAS pace, 5K, 10K, half
//! marathon and marathon paces fill their zones, and easy pace is marathon
//! pace slowed down by the configured factor.

/// Wire types for the HTTP service
pub mod dto;
mod error;
mod http;
mod local;

pub use error::PaceCalculatorError;
pub use http::HttpPaceCalculator;
pub use local::LocalPaceCalculator;

use async_trait::async_trait;
use futures_util::stream::{FuturesUnordered, StreamExt};
use stride_core::constants::distances::STANDARD_DISTANCES;
use stride_core::models::{AthletePaceProfile, PaceZone, Performance};
use stride_core::{Pace, PlanError};
use stride_intelligence::PerformancePrediction;
use tracing::{debug, info};

use crate::config::ProfileConfig;

/// Zones filled by each of the standard distances, in the same order
const STANDARD_ZONES: [PaceZone; 5] = [
    PaceZone::MasPace,
    PaceZone::FiveKPace,
    PaceZone::TenKPace,
    PaceZone::SemiMarathonPace,
    PaceZone::MarathonPace,
];

/// Two performances this close in meters count as the same distance
const SAME_DISTANCE_TOLERANCE_METERS: f64 = 1.0;

/// Riegel-based pace prediction
#[async_trait]
pub trait PaceCalculator: Send + Sync {
    /// Predict the performance at `distance` meters
    async fn estimate(
        &self,
        performances: &[Performance],
        distance: f64,
    ) -> Result<PerformancePrediction, PaceCalculatorError>;

    /// Predict the performance at `distance` meters with a fixed exponent
    async fn estimate_with_exponent(
        &self,
        performances: &[Performance],
        exponent: f64,
        distance: f64,
    ) -> Result<PerformancePrediction, PaceCalculatorError>;

    /// Predict several distances with one fitted model, in input order
    async fn estimate_multiple(
        &self,
        performances: &[Performance],
        distances: &[f64],
    ) -> Result<Vec<PerformancePrediction>, PaceCalculatorError>;
}

/// Issue one `estimate` call per distance concurrently
///
/// Results are returned in the order of `distances`, whatever order the calls
/// complete in.
///
/// # Errors
///
/// Returns the first error any call completes with
pub async fn estimate_concurrently<C>(
    calculator: &C,
    performances: &[Performance],
    distances: &[f64],
) -> Result<Vec<PerformancePrediction>, PaceCalculatorError>
where
    C: PaceCalculator + ?Sized,
{
    let mut pending: FuturesUnordered<_> = distances
        .iter()
        .enumerate()
        .map(|(index, &distance)| async move {
            (index, calculator.estimate(performances, distance).await)
        })
        .collect();

    let mut slots: Vec<Option<PerformancePrediction>> = vec![None; distances.len()];
    while let Some((index, result)) = pending.next().await {
        debug!(index, distance = distances[index], "Estimate completed");
        slots[index] = Some(result?);
    }
    Ok(slots.into_iter().flatten().collect())
}

/// Build a full pace profile from reference performances
///
/// Standard distances the athlete has a performance for use that
/// performance's pace (the fastest one when there are several); the others
/// are predicted in one `estimate_multiple` call.
///
/// # Errors
///
/// Returns `PaceCalculatorError::Plan` for invalid performances or an invalid
/// easy pace factor, and any error from the calculator
pub async fn derive_pace_profile<C>(
    calculator: &C,
    performances: &[Performance],
    config: &ProfileConfig,
) -> Result<AthletePaceProfile, PaceCalculatorError>
where
    C: PaceCalculator + ?Sized,
{
    let mut known: [Option<Pace>; 5] = [None; 5];
    for (slot, distance) in known.iter_mut().zip(STANDARD_DISTANCES) {
        for performance in performances
            .iter()
            .filter(|p| (p.distance - distance).abs() < SAME_DISTANCE_TOLERANCE_METERS)
        {
            let pace = performance.pace()?;
            *slot = Some(slot.map_or(pace, |current| current.min(pace)));
        }
    }

    let missing: Vec<f64> = STANDARD_DISTANCES
        .iter()
        .zip(known.iter())
        .filter(|(_, pace)| pace.is_none())
        .map(|(distance, _)| *distance)
        .collect();
    let mut predicted = if missing.is_empty() {
        Vec::new()
    } else {
        calculator.estimate_multiple(performances, &missing).await?
    }
    .into_iter();

    let mut profile = AthletePaceProfile::default();
    for (zone, pace) in STANDARD_ZONES.into_iter().zip(known) {
        let pace = match pace {
            Some(pace) => pace,
            None => predicted
                .next()
                .map(|prediction| prediction.pace)
                .ok_or_else(|| {
                    PaceCalculatorError::Plan(PlanError::invalid_argument(
                        "Pace calculator returned fewer predictions than requested",
                    ))
                })?,
        };
        profile = profile.with_pace(zone, pace);
    }
    let easy_pace = profile.marathon_pace.checked_mul(config.easy_pace_factor)?;
    profile = profile.with_pace(PaceZone::EasyPace, easy_pace);

    info!(
        mas_pace = %profile.mas_pace,
        marathon_pace = %profile.marathon_pace,
        easy_pace = %profile.easy_pace,
        predicted = missing.len(),
        "Derived athlete pace profile"
    );
    Ok(profile)
}
