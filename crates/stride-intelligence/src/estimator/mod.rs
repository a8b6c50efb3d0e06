// ABOUTME: Workout variant factory turning descriptors into estimated planned workouts
// ABOUTME: Dispatches through the strategy table and applies the segment calculus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Estimator
//!
//! Given a validated descriptor, an athlete profile and a date, the
//! [`VariantFactory`] picks the strategy claiming the descriptor's run type,
//! resolves the workout pace and estimates distance and duration:
//!
//! - races run the whole duration at their own pace
//! - workouts without segments run the whole duration at easy pace
//! - structured workouts walk their segments, then add warm-up and cool-down
//!   at easy pace following the strategy's [`WarmUpPolicy`]
//!
//! Segment efforts run at their zone pace, except that variants whose
//! [`EffortPace`] is `TargetPace` run them at the descriptor's target pace when
//! it has one. Only the zones a workout actually uses need a pace in the
//! profile. Distances are rounded up to the next 100 m.

/// Segment tree walk, warm-up resolution and rounding
pub mod calculus;
/// Static per-variant strategy table
pub mod strategy;

use std::iter;

use chrono::NaiveDate;
use stride_core::models::{
    AthletePaceProfile, PaceZone, PlannedWorkout, SegmentSpec, WorkoutDescriptor, WorkoutEstimate,
    WorkoutStructure, WorkoutVariant,
};
use stride_core::{Pace, PlanError, PlanResult};
use tracing::debug;

pub use calculus::{resolve_warm_up, round_up_distance, walk_segments, SegmentTotals};
pub use strategy::{
    strategy_for, DistanceOverride, EffortPace, VariantStrategy, WarmUpPolicy, STRATEGIES,
};

/// Builds typed, estimated workouts from descriptors
pub struct VariantFactory;

impl VariantFactory {
    /// Create the planned workout for a descriptor scheduled on `date`
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidArgument` for an invalid descriptor or a profile
    /// missing the pace of a zone the workout uses, and `PlanError::UnknownRunType`
    /// if no strategy claims the run type
    pub fn create(
        id: u32,
        descriptor: &WorkoutDescriptor,
        profile: &AthletePaceProfile,
        date: NaiveDate,
    ) -> PlanResult<PlannedWorkout> {
        let (variant, estimate) = Self::estimate(descriptor, profile)?;
        debug!(
            id,
            week = descriptor.week,
            run_type = %descriptor.run_type,
            %variant,
            %date,
            distance_meters = estimate.distance_meters,
            duration_seconds = estimate.duration_seconds,
            "Created planned workout"
        );
        Ok(PlannedWorkout::new(id, descriptor, variant, date, estimate))
    }

    /// Estimate a descriptor without scheduling it
    ///
    /// # Errors
    ///
    /// Same conditions as [`VariantFactory::create`]
    pub fn estimate(
        descriptor: &WorkoutDescriptor,
        profile: &AthletePaceProfile,
    ) -> PlanResult<(WorkoutVariant, WorkoutEstimate)> {
        descriptor.validate()?;

        let strategy = strategy_for(descriptor.run_type)?;
        let pace = resolve_pace(descriptor, profile, strategy)?;
        let effort_pace = match strategy.effort_pace() {
            EffortPace::TargetPace => descriptor.target_pace,
            EffortPace::SegmentZone => None,
        };
        require_used_zones(descriptor, profile, strategy, effort_pace)?;
        let total = descriptor.total_duration_seconds;
        let easy_speed = profile.easy_pace.meters_per_second();

        let estimate = match strategy.distance_override() {
            Some(DistanceOverride::OwnPace) => continuous(total, pace, pace.meters_per_second()),
            None if descriptor.is_continuous() => continuous(total, pace, easy_speed),
            None => structured(descriptor, profile, strategy, pace, effort_pace, easy_speed),
        };
        Ok((strategy.variant(), estimate))
    }
}

fn resolve_pace(
    descriptor: &WorkoutDescriptor,
    profile: &AthletePaceProfile,
    strategy: &VariantStrategy,
) -> PlanResult<Pace> {
    let pace = descriptor
        .target_pace
        .unwrap_or_else(|| profile.pace_for(strategy.effort_zone()));
    if pace.is_zero() {
        return Err(PlanError::invalid_argument(format!(
            "Workout '{}' resolves to a zero pace",
            descriptor.description
        )));
    }
    Ok(pace)
}

/// Easy pace covers recoveries and continuous running; segment zones matter
/// unless an effort pace replaces them
fn require_used_zones(
    descriptor: &WorkoutDescriptor,
    profile: &AthletePaceProfile,
    strategy: &VariantStrategy,
    effort_pace: Option<Pace>,
) -> PlanResult<()> {
    if strategy.distance_override().is_some() {
        return Ok(());
    }
    let segment_zones = descriptor
        .segments
        .iter()
        .filter(|_| effort_pace.is_none())
        .map(SegmentSpec::zone);
    profile.require_zones(iter::once(PaceZone::EasyPace).chain(segment_zones))
}

fn continuous(total_seconds: u32, pace: Pace, speed: f64) -> WorkoutEstimate {
    WorkoutEstimate {
        distance_meters: round_up_distance(f64::from(total_seconds) * speed),
        duration_seconds: u64::from(total_seconds),
        pace,
        structure: None,
    }
}

fn structured(
    descriptor: &WorkoutDescriptor,
    profile: &AthletePaceProfile,
    strategy: &VariantStrategy,
    pace: Pace,
    effort_pace: Option<Pace>,
    easy_speed: f64,
) -> WorkoutEstimate {
    let totals = walk_segments(&descriptor.segments, profile, effort_pace);
    let (warm_up, cool_down) = resolve_warm_up(
        strategy.warm_up_policy(),
        descriptor.run_type,
        descriptor.total_duration_seconds,
        totals.duration_seconds,
        &profile.preferences,
    );
    let easy_seconds = totals.recovery_seconds + u64::from(warm_up) + u64::from(cool_down);
    let distance = (easy_seconds as f64).mul_add(easy_speed, totals.effort_distance_meters);

    WorkoutEstimate {
        distance_meters: round_up_distance(distance),
        duration_seconds: totals.duration_seconds + u64::from(warm_up) + u64::from(cool_down),
        pace,
        structure: Some(WorkoutStructure {
            segments: descriptor.segments.clone(),
            warm_up_seconds: warm_up,
            cool_down_seconds: cool_down,
        }),
    }
}
