// ABOUTME: Distance and duration walk over the two-level segment tree
// ABOUTME: Warm-up/cool-down resolution per policy and distance rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::ops::Add;

use stride_core::constants::estimation::DISTANCE_ROUNDING_METERS;
use stride_core::models::{AthletePaceProfile, AthletePreferences, RunType, SegmentSpec, SimpleSegment};
use stride_core::Pace;

use super::strategy::WarmUpPolicy;

/// Accumulated effort distance, recovery time and duration of a segment tree
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SegmentTotals {
    /// Distance covered during efforts, at each segment's zone pace or the override pace
    pub effort_distance_meters: f64,
    /// Time spent recovering, run at easy pace
    pub recovery_seconds: u64,
    /// Efforts plus recoveries
    pub duration_seconds: u64,
}

impl SegmentTotals {
    fn repeated(self, repetitions: u32) -> Self {
        let reps = u64::from(repetitions);
        Self {
            effort_distance_meters: self.effort_distance_meters * f64::from(repetitions),
            recovery_seconds: self.recovery_seconds * reps,
            duration_seconds: self.duration_seconds * reps,
        }
    }
}

impl Add for SegmentTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            effort_distance_meters: self.effort_distance_meters + rhs.effort_distance_meters,
            recovery_seconds: self.recovery_seconds + rhs.recovery_seconds,
            duration_seconds: self.duration_seconds + rhs.duration_seconds,
        }
    }
}

/// Walk every top-level segment and sum the totals
///
/// Efforts run at `effort_pace` when given, otherwise at each segment's zone pace.
#[must_use]
pub fn walk_segments(
    segments: &[SegmentSpec],
    profile: &AthletePaceProfile,
    effort_pace: Option<Pace>,
) -> SegmentTotals {
    segments
        .iter()
        .map(|segment| walk_segment(segment, profile, effort_pace))
        .fold(SegmentTotals::default(), Add::add)
}

fn walk_segment(
    segment: &SegmentSpec,
    profile: &AthletePaceProfile,
    effort_pace: Option<Pace>,
) -> SegmentTotals {
    match segment {
        SegmentSpec::Simple(simple) => walk_simple(simple, profile, effort_pace),
        SegmentSpec::Nested {
            repetitions,
            inner,
            recovery_seconds,
        } => {
            let outer_recovery = SegmentTotals {
                effort_distance_meters: 0.0,
                recovery_seconds: u64::from(*recovery_seconds),
                duration_seconds: u64::from(*recovery_seconds),
            };
            walk_simple(inner, profile, effort_pace) + outer_recovery.repeated(*repetitions)
        }
    }
}

fn walk_simple(
    segment: &SimpleSegment,
    profile: &AthletePaceProfile,
    effort_pace: Option<Pace>,
) -> SegmentTotals {
    let speed = effort_pace
        .unwrap_or_else(|| profile.pace_for(segment.zone))
        .meters_per_second();
    SegmentTotals {
        effort_distance_meters: speed * f64::from(segment.effort_seconds),
        recovery_seconds: u64::from(segment.recovery_seconds),
        duration_seconds: u64::from(segment.effort_seconds) + u64::from(segment.recovery_seconds),
    }
    .repeated(segment.repetitions)
}

/// Resolve `(warm_up, cool_down)` seconds for a structured workout
#[must_use]
pub fn resolve_warm_up(
    policy: WarmUpPolicy,
    run_type: RunType,
    total_duration_seconds: u32,
    segment_duration_seconds: u64,
    preferences: &AthletePreferences,
) -> (u32, u32) {
    let total = u64::from(total_duration_seconds);
    match policy {
        WarmUpPolicy::Fixed => (
            preferences.warm_up_seconds(run_type),
            preferences.cool_down_seconds(run_type),
        ),
        WarmUpPolicy::AbsorbRemainder => {
            let cool_down = preferences.cool_down_seconds(run_type);
            let remainder = total
                .saturating_sub(segment_duration_seconds)
                .saturating_sub(u64::from(cool_down));
            let warm_up = u64::from(preferences.warm_up_seconds(run_type)).max(remainder);
            (clamp_seconds(warm_up), cool_down)
        }
        WarmUpPolicy::Continuous => (
            clamp_seconds(total.saturating_sub(segment_duration_seconds)),
            0,
        ),
    }
}

fn clamp_seconds(seconds: u64) -> u32 {
    u32::try_from(seconds).unwrap_or(u32::MAX)
}

/// Round a distance up to the next multiple of 100 m
#[must_use]
pub fn round_up_distance(meters: f64) -> f64 {
    (meters / DISTANCE_ROUNDING_METERS).ceil() * DISTANCE_ROUNDING_METERS
}
