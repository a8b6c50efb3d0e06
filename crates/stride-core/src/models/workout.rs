// ABOUTME: Workout descriptors (planner input) and planned workouts (planner output)
// ABOUTME: Descriptor validation, workout variants, and the immutable estimated workout record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{RunType, SegmentSpec};
use crate::errors::{PlanError, PlanResult};
use crate::pace::Pace;

/// Abstract workout as read from a plan file, before scheduling and estimation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDescriptor {
    /// Week number, starting at 1
    pub week: u32,
    /// Kind of session
    pub run_type: RunType,
    /// Planned total duration in seconds
    pub total_duration_seconds: u32,
    /// Free-text description
    pub description: String,
    /// Structured segments; empty for a continuous run
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<SegmentSpec>,
    /// Explicit pace overriding the run type's zone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_pace: Option<Pace>,
}

impl WorkoutDescriptor {
    /// Create a continuous-run descriptor
    #[must_use]
    pub fn new(
        week: u32,
        run_type: RunType,
        total_duration_seconds: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            week,
            run_type,
            total_duration_seconds,
            description: description.into(),
            segments: Vec::new(),
            target_pace: None,
        }
    }

    /// Attach structured segments
    #[must_use]
    pub fn with_segments(mut self, segments: Vec<SegmentSpec>) -> Self {
        self.segments = segments;
        self
    }

    /// Attach an explicit target pace
    #[must_use]
    pub fn with_target_pace(mut self, pace: Pace) -> Self {
        self.target_pace = Some(pace);
        self
    }

    /// Whether the workout has no segments
    #[must_use]
    pub fn is_continuous(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total duration of all segments, in seconds
    #[must_use]
    pub fn segment_duration_seconds(&self) -> u64 {
        self.segments.iter().map(SegmentSpec::duration_seconds).sum()
    }

    /// Check the row-level invariants
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidArgument` when the week is 0, the duration is 0,
    /// the description is blank, or a segment has zero repetitions
    pub fn validate(&self) -> PlanResult<()> {
        if self.week == 0 {
            return Err(PlanError::invalid_argument("Week must be greater than 0"));
        }
        if self.total_duration_seconds == 0 {
            return Err(PlanError::invalid_argument(
                "Total duration must be greater than 0",
            ));
        }
        if self.description.trim().is_empty() {
            return Err(PlanError::invalid_argument("Description is required"));
        }
        let zero_reps = self.segments.iter().any(|segment| match segment {
            SegmentSpec::Simple(simple) => simple.repetitions == 0,
            SegmentSpec::Nested {
                repetitions, inner, ..
            } => *repetitions == 0 || inner.repetitions == 0,
        });
        if zero_reps {
            return Err(PlanError::invalid_argument(
                "Segment repetitions must be greater than 0",
            ));
        }
        Ok(())
    }
}

/// Concrete workout family produced by the variant factory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutVariant {
    /// Easy and recovery runs
    Easy,
    /// Steady runs
    Steady,
    /// Tempo runs
    Tempo,
    /// Interval sessions
    Intervals,
    /// Long runs
    LongRun,
    /// Races
    Race,
    /// Catch-all for other run types
    Default,
}

impl WorkoutVariant {
    /// Every variant
    pub const ALL: [Self; 7] = [
        Self::Easy,
        Self::Steady,
        Self::Tempo,
        Self::Intervals,
        Self::LongRun,
        Self::Race,
        Self::Default,
    ];
}

impl fmt::Display for WorkoutVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "Easy",
            Self::Steady => "Steady",
            Self::Tempo => "Tempo",
            Self::Intervals => "Intervals",
            Self::LongRun => "LongRun",
            Self::Race => "Race",
            Self::Default => "Default",
        };
        f.write_str(name)
    }
}

/// Resolved segment tree of a structured workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutStructure {
    /// Segments as described
    pub segments: Vec<SegmentSpec>,
    /// Warm-up in seconds
    pub warm_up_seconds: u32,
    /// Cool-down in seconds
    pub cool_down_seconds: u32,
}

/// Estimated distance, duration and pace of a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutEstimate {
    /// Distance in meters, rounded up to the nearest 100
    pub distance_meters: f64,
    /// Duration in seconds
    pub duration_seconds: u64,
    /// Pace governing the workout
    pub pace: Pace,
    /// Segment tree for structured workouts
    pub structure: Option<WorkoutStructure>,
}

/// A scheduled, estimated workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedWorkout {
    id: u32,
    week: u32,
    run_type: RunType,
    variant: WorkoutVariant,
    total_duration_seconds: u32,
    description: String,
    date: NaiveDate,
    estimated_distance_meters: f64,
    estimated_duration_seconds: u64,
    pace: Pace,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    structure: Option<WorkoutStructure>,
}

impl PlannedWorkout {
    /// Assemble a planned workout from its descriptor and estimate
    #[must_use]
    pub fn new(
        id: u32,
        descriptor: &WorkoutDescriptor,
        variant: WorkoutVariant,
        date: NaiveDate,
        estimate: WorkoutEstimate,
    ) -> Self {
        Self {
            id,
            week: descriptor.week,
            run_type: descriptor.run_type,
            variant,
            total_duration_seconds: descriptor.total_duration_seconds,
            description: descriptor.description.clone(),
            date,
            estimated_distance_meters: estimate.distance_meters,
            estimated_duration_seconds: estimate.duration_seconds,
            pace: estimate.pace,
            structure: estimate.structure,
        }
    }

    /// Workout id, unique within a plan
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Week number
    #[must_use]
    pub const fn week(&self) -> u32 {
        self.week
    }

    /// Run type from the descriptor
    #[must_use]
    pub const fn run_type(&self) -> RunType {
        self.run_type
    }

    /// Variant that produced the estimate
    #[must_use]
    pub const fn variant(&self) -> WorkoutVariant {
        self.variant
    }

    /// Planned total duration in seconds
    #[must_use]
    pub const fn total_duration_seconds(&self) -> u32 {
        self.total_duration_seconds
    }

    /// Description
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Scheduled date
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Estimated distance in meters
    #[must_use]
    pub const fn estimated_distance_meters(&self) -> f64 {
        self.estimated_distance_meters
    }

    /// Estimated duration in seconds
    #[must_use]
    pub const fn estimated_duration_seconds(&self) -> u64 {
        self.estimated_duration_seconds
    }

    /// Resolved pace
    #[must_use]
    pub const fn pace(&self) -> Pace {
        self.pace
    }

    /// Segment tree with warm-up and cool-down, for structured workouts
    #[must_use]
    pub const fn structure(&self) -> Option<&WorkoutStructure> {
        self.structure.as_ref()
    }
}
