// ABOUTME: Domain models for the training planner
// ABOUTME: Re-exports run types, segments, workouts, performances and athlete profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `RunType` / `RunTypeMask`: session kinds and the sets templates allow
//! - `PaceZone`, `SimpleSegment`, `SegmentSpec`: the two-level interval tree
//! - `WorkoutDescriptor`: planner input, `PlannedWorkout`: planner output
//! - `Performance`: a reference effort for pace prediction
//! - `AthletePaceProfile`: paces per zone plus preferences

mod athlete;
mod performance;
mod run_type;
mod segment;
mod workout;

pub use athlete::{AthletePaceProfile, AthletePreferences, WorkoutPreferences};
pub use performance::Performance;
pub use run_type::{RunType, RunTypeMask};
pub use segment::{PaceZone, SegmentSpec, SimpleSegment};
pub use workout::{
    PlannedWorkout, WorkoutDescriptor, WorkoutEstimate, WorkoutStructure, WorkoutVariant,
};
