// ABOUTME: Weekly scheduling of workouts onto training days
// ABOUTME: Exposes training templates and the week scheduler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Training templates and day assignment
pub mod template;

pub use template::{DayAllowance, ScheduledWorkout, TrainingTemplate, TrainingTemplateBuilder, WEEK};
