// ABOUTME: Finished training plan: workouts grouped by week with their templates
// ABOUTME: Week lookup, workout removal, distance totals and weekly summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use stride_core::models::PlannedWorkout;

use crate::scheduling::TrainingTemplate;

/// One week of a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanWeek {
    /// Week number, starting at 1
    pub week: u32,
    /// Monday of the week
    pub start_date: NaiveDate,
    /// Template the week was scheduled with
    pub template: TrainingTemplate,
    /// Workouts ordered by date
    pub workouts: Vec<PlannedWorkout>,
}

/// Totals for one week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSummary {
    /// Week number
    pub week: u32,
    /// Monday of the week
    pub start_date: NaiveDate,
    /// Sunday of the week
    pub end_date: NaiveDate,
    /// Number of workouts
    pub workout_count: usize,
    /// Estimated distance in meters
    pub distance_meters: f64,
    /// Estimated duration in seconds
    pub duration_seconds: u64,
}

/// A scheduled and estimated training plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    start_date: NaiveDate,
    weeks: Vec<PlanWeek>,
}

impl Plan {
    pub(crate) const fn new(start_date: NaiveDate, weeks: Vec<PlanWeek>) -> Self {
        Self { start_date, weeks }
    }

    /// Monday the plan starts on
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Weeks in ascending order
    #[must_use]
    pub fn weeks(&self) -> &[PlanWeek] {
        &self.weeks
    }

    /// Every workout, week by week
    pub fn workouts(&self) -> impl Iterator<Item = &PlannedWorkout> {
        self.weeks.iter().flat_map(|week| week.workouts.iter())
    }

    /// Number of workouts
    #[must_use]
    pub fn workout_count(&self) -> usize {
        self.weeks.iter().map(|week| week.workouts.len()).sum()
    }

    /// Workouts of week `week`; empty when the plan has no such week
    #[must_use]
    pub fn week(&self, week: u32) -> &[PlannedWorkout] {
        self.find_week(week)
            .map_or(&[], |plan_week| plan_week.workouts.as_slice())
    }

    /// Template used for week `week`
    #[must_use]
    pub fn template_for(&self, week: u32) -> Option<&TrainingTemplate> {
        self.find_week(week).map(|plan_week| &plan_week.template)
    }

    /// Look up a workout by id
    #[must_use]
    pub fn workout(&self, id: u32) -> Option<&PlannedWorkout> {
        self.workouts().find(|workout| workout.id() == id)
    }

    /// Remove a workout by id, returning it
    ///
    /// The week stays in the plan even when its last workout is removed.
    pub fn remove_workout(&mut self, id: u32) -> Option<PlannedWorkout> {
        self.weeks.iter_mut().find_map(|week| {
            let index = week.workouts.iter().position(|workout| workout.id() == id)?;
            Some(week.workouts.remove(index))
        })
    }

    /// Sum of estimated distances in meters
    #[must_use]
    pub fn total_distance_meters(&self) -> f64 {
        self.workouts()
            .map(PlannedWorkout::estimated_distance_meters)
            .sum()
    }

    /// Per-week totals
    #[must_use]
    pub fn week_summaries(&self) -> Vec<WeekSummary> {
        self.weeks
            .iter()
            .map(|week| WeekSummary {
                week: week.week,
                start_date: week.start_date,
                end_date: week
                    .start_date
                    .checked_add_days(Days::new(6))
                    .unwrap_or(week.start_date),
                workout_count: week.workouts.len(),
                distance_meters: week
                    .workouts
                    .iter()
                    .map(PlannedWorkout::estimated_distance_meters)
                    .sum(),
                duration_seconds: week
                    .workouts
                    .iter()
                    .map(PlannedWorkout::estimated_duration_seconds)
                    .sum(),
            })
            .collect()
    }

    fn find_week(&self, week: u32) -> Option<&PlanWeek> {
        self.weeks.iter().find(|plan_week| plan_week.week == week)
    }
}
