// ABOUTME: Plan builder grouping descriptors by week, scheduling and estimating each week
// ABOUTME: Template selection, deterministic workout ids and date assignment from a Monday start
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Builder
//!
//! Weeks are independent once grouped, so they are scheduled and estimated
//! in parallel with rayon and collected back in ascending week order.
//!
//! Workout ids start at `(week + 9) * 100` and increase by one per workout
//! in scheduling order, so ids never collide across weeks of a plan shorter
//! than 100 workouts per week.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rayon::prelude::*;
use stride_core::constants::scheduling::{
    SMALL_WEEK_TRAINING_DAYS, WORKOUT_IDS_PER_WEEK, WORKOUT_ID_WEEK_OFFSET,
};
use stride_core::models::{AthletePaceProfile, PlannedWorkout, WorkoutDescriptor};
use stride_core::{PlanError, PlanResult};
use stride_intelligence::VariantFactory;
use tracing::{debug, info};

use super::plan::{Plan, PlanWeek};
use crate::config::EstimatorConfig;
use crate::scheduling::TrainingTemplate;

/// Builds a [`Plan`] from workout descriptors
#[derive(Debug, Clone)]
pub struct PlanBuilder {
    start_date: NaiveDate,
    profile: AthletePaceProfile,
    templates: Vec<TrainingTemplate>,
}

impl PlanBuilder {
    /// Create a builder; `start_date` is moved back to the Monday of its week
    #[must_use]
    pub fn new(start_date: NaiveDate, profile: AthletePaceProfile) -> Self {
        Self {
            start_date: monday_of(start_date),
            profile,
            templates: Vec::new(),
        }
    }

    /// Offer a template for weeks with as many workouts as it has training days
    #[must_use]
    pub fn with_template(mut self, template: TrainingTemplate) -> Self {
        self.templates.push(template);
        self
    }

    /// Use configured warm-up and cool-down defaults for run types without a preference
    #[must_use]
    pub fn with_estimator_config(mut self, config: &EstimatorConfig) -> Self {
        self.profile.preferences = self
            .profile
            .preferences
            .with_defaults(config.default_warm_up_secs, config.default_cool_down_secs);
        self
    }

    /// Monday the plan starts on
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Template used for a week with `workout_count` workouts
    ///
    /// The first offered template with a matching number of training days
    /// wins; otherwise the four-day default for up to four workouts and the
    /// five-day default above that.
    #[must_use]
    pub fn template_for_count(&self, workout_count: usize) -> TrainingTemplate {
        self.templates
            .iter()
            .find(|template| template.training_days() == workout_count)
            .copied()
            .unwrap_or_else(|| {
                if workout_count <= SMALL_WEEK_TRAINING_DAYS {
                    TrainingTemplate::default_four()
                } else {
                    TrainingTemplate::default_five()
                }
            })
    }

    /// Schedule and estimate every descriptor
    ///
    /// # Errors
    ///
    /// Returns the first error met: `PlanError::Scheduling` for a week with more
    /// than seven workouts, or any estimation error from the variant factory
    pub fn build(&self, descriptors: &[WorkoutDescriptor]) -> PlanResult<Plan> {
        let mut by_week: BTreeMap<u32, Vec<WorkoutDescriptor>> = BTreeMap::new();
        for descriptor in descriptors {
            by_week
                .entry(descriptor.week)
                .or_default()
                .push(descriptor.clone());
        }
        let grouped: Vec<(u32, Vec<WorkoutDescriptor>)> = by_week.into_iter().collect();

        info!(
            start_date = %self.start_date,
            weeks = grouped.len(),
            workouts = descriptors.len(),
            "Building training plan"
        );

        let weeks = grouped
            .par_iter()
            .map(|(week, week_descriptors)| self.build_week(*week, week_descriptors))
            .collect::<PlanResult<Vec<_>>>()?;

        let plan = Plan::new(self.start_date, weeks);
        info!(
            workouts = plan.workout_count(),
            total_distance_meters = plan.total_distance_meters(),
            "Training plan built"
        );
        Ok(plan)
    }

    fn build_week(&self, week: u32, descriptors: &[WorkoutDescriptor]) -> PlanResult<PlanWeek> {
        let start_date = self.week_start(week)?;
        let template = self.template_for_count(descriptors.len());
        let first_id = (week + WORKOUT_ID_WEEK_OFFSET) * WORKOUT_IDS_PER_WEEK;

        let mut workouts = template
            .schedule_week(descriptors)?
            .into_iter()
            .zip(first_id..)
            .map(|(scheduled, id)| {
                let date = day_in_week(start_date, scheduled.weekday)?;
                VariantFactory::create(id, scheduled.descriptor, &self.profile, date)
            })
            .collect::<PlanResult<Vec<PlannedWorkout>>>()?;
        workouts.sort_by_key(PlannedWorkout::date);

        debug!(
            week,
            %start_date,
            workouts = workouts.len(),
            training_days = template.training_days(),
            "Scheduled week"
        );
        Ok(PlanWeek {
            week,
            start_date,
            template,
            workouts,
        })
    }

    fn week_start(&self, week: u32) -> PlanResult<NaiveDate> {
        let offset = u64::from(week.saturating_sub(1)) * 7;
        self.start_date
            .checked_add_days(Days::new(offset))
            .ok_or_else(|| PlanError::invalid_argument(format!("Week {week} is out of range")))
    }
}

/// Monday of the week containing `date`
#[must_use]
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

fn day_in_week(monday: NaiveDate, weekday: Weekday) -> PlanResult<NaiveDate> {
    monday
        .checked_add_days(Days::new(u64::from(weekday.num_days_from_monday())))
        .ok_or_else(|| PlanError::invalid_argument(format!("No {weekday} after {monday}")))
}
