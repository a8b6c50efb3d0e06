// ABOUTME: Weekly training template and the day-assignment scheduler
// ABOUTME: Builder with long-run and quality-day validation, default 4 and 5 day templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Training Templates
//!
//! A template says which run types each weekday allows; an empty mask is a
//! rest day. Templates are validated once, when built:
//!
//! - at most one day allows a long run
//! - days allowing a quality session (tempo or intervals) are capped at one
//!   for templates with up to four training days, two otherwise
//!
//! [`TrainingTemplate::schedule_week`] places a week's workouts on distinct
//! days, long runs first, then intervals, then tempo, then everything else.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use stride_core::constants::scheduling::{
    LARGE_WEEK_MAX_QUALITY_DAYS, MAX_LONG_RUN_DAYS, SMALL_WEEK_MAX_QUALITY_DAYS,
    SMALL_WEEK_TRAINING_DAYS,
};
use stride_core::models::{RunTypeMask, WorkoutDescriptor};
use stride_core::{PlanError, PlanResult};
use tracing::warn;

/// Days of the week in scheduling order
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Run types allowed on one weekday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAllowance {
    /// Day of the week
    pub weekday: Weekday,
    /// Allowed run types; empty for a rest day
    pub allowed: RunTypeMask,
}

impl DayAllowance {
    /// Whether this is a rest day
    #[must_use]
    pub const fn is_rest(&self) -> bool {
        self.allowed.is_rest()
    }
}

/// A workout assigned to a weekday
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledWorkout<'a> {
    /// The workout
    pub descriptor: &'a WorkoutDescriptor,
    /// Day it was placed on
    pub weekday: Weekday,
}

/// Validated weekly template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DayAllowance>", into = "Vec<DayAllowance>")]
pub struct TrainingTemplate {
    days: [RunTypeMask; 7],
}

impl TrainingTemplate {
    /// Start building a template; unspecified days are rest days
    #[must_use]
    pub const fn builder() -> TrainingTemplateBuilder {
        TrainingTemplateBuilder {
            days: [RunTypeMask::empty(); 7],
        }
    }

    /// Four training days: Tue easy, Thu quality, Sat easy, Sun long run
    #[must_use]
    pub const fn default_four() -> Self {
        let easy = RunTypeMask::EASY.union(RunTypeMask::RECOVERY);
        Self {
            days: [
                RunTypeMask::empty(),
                easy,
                RunTypeMask::empty(),
                RunTypeMask::QUALITY,
                RunTypeMask::empty(),
                easy,
                RunTypeMask::LONG_RUN,
            ],
        }
    }

    /// Five training days: Tue easy, Wed quality, Fri easy, Sat steady, Sun long run
    #[must_use]
    pub const fn default_five() -> Self {
        let easy = RunTypeMask::EASY.union(RunTypeMask::RECOVERY);
        Self {
            days: [
                RunTypeMask::empty(),
                easy,
                RunTypeMask::QUALITY,
                RunTypeMask::empty(),
                easy,
                RunTypeMask::STEADY,
                RunTypeMask::LONG_RUN,
            ],
        }
    }

    /// Run types allowed on a weekday
    #[must_use]
    pub fn allowance(&self, weekday: Weekday) -> RunTypeMask {
        self.days[weekday.num_days_from_monday() as usize]
    }

    /// All seven days, Monday first
    pub fn days(&self) -> impl Iterator<Item = DayAllowance> + '_ {
        WEEK.iter().zip(self.days.iter()).map(|(weekday, allowed)| DayAllowance {
            weekday: *weekday,
            allowed: *allowed,
        })
    }

    /// Number of non-rest days
    #[must_use]
    pub fn training_days(&self) -> usize {
        self.days.iter().filter(|mask| !mask.is_rest()).count()
    }

    /// Assign each workout of a week to a distinct day
    ///
    /// Workouts are placed by priority (long run, intervals, tempo, others;
    /// ties keep their input order) on the first free day allowing their run
    /// type, else the first free rest day, else the first free day.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::Scheduling` when every day is already used
    pub fn schedule_week<'a>(
        &self,
        descriptors: &'a [WorkoutDescriptor],
    ) -> PlanResult<Vec<ScheduledWorkout<'a>>> {
        let mut ordered: Vec<&WorkoutDescriptor> = descriptors.iter().collect();
        ordered.sort_by_key(|descriptor| descriptor.run_type.scheduling_priority());

        let mut used = [false; 7];
        let mut scheduled = Vec::with_capacity(ordered.len());
        for descriptor in ordered {
            let free = |predicate: &dyn Fn(RunTypeMask) -> bool| {
                (0..WEEK.len()).find(|&i| !used[i] && predicate(self.days[i]))
            };
            let index = free(&|mask| mask.allows(descriptor.run_type))
                .or_else(|| free(&|mask| mask.is_rest()))
                .or_else(|| free(&|_| true))
                .ok_or_else(|| {
                    warn!(
                        week = descriptor.week,
                        run_type = %descriptor.run_type,
                        workouts = descriptors.len(),
                        "No free day left in the week"
                    );
                    PlanError::scheduling("unable to assign a day for workout")
                })?;
            used[index] = true;
            scheduled.push(ScheduledWorkout {
                descriptor,
                weekday: WEEK[index],
            });
        }
        Ok(scheduled)
    }
}

impl TryFrom<Vec<DayAllowance>> for TrainingTemplate {
    type Error = PlanError;

    fn try_from(days: Vec<DayAllowance>) -> Result<Self, Self::Error> {
        days.into_iter()
            .fold(Self::builder(), |builder, day| builder.day(day.weekday, day.allowed))
            .build()
    }
}

impl From<TrainingTemplate> for Vec<DayAllowance> {
    fn from(template: TrainingTemplate) -> Self {
        template.days().collect()
    }
}

/// Builder for [`TrainingTemplate`]
#[derive(Debug, Clone, Copy)]
pub struct TrainingTemplateBuilder {
    days: [RunTypeMask; 7],
}

impl TrainingTemplateBuilder {
    /// Set the allowance of a day (an empty mask makes it a rest day)
    #[must_use]
    pub fn day(mut self, weekday: Weekday, allowed: RunTypeMask) -> Self {
        self.days[weekday.num_days_from_monday() as usize] = allowed;
        self
    }

    /// Make a day a rest day
    #[must_use]
    pub fn rest(self, weekday: Weekday) -> Self {
        self.day(weekday, RunTypeMask::empty())
    }

    /// Validate and build the template
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidTemplate` with the offending counts when more
    /// than one day allows a long run or there are too many quality days
    pub fn build(self) -> PlanResult<TrainingTemplate> {
        let long_run_days = self
            .days
            .iter()
            .filter(|mask| mask.contains(RunTypeMask::LONG_RUN))
            .count();
        let quality_days = self.days.iter().filter(|mask| mask.allows_quality()).count();
        let training_days = self.days.iter().filter(|mask| !mask.is_rest()).count();
        let max_quality_days = if training_days <= SMALL_WEEK_TRAINING_DAYS {
            SMALL_WEEK_MAX_QUALITY_DAYS
        } else {
            LARGE_WEEK_MAX_QUALITY_DAYS
        };

        let reason = if long_run_days > MAX_LONG_RUN_DAYS {
            Some("more than one long run day")
        } else if quality_days > max_quality_days {
            Some("too many quality days")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(PlanError::InvalidTemplate {
                reason,
                long_run_days,
                quality_days,
                max_quality_days,
                training_days,
            }),
            None => Ok(TrainingTemplate { days: self.days }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_core::models::RunType;

    fn workout(run_type: RunType) -> WorkoutDescriptor {
        WorkoutDescriptor::new(1, run_type, 3600, run_type.as_str())
    }

    #[test]
    fn test_default_templates_are_valid() {
        for template in [TrainingTemplate::default_four(), TrainingTemplate::default_five()] {
            let rebuilt = template
                .days()
                .fold(TrainingTemplate::builder(), |b, d| b.day(d.weekday, d.allowed))
                .build()
                .unwrap();
            assert_eq!(rebuilt, template);
        }
        assert_eq!(TrainingTemplate::default_four().training_days(), 4);
        assert_eq!(TrainingTemplate::default_five().training_days(), 5);
        assert!(TrainingTemplate::default_four()
            .allowance(Weekday::Tue)
            .allows(RunType::Recovery));
    }

    #[test]
    fn test_two_long_run_days_rejected() {
        let err = TrainingTemplate::builder()
            .day(Weekday::Sat, RunTypeMask::LONG_RUN)
            .day(Weekday::Sun, RunTypeMask::LONG_RUN)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            PlanError::InvalidTemplate {
                long_run_days: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_quality_cap_depends_on_training_days() {
        let four_days = TrainingTemplate::builder()
            .day(Weekday::Tue, RunTypeMask::TEMPO)
            .day(Weekday::Thu, RunTypeMask::INTERVALS)
            .day(Weekday::Sat, RunTypeMask::EASY)
            .day(Weekday::Sun, RunTypeMask::LONG_RUN);
        assert!(matches!(
            four_days.build(),
            Err(PlanError::InvalidTemplate {
                quality_days: 2,
                max_quality_days: 1,
                training_days: 4,
                ..
            })
        ));
        assert!(four_days.day(Weekday::Mon, RunTypeMask::EASY).build().is_ok());
    }

    #[test]
    fn test_zero_mask_is_rest_day() {
        let template = TrainingTemplate::builder()
            .day(Weekday::Mon, RunTypeMask::EASY)
            .rest(Weekday::Mon)
            .build()
            .unwrap();
        assert_eq!(template.training_days(), 0);
    }

    #[test]
    fn test_schedule_priority_and_matching() {
        let week = vec![
            workout(RunType::Easy),
            workout(RunType::Easy),
            workout(RunType::Intervals),
            workout(RunType::LongRun),
        ];
        let scheduled = TrainingTemplate::default_four().schedule_week(&week).unwrap();
        let days: Vec<(RunType, Weekday)> = scheduled
            .iter()
            .map(|s| (s.descriptor.run_type, s.weekday))
            .collect();
        assert_eq!(
            days,
            vec![
                (RunType::LongRun, Weekday::Sun),
                (RunType::Intervals, Weekday::Thu),
                (RunType::Easy, Weekday::Tue),
                (RunType::Easy, Weekday::Sat),
            ]
        );
    }

    #[test]
    fn test_schedule_falls_back_to_rest_then_any_day() {
        let week = vec![workout(RunType::Race), workout(RunType::LongRun)];
        let template = TrainingTemplate::builder()
            .day(Weekday::Mon, RunTypeMask::EASY)
            .day(Weekday::Sun, RunTypeMask::LONG_RUN)
            .build()
            .unwrap();
        let scheduled = template.schedule_week(&week).unwrap();
        // race has no matching day: first free rest day is Tuesday
        assert_eq!(scheduled[1].weekday, Weekday::Tue);
    }

    #[test]
    fn test_eight_workouts_cannot_be_scheduled() {
        let week: Vec<_> = (0..8).map(|_| workout(RunType::Easy)).collect();
        assert!(matches!(
            TrainingTemplate::default_five().schedule_week(&week),
            Err(PlanError::Scheduling(_))
        ));
        let seven: Vec<_> = (0..7).map(|_| workout(RunType::Easy)).collect();
        let scheduled = TrainingTemplate::default_five().schedule_week(&seven).unwrap();
        let mut days: Vec<u32> = scheduled
            .iter()
            .map(|s| s.weekday.num_days_from_monday())
            .collect();
        days.sort_unstable();
        days.dedup();
        assert_eq!(days.len(), 7);
    }

    #[test]
    fn test_serde_validates() {
        let json = serde_json::to_string(&TrainingTemplate::default_four()).unwrap();
        let back: TrainingTemplate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TrainingTemplate::default_four());

        let invalid = r#"[{"weekday":"Sat","allowed":"LONG_RUN"},{"weekday":"Sun","allowed":"LONG_RUN"}]"#;
        assert!(serde_json::from_str::<TrainingTemplate>(invalid).is_err());
    }
}
