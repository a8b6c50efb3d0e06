// ABOUTME: Integration tests for training templates and the week scheduler
// ABOUTME: Template validation rules, JSON templates and one-day-per-workout assignment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::HashSet;

use chrono::Weekday;
use common::four_workout_week;
use stride_core::models::{RunType, RunTypeMask, WorkoutDescriptor};
use stride_core::{ErrorCode, PlanError};
use stride_planner::scheduling::{TrainingTemplate, TrainingTemplateBuilder};

fn five_day_builder() -> TrainingTemplateBuilder {
    TrainingTemplate::builder()
        .day(Weekday::Mon, RunTypeMask::EASY)
        .day(Weekday::Tue, RunTypeMask::INTERVALS)
        .day(Weekday::Thu, RunTypeMask::TEMPO)
        .day(Weekday::Sat, RunTypeMask::EASY)
        .day(Weekday::Sun, RunTypeMask::LONG_RUN)
}

#[test]
fn test_five_day_template_allows_two_quality_days() {
    let template = five_day_builder().build().unwrap();
    assert_eq!(template.training_days(), 5);

    let err = five_day_builder()
        .day(Weekday::Sat, RunTypeMask::QUALITY)
        .build()
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidTemplate);
    assert!(matches!(
        err,
        PlanError::InvalidTemplate {
            quality_days: 3,
            max_quality_days: 2,
            training_days: 5,
            ..
        }
    ));
}

#[test]
fn test_long_run_on_two_days_is_rejected_whatever_the_size() {
    let err = five_day_builder()
        .day(Weekday::Mon, RunTypeMask::EASY | RunTypeMask::LONG_RUN)
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
fn test_template_from_json() {
    let json = r#"[
        {"weekday": "Tue", "allowed": "EASY | RECOVERY"},
        {"weekday": "Thu", "allowed": "INTERVALS"},
        {"weekday": "Sun", "allowed": "LONG_RUN"}
    ]"#;
    let template: TrainingTemplate = serde_json::from_str(json).unwrap();
    assert_eq!(template.training_days(), 3);
    assert!(template.allowance(Weekday::Tue).allows(RunType::Recovery));
    assert!(template.allowance(Weekday::Mon).is_rest());
}

#[test]
fn test_every_workout_gets_its_own_day() {
    let week = four_workout_week(1);
    let scheduled = TrainingTemplate::default_four().schedule_week(&week).unwrap();

    assert_eq!(scheduled.len(), week.len());
    let days: HashSet<Weekday> = scheduled.iter().map(|s| s.weekday).collect();
    assert_eq!(days.len(), week.len());

    for s in &scheduled {
        let expected = match s.descriptor.run_type {
            RunType::LongRun => Weekday::Sun,
            RunType::Intervals => Weekday::Thu,
            RunType::Easy => Weekday::Tue,
            RunType::Recovery => Weekday::Sat,
            other => panic!("unexpected run type {other}"),
        };
        assert_eq!(s.weekday, expected, "{}", s.descriptor.description);
    }
}

#[test]
fn test_extra_quality_session_moves_to_a_rest_day() {
    let mut week = four_workout_week(1);
    week.push(WorkoutDescriptor::new(1, RunType::Tempo, 3000, "Threshold"));

    let scheduled = TrainingTemplate::default_four().schedule_week(&week).unwrap();
    let tempo = scheduled
        .iter()
        .find(|s| s.descriptor.run_type == RunType::Tempo)
        .unwrap();
    // intervals took Thursday first, Monday is the first free rest day
    assert_eq!(tempo.weekday, Weekday::Mon);
}
