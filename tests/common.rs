// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, sample pace profiles, dates and descriptors
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `stride_planner`

use std::sync::Once;

use chrono::NaiveDate;
use stride_core::models::{
    AthletePaceProfile, PaceZone, RunType, SegmentSpec, SimpleSegment, WorkoutDescriptor,
};
use stride_core::Pace;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level, quiet by default
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Profile with MAS 3:30 and easy 5:30, the other zones in between
pub fn sample_profile() -> AthletePaceProfile {
    AthletePaceProfile::default()
        .with_pace(PaceZone::MasPace, Pace::from_seconds(210))
        .with_pace(PaceZone::FiveKPace, Pace::from_seconds(225))
        .with_pace(PaceZone::TenKPace, Pace::from_seconds(235))
        .with_pace(PaceZone::SemiMarathonPace, Pace::from_seconds(250))
        .with_pace(PaceZone::MarathonPace, Pace::from_seconds(265))
        .with_pace(PaceZone::EasyPace, Pace::from_seconds(330))
}

/// A Monday
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
}

/// Simple interval block
pub fn intervals(repetitions: u32, effort: u32, zone: PaceZone, recovery: u32) -> SegmentSpec {
    SegmentSpec::Simple(SimpleSegment {
        repetitions,
        effort_seconds: effort,
        zone,
        recovery_seconds: recovery,
    })
}

/// The usual four-session week
pub fn four_workout_week(week: u32) -> Vec<WorkoutDescriptor> {
    vec![
        WorkoutDescriptor::new(week, RunType::Easy, 2700, "Footing"),
        WorkoutDescriptor::new(week, RunType::Intervals, 3600, "VMA")
            .with_segments(vec![intervals(6, 400, PaceZone::MasPace, 90)]),
        WorkoutDescriptor::new(week, RunType::Recovery, 1800, "Recovery jog"),
        WorkoutDescriptor::new(week, RunType::LongRun, 5400, "Long run"),
    ]
}
