// ABOUTME: Main library entry point for the Stride training plan builder
// ABOUTME: Loads plan files, schedules weeks and estimates every workout from a pace profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Stride Planner
//!
//! Builds a multi-week running plan from a flat list of abstract workouts and
//! an athlete's pace profile.
//!
//! ## Architecture
//!
//! - **`stride-core`**: pace value type, domain models and errors
//! - **`stride-intelligence`**: Riegel predictor and the workout estimator
//! - **Parsers**: the interval detail grammar and CSV plan files
//! - **Scheduling**: weekly training templates and day assignment
//! - **Planning**: the plan builder and the finished plan
//! - **Pace calculator**: remote and in-process pace prediction
//! - **Config** / **Logging**: environment-driven settings and `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use stride_planner::parsers::PlanLoader;
//! use stride_planner::planning::PlanBuilder;
//! use stride_core::models::{AthletePaceProfile, PaceZone};
//! use stride_core::Pace;
//!
//! # fn main() -> anyhow::Result<()> {
//! let report = PlanLoader::default().load_file("plan.csv")?;
//! let profile = AthletePaceProfile::default()
//!     .with_pace(PaceZone::MasPace, "3:30".parse::<Pace>()?)
//!     .with_pace(PaceZone::EasyPace, "5:30".parse::<Pace>()?);
//! let start = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap_or_default();
//! let plan = PlanBuilder::new(start, profile).build(&report.descriptors)?;
//! println!("{} workouts", plan.workout_count());
//! # Ok(())
//! # }
//! ```

/// Environment-driven configuration
pub mod config;

/// `tracing` subscriber setup
pub mod logging;

/// Pace calculator clients and profile derivation
pub mod pace_calculator;

/// Detail grammar and CSV plan file parsing
pub mod parsers;

/// Plan builder and plan
pub mod planning;

/// Training templates and the week scheduler
pub mod scheduling;

pub use stride_core::{ErrorCode, Pace, PlanError, PlanResult};
