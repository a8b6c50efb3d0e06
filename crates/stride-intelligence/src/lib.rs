// ABOUTME: Pace prediction and workout estimation algorithms for the Stride planner
// ABOUTME: Riegel model fitting and the strategy-driven workout variant factory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Stride Intelligence
//!
//! Pure, synchronous computations over immutable inputs:
//!
//! - **riegel**: fit `T = a * D^b` from reference performances and predict
//!   times and paces at other distances
//! - **estimator**: turn a workout descriptor into a typed, estimated workout

/// Riegel race-time predictor
pub mod riegel;

/// Workout variant factory and distance/duration calculus
pub mod estimator;

pub use estimator::VariantFactory;
pub use riegel::{PerformancePrediction, RiegelModel, RiegelParameters};
