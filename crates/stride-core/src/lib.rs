// ABOUTME: Core types and constants for the Stride training planner
// ABOUTME: Foundation crate with error taxonomy, the Pace value type, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Stride Core
//!
//! Foundation crate shared by the planner crates. It holds the value types
//! every other component depends on and changes rarely, which keeps
//! incremental builds of the workspace cheap.
//!
//! ## Modules
//!
//! - **errors**: `PlanError` taxonomy and stable `ErrorCode`s
//! - **pace**: seconds-per-kilometre `Pace` value type
//! - **models**: run types, pace zones, segments, descriptors, athlete profile
//! - **constants**: physiological defaults and standard race distances

/// Unified error handling with stable error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Pace value type (seconds per kilometre)
pub mod pace;

/// Core data models (`RunType`, `SegmentSpec`, `WorkoutDescriptor`, athlete profile)
pub mod models;

pub use errors::{ErrorCode, PlanError, PlanResult};
pub use pace::Pace;
