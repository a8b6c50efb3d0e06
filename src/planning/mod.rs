// ABOUTME: Plan orchestration from descriptors to a dated, estimated plan
// ABOUTME: Exposes the plan builder and the plan with its weekly summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Week grouping, scheduling and estimation
pub mod builder;
/// The finished plan
pub mod plan;

pub use builder::{monday_of, PlanBuilder};
pub use plan::{Plan, PlanWeek, WeekSummary};
