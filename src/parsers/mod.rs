// ABOUTME: Input parsing for plan files
// ABOUTME: Detail grammar, CSV row grammar, and the reporting CSV loader
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CSV row grammar (5-field detail form and 9-field flat form)
pub mod csv_row;
/// Interval detail micro-format
pub mod detail_format;
/// CSV loader with a valid/invalid row report
pub mod loader;

pub use csv_row::parse_row;
pub use detail_format::{format_detail, parse_detail};
pub use loader::{InvalidRow, LoadError, LoadReport, PlanLoader};
