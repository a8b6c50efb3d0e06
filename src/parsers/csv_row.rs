// ABOUTME: Row grammar for plan files: the 5-field detail form and the 9-field flat form
// ABOUTME: Converts one record's fields into a workout descriptor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan file rows.
//!
//! Detail form (5 fields):
//! `week, run type, total seconds, detail, description`
//!
//! Flat form (9 fields):
//! `week, run type, total seconds, repetitions, run seconds, recovery seconds,
//! pace (decimal minutes), speed (km/h), description`
//!
//! Numbers always use `.` as the decimal separator.

use std::str::FromStr;

use stride_core::models::{RunType, SegmentSpec, SimpleSegment, WorkoutDescriptor};
use stride_core::{Pace, PlanError, PlanResult};
use stride_intelligence::estimator::strategy_for;

use super::detail_format::parse_detail;

/// Field count of the detail form
pub const DETAIL_ROW_FIELDS: usize = 5;
/// Field count of the flat form
pub const FLAT_ROW_FIELDS: usize = 9;

/// Parse one row into a descriptor (not yet validated)
///
/// # Errors
///
/// Returns `PlanError::Format` for a wrong field count, an unparsable
/// number, an unknown run type, or an invalid detail string
pub fn parse_row(fields: &[&str]) -> PlanResult<WorkoutDescriptor> {
    match fields.len() {
        DETAIL_ROW_FIELDS => parse_detail_row(fields),
        FLAT_ROW_FIELDS => parse_flat_row(fields),
        n => Err(PlanError::format(format!(
            "Expected {DETAIL_ROW_FIELDS} or {FLAT_ROW_FIELDS} fields, got {n}"
        ))),
    }
}

fn parse_detail_row(fields: &[&str]) -> PlanResult<WorkoutDescriptor> {
    let (week, run_type, total) = parse_common(fields)?;
    let segments = parse_detail(fields[3])?;
    Ok(WorkoutDescriptor::new(week, run_type, total, fields[4].trim()).with_segments(segments))
}

fn parse_flat_row(fields: &[&str]) -> PlanResult<WorkoutDescriptor> {
    let (week, run_type, total) = parse_common(fields)?;
    let repetitions: u32 = parse_field("repetitions", fields[3])?;
    let run_seconds = parse_seconds("run duration", fields[4])?;
    let recovery_seconds = parse_seconds("recovery duration", fields[5])?;
    let pace_minutes = parse_non_negative("pace", fields[6])?;
    let speed_kmh = parse_non_negative("speed", fields[7])?;

    let mut descriptor = WorkoutDescriptor::new(week, run_type, total, fields[8].trim());

    if repetitions > 0 && run_seconds > 0 {
        let zone = strategy_for(run_type)?.effort_zone();
        descriptor = descriptor.with_segments(vec![SegmentSpec::Simple(SimpleSegment {
            repetitions,
            effort_seconds: run_seconds,
            zone,
            recovery_seconds,
        })]);
    }

    if pace_minutes > 0.0 {
        descriptor = descriptor.with_target_pace(Pace::from_minutes_decimal(pace_minutes)?);
    } else if speed_kmh > 0.0 {
        // km/h: one hour per `speed` kilometres
        descriptor = descriptor.with_target_pace(Pace::from_time_and_distance(
            3600.0,
            speed_kmh * 1000.0,
        )?);
    }
    Ok(descriptor)
}

fn parse_common(fields: &[&str]) -> PlanResult<(u32, RunType, u32)> {
    Ok((
        parse_field("week", fields[0])?,
        fields[1].parse()?,
        parse_field("total duration", fields[2])?,
    ))
}

fn parse_field<T: FromStr>(name: &str, raw: &str) -> PlanResult<T> {
    let raw = raw.trim();
    raw.parse()
        .map_err(|_| PlanError::format(format!("Invalid {name} '{raw}'")))
}

fn parse_non_negative(name: &str, raw: &str) -> PlanResult<f64> {
    let value: f64 = if raw.trim().is_empty() {
        0.0
    } else {
        parse_field(name, raw)?
    };
    if !value.is_finite() || value < 0.0 {
        return Err(PlanError::format(format!("Invalid {name} '{}'", raw.trim())));
    }
    Ok(value)
}

/// Durations may be written with decimals; they are rounded to whole seconds
fn parse_seconds(name: &str, raw: &str) -> PlanResult<u32> {
    let seconds = parse_non_negative(name, raw)?.round();
    if seconds > f64::from(u32::MAX) {
        return Err(PlanError::format(format!("Invalid {name} '{}'", raw.trim())));
    }
    Ok(seconds as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_core::models::PaceZone;

    #[test]
    fn test_detail_row() {
        let descriptor =
            parse_row(&["2", "intervals", "3600", "6 * (400, MasPace, 90)", "VMA"]).unwrap();
        assert_eq!(descriptor.week, 2);
        assert_eq!(descriptor.run_type, RunType::Intervals);
        assert_eq!(descriptor.segments.len(), 1);
        assert!(descriptor.target_pace.is_none());
    }

    #[test]
    fn test_detail_row_without_detail_is_continuous() {
        let descriptor = parse_row(&["1", "Easy", "2700", "", "Footing"]).unwrap();
        assert!(descriptor.is_continuous());
        assert_eq!(descriptor.description, "Footing");
    }

    #[test]
    fn test_flat_row_builds_segment_and_pace() {
        let descriptor =
            parse_row(&["3", "Tempo", "3600", "2", "900", "120.0", "4.5", "0", "Seuil"]).unwrap();
        assert_eq!(
            descriptor.segments,
            vec![SegmentSpec::Simple(SimpleSegment {
                repetitions: 2,
                effort_seconds: 900,
                zone: PaceZone::SemiMarathonPace,
                recovery_seconds: 120,
            })]
        );
        assert_eq!(descriptor.target_pace, Some(Pace::from_seconds(270)));
    }

    #[test]
    fn test_flat_row_speed_fallback() {
        let descriptor =
            parse_row(&["1", "Easy", "1800", "0", "0", "0", "0", "12", "Jog"]).unwrap();
        assert!(descriptor.is_continuous());
        assert_eq!(descriptor.target_pace, Some(Pace::from_seconds(300)));
    }

    #[test]
    fn test_row_errors() {
        assert!(matches!(
            parse_row(&["1", "Easy", "1800", "Jog"]),
            Err(PlanError::Format(_))
        ));
        assert!(parse_row(&["one", "Easy", "1800", "", "Jog"]).is_err());
        assert!(parse_row(&["1", "Jogging", "1800", "", "Jog"]).is_err());
        assert!(parse_row(&["1", "Easy", "1800", "0", "0", "0", "4,5", "0", "Jog"]).is_err());
        assert!(parse_row(&["1", "Easy", "1800", "0", "0", "0", "-1", "0", "Jog"]).is_err());
    }
}
