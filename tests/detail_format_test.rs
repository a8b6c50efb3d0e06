// ABOUTME: Integration tests for the interval detail grammar and plan file rows
// ABOUTME: Simple, list and nested blocks, durations, row forms and rejected input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use stride_core::models::{PaceZone, RunType, SegmentSpec, SimpleSegment};
use stride_core::{Pace, PlanError};
use stride_planner::parsers::{format_detail, parse_detail, parse_row};

#[test]
fn test_simple_block_duration() {
    let segments = parse_detail("3 * (400, FiveKPace, 90)").unwrap();
    assert_eq!(segments.len(), 1);
    // 3 * (400 + 90)
    assert_eq!(segments[0].duration_seconds(), 1_470);
}

#[test]
fn test_nested_block_duration() {
    let segments = parse_detail("4 * (3 * (1000, MasPace, 200), 300)").unwrap();
    let SegmentSpec::Nested {
        repetitions,
        inner,
        recovery_seconds,
    } = segments[0]
    else {
        panic!("expected a nested block, got {segments:?}");
    };
    assert_eq!((repetitions, recovery_seconds), (4, 300));
    assert_eq!(inner.zone, PaceZone::MasPace);
    // 3 * (1000 + 200) + 4 * 300
    assert_eq!(segments[0].duration_seconds(), 4_800);
}

#[test]
fn test_list_of_blocks_keeps_order() {
    let detail = "2 * (600, TenKPace, 120), 3 * (300, MasPace, 60), 1 * (1200, MarathonPace, 0)";
    let segments = parse_detail(detail).unwrap();
    let zones: Vec<PaceZone> = segments
        .iter()
        .map(|segment| match segment {
            SegmentSpec::Simple(simple) => simple.zone,
            SegmentSpec::Nested { .. } => panic!("unexpected nested block"),
        })
        .collect();
    assert_eq!(
        zones,
        vec![
            PaceZone::TenKPace,
            PaceZone::MasPace,
            PaceZone::MarathonPace
        ]
    );
    assert_eq!(format_detail(&segments), detail);
}

#[test]
fn test_whitespace_and_case_are_tolerated() {
    let segments = parse_detail("  5*(200,maspace,45) ").unwrap();
    assert_eq!(
        segments,
        vec![SegmentSpec::Simple(SimpleSegment {
            repetitions: 5,
            effort_seconds: 200,
            zone: PaceZone::MasPace,
            recovery_seconds: 45,
        })]
    );
    assert_eq!(format_detail(&segments), "5 * (200, MasPace, 45)");
}

#[test]
fn test_rejected_details_are_format_errors() {
    for detail in [
        "3 * (400, FiveKPace)",
        "-3 * (400, FiveKPace, 90)",
        "3 * (400, EasyPace, 90, 1)",
        "3 * (400, SprintPace, 90)",
        "2 * (3 * (4 * (100, MasPace, 10), 20), 30)",
    ] {
        let err = parse_detail(detail).unwrap_err();
        assert!(matches!(err, PlanError::Format(_)), "{detail}: {err}");
        assert!(err.to_string().contains(detail.trim()), "{err}");
    }
}

#[test]
fn test_detail_needs_exactly_one_closing_parenthesis() {
    for detail in [
        "3 * (400, FiveKPace, 90))",
        "3 * (400, FiveKPace, 90",
        "4 * (3 * (1000, MasPace, 200), 300",
    ] {
        let err = parse_detail(detail).unwrap_err();
        assert!(matches!(err, PlanError::Format(_)), "{detail}: {err}");
    }
    assert!(parse_row(&["1", "Intervals", "3600", "6 * (400, MasPace, 90))", "VMA"]).is_err());
}

#[test]
fn test_detail_row_carries_segments() {
    let descriptor = parse_row(&[
        "3",
        "Intervals",
        "5400",
        "4 * (3 * (300, MasPace, 60), 120)",
        "Pyramids",
    ])
    .unwrap();
    assert_eq!(descriptor.week, 3);
    assert_eq!(descriptor.run_type, RunType::Intervals);
    assert_eq!(descriptor.total_duration_seconds, 5_400);
    assert_eq!(descriptor.segment_duration_seconds(), 3 * 360 + 4 * 120);
    assert!(!descriptor.is_continuous());
    assert!(descriptor.validate().is_ok());
}

#[test]
fn test_flat_row_with_speed() {
    // 12 km/h is a 5:00 pace
    let descriptor = parse_row(&[
        "2", "Steady", "3000", "1", "1800", "0", "", "12", "Steady run",
    ])
    .unwrap();
    assert_eq!(descriptor.target_pace, Some(Pace::from_seconds(300)));
    assert_eq!(descriptor.segment_duration_seconds(), 1_800);
    assert_eq!(descriptor.description, "Steady run");
}

#[test]
fn test_rows_with_wrong_shape_are_rejected() {
    assert!(matches!(
        parse_row(&["1", "Easy", "2700", "Footing"]),
        Err(PlanError::Format(_))
    ));
    assert!(matches!(
        parse_row(&["1", "Jog", "2700", "", "Footing"]),
        Err(PlanError::Format(_))
    ));
    assert!(matches!(
        parse_row(&["one", "Easy", "2700", "", "Footing"]),
        Err(PlanError::Format(_))
    ));
}
