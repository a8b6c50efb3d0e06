// ABOUTME: Parser for the compact interval detail grammar used in plan files
// ABOUTME: Decodes simple, list and one-level nested repetition blocks into segment specs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Detail Format
//!
//! ```text
//! n * (t, p, r)                          one simple block
//! n1 * (t1, p1, r1), n2 * (t2, p2, r2)   a list of simple blocks
//! n1 * (n2 * (t, p, r2), r1)             one block nested one level
//! ```
//!
//! `t` and `r` are effort and recovery seconds, `p` a pace zone token such as
//! `MasPace` (case-insensitive). The detail ends with exactly one `)`, blocks
//! are separated by `"), "`, and a nested block is recognised by two `*`
//! before the first separator. An empty detail string is a continuous run with
//! no segments.

use stride_core::models::{PaceZone, SegmentSpec, SimpleSegment};
use stride_core::{PlanError, PlanResult};

const BLOCK_SEPARATOR: &str = "), ";
const REPEAT: char = '*';

/// Parse a detail string into its top-level segments
///
/// # Errors
///
/// Returns `PlanError::Format` for a malformed block, an unknown zone, an
/// unparsable number, zero repetitions, or nesting deeper than one level
pub fn parse_detail(detail: &str) -> PlanResult<Vec<SegmentSpec>> {
    let detail = detail.trim();
    if detail.is_empty() {
        return Ok(Vec::new());
    }

    let body = detail
        .strip_suffix(')')
        .ok_or_else(|| invalid(detail, "missing closing ')'"))?;
    let parts: Vec<&str> = body.split(BLOCK_SEPARATOR).collect();
    let first = parts.first().copied().unwrap_or_default();

    match first.matches(REPEAT).count() {
        0 | 1 if parts.len() == 1 => Ok(vec![SegmentSpec::Simple(parse_simple(first, detail)?)]),
        0 | 1 => parts
            .iter()
            .map(|part| parse_simple(part, detail).map(SegmentSpec::Simple))
            .collect(),
        2 => parse_nested(&parts, detail).map(|segment| vec![segment]),
        _ => Err(invalid(detail, "nesting deeper than one level is not supported")),
    }
}

/// Render segments back into the detail grammar
#[must_use]
pub fn format_detail(segments: &[SegmentSpec]) -> String {
    segments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn parse_nested(parts: &[&str], detail: &str) -> PlanResult<SegmentSpec> {
    let [head, outer_recovery] = parts else {
        return Err(invalid(
            detail,
            "a nested block must end with exactly one outer recovery",
        ));
    };
    let (repetitions, body) = split_repeat(head, detail)?;
    let inner = parse_simple(body, detail)?;
    let recovery_seconds = parse_number(outer_recovery, detail)?;
    Ok(SegmentSpec::Nested {
        repetitions,
        inner,
        recovery_seconds,
    })
}

fn parse_simple(part: &str, detail: &str) -> PlanResult<SimpleSegment> {
    let (repetitions, body) = split_repeat(part, detail)?;
    if body.contains(REPEAT) {
        return Err(invalid(detail, "unexpected nested block"));
    }
    let fields: Vec<&str> = body.split(',').map(str::trim).collect();
    let [effort, zone, recovery] = fields.as_slice() else {
        return Err(invalid(
            detail,
            &format!("expected 3 fields in a block, got {}", fields.len()),
        ));
    };
    Ok(SimpleSegment {
        repetitions,
        effort_seconds: parse_number(effort, detail)?,
        zone: zone
            .parse::<PaceZone>()
            .map_err(|_| invalid(detail, &format!("unknown pace zone '{zone}'")))?,
        recovery_seconds: parse_number(recovery, detail)?,
    })
}

/// Split `n * (body` into the repetition count and the body without its opening parenthesis
fn split_repeat<'a>(part: &'a str, detail: &str) -> PlanResult<(u32, &'a str)> {
    let (count, rest) = part
        .split_once(REPEAT)
        .ok_or_else(|| invalid(detail, "missing '*' between repetitions and block"))?;
    let repetitions = parse_number(count, detail)?;
    if repetitions == 0 {
        return Err(invalid(detail, "repetitions must be greater than 0"));
    }
    let body = rest
        .trim()
        .strip_prefix('(')
        .ok_or_else(|| invalid(detail, "missing '(' after '*'"))?;
    Ok((repetitions, body.trim()))
}

fn parse_number(raw: &str, detail: &str) -> PlanResult<u32> {
    let raw = raw.trim();
    raw.parse()
        .map_err(|_| invalid(detail, &format!("'{raw}' is not a whole number of seconds")))
}

fn invalid(detail: &str, reason: &str) -> PlanError {
    PlanError::format(format!("Invalid detail '{detail}': {reason}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_block() {
        let segments = parse_detail("3 * (400, FiveKPace, 90)").unwrap();
        assert_eq!(
            segments,
            vec![SegmentSpec::Simple(SimpleSegment {
                repetitions: 3,
                effort_seconds: 400,
                zone: PaceZone::FiveKPace,
                recovery_seconds: 90,
            })]
        );
    }

    #[test]
    fn test_nested_block() {
        let segments = parse_detail("4 * (3 * (1000, MasPace, 200), 300)").unwrap();
        assert_eq!(
            segments,
            vec![SegmentSpec::Nested {
                repetitions: 4,
                inner: SimpleSegment {
                    repetitions: 3,
                    effort_seconds: 1000,
                    zone: PaceZone::MasPace,
                    recovery_seconds: 200,
                },
                recovery_seconds: 300,
            }]
        );
    }

    #[test]
    fn test_list_form() {
        let segments =
            parse_detail("2 * (600, tenkpace, 120), 1 * (1200, SemiMarathonPace, 0)").unwrap();
        assert_eq!(segments.len(), 2);
        assert!(matches!(
            segments[1],
            SegmentSpec::Simple(SimpleSegment {
                zone: PaceZone::SemiMarathonPace,
                effort_seconds: 1200,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_detail_is_continuous() {
        assert!(parse_detail("").unwrap().is_empty());
        assert!(parse_detail("   ").unwrap().is_empty());
    }

    #[test]
    fn test_format_errors() {
        for detail in [
            "3 * (400, FiveKPace)",
            "3 * (400, FiveKPace, 90, 10)",
            "x * (400, FiveKPace, 90)",
            "3 * (abc, FiveKPace, 90)",
            "3 * (400, ThresholdPace, 90)",
            "0 * (400, FiveKPace, 90)",
            "3 (400, FiveKPace, 90)",
            "2 * (3 * (4 * (100, MasPace, 10), 20), 30)",
            "4 * (3 * (1000, MasPace, 200), 300), 2 * (400, FiveKPace, 60)",
            "4 * (3 * (1000, MasPace, 200), x)",
        ] {
            assert!(
                matches!(parse_detail(detail), Err(PlanError::Format(_))),
                "expected '{detail}' to be rejected"
            );
        }
    }

    #[test]
    fn test_closing_parenthesis_must_appear_once() {
        for detail in [
            "3 * (400, FiveKPace, 90",
            "3 * (400, FiveKPace, 90))",
            "2 * (600, TenKPace, 120), 1 * (1200, MarathonPace, 0))",
            "4 * (3 * (1000, MasPace, 200), 300))",
            "4 * (3 * (1000, MasPace, 200), 300",
        ] {
            assert!(
                matches!(parse_detail(detail), Err(PlanError::Format(_))),
                "expected '{detail}' to be rejected"
            );
        }
    }

    #[test]
    fn test_format_then_parse_is_stable() {
        for detail in [
            "3 * (400, FiveKPace, 90)",
            "4 * (3 * (1000, MasPace, 200), 300)",
            "2 * (600, TenKPace, 120), 1 * (1200, SemiMarathonPace, 0)",
        ] {
            let segments = parse_detail(detail).unwrap();
            assert_eq!(format_detail(&segments), detail);
        }
    }
}
