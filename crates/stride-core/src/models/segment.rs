// ABOUTME: Pace zones and the two-level interval segment tree
// ABOUTME: SimpleSegment for one repeated effort/recovery block, SegmentSpec for simple or nested blocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::PlanError;

/// Named pace zone referenced by interval segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaceZone {
    /// Maximal aerobic speed pace
    MasPace,
    /// 5 km race pace
    FiveKPace,
    /// 10 km race pace
    TenKPace,
    /// Half marathon pace
    SemiMarathonPace,
    /// Marathon pace
    MarathonPace,
    /// Easy running pace
    EasyPace,
}

impl PaceZone {
    /// Every zone, fastest first
    pub const ALL: [Self; 6] = [
        Self::MasPace,
        Self::FiveKPace,
        Self::TenKPace,
        Self::SemiMarathonPace,
        Self::MarathonPace,
        Self::EasyPace,
    ];

    /// Token used in detail strings
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MasPace => "MasPace",
            Self::FiveKPace => "FiveKPace",
            Self::TenKPace => "TenKPace",
            Self::SemiMarathonPace => "SemiMarathonPace",
            Self::MarathonPace => "MarathonPace",
            Self::EasyPace => "EasyPace",
        }
    }
}

impl fmt::Display for PaceZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaceZone {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::ALL
            .into_iter()
            .find(|zone| zone.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| PlanError::format(format!("Unknown pace zone '{token}'")))
    }
}

/// One repeated effort/recovery block: `repetitions * (effort, zone, recovery)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleSegment {
    /// Number of repetitions (> 0)
    pub repetitions: u32,
    /// Effort duration in seconds
    pub effort_seconds: u32,
    /// Zone governing the effort pace
    pub zone: PaceZone,
    /// Recovery duration in seconds after each effort
    pub recovery_seconds: u32,
}

impl SimpleSegment {
    /// Effort plus recovery for all repetitions, in seconds
    #[must_use]
    pub const fn duration_seconds(&self) -> u64 {
        (self.effort_seconds as u64 + self.recovery_seconds as u64) * self.repetitions as u64
    }
}

impl fmt::Display for SimpleSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} * ({}, {}, {})",
            self.repetitions, self.effort_seconds, self.zone, self.recovery_seconds
        )
    }
}

/// A top-level segment of a structured workout
///
/// Nesting is limited to one level: a nested segment repeats a simple block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SegmentSpec {
    /// A simple repeated block
    Simple(SimpleSegment),
    /// A simple block repeated `repetitions` times with an outer recovery
    #[serde(rename_all = "camelCase")]
    Nested {
        /// Outer repetitions (> 0)
        repetitions: u32,
        /// Inner block
        inner: SimpleSegment,
        /// Recovery after each outer repetition, in seconds
        recovery_seconds: u32,
    },
}

impl SegmentSpec {
    /// Total duration of the segment tree, in seconds
    ///
    /// A nested block runs its inner block once, plus the outer recovery after
    /// each outer repetition.
    #[must_use]
    pub const fn duration_seconds(&self) -> u64 {
        match self {
            Self::Simple(segment) => segment.duration_seconds(),
            Self::Nested {
                repetitions,
                inner,
                recovery_seconds,
            } => inner.duration_seconds() + *recovery_seconds as u64 * *repetitions as u64,
        }
    }

    /// Zone of the segment's efforts
    #[must_use]
    pub const fn zone(&self) -> PaceZone {
        match self {
            Self::Simple(segment) | Self::Nested { inner: segment, .. } => segment.zone,
        }
    }
}

impl fmt::Display for SegmentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple(segment) => segment.fmt(f),
            Self::Nested {
                repetitions,
                inner,
                recovery_seconds,
            } => write!(f, "{repetitions} * ({inner}, {recovery_seconds})"),
        }
    }
}
