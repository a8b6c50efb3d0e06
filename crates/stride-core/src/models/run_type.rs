// ABOUTME: Run type enumeration and the bitflags mask used by training templates
// ABOUTME: Case-insensitive parsing, scheduling priority, and quality classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::PlanError;

/// Kind of running session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RunType {
    /// Easy aerobic run
    Easy,
    /// Steady state run
    Steady,
    /// Threshold run
    Tempo,
    /// Interval session
    Intervals,
    /// Weekly long run
    LongRun,
    /// Race or time trial
    Race,
    /// Recovery jog
    Recovery,
    /// Anything not covered above
    Other,
}

impl RunType {
    /// Every run type, in declaration order
    pub const ALL: [Self; 8] = [
        Self::Easy,
        Self::Steady,
        Self::Tempo,
        Self::Intervals,
        Self::LongRun,
        Self::Race,
        Self::Recovery,
        Self::Other,
    ];

    /// Canonical name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Steady => "Steady",
            Self::Tempo => "Tempo",
            Self::Intervals => "Intervals",
            Self::LongRun => "LongRun",
            Self::Race => "Race",
            Self::Recovery => "Recovery",
            Self::Other => "Other",
        }
    }

    /// The single-bit mask for this run type
    #[must_use]
    pub const fn mask(&self) -> RunTypeMask {
        match self {
            Self::Easy => RunTypeMask::EASY,
            Self::Steady => RunTypeMask::STEADY,
            Self::Tempo => RunTypeMask::TEMPO,
            Self::Intervals => RunTypeMask::INTERVALS,
            Self::LongRun => RunTypeMask::LONG_RUN,
            Self::Race => RunTypeMask::RACE,
            Self::Recovery => RunTypeMask::RECOVERY,
            Self::Other => RunTypeMask::OTHER,
        }
    }

    /// Whether this is a quality session (counts toward the template quality cap)
    #[must_use]
    pub const fn is_quality(&self) -> bool {
        matches!(self, Self::Tempo | Self::Intervals)
    }

    /// Scheduling priority, lower is placed first
    #[must_use]
    pub const fn scheduling_priority(&self) -> u8 {
        match self {
            Self::LongRun => 0,
            Self::Intervals => 1,
            Self::Tempo => 2,
            _ => 5,
        }
    }
}

impl fmt::Display for RunType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RunType {
    type Err = PlanError;

    /// Parse case-insensitively; `_`, `-` and spaces are ignored (`long_run` is `LongRun`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();
        Self::ALL
            .into_iter()
            .find(|run_type| run_type.as_str().to_lowercase() == normalized)
            .ok_or_else(|| PlanError::format(format!("Unknown run type '{}'", s.trim())))
    }
}

bitflags::bitflags! {
    /// Set of run types a template day allows
    ///
    /// An empty mask is a rest day.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct RunTypeMask: u8 {
        /// Easy run
        const EASY = 0b0000_0001;
        /// Steady run
        const STEADY = 0b0000_0010;
        /// Tempo run
        const TEMPO = 0b0000_0100;
        /// Interval session
        const INTERVALS = 0b0000_1000;
        /// Long run
        const LONG_RUN = 0b0001_0000;
        /// Race
        const RACE = 0b0010_0000;
        /// Recovery jog
        const RECOVERY = 0b0100_0000;
        /// Other
        const OTHER = 0b1000_0000;
    }
}

impl RunTypeMask {
    /// Quality sessions: tempo and intervals
    pub const QUALITY: Self = Self::TEMPO.union(Self::INTERVALS);

    /// Whether this mask marks a rest day
    #[must_use]
    pub const fn is_rest(&self) -> bool {
        self.is_empty()
    }

    /// Whether this mask allows the given run type
    #[must_use]
    pub const fn allows(&self, run_type: RunType) -> bool {
        self.intersects(run_type.mask())
    }

    /// Whether this mask allows a quality session
    #[must_use]
    pub const fn allows_quality(&self) -> bool {
        self.intersects(Self::QUALITY)
    }
}

impl From<RunType> for RunTypeMask {
    fn from(run_type: RunType) -> Self {
        run_type.mask()
    }
}

impl FromIterator<RunType> for RunTypeMask {
    fn from_iter<I: IntoIterator<Item = RunType>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |mask, run_type| mask | run_type.mask())
    }
}
