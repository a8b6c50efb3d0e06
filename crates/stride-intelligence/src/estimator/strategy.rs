// ABOUTME: Static table of per-variant estimation strategies
// ABOUTME: Maps run types to a workout variant, its effort zone, and its warm-up policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use stride_core::models::{PaceZone, RunType, RunTypeMask, WorkoutVariant};
use stride_core::{PlanError, PlanResult};

/// How warm-up and cool-down are derived for a structured workout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarmUpPolicy {
    /// Athlete preference or the configured default, regardless of other timing
    Fixed,
    /// Cool-down from preferences; warm-up absorbs whatever time is left over
    AbsorbRemainder,
    /// No cool-down; warm-up covers the time outside the segments
    Continuous,
}

/// Replaces the segment walk entirely
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceOverride {
    /// Total duration run at the workout's own resolved pace
    OwnPace,
}

/// Pace the efforts of a structured workout run at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffortPace {
    /// Always each segment's zone pace
    SegmentZone,
    /// The descriptor's target pace when it carries one, else each segment's zone pace
    TargetPace,
}

/// Estimation behaviour of one workout variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantStrategy {
    variant: WorkoutVariant,
    run_types: RunTypeMask,
    effort_zone: PaceZone,
    warm_up: WarmUpPolicy,
    effort_pace: EffortPace,
    distance_override: Option<DistanceOverride>,
}

impl VariantStrategy {
    /// Variant this strategy produces
    #[must_use]
    pub const fn variant(&self) -> WorkoutVariant {
        self.variant
    }

    /// Run types this strategy claims
    #[must_use]
    pub const fn run_types(&self) -> RunTypeMask {
        self.run_types
    }

    /// Zone giving the workout's pace when the descriptor carries none
    #[must_use]
    pub const fn effort_zone(&self) -> PaceZone {
        self.effort_zone
    }

    /// Warm-up and cool-down policy
    #[must_use]
    pub const fn warm_up_policy(&self) -> WarmUpPolicy {
        self.warm_up
    }

    /// Pace rule for segment efforts
    #[must_use]
    pub const fn effort_pace(&self) -> EffortPace {
        self.effort_pace
    }

    /// Distance override, if any
    #[must_use]
    pub const fn distance_override(&self) -> Option<DistanceOverride> {
        self.distance_override
    }
}

/// Strategy table, searched in order; `Default` claims `Other` and must stay last
pub static STRATEGIES: [VariantStrategy; 7] = [
    VariantStrategy {
        variant: WorkoutVariant::Easy,
        run_types: RunTypeMask::EASY.union(RunTypeMask::RECOVERY),
        effort_zone: PaceZone::EasyPace,
        warm_up: WarmUpPolicy::Continuous,
        effort_pace: EffortPace::TargetPace,
        distance_override: None,
    },
    VariantStrategy {
        variant: WorkoutVariant::Steady,
        run_types: RunTypeMask::STEADY,
        effort_zone: PaceZone::SemiMarathonPace,
        warm_up: WarmUpPolicy::AbsorbRemainder,
        effort_pace: EffortPace::TargetPace,
        distance_override: None,
    },
    VariantStrategy {
        variant: WorkoutVariant::Tempo,
        run_types: RunTypeMask::TEMPO,
        effort_zone: PaceZone::SemiMarathonPace,
        warm_up: WarmUpPolicy::Fixed,
        effort_pace: EffortPace::SegmentZone,
        distance_override: None,
    },
    VariantStrategy {
        variant: WorkoutVariant::Intervals,
        run_types: RunTypeMask::INTERVALS,
        effort_zone: PaceZone::MasPace,
        warm_up: WarmUpPolicy::Fixed,
        effort_pace: EffortPace::SegmentZone,
        distance_override: None,
    },
    VariantStrategy {
        variant: WorkoutVariant::LongRun,
        run_types: RunTypeMask::LONG_RUN,
        effort_zone: PaceZone::MarathonPace,
        warm_up: WarmUpPolicy::AbsorbRemainder,
        effort_pace: EffortPace::TargetPace,
        distance_override: None,
    },
    VariantStrategy {
        variant: WorkoutVariant::Race,
        run_types: RunTypeMask::RACE,
        effort_zone: PaceZone::MarathonPace,
        warm_up: WarmUpPolicy::Continuous,
        effort_pace: EffortPace::TargetPace,
        distance_override: Some(DistanceOverride::OwnPace),
    },
    VariantStrategy {
        variant: WorkoutVariant::Default,
        run_types: RunTypeMask::OTHER,
        effort_zone: PaceZone::EasyPace,
        warm_up: WarmUpPolicy::Continuous,
        effort_pace: EffortPace::TargetPace,
        distance_override: None,
    },
];

/// Find the strategy claiming a run type
///
/// # Errors
///
/// Returns `PlanError::UnknownRunType` when no strategy claims the run type
pub fn strategy_for(run_type: RunType) -> PlanResult<&'static VariantStrategy> {
    lookup(&STRATEGIES, run_type)
}

fn lookup(table: &'static [VariantStrategy], run_type: RunType) -> PlanResult<&'static VariantStrategy> {
    table
        .iter()
        .find(|strategy| strategy.run_types.allows(run_type))
        .ok_or(PlanError::UnknownRunType(run_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_run_type_is_claimed_once() {
        for run_type in RunType::ALL {
            let claims = STRATEGIES
                .iter()
                .filter(|s| s.run_types().allows(run_type))
                .count();
            assert_eq!(claims, 1, "{run_type} claimed {claims} times");
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!(
            strategy_for(RunType::Recovery).unwrap().variant(),
            WorkoutVariant::Easy
        );
        assert_eq!(
            strategy_for(RunType::Other).unwrap().variant(),
            WorkoutVariant::Default
        );
        assert_eq!(
            strategy_for(RunType::Intervals).unwrap().effort_zone(),
            PaceZone::MasPace
        );
    }

    #[test]
    fn test_only_tempo_and_intervals_pin_efforts_to_zones() {
        for strategy in &STRATEGIES {
            let pinned = matches!(
                strategy.variant(),
                WorkoutVariant::Tempo | WorkoutVariant::Intervals
            );
            assert_eq!(
                strategy.effort_pace() == EffortPace::SegmentZone,
                pinned,
                "{}",
                strategy.variant()
            );
        }
    }

    #[test]
    fn test_unclaimed_run_type_is_reported() {
        static EMPTY: [VariantStrategy; 0] = [];
        assert_eq!(
            lookup(&EMPTY, RunType::Race),
            Err(PlanError::UnknownRunType(RunType::Race))
        );
    }
}
