// ABOUTME: Athlete pace profile and training preferences
// ABOUTME: One pace per zone plus warm-up/cool-down preferences resolved per run type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{PaceZone, RunType};
use crate::constants::warm_up::{DEFAULT_COOL_DOWN_SECONDS, DEFAULT_WARM_UP_SECONDS};
use crate::errors::{PlanError, PlanResult};
use crate::pace::Pace;

/// Optional warm-up and cool-down preference for one run type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPreferences {
    /// Preferred warm-up in seconds
    #[serde(default)]
    pub warm_up_seconds: Option<u32>,
    /// Preferred cool-down in seconds
    #[serde(default)]
    pub cool_down_seconds: Option<u32>,
}

/// Training preferences of an athlete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AthletePreferences {
    /// Number of workouts the athlete wants per week
    pub workouts_per_week: u8,
    /// Per run type overrides; `Other` acts as the fallback entry
    #[serde(default)]
    pub workout_preferences: BTreeMap<RunType, WorkoutPreferences>,
    /// Warm-up used when no preference applies
    #[serde(default = "default_warm_up")]
    pub default_warm_up_seconds: u32,
    /// Cool-down used when no preference applies
    #[serde(default = "default_cool_down")]
    pub default_cool_down_seconds: u32,
}

const fn default_warm_up() -> u32 {
    DEFAULT_WARM_UP_SECONDS
}

const fn default_cool_down() -> u32 {
    DEFAULT_COOL_DOWN_SECONDS
}

impl Default for AthletePreferences {
    fn default() -> Self {
        Self {
            workouts_per_week: 4,
            workout_preferences: BTreeMap::new(),
            default_warm_up_seconds: DEFAULT_WARM_UP_SECONDS,
            default_cool_down_seconds: DEFAULT_COOL_DOWN_SECONDS,
        }
    }
}

impl AthletePreferences {
    /// Set the preference for one run type
    #[must_use]
    pub fn with_preference(mut self, run_type: RunType, preference: WorkoutPreferences) -> Self {
        self.workout_preferences.insert(run_type, preference);
        self
    }

    /// Override the fallback warm-up and cool-down
    #[must_use]
    pub fn with_defaults(mut self, warm_up_seconds: u32, cool_down_seconds: u32) -> Self {
        self.default_warm_up_seconds = warm_up_seconds;
        self.default_cool_down_seconds = cool_down_seconds;
        self
    }

    /// Preference entry for a run type, falling back to the `Other` entry
    #[must_use]
    pub fn preferences_for(&self, run_type: RunType) -> Option<&WorkoutPreferences> {
        self.workout_preferences
            .get(&run_type)
            .or_else(|| self.workout_preferences.get(&RunType::Other))
    }

    /// Warm-up for a run type: its own entry, then `Other`, then the default
    #[must_use]
    pub fn warm_up_seconds(&self, run_type: RunType) -> u32 {
        self.resolve(run_type, |p| p.warm_up_seconds)
            .unwrap_or(self.default_warm_up_seconds)
    }

    /// Cool-down for a run type: its own entry, then `Other`, then the default
    #[must_use]
    pub fn cool_down_seconds(&self, run_type: RunType) -> u32 {
        self.resolve(run_type, |p| p.cool_down_seconds)
            .unwrap_or(self.default_cool_down_seconds)
    }

    fn resolve(
        &self,
        run_type: RunType,
        field: impl Fn(&WorkoutPreferences) -> Option<u32>,
    ) -> Option<u32> {
        self.workout_preferences
            .get(&run_type)
            .and_then(&field)
            .or_else(|| self.workout_preferences.get(&RunType::Other).and_then(&field))
    }
}

/// Pace per zone plus preferences
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AthletePaceProfile {
    /// Maximal aerobic speed pace
    pub mas_pace: Pace,
    /// 5 km pace
    pub five_k_pace: Pace,
    /// 10 km pace
    pub ten_k_pace: Pace,
    /// Half marathon pace
    pub semi_marathon_pace: Pace,
    /// Marathon pace
    pub marathon_pace: Pace,
    /// Easy pace
    pub easy_pace: Pace,
    /// Training preferences
    #[serde(default)]
    pub preferences: AthletePreferences,
}

impl AthletePaceProfile {
    /// Pace for a zone
    #[must_use]
    pub const fn pace_for(&self, zone: PaceZone) -> Pace {
        match zone {
            PaceZone::MasPace => self.mas_pace,
            PaceZone::FiveKPace => self.five_k_pace,
            PaceZone::TenKPace => self.ten_k_pace,
            PaceZone::SemiMarathonPace => self.semi_marathon_pace,
            PaceZone::MarathonPace => self.marathon_pace,
            PaceZone::EasyPace => self.easy_pace,
        }
    }

    /// Set the pace for a zone
    #[must_use]
    pub fn with_pace(mut self, zone: PaceZone, pace: Pace) -> Self {
        match zone {
            PaceZone::MasPace => self.mas_pace = pace,
            PaceZone::FiveKPace => self.five_k_pace = pace,
            PaceZone::TenKPace => self.ten_k_pace = pace,
            PaceZone::SemiMarathonPace => self.semi_marathon_pace = pace,
            PaceZone::MarathonPace => self.marathon_pace = pace,
            PaceZone::EasyPace => self.easy_pace = pace,
        }
        self
    }

    /// Replace the preferences
    #[must_use]
    pub fn with_preferences(mut self, preferences: AthletePreferences) -> Self {
        self.preferences = preferences;
        self
    }

    /// Ensure every zone has a pace
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidArgument` naming the first zone whose pace is unset
    pub fn validate(&self) -> PlanResult<()> {
        self.require_zones(PaceZone::ALL)
    }

    /// Ensure each of `zones` has a pace; other zones may stay unset
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidArgument` naming the first listed zone whose pace is unset
    pub fn require_zones(&self, zones: impl IntoIterator<Item = PaceZone>) -> PlanResult<()> {
        zones
            .into_iter()
            .find(|zone| self.pace_for(*zone).is_zero())
            .map_or(Ok(()), |zone| {
                Err(PlanError::invalid_argument(format!(
                    "Athlete profile has no pace for zone {zone}"
                )))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_fallback_chain() {
        let preferences = AthletePreferences::default()
            .with_preference(
                RunType::Tempo,
                WorkoutPreferences {
                    warm_up_seconds: Some(1200),
                    cool_down_seconds: None,
                },
            )
            .with_preference(
                RunType::Other,
                WorkoutPreferences {
                    warm_up_seconds: Some(300),
                    cool_down_seconds: Some(240),
                },
            );

        assert_eq!(preferences.warm_up_seconds(RunType::Tempo), 1200);
        assert_eq!(preferences.cool_down_seconds(RunType::Tempo), 240);
        assert_eq!(preferences.warm_up_seconds(RunType::Intervals), 300);

        let bare = AthletePreferences::default();
        assert_eq!(bare.warm_up_seconds(RunType::Intervals), 900);
        assert_eq!(bare.cool_down_seconds(RunType::Intervals), 600);
        assert!(bare.preferences_for(RunType::Easy).is_none());
    }

    #[test]
    fn test_validate_requires_every_zone() {
        let mut profile = AthletePaceProfile::default();
        assert!(profile.validate().is_err());
        for zone in PaceZone::ALL {
            profile = profile.with_pace(zone, Pace::from_seconds(300));
        }
        assert!(profile.validate().is_ok());
        assert_eq!(profile.pace_for(PaceZone::TenKPace).total_seconds(), 300);
    }

    #[test]
    fn test_require_zones_checks_only_listed_zones() {
        let profile = AthletePaceProfile::default()
            .with_pace(PaceZone::MasPace, Pace::from_seconds(210))
            .with_pace(PaceZone::EasyPace, Pace::from_seconds(330));
        assert!(profile.validate().is_err());
        assert!(profile
            .require_zones([PaceZone::EasyPace, PaceZone::MasPace])
            .is_ok());

        let err = profile
            .require_zones([PaceZone::EasyPace, PaceZone::TenKPace])
            .unwrap_err();
        assert!(err.to_string().contains("TenKPace"), "{err}");
    }
}
