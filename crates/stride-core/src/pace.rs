// ABOUTME: Pace value type expressed as whole seconds per kilometre
// ABOUTME: Parsing from m:ss / m.ss / minutes, canonical formatting, arithmetic, and speed conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Running pace in seconds per kilometre.
//!
//! Accepted textual forms:
//! - `m:ss` (seconds in `0..=59`)
//! - `m.ss` or `m,ss` where the fraction is read as seconds; a single digit is
//!   multiplied by ten, so `4.5` is `4:50`
//! - plain integer minutes (`5` is `5:00`)
//!
//! The canonical form written back is always `m:ss`.

use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{PlanError, PlanResult};

const SECONDS_PER_MINUTE: u32 = 60;
const METERS_PER_KILOMETER: f64 = 1000.0;
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Pace as total seconds per kilometre (never negative)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pace {
    total_seconds: u32,
}

impl Pace {
    /// A pace of zero seconds per kilometre (used as "unset")
    pub const ZERO: Self = Self { total_seconds: 0 };

    /// Create a pace from total seconds per kilometre
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidArgument` if `total_seconds` is negative or too large
    pub fn new(total_seconds: i64) -> PlanResult<Self> {
        if total_seconds < 0 {
            return Err(PlanError::invalid_argument(format!(
                "Pace must be non-negative, got {total_seconds}s"
            )));
        }
        u32::try_from(total_seconds)
            .map(Self::from_seconds)
            .map_err(|_| PlanError::invalid_argument(format!("Pace {total_seconds}s is too large")))
    }

    /// Create a pace from an unsigned number of seconds
    #[must_use]
    pub const fn from_seconds(total_seconds: u32) -> Self {
        Self { total_seconds }
    }

    /// Create a pace from whole minutes and seconds
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidArgument` if `seconds` is above 59 or the total overflows
    pub fn from_minutes_seconds(minutes: u32, seconds: u32) -> PlanResult<Self> {
        if seconds >= SECONDS_PER_MINUTE {
            return Err(PlanError::invalid_argument(format!(
                "Seconds must be in [0, 59], got {seconds}"
            )));
        }
        minutes
            .checked_mul(SECONDS_PER_MINUTE)
            .and_then(|s| s.checked_add(seconds))
            .map(Self::from_seconds)
            .ok_or_else(|| PlanError::invalid_argument(format!("Pace {minutes}:{seconds:02} overflows")))
    }

    /// Create a pace from `minutes.seconds` notation held in a float (`4.59` is `4:59`)
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidArgument` for negative or non-finite input, or a
    /// fractional part above `.59`
    pub fn from_minutes_dot_seconds(value: f64) -> PlanResult<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(PlanError::invalid_argument(format!(
                "Pace must be a finite, non-negative value, got {value}"
            )));
        }
        let minutes = value.floor();
        let seconds = ((value - minutes) * 100.0).round();
        Self::from_minutes_seconds(minutes as u32, seconds as u32)
    }

    /// Create a pace from decimal minutes (`4.5` is `4:30`)
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidArgument` for negative or non-finite input
    pub fn from_minutes_decimal(minutes: f64) -> PlanResult<Self> {
        if !minutes.is_finite() || minutes < 0.0 {
            return Err(PlanError::invalid_argument(format!(
                "Pace must be a finite, non-negative value, got {minutes}"
            )));
        }
        Self::from_rounded_seconds(minutes * f64::from(SECONDS_PER_MINUTE))
    }

    /// Pace needed to cover `distance_meters` in `time_seconds`
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidArgument` unless both values are finite and positive
    pub fn from_time_and_distance(time_seconds: f64, distance_meters: f64) -> PlanResult<Self> {
        if !time_seconds.is_finite() || time_seconds <= 0.0 {
            return Err(PlanError::invalid_argument(format!(
                "Time must be positive, got {time_seconds}"
            )));
        }
        if !distance_meters.is_finite() || distance_meters <= 0.0 {
            return Err(PlanError::invalid_argument(format!(
                "Distance must be positive, got {distance_meters}"
            )));
        }
        Self::from_rounded_seconds(time_seconds / (distance_meters / METERS_PER_KILOMETER))
    }

    /// Total seconds per kilometre
    #[must_use]
    pub const fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    /// Whether this pace is zero (unset)
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.total_seconds == 0
    }

    /// Pace in minutes as a float (`4:30` is `4.5`)
    #[must_use]
    pub fn to_minutes_f64(&self) -> f64 {
        f64::from(self.total_seconds) / f64::from(SECONDS_PER_MINUTE)
    }

    /// Pace in `minutes.seconds` notation (`4:59` is `4.59`)
    #[must_use]
    pub fn to_minutes_dot_seconds(&self) -> f64 {
        let minutes = self.total_seconds / SECONDS_PER_MINUTE;
        let seconds = self.total_seconds % SECONDS_PER_MINUTE;
        f64::from(minutes) + f64::from(seconds) / 100.0
    }

    /// Speed in meters per second, 0 for a zero pace
    #[must_use]
    pub fn meters_per_second(&self) -> f64 {
        if self.total_seconds == 0 {
            0.0
        } else {
            METERS_PER_KILOMETER / f64::from(self.total_seconds)
        }
    }

    /// Speed in kilometres per hour, 0 for a zero pace
    #[must_use]
    pub fn km_per_hour(&self) -> f64 {
        if self.total_seconds == 0 {
            0.0
        } else {
            SECONDS_PER_HOUR / f64::from(self.total_seconds)
        }
    }

    /// Add two paces
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidArgument` on overflow
    pub fn checked_add(self, other: Self) -> PlanResult<Self> {
        self.total_seconds
            .checked_add(other.total_seconds)
            .map(Self::from_seconds)
            .ok_or_else(|| PlanError::invalid_argument("Pace addition overflowed"))
    }

    /// Subtract two paces, clamping at zero
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self::from_seconds(self.total_seconds.saturating_sub(other.total_seconds))
    }

    /// Scale the pace by a factor (rounded half away from zero)
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidArgument` if the factor is not finite or the result is negative
    pub fn checked_mul(self, factor: f64) -> PlanResult<Self> {
        if !factor.is_finite() {
            return Err(PlanError::invalid_argument(format!("Invalid factor {factor}")));
        }
        Self::from_rounded_seconds(f64::from(self.total_seconds) * factor)
    }

    /// Divide the pace by a divisor (rounded half away from zero)
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidArgument` if the divisor is zero or not finite, or the
    /// result is negative
    pub fn checked_div(self, divisor: f64) -> PlanResult<Self> {
        if divisor == 0.0 {
            return Err(PlanError::invalid_argument("Pace division by zero"));
        }
        if !divisor.is_finite() {
            return Err(PlanError::invalid_argument(format!("Invalid divisor {divisor}")));
        }
        Self::from_rounded_seconds(f64::from(self.total_seconds) / divisor)
    }

    fn from_rounded_seconds(seconds: f64) -> PlanResult<Self> {
        let rounded = seconds.round();
        if !rounded.is_finite() || rounded < 0.0 {
            return Err(PlanError::invalid_argument(format!(
                "Pace result {seconds} is negative or not finite"
            )));
        }
        if rounded > f64::from(u32::MAX) {
            return Err(PlanError::invalid_argument(format!(
                "Pace result {seconds} is too large"
            )));
        }
        Ok(Self::from_seconds(rounded as u32))
    }
}

impl Sub for Pace {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.saturating_sub(rhs)
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.total_seconds / SECONDS_PER_MINUTE;
        let seconds = self.total_seconds % SECONDS_PER_MINUTE;
        write!(f, "{minutes}:{seconds:02}")
    }
}

impl FromStr for Pace {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PlanError::format(format!("Invalid pace '{s}'. Use m:ss (e.g., 4:59)"));
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }

        if let Some((minutes, seconds)) = trimmed.split_once(':') {
            let minutes = parse_component(minutes).ok_or_else(invalid)?;
            let seconds = parse_component(seconds).ok_or_else(invalid)?;
            return Self::from_minutes_seconds(minutes, seconds).map_err(|_| invalid());
        }

        if let Some(idx) = trimmed.find(['.', ',']) {
            let (minutes, fraction) = (&trimmed[..idx], &trimmed[idx + 1..]);
            let minutes = parse_component(minutes).ok_or_else(invalid)?;
            let mut seconds = parse_component(fraction).ok_or_else(invalid)?;
            if fraction.len() == 1 {
                seconds *= 10;
            }
            return Self::from_minutes_seconds(minutes, seconds).map_err(|_| invalid());
        }

        let minutes = parse_component(trimmed).ok_or_else(invalid)?;
        Self::from_minutes_seconds(minutes, 0).map_err(|_| invalid())
    }
}

/// Parse an unsigned run of ASCII digits
fn parse_component(component: &str) -> Option<u32> {
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    component.parse().ok()
}

impl TryFrom<String> for Pace {
    type Error = PlanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Pace> for String {
    fn from(pace: Pace) -> Self {
        pace.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_pace_is_rejected() {
        assert!(matches!(Pace::new(-1), Err(PlanError::InvalidArgument(_))));
        assert_eq!(Pace::new(210).unwrap().total_seconds(), 210);
    }

    #[test]
    fn test_parse_accepted_forms() {
        assert_eq!("4:59".parse::<Pace>().unwrap().total_seconds(), 299);
        assert_eq!("04:05".parse::<Pace>().unwrap().total_seconds(), 245);
        assert_eq!("4.50".parse::<Pace>().unwrap().total_seconds(), 290);
        assert_eq!("4,05".parse::<Pace>().unwrap().total_seconds(), 245);
        // single fractional digit is tens of seconds
        assert_eq!("4.5".parse::<Pace>().unwrap().total_seconds(), 290);
        assert_eq!(" 5 ".parse::<Pace>().unwrap().total_seconds(), 300);
    }

    #[test]
    fn test_parse_rejects_invalid_forms() {
        for raw in ["", "  ", "4:60", "4:-1", "-4:10", "abc", "4.6", ":30", "4:", "4.75"] {
            assert!(
                matches!(raw.parse::<Pace>(), Err(PlanError::Format(_))),
                "expected '{raw}' to be rejected"
            );
        }
    }

    #[test]
    fn test_format_parse_round_trip() {
        for minutes in 0..15 {
            for seconds in 0..60 {
                let pace = Pace::from_minutes_seconds(minutes, seconds).unwrap();
                assert_eq!(pace.to_string().parse::<Pace>().unwrap(), pace);
            }
        }
        assert_eq!(Pace::from_seconds(245).to_string(), "4:05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Pace::from_seconds(300);
        let b = Pace::from_seconds(45);
        assert_eq!(a.checked_add(b).unwrap().total_seconds(), 345);
        assert_eq!((b - a).total_seconds(), 0);
        assert_eq!((a - b).total_seconds(), 255);
        assert_eq!(a.checked_mul(1.25).unwrap().total_seconds(), 375);
        assert_eq!(a.checked_div(2.0).unwrap().total_seconds(), 150);
        assert!(Pace::from_seconds(u32::MAX).checked_add(b).is_err());
        assert!(a.checked_mul(f64::NAN).is_err());
        assert!(a.checked_mul(-1.0).is_err());
        assert!(a.checked_div(0.0).is_err());
        assert!(a.checked_div(f64::INFINITY).is_err());
    }

    #[test]
    fn test_conversions() {
        let pace = Pace::from_seconds(240);
        assert!((pace.meters_per_second() - 1000.0 / 240.0).abs() < 1e-12);
        assert!((pace.km_per_hour() - 15.0).abs() < 1e-12);
        assert!((pace.to_minutes_f64() - 4.0).abs() < 1e-12);
        assert!(Pace::ZERO.meters_per_second().abs() < f64::EPSILON);
        assert!(Pace::ZERO.km_per_hour().abs() < f64::EPSILON);
    }

    #[test]
    fn test_minutes_notations() {
        assert_eq!(Pace::from_minutes_dot_seconds(4.59).unwrap().total_seconds(), 299);
        assert_eq!(Pace::from_minutes_decimal(4.5).unwrap().total_seconds(), 270);
        assert!((Pace::from_seconds(299).to_minutes_dot_seconds() - 4.59).abs() < 1e-9);
        assert!(Pace::from_minutes_dot_seconds(4.75).is_err());
        assert!(Pace::from_minutes_decimal(f64::NAN).is_err());
    }

    #[test]
    fn test_from_time_and_distance() {
        let pace = Pace::from_time_and_distance(1200.0, 5000.0).unwrap();
        assert_eq!(pace.total_seconds(), 240);
        assert!(Pace::from_time_and_distance(0.0, 5000.0).is_err());
        assert!(Pace::from_time_and_distance(1200.0, -1.0).is_err());
    }

    #[test]
    fn test_ordering_and_serde() {
        assert!(Pace::from_seconds(200) < Pace::from_seconds(201));
        let json = serde_json::to_string(&Pace::from_seconds(330)).unwrap();
        assert_eq!(json, "\"5:30\"");
        let back: Pace = serde_json::from_str(&json).unwrap();
        assert_eq!(back.total_seconds(), 330);
        assert!(serde_json::from_str::<Pace>("\"5:75\"").is_err());
    }
}
