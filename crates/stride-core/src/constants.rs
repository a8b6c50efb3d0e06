// ABOUTME: Application constants for pace prediction, estimation, and scheduling
// ABOUTME: Physiological defaults, standard race distances, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Riegel model constants
pub mod riegel {
    /// Riegel exponent used when it cannot be fitted from the references
    pub const DEFAULT_EXPONENT: f64 = 1.06;
}

/// Warm-up / cool-down defaults in seconds
pub mod warm_up {
    /// Default warm-up: 15 minutes
    pub const DEFAULT_WARM_UP_SECONDS: u32 = 15 * 60;
    /// Default cool-down: 10 minutes
    pub const DEFAULT_COOL_DOWN_SECONDS: u32 = 10 * 60;
}

/// Estimation constants
pub mod estimation {
    /// Estimated distances are rounded up to this many meters
    pub const DISTANCE_ROUNDING_METERS: f64 = 100.0;
}

/// Standard race distances in meters
pub mod distances {
    /// Short test distance used to approximate maximal aerobic speed pace
    pub const DISTANCE_2K: f64 = 2_000.0;
    /// 5 kilometres
    pub const DISTANCE_5K: f64 = 5_000.0;
    /// 10 kilometres
    pub const DISTANCE_10K: f64 = 10_000.0;
    /// Half marathon
    pub const DISTANCE_HALF_MARATHON: f64 = 21_097.0;
    /// Marathon
    pub const DISTANCE_MARATHON: f64 = 42_195.0;

    /// Distances predicted when deriving an athlete pace profile
    pub const STANDARD_DISTANCES: [f64; 5] = [
        DISTANCE_2K,
        DISTANCE_5K,
        DISTANCE_10K,
        DISTANCE_HALF_MARATHON,
        DISTANCE_MARATHON,
    ];
}

/// Scheduling constants
pub mod scheduling {
    /// Templates with at most this many training days allow one quality day
    pub const SMALL_WEEK_TRAINING_DAYS: usize = 4;
    /// Quality-day cap for small weeks
    pub const SMALL_WEEK_MAX_QUALITY_DAYS: usize = 1;
    /// Quality-day cap for larger weeks
    pub const LARGE_WEEK_MAX_QUALITY_DAYS: usize = 2;
    /// Templates may hold at most one long run day
    pub const MAX_LONG_RUN_DAYS: usize = 1;
    /// Offset applied to the week number when seeding workout ids
    pub const WORKOUT_ID_WEEK_OFFSET: u32 = 9;
    /// Ids reserved per week
    pub const WORKOUT_IDS_PER_WEEK: u32 = 100;
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Planner service name
    pub const STRIDE_PLANNER: &str = "stride-planner";
}
