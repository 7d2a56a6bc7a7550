// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Race distances, unit conversions, duration codec bounds and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large list.

/// Standard race distances in meters
pub mod race_distances {
    /// 5 kilometers
    pub const DISTANCE_5K: f64 = 5_000.0;
    /// 10 kilometers
    pub const DISTANCE_10K: f64 = 10_000.0;
    /// Half marathon (21.0975 km)
    pub const DISTANCE_HALF_MARATHON: f64 = 21_097.5;
    /// Marathon (42.195 km)
    pub const DISTANCE_MARATHON: f64 = 42_195.0;
}

/// Unit conversion constants
pub mod units {
    /// Meters in a statute mile
    pub const METERS_PER_MILE: f64 = 1_609.344;
    /// Meters in a kilometer
    pub const METERS_PER_KILOMETER: f64 = 1_000.0;
    /// Seconds in a minute
    pub const SECONDS_PER_MINUTE: u32 = 60;
    /// Seconds in an hour
    pub const SECONDS_PER_HOUR: u32 = 3_600;
    /// Days in a training week
    pub const DAYS_PER_WEEK: i64 = 7;
}

/// Accepted component bounds for the duration codec
pub mod duration_bounds {
    /// Largest seconds component
    pub const MAX_SECONDS: u32 = 59;
    /// Largest minutes component in `mm:ss` / `h:mm:ss`
    pub const MAX_MINUTES: u32 = 59;
    /// Largest hours component for pace text
    pub const MAX_PACE_HOURS: u32 = 10;
    /// Largest hours component for elapsed-time text
    pub const MAX_ELAPSED_HOURS: u32 = 23;
}

/// Service identifiers used by structured logging
pub mod service_names {
    /// Engine service name
    pub const MARATRON_ENGINE: &str = "maratron-engine";
    /// CLI service name
    pub const MARATRON_CLI: &str = "maratron-cli";
}
