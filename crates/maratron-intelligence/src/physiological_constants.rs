// ABOUTME: Physiological and business-rule constants backing the running models
// ABOUTME: Daniels/Gilbert coefficients, zone intensities, progression and feasibility limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiological constants
//!
//! Values fall in two groups: published model coefficients (Daniels & Gilbert,
//! "Oxygen Power", 1979) that must not be tuned, and empirical business rules
//! (progression rate, improvement ceiling) that are defaults for the
//! overridable configuration in [`crate::config`].

/// Jack Daniels / Jimmy Gilbert VDOT model coefficients
///
/// References:
/// - Daniels, J. & Gilbert, J. (1979). Oxygen Power: Performance Tables for Distance Runners
/// - Daniels, J. (2013). Daniels' Running Formula (3rd ed.). Human Kinetics.
pub mod daniels {
    /// Oxygen cost constant term (ml/kg/min)
    pub const VO2_INTERCEPT: f64 = -4.60;
    /// Oxygen cost coefficient for velocity (m/min)
    pub const VO2_LINEAR: f64 = 0.182_258;
    /// Oxygen cost coefficient for velocity squared
    pub const VO2_QUADRATIC: f64 = 0.000_104;

    /// Sustainable fraction of VO2max: asymptote
    pub const PERCENT_MAX_BASE: f64 = 0.8;
    /// Sustainable fraction of VO2max: slow-decay amplitude
    pub const PERCENT_MAX_SLOW_AMPLITUDE: f64 = 0.189_439_3;
    /// Sustainable fraction of VO2max: slow-decay rate (per minute)
    pub const PERCENT_MAX_SLOW_RATE: f64 = 0.012_778;
    /// Sustainable fraction of VO2max: fast-decay amplitude
    pub const PERCENT_MAX_FAST_AMPLITUDE: f64 = 0.298_955_8;
    /// Sustainable fraction of VO2max: fast-decay rate (per minute)
    pub const PERCENT_MAX_FAST_RATE: f64 = 0.193_260_5;
}

/// Training zone intensities as a fraction of VO2max
///
/// Midpoints of Daniels' bands: Easy 59-74 %, Threshold 85-88 % (upper end,
/// which reproduces the published T paces), Interval 95-100 %, Repetition
/// roughly 105 %. Marathon pace is not a fixed fraction; it is the
/// equivalent-performance pace over the marathon distance.
pub mod zone_intensity {
    /// Easy / long-run pace
    pub const EASY_PERCENT_VO2MAX: f64 = 0.665;
    /// Tempo (threshold) pace
    pub const TEMPO_PERCENT_VO2MAX: f64 = 0.88;
    /// Interval pace
    pub const INTERVAL_PERCENT_VO2MAX: f64 = 0.975;
    /// Repetition pace
    pub const REPETITION_PERCENT_VO2MAX: f64 = 1.05;
}

/// VDOT progression model defaults
pub mod progression {
    /// VDOT points gained per training block
    pub const VDOT_GAIN_PER_BLOCK: f64 = 1.5;
    /// Weeks in one training block (a quarter)
    pub const BLOCK_WEEKS: f64 = 13.0;
    /// Ceiling on total VDOT gain regardless of plan length
    pub const MAX_TOTAL_VDOT_GAIN: f64 = 6.0;
}

/// Goal feasibility defaults
pub mod goal_feasibility {
    /// Largest accepted `current_pace / goal_pace` ratio (20 % faster)
    pub const MAX_IMPROVEMENT_RATIO: f64 = 1.20;
    /// Ratio used to suggest an achievable pace when a goal is rejected
    pub const SUGGESTED_IMPROVEMENT_RATIO: f64 = 1.10;
}

/// Progressive zone defaults
pub mod progressive_zones {
    /// Trailing fraction of the plan treated as race-specific peak weeks
    pub const PEAK_PHASE_FRACTION: f64 = 0.2;
    /// Weight of the literal goal pace in peak-week marathon pace
    pub const GOAL_BLEND_RATIO: f64 = 0.3;
}

/// Plan length policy defaults (weeks)
pub mod plan_length {
    /// Shortest plan accepted without a "too short" warning
    pub const MIN_RECOMMENDED_WEEKS: i64 = 4;
    /// Longest plan accepted without a "consider phasing" warning
    pub const MAX_RECOMMENDED_WEEKS: i64 = 30;
    /// Longest plan accepted at all
    pub const MAX_WEEKS: i64 = 52;
}

/// Numerical limits of the VDOT model
pub mod model_limits {
    /// Shortest race duration considered by the bisection (minutes)
    pub const MIN_RACE_MINUTES: f64 = 0.5;
    /// Longest race duration considered by the bisection (minutes)
    pub const MAX_RACE_MINUTES: f64 = 20_000.0;
    /// Bisection stops when the bracket is narrower than this (seconds)
    pub const RACE_TIME_TOLERANCE_SECONDS: f64 = 1e-6;
    /// Hard cap on bisection iterations
    pub const MAX_BISECTION_ITERATIONS: usize = 200;
}
