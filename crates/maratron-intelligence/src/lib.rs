// ABOUTME: Running intelligence crate: VDOT model, pace zones, progression and goal feasibility
// ABOUTME: Pure, synchronous computations shared by plan generation and the calling application
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Maratron Intelligence
//!
//! Numeric core of the training plan engine. Everything here is a pure function
//! of its inputs (plus read-only configuration), safe to call concurrently
//! from any number of threads.
//!
//! Data flow: race result → [`algorithms::vdot`] → [`progression`] →
//! [`goal_feasibility`]; per-week paces come from [`progressive_zones`] and are
//! guarded by [`pace_zones::validate_zones`].

/// Calculation algorithms (Jack Daniels' VDOT)
pub mod algorithms;

/// Engine configuration (named, overridable constants)
pub mod config;

/// Goal pace/time feasibility against the bounded improvement model
pub mod goal_feasibility;

/// Training pace zones and their ordering validator
pub mod pace_zones;

/// Physiological constants backing the models
pub mod physiological_constants;

/// VDOT projection after N training weeks
pub mod progression;

/// Week-by-week zones interpolated toward the projected VDOT
pub mod progressive_zones;

pub use algorithms::vdot::{
    pace_for_vdot, predict_race_time, race_predictions, round_vdot, vdot_from_performance,
    RacePrediction,
};
pub use config::IntelligenceConfig;
pub use goal_feasibility::{validate_goal, GoalFeasibilityValidator, GoalRequest, GoalValidation};
pub use pace_zones::{validate_zones, PaceZone, PaceZoneInput, PaceZones};
pub use progression::{project_vdot, VdotProgression};
pub use progressive_zones::{build_zones_for_week, ProgressiveZoneBuilder, WeeklyZones};
