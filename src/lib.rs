// ABOUTME: Main library entry point for the Maratron training plan engine
// ABOUTME: Plan templates, calendar scheduling and the end-to-end planning pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Maratron Engine
//!
//! Pure, synchronous training plan engine: a race performance becomes a VDOT,
//! the VDOT becomes ordered pace zones, a goal is checked against a bounded
//! improvement model, and a periodized plan is generated and mapped onto the
//! calendar.
//!
//! ## Architecture
//!
//! - **maratron-core**: error taxonomy, duration codec, shared models
//! - **maratron-intelligence**: VDOT model, zones, progression, goal feasibility
//! - **plans**: per-race templates and the shared generation pipeline
//! - **scheduling**: calendar arithmetic and the plan length policy
//! - **engine**: the ordered pipeline tying everything together
//!
//! ## Example Usage
//!
//! ```rust
//! use maratron_engine::engine::{PlanEngine, PlanRequest, RaceResult};
//! use maratron_engine::errors::AppResult;
//! use maratron_engine::{Duration, RaceType, TrainingLevel, DistanceUnit};
//!
//! fn main() -> AppResult<()> {
//!     let request = PlanRequest {
//!         race_type: RaceType::Half,
//!         race_result: RaceResult { distance_meters: 10_000.0, time: Duration::parse_elapsed("50:00")? },
//!         goal: None,
//!         weeks: 12,
//!         distance_unit: DistanceUnit::Miles,
//!         training_level: TrainingLevel::Intermediate,
//!         runs_per_week: None,
//!         cross_training_days: 1,
//!         schedule: None,
//!     };
//!     let outcome = PlanEngine::default().plan(&request)?;
//!     assert!(outcome.plan().is_some());
//!     Ok(())
//! }
//! ```

/// Unified error handling (re-exported from `maratron-core`)
pub use maratron_core::errors;

/// Running intelligence (re-exported from `maratron-intelligence`)
pub use maratron_intelligence as intelligence;

pub use maratron_core::{
    format_duration, parse_duration, parse_pace, DistanceUnit, Duration, DurationKind, RaceType,
    TrainingLevel,
};

/// End-to-end planning pipeline
pub mod engine;

/// Structured logging setup
pub mod logging;

/// Plan data model and race templates
pub mod plans;

/// Calendar scheduling and plan length policy
pub mod scheduling;
