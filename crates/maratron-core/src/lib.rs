// ABOUTME: Core types and constants for the Maratron training plan engine
// ABOUTME: Foundation crate with error handling, the duration codec, shared models and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Maratron Core
//!
//! Foundation crate providing shared types and constants for the Maratron
//! training plan engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and zone-ordering errors
//! - **constants**: Race distances, unit conversions and codec bounds
//! - **duration**: Typed `Duration` with a single parse/format boundary for pace and time text
//! - **models**: Shared enums (`DistanceUnit`, `RaceType`, `TrainingLevel`)

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Pace and elapsed-time codec
pub mod duration;

/// Shared domain models
pub mod models;

pub use duration::{format_duration, parse_duration, parse_pace, Duration, DurationKind};
pub use errors::{AppError, AppResult, ErrorCode, RunningValidationError, ZoneViolation};
pub use models::{DistanceUnit, RaceType, TrainingLevel};
