// ABOUTME: Configuration module for maratron-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Engine configuration (zones, progression, goals, plan length)
pub mod intelligence;

pub use intelligence::{
    ConfigError, GoalConfig, IntelligenceConfig, PlanLengthConfig, ProgressionConfig,
    ProgressiveZoneConfig, TrainingZonesConfig,
};
