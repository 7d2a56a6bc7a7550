// ABOUTME: Training zone intensity and progressive-zone configuration types
// ABOUTME: Handles %VO2max per zone and the peak-week goal blending parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::physiological_constants::{progressive_zones, zone_intensity};
use serde::{Deserialize, Serialize};

/// Training zone intensities as fractions of VO2max
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingZonesConfig {
    /// Easy / long-run intensity
    pub easy_percent_vo2max: f64,
    /// Tempo (threshold) intensity
    pub tempo_percent_vo2max: f64,
    /// Interval intensity
    pub interval_percent_vo2max: f64,
    /// Repetition intensity
    pub repetition_percent_vo2max: f64,
}

impl Default for TrainingZonesConfig {
    fn default() -> Self {
        Self {
            easy_percent_vo2max: zone_intensity::EASY_PERCENT_VO2MAX,
            tempo_percent_vo2max: zone_intensity::TEMPO_PERCENT_VO2MAX,
            interval_percent_vo2max: zone_intensity::INTERVAL_PERCENT_VO2MAX,
            repetition_percent_vo2max: zone_intensity::REPETITION_PERCENT_VO2MAX,
        }
    }
}

/// Peak-week race-specificity parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressiveZoneConfig {
    /// Trailing fraction of the plan where marathon pace blends toward the goal
    pub peak_phase_fraction: f64,
    /// Weight of the goal pace in the blend (`(1 - r) * derived + r * goal`)
    pub goal_blend_ratio: f64,
}

impl Default for ProgressiveZoneConfig {
    fn default() -> Self {
        Self {
            peak_phase_fraction: progressive_zones::PEAK_PHASE_FRACTION,
            goal_blend_ratio: progressive_zones::GOAL_BLEND_RATIO,
        }
    }
}
