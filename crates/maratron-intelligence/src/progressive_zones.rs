// ABOUTME: Week-by-week pace zones interpolated from current VDOT toward the projected VDOT
// ABOUTME: Blends marathon pace toward the goal pace during the race-specific peak weeks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Progressive Zones
//!
//! ```text
//! factor        = min(week / total_weeks, 1)
//! training_vdot = current + (project_vdot(current, total_weeks) - current) × factor
//! ```
//!
//! Zones come from `training_vdot`. When `week > total_weeks × (1 - 0.2)` and a
//! goal pace is known, marathon pace becomes `0.7 × derived + 0.3 × goal`.

use crate::algorithms::vdot::pace_seconds_for_vdot;
use crate::config::{IntelligenceConfig, ProgressiveZoneConfig, TrainingZonesConfig};
use crate::pace_zones::{PaceZone, PaceZones};
use crate::progression::VdotProgression;
use maratron_core::errors::{AppError, AppResult};
use maratron_core::{DistanceUnit, Duration};
use serde::{Deserialize, Serialize};

/// Zones for one plan week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyZones {
    /// 1-based week index
    pub week_number: u32,
    /// VDOT the zones were derived from
    pub training_vdot: f64,
    /// Paces per distance unit
    pub zones: PaceZones,
    /// Whether the week falls in the race-specific peak fraction
    pub is_peak_phase: bool,
    /// Whether marathon pace was blended toward the goal pace
    pub goal_blended: bool,
}

/// Builder bound to progression, zone and blending parameters
#[derive(Debug, Clone)]
pub struct ProgressiveZoneBuilder {
    progression: VdotProgression,
    training_zones: TrainingZonesConfig,
    blending: ProgressiveZoneConfig,
}

impl Default for ProgressiveZoneBuilder {
    fn default() -> Self {
        let config = IntelligenceConfig::global();
        Self::new(
            VdotProgression::new(config.progression.clone()),
            config.training_zones.clone(),
            config.progressive_zones.clone(),
        )
    }
}

impl ProgressiveZoneBuilder {
    /// Create a builder with explicit parameters
    #[must_use]
    pub const fn new(
        progression: VdotProgression,
        training_zones: TrainingZonesConfig,
        blending: ProgressiveZoneConfig,
    ) -> Self {
        Self {
            progression,
            training_zones,
            blending,
        }
    }

    /// Training VDOT for a week
    #[must_use]
    pub fn training_vdot(&self, current_vdot: f64, total_weeks: u32, week_number: u32) -> f64 {
        let factor = (f64::from(week_number) / f64::from(total_weeks)).min(1.0);
        let projected = self.progression.project(current_vdot, total_weeks);
        (projected - current_vdot).mul_add(factor, current_vdot)
    }

    /// Whether a week lies in the trailing peak fraction of the plan
    #[must_use]
    pub fn is_peak_week(&self, total_weeks: u32, week_number: u32) -> bool {
        f64::from(week_number) > f64::from(total_weeks) * (1.0 - self.blending.peak_phase_fraction)
    }

    /// Build the zones for one week
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if `total_weeks` is zero, the VDOT is
    /// not positive or the race distance is not positive
    pub fn build(
        &self,
        current_vdot: f64,
        goal_pace: Option<Duration>,
        total_weeks: u32,
        week_number: u32,
        race_meters: f64,
        unit: DistanceUnit,
    ) -> AppResult<WeeklyZones> {
        if total_weeks == 0 {
            return Err(AppError::invalid_input("Plan must span at least one week"));
        }

        let training_vdot = self.training_vdot(current_vdot, total_weeks, week_number);
        let pace = |zone| {
            pace_seconds_for_vdot(race_meters, training_vdot, zone, unit, &self.training_zones)
        };

        let is_peak_phase = self.is_peak_week(total_weeks, week_number);
        let derived_marathon = pace(PaceZone::Marathon)?;
        let (marathon, goal_blended) = match goal_pace {
            Some(goal) if is_peak_phase => {
                let ratio = self.blending.goal_blend_ratio;
                (
                    (1.0 - ratio).mul_add(derived_marathon, ratio * goal.as_secs_f64()),
                    true,
                )
            }
            _ => (derived_marathon, false),
        };

        let zones = PaceZones {
            easy: Duration::from_secs_f64(pace(PaceZone::Easy)?)?,
            marathon: Duration::from_secs_f64(marathon)?,
            tempo: Duration::from_secs_f64(pace(PaceZone::Tempo)?)?,
            interval: Duration::from_secs_f64(pace(PaceZone::Interval)?)?,
            repetition: Duration::from_secs_f64(pace(PaceZone::Repetition)?)?,
            race: Duration::from_secs_f64(pace(PaceZone::Race)?)?,
        };

        Ok(WeeklyZones {
            week_number,
            training_vdot,
            zones,
            is_peak_phase,
            goal_blended,
        })
    }
}

/// Build one week's zones using the global configuration
///
/// # Errors
///
/// See [`ProgressiveZoneBuilder::build`]
pub fn build_zones_for_week(
    current_vdot: f64,
    goal_pace: Option<Duration>,
    total_weeks: u32,
    week_number: u32,
    race_meters: f64,
    unit: DistanceUnit,
) -> AppResult<WeeklyZones> {
    ProgressiveZoneBuilder::default().build(
        current_vdot,
        goal_pace,
        total_weeks,
        week_number,
        race_meters,
        unit,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProgressionConfig;

    fn builder() -> ProgressiveZoneBuilder {
        ProgressiveZoneBuilder::new(
            VdotProgression::new(ProgressionConfig::default()),
            TrainingZonesConfig::default(),
            ProgressiveZoneConfig::default(),
        )
    }

    #[test]
    fn test_peak_boundary_is_exclusive() {
        let builder = builder();
        assert!(!builder.is_peak_week(10, 8));
        assert!(builder.is_peak_week(10, 9));
    }

    #[test]
    fn test_factor_is_capped_at_one() {
        let builder = builder();
        let last = builder.training_vdot(45.0, 13, 13);
        let beyond = builder.training_vdot(45.0, 13, 20);
        assert!((last - 46.5).abs() < 1e-9);
        assert!((beyond - last).abs() < f64::EPSILON);
    }
}
