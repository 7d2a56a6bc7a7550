// ABOUTME: Engine configuration for zones, progression, goal feasibility and plan length
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Every empirical tuning value of the engine lives here as a named,
//! overridable setting. Defaults come from [`crate::physiological_constants`];
//! `MARATRON_*` environment variables override them at load time.
//!
//! # Module Structure
//!
//! - `training_zones` - %VO2max per zone and peak-week goal blending
//! - `progression` - VDOT gain per block and total ceiling
//! - `goals` - Goal feasibility ratios
//! - `plan_length` - Plan length warning/error bands

pub mod error;
pub mod goals;
pub mod plan_length;
pub mod progression;
pub mod training_zones;

pub use error::ConfigError;
pub use goals::GoalConfig;
pub use plan_length::PlanLengthConfig;
pub use progression::ProgressionConfig;
pub use training_zones::{ProgressiveZoneConfig, TrainingZonesConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Upper bound accepted for any zone intensity (fraction of VO2max)
const MAX_ZONE_PERCENT_VO2MAX: f64 = 1.2;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Zone intensities used by the VDOT pace inversion
    pub training_zones: TrainingZonesConfig,
    /// VDOT projection model
    pub progression: ProgressionConfig,
    /// Goal feasibility thresholds
    pub goals: GoalConfig,
    /// Peak-week marathon pace blending
    pub progressive_zones: ProgressiveZoneConfig,
    /// Plan length policy bands
    pub plan_length: PlanLengthConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` describing the first inconsistent setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ensure_finite()?;

        let zones = &self.training_zones;
        if zones.easy_percent_vo2max <= 0.0
            || zones.easy_percent_vo2max >= zones.tempo_percent_vo2max
            || zones.tempo_percent_vo2max >= zones.interval_percent_vo2max
            || zones.interval_percent_vo2max >= zones.repetition_percent_vo2max
        {
            return Err(ConfigError::InvalidRange(
                "Zone intensities must be positive and ascending (easy < tempo < interval < repetition)",
            ));
        }
        if zones.repetition_percent_vo2max > MAX_ZONE_PERCENT_VO2MAX {
            return Err(ConfigError::ValueOutOfRange(
                "repetition_percent_vo2max must be <= 1.2",
            ));
        }

        let progression = &self.progression;
        if progression.vdot_gain_per_block < 0.0 || progression.max_total_gain < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "VDOT gains must be non-negative",
            ));
        }
        if progression.block_weeks <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("block_weeks must be > 0"));
        }

        let goals = &self.goals;
        if goals.max_improvement_ratio <= 1.0 {
            return Err(ConfigError::InvalidRange(
                "max_improvement_ratio must be > 1.0",
            ));
        }
        if goals.suggested_improvement_ratio < 1.0
            || goals.suggested_improvement_ratio > goals.max_improvement_ratio
        {
            return Err(ConfigError::InvalidRange(
                "suggested_improvement_ratio must be within [1.0, max_improvement_ratio]",
            ));
        }

        let peak = &self.progressive_zones;
        if !(0.0..=1.0).contains(&peak.peak_phase_fraction) {
            return Err(ConfigError::ValueOutOfRange(
                "peak_phase_fraction must be within [0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&peak.goal_blend_ratio) {
            return Err(ConfigError::ValueOutOfRange(
                "goal_blend_ratio must be within [0, 1]",
            ));
        }

        let length = &self.plan_length;
        if length.min_recommended_weeks < 1
            || length.min_recommended_weeks > length.max_recommended_weeks
            || length.max_recommended_weeks > length.max_weeks
        {
            return Err(ConfigError::InvalidRange(
                "Plan length bands must satisfy 1 <= min_recommended <= max_recommended <= max",
            ));
        }

        Ok(())
    }

    fn ensure_finite(&self) -> Result<(), ConfigError> {
        let values = [
            ("easy_percent_vo2max", self.training_zones.easy_percent_vo2max),
            ("tempo_percent_vo2max", self.training_zones.tempo_percent_vo2max),
            ("interval_percent_vo2max", self.training_zones.interval_percent_vo2max),
            ("repetition_percent_vo2max", self.training_zones.repetition_percent_vo2max),
            ("vdot_gain_per_block", self.progression.vdot_gain_per_block),
            ("block_weeks", self.progression.block_weeks),
            ("max_total_gain", self.progression.max_total_gain),
            ("max_improvement_ratio", self.goals.max_improvement_ratio),
            ("suggested_improvement_ratio", self.goals.suggested_improvement_ratio),
            ("peak_phase_fraction", self.progressive_zones.peak_phase_fraction),
            ("goal_blend_ratio", self.progressive_zones.goal_blend_ratio),
        ];
        values
            .iter()
            .find(|(_, value)| !value.is_finite())
            .map_or(Ok(()), |&(name, _)| Err(ConfigError::NotFinite(name)))
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply `MARATRON_*` environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Training zones
        Self::apply_env_var(
            "MARATRON_ZONES_EASY_PERCENT",
            &mut self.training_zones.easy_percent_vo2max,
        )?;
        Self::apply_env_var(
            "MARATRON_ZONES_TEMPO_PERCENT",
            &mut self.training_zones.tempo_percent_vo2max,
        )?;
        Self::apply_env_var(
            "MARATRON_ZONES_INTERVAL_PERCENT",
            &mut self.training_zones.interval_percent_vo2max,
        )?;
        Self::apply_env_var(
            "MARATRON_ZONES_REPETITION_PERCENT",
            &mut self.training_zones.repetition_percent_vo2max,
        )?;

        // Progression
        Self::apply_env_var(
            "MARATRON_PROGRESSION_VDOT_GAIN_PER_BLOCK",
            &mut self.progression.vdot_gain_per_block,
        )?;
        Self::apply_env_var(
            "MARATRON_PROGRESSION_BLOCK_WEEKS",
            &mut self.progression.block_weeks,
        )?;
        Self::apply_env_var(
            "MARATRON_PROGRESSION_MAX_TOTAL_GAIN",
            &mut self.progression.max_total_gain,
        )?;

        // Goals
        Self::apply_env_var(
            "MARATRON_GOAL_MAX_IMPROVEMENT_RATIO",
            &mut self.goals.max_improvement_ratio,
        )?;
        Self::apply_env_var(
            "MARATRON_GOAL_SUGGESTED_IMPROVEMENT_RATIO",
            &mut self.goals.suggested_improvement_ratio,
        )?;

        // Progressive zones
        Self::apply_env_var(
            "MARATRON_PEAK_PHASE_FRACTION",
            &mut self.progressive_zones.peak_phase_fraction,
        )?;
        Self::apply_env_var(
            "MARATRON_GOAL_BLEND_RATIO",
            &mut self.progressive_zones.goal_blend_ratio,
        )?;

        // Plan length
        Self::apply_env_var(
            "MARATRON_PLAN_MIN_RECOMMENDED_WEEKS",
            &mut self.plan_length.min_recommended_weeks,
        )?;
        Self::apply_env_var(
            "MARATRON_PLAN_MAX_RECOMMENDED_WEEKS",
            &mut self.plan_length.max_recommended_weeks,
        )?;
        Self::apply_env_var("MARATRON_PLAN_MAX_WEEKS", &mut self.plan_length.max_weeks)?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(IntelligenceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_unordered_zones_rejected() {
        let mut config = IntelligenceConfig::default();
        config.training_zones.tempo_percent_vo2max = 0.99;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_suggestion_above_ceiling_rejected() {
        let mut config = IntelligenceConfig::default();
        config.goals.suggested_improvement_ratio = 1.5;
        assert!(config.validate().is_err());
    }
}
