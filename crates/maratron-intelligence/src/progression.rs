// ABOUTME: VDOT projection after a number of training weeks
// ABOUTME: Continuous linear-in-blocks gain with a hard ceiling on total improvement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # VDOT Progression Model
//!
//! `projected = current + min(gain_per_block × weeks / block_weeks, max_total_gain)`
//!
//! With defaults: +1.5 VDOT per 13 weeks, never more than +6.0. The gain is
//! continuous in `weeks` (a 6.5-week plan earns 0.75), which keeps the
//! week-by-week interpolation of the progressive zone builder smooth.

use crate::config::{IntelligenceConfig, ProgressionConfig};

/// VDOT progression model bound to a configuration
#[derive(Debug, Clone)]
pub struct VdotProgression {
    config: ProgressionConfig,
}

impl Default for VdotProgression {
    fn default() -> Self {
        Self::new(IntelligenceConfig::global().progression.clone())
    }
}

impl VdotProgression {
    /// Create a model with explicit parameters
    #[must_use]
    pub const fn new(config: ProgressionConfig) -> Self {
        Self { config }
    }

    /// VDOT gained after `weeks` of training, capped
    #[must_use]
    pub fn gain(&self, weeks: u32) -> f64 {
        let blocks = f64::from(weeks) / self.config.block_weeks;
        (self.config.vdot_gain_per_block * blocks).min(self.config.max_total_gain)
    }

    /// Projected VDOT after `weeks` of training
    #[must_use]
    pub fn project(&self, current_vdot: f64, weeks: u32) -> f64 {
        current_vdot + self.gain(weeks)
    }
}

/// Projected VDOT after `weeks` of training using the global configuration
#[must_use]
pub fn project_vdot(current_vdot: f64, weeks: u32) -> f64 {
    VdotProgression::default().project(current_vdot, weeks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_block_gains_configured_amount() {
        let model = VdotProgression::new(ProgressionConfig::default());
        assert!((model.gain(13) - 1.5).abs() < f64::EPSILON);
        assert!((model.gain(0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gain_is_capped() {
        let model = VdotProgression::new(ProgressionConfig::default());
        assert!((model.gain(52) - 6.0).abs() < 1e-12);
        assert!((model.gain(520) - 6.0).abs() < f64::EPSILON);
    }
}
