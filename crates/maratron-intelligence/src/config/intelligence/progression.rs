// ABOUTME: VDOT progression model configuration
// ABOUTME: Gain per training block, block length and the total improvement ceiling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::physiological_constants::progression;
use serde::{Deserialize, Serialize};

/// Linear-in-blocks VDOT progression parameters
///
/// These are empirical tuning values, not physiological constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// VDOT points gained per block of training
    pub vdot_gain_per_block: f64,
    /// Length of one block in weeks
    pub block_weeks: f64,
    /// Maximum total VDOT gain for any plan length
    pub max_total_gain: f64,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            vdot_gain_per_block: progression::VDOT_GAIN_PER_BLOCK,
            block_weeks: progression::BLOCK_WEEKS,
            max_total_gain: progression::MAX_TOTAL_VDOT_GAIN,
        }
    }
}
