// ABOUTME: Plan length policy configuration
// ABOUTME: Band edges separating blocking errors from advisory warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::physiological_constants::plan_length;
use serde::{Deserialize, Serialize};

/// Plan length bands in weeks
///
/// `< 1` and `> max_weeks` block generation; `< min_recommended_weeks` and
/// `> max_recommended_weeks` only warn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanLengthConfig {
    /// Shortest length without a "too short" warning
    pub min_recommended_weeks: i64,
    /// Longest length without a "consider phasing" warning
    pub max_recommended_weeks: i64,
    /// Longest accepted length
    pub max_weeks: i64,
}

impl Default for PlanLengthConfig {
    fn default() -> Self {
        Self {
            min_recommended_weeks: plan_length::MIN_RECOMMENDED_WEEKS,
            max_recommended_weeks: plan_length::MAX_RECOMMENDED_WEEKS,
            max_weeks: plan_length::MAX_WEEKS,
        }
    }
}
