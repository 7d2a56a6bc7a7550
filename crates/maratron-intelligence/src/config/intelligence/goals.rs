// ABOUTME: Goal feasibility configuration for pace and finish-time goals
// ABOUTME: Holds the maximum realistic improvement ratio and the suggestion ratio
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal Feasibility Configuration
//!
//! The 20 % ceiling is a business rule, kept overridable so product decisions
//! do not require code changes.

use crate::physiological_constants::goal_feasibility;
use serde::{Deserialize, Serialize};

/// Goal feasibility thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalConfig {
    /// Goals requiring `current_pace / goal_pace` above this are rejected
    pub max_improvement_ratio: f64,
    /// Suggested pace for a rejected goal is `current_pace / suggested_improvement_ratio`
    pub suggested_improvement_ratio: f64,
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            max_improvement_ratio: goal_feasibility::MAX_IMPROVEMENT_RATIO,
            suggested_improvement_ratio: goal_feasibility::SUGGESTED_IMPROVEMENT_RATIO,
        }
    }
}
