// ABOUTME: Goal feasibility validator for goal paces and finish times
// ABOUTME: Bounds the required improvement by a named, overridable ratio and suggests an achievable pace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Goal Feasibility
//!
//! A goal is feasible when `current_pace / goal_pace` does not exceed the
//! configured ceiling (1.20, a 20 % faster pace). Finish-time goals are first
//! converted into a pace over the race distance. Infeasible goals are not
//! errors: the result carries `is_valid = false`, the required improvement and
//! a suggested pace of `current_pace / 1.10`.

use crate::config::{GoalConfig, IntelligenceConfig};
use crate::progression::VdotProgression;
use maratron_core::errors::{AppError, AppResult};
use maratron_core::duration::{deserialize_optional_pace, deserialize_pace};
use maratron_core::Duration;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Goal to check, as entered by the runner
#[derive(Debug, Clone, Copy)]
pub struct GoalRequest<'a> {
    /// Goal pace (`mm:ss` per unit) or finish time (`h:mm:ss`)
    pub goal: &'a str,
    /// Current predicted pace per unit (`mm:ss`)
    pub current_pace: &'a str,
    /// Current VDOT
    pub vdot: f64,
    /// Plan length in weeks
    pub weeks: u32,
    /// Whether `goal` is a total finish time rather than a pace
    pub is_total_time: bool,
    /// Race distance in the pace's unit (miles or kilometers)
    pub race_distance: f64,
}

/// Outcome of a feasibility check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalValidation {
    /// Whether the goal is within the achievable improvement
    pub is_valid: bool,
    /// VDOT projected at the end of the plan
    pub projected_vdot: f64,
    /// Human-readable verdict
    pub message: String,
    /// `current_pace / goal_pace`
    pub improvement_ratio: f64,
    /// Goal expressed as a pace per unit
    #[serde(deserialize_with = "deserialize_pace")]
    pub goal_pace: Duration,
    /// Achievable alternative when the goal is rejected
    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        deserialize_with = "deserialize_optional_pace"
    )]
    pub suggested_pace: Option<Duration>,
}

/// Validator bound to goal and progression parameters
#[derive(Debug, Clone)]
pub struct GoalFeasibilityValidator {
    config: GoalConfig,
    progression: VdotProgression,
}

impl Default for GoalFeasibilityValidator {
    fn default() -> Self {
        let config = IntelligenceConfig::global();
        Self::new(
            config.goals.clone(),
            VdotProgression::new(config.progression.clone()),
        )
    }
}

impl GoalFeasibilityValidator {
    /// Create a validator with explicit parameters
    #[must_use]
    pub const fn new(config: GoalConfig, progression: VdotProgression) -> Self {
        Self {
            config,
            progression,
        }
    }

    /// Check a goal against the current pace
    ///
    /// # Errors
    ///
    /// - `AppError::InvalidFormat` / `InvalidPaceRange` for malformed goal or pace text
    /// - `AppError::InvalidInput` for a zero pace or a non-positive race distance
    pub fn validate(&self, request: &GoalRequest<'_>) -> AppResult<GoalValidation> {
        let current = Duration::parse_pace(request.current_pace)?;
        if current == Duration::ZERO {
            return Err(AppError::invalid_input("Current pace must be positive"));
        }

        let goal_seconds = if request.is_total_time {
            let total = Duration::parse_elapsed(request.goal)?;
            if !request.race_distance.is_finite() || request.race_distance <= 0.0 {
                return Err(AppError::invalid_input(format!(
                    "Race distance must be positive, got {}",
                    request.race_distance
                )));
            }
            total.as_secs_f64() / request.race_distance
        } else {
            Duration::parse_pace(request.goal)?.as_secs_f64()
        };
        if goal_seconds <= 0.0 {
            return Err(AppError::invalid_input("Goal must be positive"));
        }

        let goal_pace = Duration::from_secs_f64(goal_seconds)?;
        let ratio = current.as_secs_f64() / goal_seconds;
        let projected_vdot = self.progression.project(request.vdot, request.weeks);
        let improvement_percent = (ratio - 1.0) * 100.0;

        debug!(
            current = %current,
            goal = %goal_pace,
            ratio,
            projected_vdot,
            "Checked goal feasibility"
        );

        if ratio > self.config.max_improvement_ratio {
            let suggested =
                Duration::from_secs_f64(current.as_secs_f64() / self.config.suggested_improvement_ratio)?;
            let ceiling_percent = (self.config.max_improvement_ratio - 1.0) * 100.0;
            return Ok(GoalValidation {
                is_valid: false,
                projected_vdot,
                message: format!(
                    "A goal pace of {goal_pace} requires a {improvement_percent:.1}% improvement over your current pace of {current}, more than the {ceiling_percent:.0}% considered achievable in {} weeks. Consider a goal pace of {suggested} instead.",
                    request.weeks
                ),
                improvement_ratio: ratio,
                goal_pace,
                suggested_pace: Some(suggested),
            });
        }

        let message = if improvement_percent > 0.0 {
            format!(
                "A goal pace of {goal_pace} is achievable: a {improvement_percent:.1}% improvement, with a projected VDOT of {projected_vdot:.1} after {} weeks.",
                request.weeks
            )
        } else {
            format!(
                "A goal pace of {goal_pace} is within your current fitness; projected VDOT {projected_vdot:.1} after {} weeks.",
                request.weeks
            )
        };

        Ok(GoalValidation {
            is_valid: true,
            projected_vdot,
            message,
            improvement_ratio: ratio,
            goal_pace,
            suggested_pace: None,
        })
    }
}

/// Check a goal using the global configuration
///
/// # Errors
///
/// See [`GoalFeasibilityValidator::validate`]
pub fn validate_goal(request: &GoalRequest<'_>) -> AppResult<GoalValidation> {
    GoalFeasibilityValidator::default().validate(request)
}
