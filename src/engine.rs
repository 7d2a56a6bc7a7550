// ABOUTME: End-to-end planning pipeline from a race result to a dated training plan
// ABOUTME: Orders VDOT, zone validation, goal feasibility, generation and scheduling; rejections are values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Engine
//!
//! ```text
//! race result → VDOT → zones (ordering guard) → plan length → goal feasibility
//!             → template generation → date assignment
//! ```
//!
//! Goal feasibility runs, and may reject, before generation; generation
//! completes before dates are attached. Advisory outcomes (length warnings,
//! infeasible goals, blocking lengths) come back as [`PlanOutcome`] values.
//! Malformed input and degenerate VDOTs come back as `AppError`.

use crate::plans::{generate_plan, PlanOptions, PlanTarget, TrainingPlanData};
use crate::scheduling::{assign_dates_to_plan, DateAnchor, PlanLengthPolicy, PlanLengthValidation};
use maratron_core::errors::AppResult;
use maratron_core::{DistanceUnit, Duration, RaceType, TrainingLevel};
use maratron_intelligence::{
    vdot_from_performance, GoalFeasibilityValidator, GoalRequest, GoalValidation, PaceZones,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// A race the runner has completed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceResult {
    /// Race distance in meters
    pub distance_meters: f64,
    /// Finish time
    pub time: Duration,
}

/// Goal as entered by the runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalInput {
    /// Pace (`mm:ss` per unit) or finish time (`h:mm:ss`)
    pub text: String,
    /// Whether `text` is a finish time
    pub is_total_time: bool,
}

/// Everything needed to produce a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    /// Target race
    pub race_type: RaceType,
    /// Recent performance the VDOT is derived from
    pub race_result: RaceResult,
    /// Optional goal
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub goal: Option<GoalInput>,
    /// Plan length in weeks
    pub weeks: u32,
    /// Unit for distances and paces
    #[serde(default)]
    pub distance_unit: DistanceUnit,
    /// Runner level
    #[serde(default)]
    pub training_level: TrainingLevel,
    /// Running days per week; the level's default when absent
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub runs_per_week: Option<u8>,
    /// Requested cross-training days
    #[serde(default)]
    pub cross_training_days: u8,
    /// Calendar anchor; the plan stays undated when absent
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub schedule: Option<DateAnchor>,
}

/// Why a plan was not generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// Plan length is in a blocking band
    PlanLength,
    /// Goal demands more improvement than the ceiling allows
    InfeasibleGoal,
}

/// Result of a planning request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum PlanOutcome {
    /// A plan was produced
    #[serde(rename_all = "camelCase")]
    Generated {
        /// Unrounded VDOT of the race result
        vdot: f64,
        /// Zones at the current VDOT
        current_zones: PaceZones,
        /// The plan, dated when an anchor was given
        plan: TrainingPlanData,
        /// Goal assessment, when a goal was given
        #[serde(skip_serializing_if = "Option::is_none", default)]
        goal: Option<GoalValidation>,
        /// Non-blocking warnings to surface
        advisories: Vec<String>,
    },
    /// The request was understood but no plan should be generated
    #[serde(rename_all = "camelCase")]
    Rejected {
        /// Unrounded VDOT of the race result
        vdot: f64,
        /// Rejection category
        reason: RejectionReason,
        /// Human-readable explanation
        message: String,
        /// Goal assessment, when a goal was given
        #[serde(skip_serializing_if = "Option::is_none", default)]
        goal: Option<GoalValidation>,
    },
}

impl PlanOutcome {
    /// The generated plan, if any
    #[must_use]
    pub const fn plan(&self) -> Option<&TrainingPlanData> {
        match self {
            Self::Generated { plan, .. } => Some(plan),
            Self::Rejected { .. } => None,
        }
    }
}

/// Planning pipeline bound to policy components
#[derive(Debug, Clone, Default)]
pub struct PlanEngine {
    length_policy: PlanLengthPolicy,
    goal_validator: GoalFeasibilityValidator,
}

impl PlanEngine {
    /// Create an engine with explicit policy components
    #[must_use]
    pub const fn new(
        length_policy: PlanLengthPolicy,
        goal_validator: GoalFeasibilityValidator,
    ) -> Self {
        Self {
            length_policy,
            goal_validator,
        }
    }

    /// Run the pipeline
    ///
    /// # Errors
    ///
    /// - `AppError::InvalidInput` for a non-physical race result or invalid options
    /// - `AppError::InvalidFormat` / `InvalidPaceRange` for malformed goal text
    /// - zone-ordering codes when the VDOT yields degenerate zones
    #[instrument(skip_all, fields(race_type = %request.race_type, weeks = request.weeks))]
    pub fn plan(&self, request: &PlanRequest) -> AppResult<PlanOutcome> {
        let vdot = vdot_from_performance(
            request.race_result.distance_meters,
            request.race_result.time.as_secs_f64(),
        )?;

        let unit = request.distance_unit;
        let current_zones = PaceZones::for_vdot(vdot, request.race_type.meters(), unit)?;
        current_zones.validate(vdot)?;

        let mut advisories = Vec::new();
        match self.length_policy.validate(i64::from(request.weeks)) {
            PlanLengthValidation::Ok { .. } => {}
            PlanLengthValidation::Warning { message, .. } => advisories.push(message),
            PlanLengthValidation::Error { message, .. } => {
                info!(%message, "Rejected plan length");
                return Ok(PlanOutcome::Rejected {
                    vdot,
                    reason: RejectionReason::PlanLength,
                    message,
                    goal: None,
                });
            }
        }

        let race_distance = request.race_type.distance_in(unit);
        let (goal, target) = match &request.goal {
            Some(input) => {
                let current_pace = current_zones.race.to_string();
                let validation = self.goal_validator.validate(&GoalRequest {
                    goal: &input.text,
                    current_pace: &current_pace,
                    vdot,
                    weeks: request.weeks,
                    is_total_time: input.is_total_time,
                    race_distance,
                })?;
                if !validation.is_valid {
                    info!(ratio = validation.improvement_ratio, "Rejected infeasible goal");
                    return Ok(PlanOutcome::Rejected {
                        vdot,
                        reason: RejectionReason::InfeasibleGoal,
                        message: validation.message.clone(),
                        goal: Some(validation),
                    });
                }
                let target = if input.is_total_time {
                    PlanTarget::TotalTime(Duration::parse_elapsed(&input.text)?)
                } else {
                    PlanTarget::Pace(validation.goal_pace)
                };
                (Some(validation), Some(target))
            }
            None => (None, None),
        };

        let options = PlanOptions {
            weeks: request.weeks,
            distance_unit: unit,
            training_level: request.training_level,
            vdot,
            target,
            runs_per_week: request
                .runs_per_week
                .unwrap_or_else(|| request.training_level.default_runs_per_week()),
            cross_training_days: request.cross_training_days,
        };

        let mut plan = generate_plan(request.race_type, &options)?;
        if let Some(anchor) = request.schedule {
            plan = assign_dates_to_plan(plan, anchor)?;
        }

        Ok(PlanOutcome::Generated {
            vdot,
            current_zones,
            plan,
            goal,
            advisories,
        })
    }
}
