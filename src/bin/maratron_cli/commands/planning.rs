// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Planning commands for maratron-cli: plan generation, start-now and plan length checks
// ABOUTME: Builds a PlanRequest from flags and runs it through the PlanEngine

use super::parse_distance_meters;
use crate::helpers::display;
use crate::Result;
use chrono::{NaiveDate, Utc};
use maratron_engine::engine::{GoalInput, PlanEngine, PlanRequest, RaceResult};
use maratron_engine::errors::AppError;
use maratron_engine::scheduling::{
    smart_start_date, start_now_weeks, validate_plan_length, DateAnchor,
};
use maratron_engine::{DistanceUnit, Duration, RaceType, TrainingLevel};
use serde_json::json;

/// Arguments of the `plan` command
pub struct PlanArgs {
    pub race: RaceType,
    pub result_distance: String,
    pub result_time: Duration,
    pub weeks: u32,
    pub level: TrainingLevel,
    pub unit: DistanceUnit,
    pub runs: Option<u8>,
    pub cross_training: u8,
    pub goal: Option<String>,
    pub total_time: bool,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

fn anchor_for(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<DateAnchor> {
    match (start, end) {
        (Some(start), Some(end)) => Some(DateAnchor::Range { start, end }),
        (Some(date), None) => Some(DateAnchor::Start { date }),
        (None, Some(date)) => Some(DateAnchor::End { date }),
        (None, None) => None,
    }
}

/// Generate a plan
pub fn plan(args: PlanArgs, json: bool) -> Result<()> {
    if args.total_time && args.goal.is_none() {
        return Err(AppError::invalid_input("--total-time requires --goal"));
    }

    let request = PlanRequest {
        race_type: args.race,
        race_result: RaceResult {
            distance_meters: parse_distance_meters(&args.result_distance)?,
            time: args.result_time,
        },
        goal: args.goal.map(|text| GoalInput {
            text,
            is_total_time: args.total_time,
        }),
        weeks: args.weeks,
        distance_unit: args.unit,
        training_level: args.level,
        runs_per_week: args.runs,
        cross_training_days: args.cross_training,
        schedule: anchor_for(args.start, args.end),
    };

    let outcome = PlanEngine::default().plan(&request)?;
    if json {
        return display::print_json(&outcome);
    }
    display::display_outcome(&outcome);
    Ok(())
}

/// Weeks available if training starts today
pub fn start_now(race_date: NaiveDate, today: Option<NaiveDate>, json: bool) -> Result<()> {
    let today = today.unwrap_or_else(|| Utc::now().date_naive());
    let start = smart_start_date(today);
    let weeks = start_now_weeks(race_date, today);
    let validation = validate_plan_length(weeks);

    if json {
        return display::print_json(&json!({
            "today": today,
            "raceDate": race_date,
            "startDate": start,
            "weeks": weeks,
            "validation": validation,
        }));
    }
    display::display_start_now(race_date, start, weeks, &validation);
    Ok(())
}

/// Check a plan length against the policy
pub fn plan_length(weeks: i64, json: bool) -> Result<()> {
    let validation = validate_plan_length(weeks);
    if json {
        return display::print_json(&validation);
    }
    display::display_plan_length(&validation);
    Ok(())
}
