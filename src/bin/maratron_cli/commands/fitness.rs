// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Fitness commands for maratron-cli: VDOT, training paces and goal checks
// ABOUTME: Thin wrappers over maratron-intelligence with text or JSON output

use super::parse_distance_meters;
use crate::helpers::display;
use crate::Result;
use maratron_engine::intelligence::{
    race_predictions, round_vdot, validate_goal, vdot_from_performance, GoalRequest, PaceZones,
};
use maratron_engine::{DistanceUnit, Duration, RaceType};
use serde_json::json;
use tracing::debug;

/// Arguments of the `goal` command
pub struct GoalArgs<'a> {
    pub goal: &'a str,
    pub current_pace: &'a str,
    pub vdot: f64,
    pub weeks: u32,
    pub is_total_time: bool,
    pub race: RaceType,
    pub unit: DistanceUnit,
}

/// VDOT from a race result plus equivalent times at the standard distances
pub fn vdot(distance: &str, time: Duration, unit: DistanceUnit, json: bool) -> Result<()> {
    let meters = parse_distance_meters(distance)?;
    let vdot = vdot_from_performance(meters, time.as_secs_f64())?;
    let predictions = race_predictions(vdot, unit)?;
    debug!(meters, seconds = time.as_secs(), vdot, "Computed VDOT");

    if json {
        return display::print_json(&json!({
            "vdot": vdot,
            "roundedVdot": round_vdot(vdot),
            "predictions": predictions,
        }));
    }
    display::display_vdot(vdot, &predictions);
    Ok(())
}

/// Training paces for a VDOT, checked for ordering
pub fn zones(vdot: f64, race: RaceType, unit: DistanceUnit, json: bool) -> Result<()> {
    let zones = PaceZones::for_vdot(vdot, race.meters(), unit)?;
    zones.validate(vdot)?;

    if json {
        return display::print_json(&zones);
    }
    display::display_zones(vdot, race, unit, &zones);
    Ok(())
}

/// Goal feasibility against the bounded improvement model
pub fn goal(args: &GoalArgs<'_>, json: bool) -> Result<()> {
    let validation = validate_goal(&GoalRequest {
        goal: args.goal,
        current_pace: args.current_pace,
        vdot: args.vdot,
        weeks: args.weeks,
        is_total_time: args.is_total_time,
        race_distance: args.race.distance_in(args.unit),
    })?;

    if json {
        return display::print_json(&validation);
    }
    display::display_goal(&validation, args.unit);
    Ok(())
}
