// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for maratron-cli
// ABOUTME: Text tables for VDOT, zones, goals and plans plus pretty-printed JSON

use chrono::NaiveDate;
use maratron_engine::engine::PlanOutcome;
use maratron_engine::errors::AppResult;
use maratron_engine::intelligence::{round_vdot, GoalValidation, PaceZone, PaceZones, RacePrediction};
use maratron_engine::plans::{RunType, TrainingPlanData, Week};
use maratron_engine::scheduling::PlanLengthValidation;
use maratron_engine::{DistanceUnit, RaceType};
use serde::Serialize;

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display a VDOT and its race predictions
pub fn display_vdot(vdot: f64, predictions: &[RacePrediction]) {
    println!("\nVDOT: {vdot:.2} (tables: {:.0})", round_vdot(vdot));
    println!("{}", "=".repeat(44));
    println!("{:<16} {:>12} {:>12}", "Race", "Time", "Pace");
    for prediction in predictions {
        let pace = format!("{}{}", prediction.pace, prediction.unit.pace_suffix());
        println!(
            "{:<16} {:>12} {pace:>12}",
            prediction.race_type.display_name(),
            prediction.time.format(true),
        );
    }
}

/// Display training paces for a VDOT
pub fn display_zones(vdot: f64, race: RaceType, unit: DistanceUnit, zones: &PaceZones) {
    println!(
        "\nTraining paces for VDOT {vdot:.1} ({} race pace, {unit})",
        race.display_name()
    );
    println!("{}", "=".repeat(44));
    for zone in PaceZone::ALL {
        println!(
            "   {:<12} {}{}",
            zone.as_str(),
            zones.pace(zone),
            unit.pace_suffix()
        );
    }
}

/// Display a goal feasibility result
pub fn display_goal(validation: &GoalValidation, unit: DistanceUnit) {
    let verdict = if validation.is_valid {
        "Achievable"
    } else {
        "Too aggressive"
    };
    println!("\nGoal: {verdict}");
    println!("{}", "=".repeat(44));
    println!(
        "   Goal pace: {}{}",
        validation.goal_pace,
        unit.pace_suffix()
    );
    println!(
        "   Improvement needed: {:.1}%",
        (validation.improvement_ratio - 1.0) * 100.0
    );
    println!("   Projected VDOT: {:.1}", validation.projected_vdot);
    if let Some(suggested) = validation.suggested_pace {
        println!("   Suggested pace: {suggested}{}", unit.pace_suffix());
    }
    println!("\n{}", validation.message);
}

fn display_week(week: &Week, unit: DistanceUnit) {
    let header = week.start_date.map_or_else(String::new, |date| format!(" ({date})"));
    println!(
        "\nWeek {:>2}{header} - {}{} - VDOT {:.1} - {:.1} {unit}",
        week.week_number,
        week.phase,
        if week.is_recovery { " (recovery)" } else { "" },
        week.training_vdot,
        week.training_volume(),
    );
    for run in &week.runs {
        let day = DAY_NAMES.get(usize::from(run.day_of_week)).unwrap_or(&"?");
        match run.run_type {
            RunType::Rest => println!("   {day}  rest"),
            RunType::CrossTrain => println!("   {day}  cross-train"),
            _ => println!(
                "   {day}  {:<9} {:>5.1} @ {}{}",
                run.run_type,
                run.distance,
                run.pace.map_or_else(|| "-".to_owned(), |pace| pace.to_string()),
                unit.pace_suffix(),
            ),
        }
    }
}

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

fn display_plan(plan: &TrainingPlanData) {
    println!(
        "\n{} plan: {} weeks, {} level, {:.1} {} total",
        plan.race_type.display_name(),
        plan.weeks,
        plan.training_level,
        plan.total_volume(),
        plan.distance_unit,
    );
    if let (Some(start), Some(end)) = (plan.start_date, plan.end_date) {
        println!("   {start} to {end}");
    }
    println!("{}", "=".repeat(60));
    for week in &plan.schedule {
        display_week(week, plan.distance_unit);
    }
}

/// Display the result of a planning request
pub fn display_outcome(outcome: &PlanOutcome) {
    match outcome {
        PlanOutcome::Generated {
            vdot,
            plan,
            goal,
            advisories,
            ..
        } => {
            println!("\nVDOT: {vdot:.2}");
            if let Some(goal) = goal {
                println!("Goal: {}", goal.message);
            }
            for advisory in advisories {
                println!("Note: {advisory}");
            }
            display_plan(plan);
        }
        PlanOutcome::Rejected {
            vdot,
            reason,
            message,
            ..
        } => {
            println!("\nVDOT: {vdot:.2}");
            println!("No plan generated ({reason:?}): {message}");
        }
    }
}

/// Display start-now scheduling
pub fn display_start_now(
    race_date: NaiveDate,
    start: NaiveDate,
    weeks: i64,
    validation: &PlanLengthValidation,
) {
    println!("\nRace day: {race_date}");
    println!("Plan start: {start}");
    println!("Weeks available: {weeks}");
    if let Some(message) = validation.message() {
        println!("Note: {message}");
    }
}

/// Display a plan length check
pub fn display_plan_length(validation: &PlanLengthValidation) {
    match validation {
        PlanLengthValidation::Ok { weeks } => println!("{weeks} weeks: ok"),
        PlanLengthValidation::Warning { weeks, message } => {
            println!("{weeks} weeks: warning - {message}");
        }
        PlanLengthValidation::Error { weeks, message } => {
            println!("{weeks} weeks: not allowed - {message}");
        }
    }
}
