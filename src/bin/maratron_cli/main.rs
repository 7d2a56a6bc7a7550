// ABOUTME: Maratron CLI - command-line front end for the training plan engine
// ABOUTME: Computes VDOT, pace zones, goal feasibility, plans and start-now scheduling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # VDOT and equivalent race times from a 5K in 20:00
//! maratron-cli vdot --distance 5k --time 20:00
//!
//! # Training paces for VDOT 50 in kilometers
//! maratron-cli zones --vdot 50 --unit km
//!
//! # Check a 1:45:00 half marathon goal against a 7:45/mi current pace
//! maratron-cli goal 1:45:00 --total-time --current-pace 7:45 --vdot 45 --weeks 12 --race half
//!
//! # 16-week marathon plan from a 10K in 45:00, starting on a date, as JSON
//! maratron-cli --json plan --race full --result-distance 10k --result-time 45:00 --weeks 16 --start 2025-01-05
//!
//! # Weeks available before a race if training starts today
//! maratron-cli start-now 2025-10-12
//! ```

mod commands;
mod helpers;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use maratron_engine::errors::{AppError, AppResult};
use maratron_engine::logging::LoggingConfig;
use maratron_engine::{DistanceUnit, Duration, RaceType, TrainingLevel};

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "maratron-cli",
    about = "Maratron training plan engine CLI",
    long_about = "Compute VDOT, training paces, goal feasibility and periodized training plans from a race result."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// VDOT and equivalent race times from a race result
    Vdot {
        /// Race distance: 5k, 10k, half, full or meters
        #[arg(long)]
        distance: String,

        /// Finish time (mm:ss or h:mm:ss)
        #[arg(long)]
        time: Duration,

        /// Unit for paces
        #[arg(long, default_value = "miles")]
        unit: DistanceUnit,
    },

    /// Training paces for a VDOT
    Zones {
        /// VDOT value
        #[arg(long)]
        vdot: f64,

        /// Target race (sets the race pace)
        #[arg(long, default_value = "full")]
        race: RaceType,

        /// Unit for paces
        #[arg(long, default_value = "miles")]
        unit: DistanceUnit,
    },

    /// Check a goal pace or finish time against the current pace
    Goal {
        /// Goal pace (mm:ss) or finish time with --total-time
        goal: String,

        /// Current predicted pace per unit (mm:ss)
        #[arg(long)]
        current_pace: String,

        /// Current VDOT
        #[arg(long)]
        vdot: f64,

        /// Plan length in weeks
        #[arg(long)]
        weeks: u32,

        /// Treat the goal as a finish time
        #[arg(long)]
        total_time: bool,

        /// Target race (distance for finish-time goals)
        #[arg(long, default_value = "full")]
        race: RaceType,

        /// Unit of the paces
        #[arg(long, default_value = "miles")]
        unit: DistanceUnit,
    },

    /// Generate a training plan
    Plan {
        /// Target race
        #[arg(long)]
        race: RaceType,

        /// Distance of the recent race result: 5k, 10k, half, full or meters
        #[arg(long)]
        result_distance: String,

        /// Finish time of the recent race result
        #[arg(long)]
        result_time: Duration,

        /// Plan length in weeks
        #[arg(long)]
        weeks: u32,

        /// Training level
        #[arg(long, default_value = "intermediate")]
        level: TrainingLevel,

        /// Unit for distances and paces
        #[arg(long, default_value = "miles")]
        unit: DistanceUnit,

        /// Running days per week (defaults to the level's default)
        #[arg(long)]
        runs: Option<u8>,

        /// Cross-training days per week
        #[arg(long, default_value = "0")]
        cross_training: u8,

        /// Goal pace (mm:ss), or finish time with --total-time
        #[arg(long)]
        goal: Option<String>,

        /// Treat --goal as a finish time
        #[arg(long)]
        total_time: bool,

        /// First day of the plan (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Day after the last plan day (YYYY-MM-DD)
        #[arg(long)]
        end: Option<NaiveDate>,
    },

    /// Weeks available before a race when starting today
    StartNow {
        /// Race date (YYYY-MM-DD)
        race_date: NaiveDate,

        /// Override today's date (YYYY-MM-DD, UTC by default)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Check a plan length against the length policy
    PlanLength {
        /// Plan length in weeks
        #[arg(allow_negative_numbers = true)]
        weeks: i64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    let json = cli.json;
    match cli.command {
        Command::Vdot {
            distance,
            time,
            unit,
        } => commands::fitness::vdot(&distance, time, unit, json),
        Command::Zones { vdot, race, unit } => commands::fitness::zones(vdot, race, unit, json),
        Command::Goal {
            goal,
            current_pace,
            vdot,
            weeks,
            total_time,
            race,
            unit,
        } => commands::fitness::goal(
            &commands::fitness::GoalArgs {
                goal: &goal,
                current_pace: &current_pace,
                vdot,
                weeks,
                is_total_time: total_time,
                race,
                unit,
            },
            json,
        ),
        Command::Plan {
            race,
            result_distance,
            result_time,
            weeks,
            level,
            unit,
            runs,
            cross_training,
            goal,
            total_time,
            start,
            end,
        } => commands::planning::plan(
            commands::planning::PlanArgs {
                race,
                result_distance,
                result_time,
                weeks,
                level,
                unit,
                runs,
                cross_training,
                goal,
                total_time,
                start,
                end,
            },
            json,
        ),
        Command::StartNow { race_date, today } => {
            commands::planning::start_now(race_date, today, json)
        }
        Command::PlanLength { weeks } => commands::planning::plan_length(weeks, json),
    }
}
