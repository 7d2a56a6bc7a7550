// ABOUTME: Training plan data model and per-race plan template generators
// ABOUTME: Defines weeks, planned runs, phases and the options accepted by generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Training Plans
//!
//! A plan is a list of [`Week`]s, each holding seven [`PlannedRun`] slots
//! (Sunday = day 0 through Saturday = day 6). Generation is pure: the same
//! [`PlanOptions`] always yield the same plan. Calendar dates are attached
//! afterwards by [`crate::scheduling::calendar::assign_dates_to_plan`] without
//! changing the structure.

/// Shared generation pipeline and the `PlanTemplate` trait
pub mod generator;

/// Half marathon template
pub mod half_marathon;

/// Marathon template
pub mod marathon;

/// 5K template
pub mod five_k;

/// 10K template
pub mod ten_k;

pub use five_k::FiveKPlan;
pub use generator::{generate_plan, PlanTemplate, RaceProfile};
pub use half_marathon::HalfMarathonPlan;
pub use marathon::MarathonPlan;
pub use ten_k::TenKPlan;

use chrono::NaiveDate;
use maratron_core::duration::{deserialize_optional_pace, deserialize_pace};
use maratron_core::{DistanceUnit, Duration, RaceType, TrainingLevel};
use maratron_intelligence::PaceZones;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of session planned for a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunType {
    /// Aerobic run at easy pace
    Easy,
    /// Threshold run
    Tempo,
    /// VO2max intervals
    Interval,
    /// Weekly long run
    Long,
    /// No training
    Rest,
    /// Non-running aerobic session
    CrossTrain,
    /// Goal race
    Race,
}

impl RunType {
    /// Whether the session counts toward running volume
    #[must_use]
    pub const fn is_training_run(self) -> bool {
        matches!(self, Self::Easy | Self::Tempo | Self::Interval | Self::Long)
    }

    /// Whether the session is a quality (non-easy) workout
    #[must_use]
    pub const fn is_quality(self) -> bool {
        matches!(self, Self::Tempo | Self::Interval)
    }

    /// Stable identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Tempo => "tempo",
            Self::Interval => "interval",
            Self::Long => "long",
            Self::Rest => "rest",
            Self::CrossTrain => "cross_train",
            Self::Race => "race",
        }
    }
}

impl fmt::Display for RunType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Periodization phase of a week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Aerobic base building
    Base,
    /// Volume and workload increase
    Build,
    /// Race-specific work at peak volume
    Peak,
    /// Volume reduction before the race
    Taper,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "base"),
            Self::Build => write!(f, "build"),
            Self::Peak => write!(f, "peak"),
            Self::Taper => write!(f, "taper"),
        }
    }
}

/// One day of a plan week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedRun {
    /// 0 = Sunday ... 6 = Saturday
    pub day_of_week: u8,
    /// Session kind
    #[serde(rename = "type")]
    pub run_type: RunType,
    /// Distance in the plan's unit (0 for rest and cross-training)
    pub distance: f64,
    /// Target pace per unit, absent for rest and cross-training
    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        deserialize_with = "deserialize_optional_pace"
    )]
    pub pace: Option<Duration>,
    /// Whether this is a rest day
    pub is_rest_day: bool,
    /// Calendar date once the plan is scheduled
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub date: Option<NaiveDate>,
}

impl PlannedRun {
    /// A rest day
    #[must_use]
    pub const fn rest(day_of_week: u8) -> Self {
        Self {
            day_of_week,
            run_type: RunType::Rest,
            distance: 0.0,
            pace: None,
            is_rest_day: true,
            date: None,
        }
    }

    /// A cross-training day
    #[must_use]
    pub const fn cross_train(day_of_week: u8) -> Self {
        Self {
            day_of_week,
            run_type: RunType::CrossTrain,
            distance: 0.0,
            pace: None,
            is_rest_day: false,
            date: None,
        }
    }

    /// A run of the given kind
    #[must_use]
    pub const fn run(day_of_week: u8, run_type: RunType, distance: f64, pace: Duration) -> Self {
        Self {
            day_of_week,
            run_type,
            distance,
            pace: Some(pace),
            is_rest_day: false,
            date: None,
        }
    }
}

/// One week of a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    /// 1-based index
    pub week_number: u32,
    /// Periodization phase
    pub phase: Phase,
    /// Reduced-intensity recovery week
    pub is_recovery: bool,
    /// VDOT the week's paces were derived from
    pub training_vdot: f64,
    /// Pace zones for the week
    pub zones: PaceZones,
    /// Seven day slots, Sunday first
    pub runs: Vec<PlannedRun>,
    /// First calendar day of the week once scheduled
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub start_date: Option<NaiveDate>,
}

impl Week {
    /// Training volume: every run except the race itself
    #[must_use]
    pub fn training_volume(&self) -> f64 {
        self.runs
            .iter()
            .filter(|run| run.run_type.is_training_run())
            .map(|run| run.distance)
            .sum()
    }

    /// Distance of the long run, if the week has one
    #[must_use]
    pub fn long_run_distance(&self) -> Option<f64> {
        self.runs
            .iter()
            .find(|run| run.run_type == RunType::Long)
            .map(|run| run.distance)
    }

    /// Number of running sessions, race included
    #[must_use]
    pub fn run_count(&self) -> usize {
        self.runs
            .iter()
            .filter(|run| run.run_type.is_training_run() || run.run_type == RunType::Race)
            .count()
    }

    /// Number of sessions of one kind
    #[must_use]
    pub fn count_of(&self, run_type: RunType) -> usize {
        self.runs.iter().filter(|run| run.run_type == run_type).count()
    }
}

/// A generated training plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPlanData {
    /// Number of weeks, always `schedule.len()`
    pub weeks: u32,
    /// Target race
    pub race_type: RaceType,
    /// Unit of every distance and pace
    pub distance_unit: DistanceUnit,
    /// Runner level the plan was built for
    pub training_level: TrainingLevel,
    /// Week-by-week schedule
    pub schedule: Vec<Week>,
    /// First day of week 1 once scheduled
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub start_date: Option<NaiveDate>,
    /// Race week end once scheduled
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub end_date: Option<NaiveDate>,
}

impl TrainingPlanData {
    /// The race session, if the plan contains one
    #[must_use]
    pub fn race_run(&self) -> Option<&PlannedRun> {
        self.schedule
            .last()
            .and_then(|week| week.runs.iter().find(|run| run.run_type == RunType::Race))
    }

    /// Total running volume over the whole plan (race excluded)
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.schedule.iter().map(Week::training_volume).sum()
    }
}

/// Goal the runner is training for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum PlanTarget {
    /// Goal pace per unit
    Pace(#[serde(deserialize_with = "deserialize_pace")] Duration),
    /// Goal finish time
    TotalTime(Duration),
}

impl PlanTarget {
    /// Goal expressed as a pace over the race distance
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the race distance is not positive
    pub fn goal_pace(self, race_distance: f64) -> maratron_core::AppResult<Duration> {
        match self {
            Self::Pace(pace) => Ok(pace),
            Self::TotalTime(total) => total.per_distance(race_distance),
        }
    }
}

/// Parameters of plan generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanOptions {
    /// Plan length in weeks
    pub weeks: u32,
    /// Unit for distances and paces
    pub distance_unit: DistanceUnit,
    /// Runner level
    pub training_level: TrainingLevel,
    /// Current VDOT
    pub vdot: f64,
    /// Optional goal pace or finish time
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub target: Option<PlanTarget>,
    /// Running days per week (2-7)
    pub runs_per_week: u8,
    /// Requested cross-training days, clamped to the days left after runs
    pub cross_training_days: u8,
}

impl PlanOptions {
    /// Options with the level's default runs per week, miles, no goal and no cross-training
    #[must_use]
    pub const fn new(weeks: u32, vdot: f64, training_level: TrainingLevel) -> Self {
        Self {
            weeks,
            distance_unit: DistanceUnit::Miles,
            training_level,
            vdot,
            target: None,
            runs_per_week: training_level.default_runs_per_week(),
            cross_training_days: 0,
        }
    }

    /// Set the distance unit
    #[must_use]
    pub const fn with_unit(mut self, unit: DistanceUnit) -> Self {
        self.distance_unit = unit;
        self
    }

    /// Set the goal
    #[must_use]
    pub const fn with_target(mut self, target: PlanTarget) -> Self {
        self.target = Some(target);
        self
    }

    /// Set runs and cross-training days per week
    #[must_use]
    pub const fn with_schedule(mut self, runs_per_week: u8, cross_training_days: u8) -> Self {
        self.runs_per_week = runs_per_week;
        self.cross_training_days = cross_training_days;
        self
    }
}
