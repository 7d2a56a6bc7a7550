// ABOUTME: Shared periodized plan generation pipeline behind every race template
// ABOUTME: Phases, weekly day layout, long-run progression, taper and per-week progressive paces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Generation
//!
//! Every template runs the same pipeline and differs only in its
//! [`RaceProfile`] (long-run range, taper) and in which quality sessions it
//! schedules per phase:
//!
//! 1. Validate options: plan length must not be blocking, 2-7 runs per week,
//!    cross-training clamped to the free days.
//! 2. Split the weeks into Base → Build → Peak, followed by a 1-2 week Taper.
//! 3. Progress the long run linearly (never decreasing) from the level's start
//!    distance to the peak distance in the last pre-taper week; mid-week runs
//!    are a fixed share of the long run.
//! 4. Scale the taper weeks down; the last run of the last week is the race.
//! 5. Pace every run from the week's progressive zones.

use super::{
    FiveKPlan, HalfMarathonPlan, MarathonPlan, Phase, PlanOptions, PlannedRun, RunType, TenKPlan,
    TrainingPlanData, Week,
};
use crate::scheduling::plan_length::PlanLengthPolicy;
use maratron_core::constants::units::METERS_PER_MILE;
use maratron_core::errors::{AppError, AppResult};
use maratron_core::{DistanceUnit, Duration, RaceType, TrainingLevel};
use maratron_intelligence::{PaceZone, ProgressiveZoneBuilder, WeeklyZones};
use tracing::{debug, info};

/// Fewest running days a plan supports
pub const MIN_RUNS_PER_WEEK: u8 = 2;
/// Most running days a plan supports
pub const MAX_RUNS_PER_WEEK: u8 = 7;
/// Days in a plan week
const DAYS_IN_WEEK: u8 = 7;
/// Saturday carries the long run and, in the last week, the race
pub const LONG_RUN_DAY: u8 = 6;
/// Distances are rounded to this step in the plan's unit
const DISTANCE_STEP: f64 = 0.5;
/// Every n-th pre-taper week is a recovery week
const RECOVERY_WEEK_INTERVAL: u32 = 4;
/// Share of pre-taper weeks (from the start) spent in Base
const BASE_PHASE_SHARE: f64 = 0.4;
/// Share of pre-taper weeks (from the start) that ends Build
const BUILD_PHASE_SHARE: f64 = 0.8;

/// Preferred order for quality sessions among mid-week run days (Tue, Thu first)
const QUALITY_DAY_PREFERENCE: [u8; 6] = [2, 4, 3, 1, 5, 0];
/// Preferred order for cross-training among free days
const CROSS_TRAINING_DAY_PREFERENCE: [u8; 7] = [5, 0, 3, 1, 2, 4, 6];

/// Distance parameters of one race template, in miles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaceProfile {
    /// Target race
    pub race_type: RaceType,
    /// Taper length in weeks
    pub taper_weeks: u32,
    /// `(first-week, peak)` long run for Beginner, Intermediate, Advanced
    pub long_run_miles: [(f64, f64); 3],
    /// Mid-week run distance as a share of the long run
    pub mid_run_ratio: f64,
    /// Shortest mid-week run
    pub min_mid_run_miles: f64,
}

impl RaceProfile {
    /// `(first-week, peak)` long run for a level, in miles
    #[must_use]
    pub const fn long_run_range(&self, level: TrainingLevel) -> (f64, f64) {
        match level {
            TrainingLevel::Beginner => self.long_run_miles[0],
            TrainingLevel::Intermediate => self.long_run_miles[1],
            TrainingLevel::Advanced => self.long_run_miles[2],
        }
    }

    /// Volume multiplier for the n-th (1-based) taper week
    #[must_use]
    pub fn taper_factor(&self, taper_week: u32) -> f64 {
        const ONE_WEEK: [f64; 1] = [0.6];
        const TWO_WEEKS: [f64; 2] = [0.7, 0.5];
        let factors: &[f64] = if self.taper_weeks >= 2 {
            &TWO_WEEKS
        } else {
            &ONE_WEEK
        };
        let index = (taper_week.saturating_sub(1) as usize).min(factors.len() - 1);
        factors[index]
    }
}

/// A race-specific plan template
pub trait PlanTemplate {
    /// Distance parameters of the template
    fn profile(&self) -> &RaceProfile;

    /// Quality sessions for a week, most important first
    ///
    /// `count` is the number of quality slots available (already capped by the
    /// runs per week); `phase_week` is the 1-based index of the week within
    /// its phase.
    fn quality_sessions(&self, phase: Phase, phase_week: u32, count: usize) -> Vec<RunType> {
        let rotation = match phase {
            Phase::Base | Phase::Taper => [RunType::Tempo, RunType::Interval],
            Phase::Build if phase_week % 2 == 0 => [RunType::Interval, RunType::Tempo],
            Phase::Build | Phase::Peak => [RunType::Tempo, RunType::Interval],
        };
        rotation.into_iter().cycle().take(count).collect()
    }

    /// Zone used for the long run in a phase
    fn long_run_zone(&self, _phase: Phase) -> PaceZone {
        PaceZone::Easy
    }

    /// Generate a plan
    ///
    /// # Errors
    ///
    /// - `AppError::InvalidInput` for a blocking plan length, runs per week
    ///   outside 2-7 or a non-positive VDOT
    /// - `AppError::InvalidInput` if a goal finish time cannot be converted to a pace
    fn generate(&self, options: &PlanOptions) -> AppResult<TrainingPlanData>
    where
        Self: Sized,
    {
        PlanBuilder::new(self, options, ProgressiveZoneBuilder::default())?.build()
    }
}

/// Generate a plan for a race type
///
/// # Errors
///
/// See [`PlanTemplate::generate`]
pub fn generate_plan(race_type: RaceType, options: &PlanOptions) -> AppResult<TrainingPlanData> {
    match race_type {
        RaceType::FiveK => FiveKPlan.generate(options),
        RaceType::TenK => TenKPlan.generate(options),
        RaceType::Half => HalfMarathonPlan.generate(options),
        RaceType::Full => MarathonPlan.generate(options),
    }
}

/// Day-of-week layout shared by every week of a plan
#[derive(Debug, Clone, PartialEq, Eq)]
struct WeekLayout {
    /// Run days other than the long-run day, in quality preference order
    mid_week_days: Vec<u8>,
    /// Cross-training days
    cross_training_days: Vec<u8>,
}

impl WeekLayout {
    fn new(runs_per_week: u8, cross_training_days: u8) -> Self {
        let run_days: &[u8] = match runs_per_week {
            2 => &[2, 6],
            3 => &[2, 4, 6],
            4 => &[1, 2, 4, 6],
            5 => &[1, 2, 3, 4, 6],
            6 => &[0, 1, 2, 3, 4, 6],
            _ => &[0, 1, 2, 3, 4, 5, 6],
        };

        let mid_week_days = QUALITY_DAY_PREFERENCE
            .iter()
            .copied()
            .filter(|day| run_days.contains(day))
            .collect();

        let cross_training_days = CROSS_TRAINING_DAY_PREFERENCE
            .iter()
            .copied()
            .filter(|day| !run_days.contains(day))
            .take(usize::from(cross_training_days))
            .collect();

        Self {
            mid_week_days,
            cross_training_days,
        }
    }
}

/// Phase boundaries of a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Periodization {
    pre_taper_weeks: u32,
}

impl Periodization {
    fn new(weeks: u32, taper_weeks: u32) -> Self {
        let taper = if weeks >= 2 {
            taper_weeks.min(weeks - 1)
        } else {
            weeks
        };
        Self {
            pre_taper_weeks: weeks - taper,
        }
    }

    /// Phase and 1-based index within the phase
    fn phase_of(self, week_number: u32) -> (Phase, u32) {
        if week_number > self.pre_taper_weeks {
            return (Phase::Taper, week_number - self.pre_taper_weeks);
        }
        let total = f64::from(self.pre_taper_weeks);
        let base_end = (total * BASE_PHASE_SHARE).floor() as u32;
        let build_end = (total * BUILD_PHASE_SHARE).floor() as u32;
        if week_number <= base_end {
            (Phase::Base, week_number)
        } else if week_number <= build_end {
            (Phase::Build, week_number - base_end)
        } else {
            (Phase::Peak, week_number - build_end)
        }
    }

    fn is_recovery(self, week_number: u32) -> bool {
        week_number < self.pre_taper_weeks && week_number % RECOVERY_WEEK_INTERVAL == 0
    }
}

/// Quality sessions per week by phase, for Beginner/Intermediate/Advanced
const fn quality_slots(phase: Phase, level: TrainingLevel) -> usize {
    let per_level: [usize; 3] = match phase {
        Phase::Base | Phase::Taper => [0, 1, 1],
        Phase::Build => [1, 1, 2],
        Phase::Peak => [1, 2, 2],
    };
    match level {
        TrainingLevel::Beginner => per_level[0],
        TrainingLevel::Intermediate => per_level[1],
        TrainingLevel::Advanced => per_level[2],
    }
}

fn round_to_step(distance: f64) -> f64 {
    (distance / DISTANCE_STEP).round() * DISTANCE_STEP
}

fn miles_to_unit(miles: f64, unit: DistanceUnit) -> f64 {
    unit.from_meters(miles * METERS_PER_MILE)
}

/// Validated generation state for one plan
struct PlanBuilder<'a, T: PlanTemplate> {
    template: &'a T,
    options: &'a PlanOptions,
    zones: ProgressiveZoneBuilder,
    layout: WeekLayout,
    periodization: Periodization,
    goal_pace: Option<Duration>,
}

impl<'a, T: PlanTemplate> PlanBuilder<'a, T> {
    fn new(
        template: &'a T,
        options: &'a PlanOptions,
        zones: ProgressiveZoneBuilder,
    ) -> AppResult<Self> {
        let profile = template.profile();

        let length = PlanLengthPolicy::default().validate(i64::from(options.weeks));
        if !length.is_valid() {
            return Err(AppError::invalid_input(
                length.message().unwrap_or("Invalid plan length").to_owned(),
            )
            .with_details(serde_json::json!({ "weeks": options.weeks })));
        }

        if !(MIN_RUNS_PER_WEEK..=MAX_RUNS_PER_WEEK).contains(&options.runs_per_week) {
            return Err(AppError::invalid_input(format!(
                "Runs per week must be between {MIN_RUNS_PER_WEEK} and {MAX_RUNS_PER_WEEK}, got {}",
                options.runs_per_week
            )));
        }

        let free_days = DAYS_IN_WEEK - options.runs_per_week;
        let cross_training_days = options.cross_training_days.min(free_days);
        if cross_training_days < options.cross_training_days {
            debug!(
                requested = options.cross_training_days,
                allowed = cross_training_days,
                runs_per_week = options.runs_per_week,
                "Clamped cross-training days to the days left after runs"
            );
        }

        let race_distance = profile.race_type.distance_in(options.distance_unit);
        let goal_pace = options
            .target
            .map(|target| target.goal_pace(race_distance))
            .transpose()?;

        Ok(Self {
            template,
            options,
            zones,
            layout: WeekLayout::new(options.runs_per_week, cross_training_days),
            periodization: Periodization::new(options.weeks, profile.taper_weeks),
            goal_pace,
        })
    }

    fn build(self) -> AppResult<TrainingPlanData> {
        let schedule = (1..=self.options.weeks)
            .map(|week_number| self.build_week(week_number))
            .collect::<AppResult<Vec<Week>>>()?;

        let plan = TrainingPlanData {
            weeks: self.options.weeks,
            race_type: self.template.profile().race_type,
            distance_unit: self.options.distance_unit,
            training_level: self.options.training_level,
            schedule,
            start_date: None,
            end_date: None,
        };

        info!(
            race_type = %plan.race_type,
            weeks = plan.weeks,
            level = %plan.training_level,
            runs_per_week = self.options.runs_per_week,
            total_volume = plan.total_volume(),
            "Generated training plan"
        );

        Ok(plan)
    }

    /// Long run for a week in the plan's unit, before rounding
    fn long_run_distance(&self, week_number: u32, phase: Phase, phase_week: u32) -> f64 {
        let profile = self.template.profile();
        let (start, peak) = profile.long_run_range(self.options.training_level);
        let pre_taper = self.periodization.pre_taper_weeks;

        let miles = if phase == Phase::Taper {
            peak * profile.taper_factor(phase_week)
        } else if pre_taper <= 1 {
            peak
        } else {
            let progress = f64::from(week_number - 1) / f64::from(pre_taper - 1);
            (peak - start).mul_add(progress, start)
        };
        miles_to_unit(miles, self.options.distance_unit)
    }

    fn build_week(&self, week_number: u32) -> AppResult<Week> {
        let profile = self.template.profile();
        let unit = self.options.distance_unit;
        let (phase, phase_week) = self.periodization.phase_of(week_number);
        let is_recovery = self.periodization.is_recovery(week_number);
        let is_race_week = week_number == self.options.weeks;

        let weekly = self.zones.build(
            self.options.vdot,
            self.goal_pace,
            self.options.weeks,
            week_number,
            profile.race_type.meters(),
            unit,
        )?;

        let long_run = round_to_step(self.long_run_distance(week_number, phase, phase_week));
        let min_mid = miles_to_unit(profile.min_mid_run_miles, unit);
        let mid_run = round_to_step((long_run * profile.mid_run_ratio).max(min_mid));

        let quality_count = if is_recovery {
            0
        } else {
            quality_slots(phase, self.options.training_level)
                .min(self.layout.mid_week_days.len())
        };
        let quality = self
            .template
            .quality_sessions(phase, phase_week, quality_count);

        let mut runs: Vec<PlannedRun> = (0..DAYS_IN_WEEK).map(PlannedRun::rest).collect();

        for (slot, &day) in self.layout.mid_week_days.iter().enumerate() {
            let run_type = quality.get(slot).copied().unwrap_or(RunType::Easy);
            runs[usize::from(day)] = self.session(day, run_type, mid_run, phase, &weekly);
        }
        for &day in &self.layout.cross_training_days {
            runs[usize::from(day)] = PlannedRun::cross_train(day);
        }

        runs[usize::from(LONG_RUN_DAY)] = if is_race_week {
            self.race_session(&weekly)
        } else {
            self.session(LONG_RUN_DAY, RunType::Long, long_run, phase, &weekly)
        };

        Ok(Week {
            week_number,
            phase,
            is_recovery,
            training_vdot: weekly.training_vdot,
            zones: weekly.zones,
            runs,
            start_date: None,
        })
    }

    fn session(
        &self,
        day: u8,
        run_type: RunType,
        distance: f64,
        phase: Phase,
        weekly: &WeeklyZones,
    ) -> PlannedRun {
        let zone = match run_type {
            RunType::Tempo => PaceZone::Tempo,
            RunType::Interval => PaceZone::Interval,
            RunType::Long => self.template.long_run_zone(phase),
            _ => PaceZone::Easy,
        };
        PlannedRun::run(day, run_type, distance, weekly.zones.pace(zone))
    }

    fn race_session(&self, weekly: &WeeklyZones) -> PlannedRun {
        let race_type = self.template.profile().race_type;
        let distance = race_type.distance_in(self.options.distance_unit);
        let pace = self.goal_pace.unwrap_or(weekly.zones.race);
        PlannedRun::run(LONG_RUN_DAY, RunType::Race, distance, pace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_places_quality_mid_week() {
        let layout = WeekLayout::new(4, 2);
        assert_eq!(layout.mid_week_days, vec![2, 4, 1]);
        assert_eq!(layout.cross_training_days, vec![5, 0]);
    }

    #[test]
    fn test_layout_every_day_running_leaves_no_cross_training() {
        let layout = WeekLayout::new(7, 3);
        assert!(layout.cross_training_days.is_empty());
        assert_eq!(layout.mid_week_days.len(), 6);
    }

    #[test]
    fn test_taper_never_consumes_plan() {
        assert_eq!(Periodization::new(2, 2).pre_taper_weeks, 1);
        assert_eq!(Periodization::new(1, 2).pre_taper_weeks, 0);
        assert_eq!(Periodization::new(16, 2).pre_taper_weeks, 14);
    }

    #[test]
    fn test_phase_order() {
        let periodization = Periodization::new(12, 2);
        let phases: Vec<Phase> = (1..=12).map(|w| periodization.phase_of(w).0).collect();
        assert_eq!(phases[0], Phase::Base);
        assert_eq!(phases[4], Phase::Build);
        assert_eq!(phases[9], Phase::Peak);
        assert_eq!(phases[10], Phase::Taper);
        assert_eq!(phases[11], Phase::Taper);
    }

    #[test]
    fn test_rounding_step() {
        assert!((round_to_step(3.24) - 3.0).abs() < f64::EPSILON);
        assert!((round_to_step(3.26) - 3.5).abs() < f64::EPSILON);
    }
}
