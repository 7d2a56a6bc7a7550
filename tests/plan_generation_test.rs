// ABOUTME: Integration tests for periodized plan generation across every race template
// ABOUTME: Weekly structure, long-run progression, taper, race placement and option validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use maratron_engine::errors::ErrorCode;
use maratron_engine::plans::{
    generate_plan, MarathonPlan, Phase, PlanOptions, PlanTarget, PlanTemplate, RunType,
    TrainingPlanData,
};
use maratron_engine::{DistanceUnit, Duration, RaceType, TrainingLevel};

const VDOT: f64 = 45.0;

fn plan(race: RaceType, weeks: u32) -> TrainingPlanData {
    generate_plan(race, &PlanOptions::new(weeks, VDOT, TrainingLevel::Intermediate)).unwrap()
}

fn pre_taper_weeks(race: RaceType) -> usize {
    match race {
        RaceType::FiveK | RaceType::TenK => 11,
        RaceType::Half | RaceType::Full => 10,
    }
}

#[test]
fn test_every_week_has_seven_ordered_slots() {
    for race in RaceType::ALL {
        let plan = plan(race, 12);
        assert_eq!(plan.weeks, 12);
        assert_eq!(plan.schedule.len(), 12);
        for (index, week) in plan.schedule.iter().enumerate() {
            assert_eq!(week.week_number as usize, index + 1);
            assert_eq!(week.runs.len(), 7);
            for (day, run) in week.runs.iter().enumerate() {
                assert_eq!(usize::from(run.day_of_week), day);
                assert_eq!(run.is_rest_day, run.run_type == RunType::Rest);
                assert_eq!(run.pace.is_some(), run.run_type != RunType::Rest && run.run_type != RunType::CrossTrain);
            }
        }
    }
}

#[test]
fn test_race_is_the_last_run_of_the_last_week() {
    for race in RaceType::ALL {
        let plan = plan(race, 12);
        let last_week = plan.schedule.last().unwrap();
        let race_run = plan.race_run().unwrap();

        assert_eq!(race_run.day_of_week, 6);
        assert_eq!(last_week.runs[6].run_type, RunType::Race);
        assert!((race_run.distance - race.distance_in(DistanceUnit::Miles)).abs() < 1e-9);
        assert_eq!(race_run.pace, Some(last_week.zones.race));
        assert!(last_week.long_run_distance().is_none());

        let earlier_races = plan.schedule[..11]
            .iter()
            .map(|week| week.count_of(RunType::Race))
            .sum::<usize>();
        assert_eq!(earlier_races, 0);
    }
}

#[test]
fn test_goal_pace_is_the_race_pace() {
    let goal = Duration::parse_pace("8:15").unwrap();
    let options = PlanOptions::new(16, VDOT, TrainingLevel::Intermediate)
        .with_target(PlanTarget::Pace(goal));
    let plan = generate_plan(RaceType::Full, &options).unwrap();
    assert_eq!(plan.race_run().unwrap().pace, Some(goal));
}

#[test]
fn test_runs_per_week_matches_options() {
    for runs in 2..=7 {
        let options =
            PlanOptions::new(10, VDOT, TrainingLevel::Advanced).with_schedule(runs, 0);
        let plan = generate_plan(RaceType::TenK, &options).unwrap();
        for week in &plan.schedule {
            assert_eq!(week.run_count(), usize::from(runs), "runs {runs} week {}", week.week_number);
        }
    }
}

#[test]
fn test_long_run_never_decreases_before_taper() {
    for race in RaceType::ALL {
        let plan = plan(race, 12);
        let long_runs: Vec<f64> = plan.schedule[..pre_taper_weeks(race)]
            .iter()
            .map(|week| week.long_run_distance().unwrap())
            .collect();
        assert!(
            long_runs.windows(2).all(|pair| pair[0] <= pair[1]),
            "{race}: {long_runs:?}"
        );
    }
}

#[test]
fn test_marathon_long_run_range() {
    let plan = plan(RaceType::Full, 16);
    assert!((plan.schedule[0].long_run_distance().unwrap() - 10.0).abs() < f64::EPSILON);
    assert!((plan.schedule[13].long_run_distance().unwrap() - 20.0).abs() < f64::EPSILON);
    assert_eq!(plan.schedule[14].phase, Phase::Taper);
    assert!(plan.schedule[14].long_run_distance().unwrap() < 20.0);
}

#[test]
fn test_taper_reduces_volume() {
    for race in RaceType::ALL {
        let plan = plan(race, 12);
        let peak_index = pre_taper_weeks(race) - 1;
        let peak_volume = plan.schedule[peak_index].training_volume();
        for week in &plan.schedule[peak_index + 1..] {
            assert_eq!(week.phase, Phase::Taper);
            assert!(
                week.training_volume() < peak_volume,
                "{race} week {}: {} vs peak {peak_volume}",
                week.week_number,
                week.training_volume()
            );
        }
    }
}

#[test]
fn test_phases_progress_in_order() {
    let order = |phase: Phase| match phase {
        Phase::Base => 0,
        Phase::Build => 1,
        Phase::Peak => 2,
        Phase::Taper => 3,
    };
    for race in RaceType::ALL {
        let plan = plan(race, 18);
        let phases: Vec<i32> = plan.schedule.iter().map(|week| order(week.phase)).collect();
        assert!(phases.windows(2).all(|pair| pair[0] <= pair[1]), "{race}");
        assert_eq!(phases[0], 0);
        assert_eq!(*phases.last().unwrap(), 3);
    }
}

#[test]
fn test_recovery_weeks_drop_quality() {
    let plan = plan(RaceType::Full, 16);
    let week_four = &plan.schedule[3];
    assert!(week_four.is_recovery);
    assert_eq!(week_four.count_of(RunType::Tempo) + week_four.count_of(RunType::Interval), 0);

    let week_three = &plan.schedule[2];
    assert!(!week_three.is_recovery);
    assert_eq!(week_three.count_of(RunType::Tempo), 1);
}

#[test]
fn test_quality_sessions_use_mid_week_days() {
    let plan = plan(RaceType::Half, 12);
    for week in &plan.schedule {
        for run in week.runs.iter().filter(|run| run.run_type.is_quality()) {
            assert!(run.day_of_week == 2 || run.day_of_week == 4, "day {}", run.day_of_week);
        }
    }
}

#[test]
fn test_marathon_peak_long_run_at_marathon_pace() {
    let plan = plan(RaceType::Full, 16);
    let peak_week = plan
        .schedule
        .iter()
        .find(|week| week.phase == Phase::Peak)
        .unwrap();
    let long_run = &peak_week.runs[6];
    assert_eq!(long_run.run_type, RunType::Long);
    assert_eq!(long_run.pace, Some(peak_week.zones.marathon));
    assert_eq!(
        MarathonPlan.long_run_zone(Phase::Base),
        maratron_engine::intelligence::PaceZone::Easy
    );
}

#[test]
fn test_cross_training_is_clamped_to_free_days() {
    let options = PlanOptions::new(8, VDOT, TrainingLevel::Intermediate).with_schedule(5, 4);
    let plan = generate_plan(RaceType::FiveK, &options).unwrap();
    for week in &plan.schedule {
        assert_eq!(week.count_of(RunType::CrossTrain), 2);
        assert_eq!(week.count_of(RunType::Rest), 0);
    }

    let options = PlanOptions::new(8, VDOT, TrainingLevel::Intermediate).with_schedule(4, 1);
    let plan = generate_plan(RaceType::FiveK, &options).unwrap();
    assert_eq!(plan.schedule[0].runs[5].run_type, RunType::CrossTrain);
    assert_eq!(plan.schedule[0].count_of(RunType::CrossTrain), 1);
}

#[test]
fn test_runs_per_week_outside_range_is_rejected() {
    for runs in [0, 1, 8] {
        let options = PlanOptions::new(12, VDOT, TrainingLevel::Intermediate).with_schedule(runs, 0);
        let err = generate_plan(RaceType::Half, &options).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput, "runs {runs}");
    }
}

#[test]
fn test_blocking_plan_lengths_are_rejected() {
    for weeks in [0, 53] {
        let options = PlanOptions::new(weeks, VDOT, TrainingLevel::Intermediate);
        let err = generate_plan(RaceType::Full, &options).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput, "weeks {weeks}");
        assert_eq!(err.details["weeks"], weeks);
    }
}

#[test]
fn test_single_week_plan_is_race_week() {
    let plan = plan(RaceType::TenK, 1);
    assert_eq!(plan.schedule.len(), 1);
    assert_eq!(plan.schedule[0].phase, Phase::Taper);
    assert!(plan.race_run().is_some());
}

#[test]
fn test_kilometer_distances_are_rounded_to_half_units() {
    let options = PlanOptions::new(12, VDOT, TrainingLevel::Beginner)
        .with_unit(DistanceUnit::Kilometers);
    let plan = generate_plan(RaceType::Half, &options).unwrap();
    assert_eq!(plan.distance_unit, DistanceUnit::Kilometers);
    for week in &plan.schedule {
        for run in week.runs.iter().filter(|run| run.run_type.is_training_run()) {
            let doubled = run.distance * 2.0;
            assert!((doubled - doubled.round()).abs() < 1e-9, "{}", run.distance);
            assert!(run.distance > 0.0);
        }
    }
    assert!((plan.race_run().unwrap().distance - 21.0975).abs() < 1e-9);
}

#[test]
fn test_paces_get_faster_over_the_plan() {
    let plan = plan(RaceType::Full, 16);
    let first = &plan.schedule[0];
    let last = plan.schedule.last().unwrap();
    assert!(last.training_vdot > first.training_vdot);
    assert!(last.zones.easy <= first.zones.easy);
    assert!(last.zones.tempo <= first.zones.tempo);
}

#[test]
fn test_generation_is_deterministic() {
    let options = PlanOptions::new(14, VDOT, TrainingLevel::Advanced).with_schedule(6, 1);
    let first = generate_plan(RaceType::Half, &options).unwrap();
    let second = generate_plan(RaceType::Half, &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_plan_serializes_camel_case() {
    let json = serde_json::to_value(plan(RaceType::FiveK, 6)).unwrap();
    assert_eq!(json["raceType"], "5k");
    assert_eq!(json["distanceUnit"], "miles");
    assert_eq!(json["schedule"][0]["runs"][0]["dayOfWeek"], 0);
    assert!(json["schedule"][0]["runs"][2]["type"].is_string());
    assert!(json.get("startDate").is_none());
}

fn quality_sessions(plan: &TrainingPlanData) -> usize {
    plan.schedule
        .iter()
        .flat_map(|week| &week.runs)
        .filter(|run| run.run_type.is_quality())
        .count()
}

#[test]
fn test_training_level_scales_quality_sessions() {
    for race in RaceType::ALL {
        let count_for = |level| {
            let options = PlanOptions::new(16, VDOT, level).with_schedule(4, 0);
            quality_sessions(&generate_plan(race, &options).unwrap())
        };
        let beginner = count_for(TrainingLevel::Beginner);
        let intermediate = count_for(TrainingLevel::Intermediate);
        let advanced = count_for(TrainingLevel::Advanced);

        assert!(beginner > 0, "{race}");
        assert!(beginner < intermediate, "{race}: {beginner} vs {intermediate}");
        assert!(intermediate <= advanced, "{race}: {intermediate} vs {advanced}");
    }
}
