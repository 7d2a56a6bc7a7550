// ABOUTME: Integration tests for VDOT progression and week-by-week progressive zones
// ABOUTME: Gain ceiling, monotonic interpolation and peak-week goal blending
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use maratron_engine::intelligence::algorithms::vdot::pace_seconds_for_vdot;
use maratron_engine::intelligence::config::{
    ProgressionConfig, ProgressiveZoneConfig, TrainingZonesConfig,
};
use maratron_engine::intelligence::{
    build_zones_for_week, project_vdot, PaceZone, ProgressiveZoneBuilder, VdotProgression,
};
use maratron_engine::{DistanceUnit, Duration, RaceType};

fn builder() -> ProgressiveZoneBuilder {
    ProgressiveZoneBuilder::new(
        VdotProgression::new(ProgressionConfig::default()),
        TrainingZonesConfig::default(),
        ProgressiveZoneConfig::default(),
    )
}

#[test]
fn test_projection_gains_per_block() {
    assert!((project_vdot(45.0, 13) - 46.5).abs() < 1e-9);
    assert!((project_vdot(45.0, 26) - 48.0).abs() < 1e-9);
    assert!((project_vdot(45.0, 0) - 45.0).abs() < f64::EPSILON);
}

#[test]
fn test_projection_is_capped() {
    assert!((project_vdot(45.0, 52) - 51.0).abs() < 1e-9);
    assert!((project_vdot(45.0, 200) - 51.0).abs() < 1e-9);
}

#[test]
fn test_projection_never_decreases_with_weeks() {
    let model = VdotProgression::new(ProgressionConfig::default());
    let projections: Vec<f64> = (0..=60).map(|weeks| model.project(40.0, weeks)).collect();
    assert!(projections.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_training_vdot_climbs_to_projection() {
    let builder = builder();
    let weekly: Vec<f64> = (1..=16)
        .map(|week| builder.training_vdot(45.0, 16, week))
        .collect();
    assert!(weekly.windows(2).all(|pair| pair[0] < pair[1]));
    assert!((weekly[15] - project_vdot(45.0, 16)).abs() < 1e-9);
    assert!(weekly[0] > 45.0);
}

#[test]
fn test_goal_blending_only_in_peak_weeks() {
    let builder = builder();
    let goal = Some(Duration::parse_pace("7:00").unwrap());
    let meters = RaceType::Full.meters();

    let build_week = builder
        .build(45.0, goal, 16, 12, meters, DistanceUnit::Miles)
        .unwrap();
    assert!(!build_week.is_peak_phase);
    assert!(!build_week.goal_blended);

    let peak_week = builder
        .build(45.0, goal, 16, 13, meters, DistanceUnit::Miles)
        .unwrap();
    assert!(peak_week.is_peak_phase);
    assert!(peak_week.goal_blended);
    assert!(peak_week.zones.marathon < peak_week.zones.race);
    assert!(peak_week.zones.marathon > Duration::from_secs(420));
}

#[test]
fn test_peak_marathon_pace_is_seventy_thirty_blend() {
    let builder = builder();
    let goal = Duration::parse_pace("7:00").unwrap();
    let meters = RaceType::Full.meters();

    for week_number in [14, 15, 16] {
        let week = builder
            .build(45.0, Some(goal), 16, week_number, meters, DistanceUnit::Miles)
            .unwrap();
        assert!(week.goal_blended);

        let derived = pace_seconds_for_vdot(
            meters,
            week.training_vdot,
            PaceZone::Marathon,
            DistanceUnit::Miles,
            &TrainingZonesConfig::default(),
        )
        .unwrap();
        let expected = 0.7f64.mul_add(derived, 0.3 * goal.as_secs_f64()).round();
        assert_eq!(
            f64::from(week.zones.marathon.as_secs()),
            expected,
            "week {week_number}"
        );
    }
}

#[test]
fn test_no_goal_means_no_blending() {
    let week = builder()
        .build(45.0, None, 16, 16, RaceType::Full.meters(), DistanceUnit::Miles)
        .unwrap();
    assert!(week.is_peak_phase);
    assert!(!week.goal_blended);
    assert_eq!(week.zones.marathon, week.zones.race);
}

#[test]
fn test_zero_week_plan_is_rejected() {
    assert!(build_zones_for_week(45.0, None, 0, 1, RaceType::Half.meters(), DistanceUnit::Miles)
        .is_err());
}
