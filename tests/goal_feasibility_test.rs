// ABOUTME: Integration tests for goal feasibility against the bounded improvement model
// ABOUTME: Ceiling rejection with a suggested pace, total-time goals and malformed input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use maratron_engine::errors::ErrorCode;
use maratron_engine::intelligence::config::{GoalConfig, ProgressionConfig};
use maratron_engine::intelligence::{
    GoalFeasibilityValidator, GoalRequest, VdotProgression,
};
use maratron_engine::{DistanceUnit, RaceType};

fn validator() -> GoalFeasibilityValidator {
    GoalFeasibilityValidator::new(
        GoalConfig::default(),
        VdotProgression::new(ProgressionConfig::default()),
    )
}

fn pace_goal<'a>(goal: &'a str, current: &'a str) -> GoalRequest<'a> {
    GoalRequest {
        goal,
        current_pace: current,
        vdot: 40.0,
        weeks: 16,
        is_total_time: false,
        race_distance: RaceType::Full.distance_in(DistanceUnit::Miles),
    }
}

#[test]
fn test_goal_beyond_ceiling_is_rejected_with_suggestion() {
    let result = validator().validate(&pace_goal("6:30", "8:00")).unwrap();

    assert!(!result.is_valid);
    assert!((result.improvement_ratio - 480.0 / 390.0).abs() < 1e-9);
    assert_eq!(result.goal_pace.format(false), "06:30");
    // 480 / 1.10 = 436.4 s
    assert_eq!(result.suggested_pace.unwrap().format(false), "07:16");
    assert!(result.message.contains("23.1%"));
    assert!(result.message.contains("07:16"));
}

#[test]
fn test_goal_within_ceiling_is_accepted() {
    let result = validator().validate(&pace_goal("7:00", "8:00")).unwrap();

    assert!(result.is_valid);
    assert!(result.suggested_pace.is_none());
    assert!(result.improvement_ratio > 1.0 && result.improvement_ratio <= 1.2);
    // 16 weeks: 40 + 1.5 × 16 / 13
    assert!((result.projected_vdot - (40.0 + 1.5 * 16.0 / 13.0)).abs() < 1e-9);
}

#[test]
fn test_goal_slower_than_current_is_accepted() {
    let result = validator().validate(&pace_goal("8:30", "8:00")).unwrap();
    assert!(result.is_valid);
    assert!(result.improvement_ratio < 1.0);
}

#[test]
fn test_ceiling_boundary_is_inclusive() {
    // 7:12 → 6:00 is exactly a 1.20 ratio
    let result = validator().validate(&pace_goal("6:00", "7:12")).unwrap();
    assert!(result.is_valid);
}

#[test]
fn test_total_time_goal_converted_to_pace() {
    let request = GoalRequest {
        goal: "3:30:00",
        current_pace: "8:45",
        vdot: 40.0,
        weeks: 16,
        is_total_time: true,
        race_distance: RaceType::Full.distance_in(DistanceUnit::Miles),
    };
    let result = validator().validate(&request).unwrap();

    assert!(result.is_valid);
    // 12600 s over 26.2188 mi
    assert_eq!(result.goal_pace.format(false), "08:01");
    assert!((result.improvement_ratio - 525.0 * 26.218_8 / 12_600.0).abs() < 1e-3);
}

#[test]
fn test_total_time_goal_needs_a_distance() {
    let request = GoalRequest {
        goal: "3:30:00",
        current_pace: "8:45",
        vdot: 40.0,
        weeks: 16,
        is_total_time: true,
        race_distance: 0.0,
    };
    let err = validator().validate(&request).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_zero_current_pace_is_rejected() {
    let err = validator().validate(&pace_goal("7:00", "0:00")).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_malformed_goal_is_a_format_error() {
    let err = validator().validate(&pace_goal("seven", "8:00")).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);

    let err = validator().validate(&pace_goal("7:00", "8:99")).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidPaceRange);
}

#[test]
fn test_stricter_ceiling_rejects_more() {
    let strict = GoalFeasibilityValidator::new(
        GoalConfig {
            max_improvement_ratio: 1.05,
            suggested_improvement_ratio: 1.02,
        },
        VdotProgression::new(ProgressionConfig::default()),
    );
    let result = strict.validate(&pace_goal("7:00", "8:00")).unwrap();
    assert!(!result.is_valid);
    // 480 / 1.02 = 470.6 s
    assert_eq!(result.suggested_pace.unwrap().format(false), "07:51");
}
