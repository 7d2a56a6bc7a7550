// ABOUTME: Integration tests for calendar scheduling on plain dates
// ABOUTME: Week arithmetic across month and leap-year boundaries, start-now logic and date assignment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Datelike, Days, NaiveDate};
use maratron_engine::plans::{generate_plan, PlanOptions};
use maratron_engine::scheduling::{
    adjust_end_date, adjust_start_date, assign_dates_to_plan, current_plan_week,
    smart_start_date, start_now_weeks, validate_plan_length, weeks_between, DateAnchor, DateRange,
    PlanLengthValidation,
};
use maratron_engine::errors::ErrorCode;
use maratron_engine::{RaceType, TrainingLevel};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_adding_weeks_crosses_leap_february() {
    assert_eq!(adjust_end_date(date(2024, 1, 31), 4).unwrap(), date(2024, 2, 28));
    assert_eq!(adjust_end_date(date(2024, 2, 22), 1).unwrap(), date(2024, 2, 29));
    assert_eq!(adjust_end_date(date(2023, 12, 25), 2).unwrap(), date(2024, 1, 8));
}

#[test]
fn test_weeks_between() {
    assert_eq!(weeks_between(date(2024, 3, 1), date(2024, 3, 8)), 1);
    assert_eq!(weeks_between(date(2024, 3, 1), date(2024, 3, 7)), 0);
    assert_eq!(weeks_between(date(2024, 3, 8), date(2024, 3, 1)), 0);
    assert_eq!(weeks_between(date(2024, 1, 1), date(2025, 1, 1)), 52);
}

#[test]
fn test_start_and_end_adjustment_invert() {
    let race_day = date(2024, 10, 13);
    for weeks in [1, 4, 12, 16, 26, 52] {
        let start = adjust_start_date(race_day, weeks).unwrap();
        assert_eq!(weeks_between(start, race_day), i64::from(weeks));
        assert_eq!(adjust_end_date(start, weeks).unwrap(), race_day);
    }
}

#[test]
fn test_smart_start_rewinds_early_week_days_to_sunday() {
    // Sunday 2024-03-03 through Wednesday 2024-03-06 start on that Sunday
    assert_eq!(smart_start_date(date(2024, 3, 3)), date(2024, 3, 3));
    assert_eq!(smart_start_date(date(2024, 3, 5)), date(2024, 3, 3));
    assert_eq!(smart_start_date(date(2024, 3, 6)), date(2024, 3, 3));
    // Thursday onward starts today
    assert_eq!(smart_start_date(date(2024, 3, 7)), date(2024, 3, 7));
    assert_eq!(smart_start_date(date(2024, 3, 9)), date(2024, 3, 9));
}

#[test]
fn test_start_now_weeks() {
    // Tuesday → rewinds to 2024-03-03; 90 days to 2024-06-01
    assert_eq!(start_now_weeks(date(2024, 6, 1), date(2024, 3, 5)), 12);
    assert_eq!(start_now_weeks(date(2024, 3, 5), date(2024, 3, 5)), 0);
    assert_eq!(start_now_weeks(date(2024, 3, 1), date(2024, 3, 5)), 0);
}

#[test]
fn test_current_plan_week() {
    let start = date(2024, 1, 7);
    assert_eq!(current_plan_week(start, date(2024, 1, 7), 16), 1);
    assert_eq!(current_plan_week(start, date(2024, 1, 13), 16), 1);
    assert_eq!(current_plan_week(start, date(2024, 1, 14), 16), 2);
    assert_eq!(current_plan_week(start, date(2023, 12, 1), 16), 1);
    assert_eq!(current_plan_week(start, date(2026, 1, 1), 16), 16);
}

#[test]
fn test_date_range_constructors() {
    let range = DateRange::from_start(date(2024, 3, 3), 12).unwrap();
    assert_eq!(range.end_date, date(2024, 5, 26));
    assert_eq!(range.weeks, 12);

    let range = DateRange::from_end(date(2024, 5, 26), 12).unwrap();
    assert_eq!(range.start_date, date(2024, 3, 3));
    assert_eq!(DateRange::new(date(2024, 3, 3), date(2024, 3, 20)).weeks, 2);
}

#[test]
fn test_assign_dates_matches_weekdays() {
    let plan = generate_plan(
        RaceType::Half,
        &PlanOptions::new(8, 45.0, TrainingLevel::Intermediate),
    )
    .unwrap();
    let structure = plan.clone();

    // Wednesday start: each run lands on the first matching weekday of its week window
    let dated = assign_dates_to_plan(plan, DateAnchor::Start { date: date(2024, 1, 31) }).unwrap();
    assert_eq!(dated.start_date, Some(date(2024, 1, 31)));
    assert_eq!(dated.end_date, Some(date(2024, 3, 27)));
    assert_eq!(dated.schedule.len(), structure.schedule.len());

    for (week, original) in dated.schedule.iter().zip(&structure.schedule) {
        let week_start = week.start_date.unwrap();
        for (run, undated) in week.runs.iter().zip(&original.runs) {
            let run_date = run.date.unwrap();
            assert_eq!(run_date.weekday().num_days_from_sunday(), u32::from(run.day_of_week));
            assert!(run_date >= week_start);
            assert!((run_date - week_start).num_days() < 7);
            assert_eq!(run.run_type, undated.run_type);
            assert!((run.distance - undated.distance).abs() < f64::EPSILON);
        }
    }

    // Race on the Saturday of the last week
    assert_eq!(dated.race_run().unwrap().date, Some(date(2024, 3, 23)));
}

#[test]
fn test_assign_dates_from_end_anchor() {
    let plan = generate_plan(
        RaceType::TenK,
        &PlanOptions::new(10, 45.0, TrainingLevel::Beginner),
    )
    .unwrap();
    let dated = assign_dates_to_plan(plan, DateAnchor::End { date: date(2024, 6, 9) }).unwrap();
    assert_eq!(dated.start_date, Some(date(2024, 3, 31)));
    assert_eq!(dated.schedule[0].start_date, Some(date(2024, 3, 31)));
    assert_eq!(dated.race_run().unwrap().date, Some(date(2024, 6, 8)));
}

#[test]
fn test_run_dates_past_calendar_limit_are_errors() {
    let mut plan = generate_plan(
        RaceType::FiveK,
        &PlanOptions::new(1, 45.0, TrainingLevel::Beginner),
    )
    .unwrap();
    // A zero-length range passes, but the week's later days run off the calendar
    plan.weeks = 0;
    let near_max = NaiveDate::MAX.checked_sub_days(Days::new(3)).unwrap();

    let err = assign_dates_to_plan(plan, DateAnchor::Start { date: near_max }).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_plan_length_classification() {
    assert!(matches!(validate_plan_length(-2), PlanLengthValidation::Error { .. }));
    assert!(matches!(validate_plan_length(2), PlanLengthValidation::Warning { .. }));
    assert_eq!(validate_plan_length(16), PlanLengthValidation::Ok { weeks: 16 });
    assert!(matches!(validate_plan_length(40), PlanLengthValidation::Warning { .. }));
    let blocked = validate_plan_length(60);
    assert!(!blocked.is_valid());
    assert!(blocked.message().unwrap().contains("52"));
}
