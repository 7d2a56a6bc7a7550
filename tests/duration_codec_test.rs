// ABOUTME: Integration tests for the pace and elapsed-time codec
// ABOUTME: Accepted shapes, component bounds, error codes and formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use maratron_engine::errors::ErrorCode;
use maratron_engine::intelligence::PaceZones;
use maratron_engine::plans::{PlanTarget, PlannedRun, RunType};
use serde_json::json;
use maratron_engine::{format_duration, parse_duration, parse_pace, Duration, DurationKind};

#[test]
fn test_parses_minutes_and_seconds() {
    assert_eq!(parse_duration("10:30").unwrap(), 630);
    assert_eq!(parse_pace("7:05").unwrap(), 425);
    assert_eq!(parse_pace("07:05").unwrap(), 425);
}

#[test]
fn test_parses_hours() {
    assert_eq!(parse_duration("01:00:00").unwrap(), 3_600);
    assert_eq!(parse_duration("3:30:15").unwrap(), 12_615);
}

#[test]
fn test_seconds_out_of_range() {
    let err = parse_duration("01:00:70").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidPaceRange);
    assert_eq!(parse_pace("1:60").unwrap_err().code, ErrorCode::InvalidPaceRange);
}

#[test]
fn test_minutes_out_of_range() {
    let err = parse_duration("1:75:00").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidPaceRange);
    assert_eq!(err.details["component"], "minutes");
}

#[test]
fn test_malformed_text_is_a_format_error() {
    for text in ["", "abc", "7:5", "7:05:", ":30", "100:00", "1:2:3:4", "-7:00", "7.5"] {
        let err = parse_pace(text).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat, "input {text:?}");
    }
}

#[test]
fn test_hour_caps_differ_by_kind() {
    assert!(Duration::parse("23:00:00", DurationKind::Elapsed).is_ok());
    assert_eq!(
        Duration::parse("23:00:00", DurationKind::Pace).unwrap_err().code,
        ErrorCode::InvalidPaceRange
    );
    assert_eq!(
        Duration::parse("24:00:00", DurationKind::Elapsed).unwrap_err().code,
        ErrorCode::InvalidPaceRange
    );
}

#[test]
fn test_formatting() {
    assert_eq!(format_duration(425, false), "07:05");
    assert_eq!(format_duration(425, true), "00:07:05");
    assert_eq!(format_duration(3_600, false), "01:00:00");
    assert_eq!(format_duration(0, false), "00:00");
}

#[test]
fn test_formatted_values_parse_back() {
    for seconds in [0, 59, 60, 425, 3_599, 3_600, 12_615, 86_399] {
        let text = format_duration(seconds, false);
        assert_eq!(parse_duration(&text).unwrap(), seconds, "{text}");
    }
}

#[test]
fn test_serde_uses_text() {
    let json = serde_json::to_string(&Duration::from_secs(630)).unwrap();
    assert_eq!(json, "\"10:30\"");
    let parsed: Duration = serde_json::from_str("\"1:00:00\"").unwrap();
    assert_eq!(parsed.as_secs(), 3_600);
    let from_number: Duration = serde_json::from_str("90").unwrap();
    assert_eq!(from_number.as_secs(), 90);
    assert!(serde_json::from_str::<Duration>("\"1:00:70\"").is_err());
}

#[test]
fn test_pace_fields_read_bare_minutes() {
    let target: PlanTarget = serde_json::from_value(json!({"kind": "pace", "value": "8"})).unwrap();
    assert_eq!(target, PlanTarget::Pace(Duration::from_secs(480)));

    let total: PlanTarget =
        serde_json::from_value(json!({"kind": "totalTime", "value": "8"})).unwrap();
    assert_eq!(total, PlanTarget::TotalTime(Duration::from_secs(8)));

    let run: PlannedRun = serde_json::from_value(json!({
        "dayOfWeek": 2,
        "type": "tempo",
        "distance": 5.0,
        "pace": "7",
        "isRestDay": false
    }))
    .unwrap();
    assert_eq!(run.run_type, RunType::Tempo);
    assert_eq!(run.pace, Some(Duration::from_secs(420)));

    let rest: PlannedRun = serde_json::from_value(json!({
        "dayOfWeek": 0,
        "type": "rest",
        "distance": 0.0,
        "isRestDay": true
    }))
    .unwrap();
    assert_eq!(rest.pace, None);
}

#[test]
fn test_pace_zones_round_trip_through_json() {
    let zones: PaceZones = serde_json::from_value(json!({
        "easy": "10",
        "marathon": "9:00",
        "tempo": "8:15",
        "interval": "7:30",
        "repetition": "7",
        "race": "8:40"
    }))
    .unwrap();
    assert_eq!(zones.easy.as_secs(), 600);
    assert_eq!(zones.repetition.as_secs(), 420);

    let back: PaceZones = serde_json::from_value(serde_json::to_value(zones).unwrap()).unwrap();
    assert_eq!(back, zones);
    assert!(serde_json::from_value::<PaceZones>(json!({
        "easy": "11:00:00",
        "marathon": "9:00",
        "tempo": "8:15",
        "interval": "7:30",
        "repetition": "7:00",
        "race": "8:40"
    }))
    .is_err());
}

#[test]
fn test_pace_from_total_time() {
    let total = Duration::parse_elapsed("1:00:00").unwrap();
    assert_eq!(total.per_distance(6.0).unwrap().as_secs(), 600);
    assert_eq!(
        total.per_distance(0.0).unwrap_err().code,
        ErrorCode::InvalidInput
    );
    let pace = Duration::parse_pace("8:00").unwrap();
    assert_eq!(pace.total_for_distance(3.0).unwrap().as_secs(), 1_440);
}
