// ABOUTME: Calendar scheduling for training plans and the plan length policy
// ABOUTME: Exact date arithmetic on calendar dates plus advisory/blocking length bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Date arithmetic and date assignment for generated plans
pub mod calendar;

/// Plan length warning/error bands
pub mod plan_length;

pub use calendar::{
    adjust_end_date, adjust_start_date, assign_dates_to_plan, current_plan_week,
    smart_start_date, start_now_weeks, weeks_between, DateAnchor, DateRange,
};
pub use plan_length::{validate_plan_length, PlanLengthPolicy, PlanLengthValidation};
