// ABOUTME: Calendar date arithmetic for plan scheduling on plain calendar dates
// ABOUTME: Week counting, start/end adjustment, Sunday-aligned start-now logic and date assignment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Calendar Scheduler
//!
//! All arithmetic uses [`NaiveDate`] (year, month, day) so week math is exact
//! and immune to time zones and DST. Adding weeks is adding `7 × weeks` days,
//! which rolls over month lengths and leap years correctly
//! (2024-01-31 + 4 weeks = 2024-02-28).
//!
//! A date range `[start, end)` of `weeks` weeks always satisfies
//! `weeks == floor((end - start) / 7 days)`.

use crate::plans::TrainingPlanData;
use chrono::{Datelike, Days, NaiveDate};
use maratron_core::constants::units::DAYS_PER_WEEK;
use maratron_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Last weekday (0 = Sunday) that still belongs to the "current" training week
const LAST_REWIND_WEEKDAY: u32 = 3;

/// Whole weeks from `start` to `end`, 0 when `end` precedes `start`
#[must_use]
pub fn weeks_between(start: NaiveDate, end: NaiveDate) -> i64 {
    if end < start {
        return 0;
    }
    (end - start).num_days() / DAYS_PER_WEEK
}

fn week_span(weeks: u32) -> Days {
    Days::new(u64::from(weeks) * DAYS_PER_WEEK.unsigned_abs())
}

/// `start + 7 × weeks` days
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if the result is outside the supported date range
pub fn adjust_end_date(start: NaiveDate, weeks: u32) -> AppResult<NaiveDate> {
    start.checked_add_days(week_span(weeks)).ok_or_else(|| {
        AppError::invalid_input(format!("{start} + {weeks} weeks is out of range"))
    })
}

/// `end - 7 × weeks` days
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if the result is outside the supported date range
pub fn adjust_start_date(end: NaiveDate, weeks: u32) -> AppResult<NaiveDate> {
    end.checked_sub_days(week_span(weeks)).ok_or_else(|| {
        AppError::invalid_input(format!("{end} - {weeks} weeks is out of range"))
    })
}

/// Start date for a plan begun today
///
/// Sunday through Wednesday rewind to the most recent Sunday (the first
/// training week is extended into the past); Thursday through Saturday start
/// today.
#[must_use]
pub fn smart_start_date(today: NaiveDate) -> NaiveDate {
    let weekday = today.weekday().num_days_from_sunday();
    if weekday <= LAST_REWIND_WEEKDAY {
        today
            .checked_sub_days(Days::new(u64::from(weekday)))
            .unwrap_or(today)
    } else {
        today
    }
}

/// Weeks available if training started today, 0 for a past or same-day race
#[must_use]
pub fn start_now_weeks(race_date: NaiveDate, today: NaiveDate) -> i64 {
    if race_date <= today {
        return 0;
    }
    weeks_between(smart_start_date(today), race_date)
}

/// 1-based plan week containing `today`, capped to `1..=total_weeks`
#[must_use]
pub fn current_plan_week(plan_start: NaiveDate, today: NaiveDate, total_weeks: u32) -> u32 {
    let elapsed = u32::try_from(weeks_between(plan_start, today)).unwrap_or(u32::MAX);
    elapsed.saturating_add(1).clamp(1, total_weeks.max(1))
}

/// Start/end pair with its whole-week length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    /// First day of week 1
    pub start_date: NaiveDate,
    /// Day after the last plan day
    pub end_date: NaiveDate,
    /// `floor((end_date - start_date) / 7)`
    pub weeks: i64,
}

impl DateRange {
    /// Range between two dates
    #[must_use]
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            weeks: weeks_between(start_date, end_date),
        }
    }

    /// Range of `weeks` weeks starting on `start_date`
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the end date is out of range
    pub fn from_start(start_date: NaiveDate, weeks: u32) -> AppResult<Self> {
        Ok(Self::new(start_date, adjust_end_date(start_date, weeks)?))
    }

    /// Range of `weeks` weeks ending on `end_date`
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the start date is out of range
    pub fn from_end(end_date: NaiveDate, weeks: u32) -> AppResult<Self> {
        Ok(Self::new(adjust_start_date(end_date, weeks)?, end_date))
    }
}

/// How a plan is pinned to the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "anchor", rename_all = "camelCase")]
pub enum DateAnchor {
    /// Week 1 starts on this date
    Start {
        /// First plan day
        date: NaiveDate,
    },
    /// The plan ends the day before this date
    End {
        /// Day after the last plan day
        date: NaiveDate,
    },
    /// Explicit range; the end is recomputed when it disagrees with the plan length
    Range {
        /// First plan day
        start: NaiveDate,
        /// Day after the last plan day
        end: NaiveDate,
    },
}

impl DateAnchor {
    fn resolve(self, weeks: u32) -> AppResult<DateRange> {
        match self {
            Self::Start { date } => DateRange::from_start(date, weeks),
            Self::End { date } => DateRange::from_end(date, weeks),
            Self::Range { start, end } => {
                let range = DateRange::new(start, end);
                if range.weeks == i64::from(weeks) {
                    Ok(range)
                } else {
                    debug!(
                        %start,
                        %end,
                        range_weeks = range.weeks,
                        plan_weeks = weeks,
                        "Date range disagrees with plan length; recomputing end date"
                    );
                    DateRange::from_start(start, weeks)
                }
            }
        }
    }
}

/// Attach calendar dates to every week and run of a plan
///
/// Week `i` (0-based) starts at `start + 7i`; each run is dated on the first
/// day of its week window whose weekday matches the run's `day_of_week`. The
/// number of weeks and the workout structure are unchanged.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if any week or run date is out of range
pub fn assign_dates_to_plan(
    mut plan: TrainingPlanData,
    anchor: DateAnchor,
) -> AppResult<TrainingPlanData> {
    let range = anchor.resolve(plan.weeks)?;
    let start_weekday = range.start_date.weekday().num_days_from_sunday();

    for (index, week) in plan.schedule.iter_mut().enumerate() {
        let offset = u32::try_from(index)
            .map_err(|_| AppError::invalid_input("Plan has too many weeks to schedule"))?;
        let week_start = adjust_end_date(range.start_date, offset)?;
        week.start_date = Some(week_start);

        for run in &mut week.runs {
            let days_in = (u32::from(run.day_of_week) + 7 - start_weekday) % 7;
            let run_date = week_start
                .checked_add_days(Days::new(u64::from(days_in)))
                .ok_or_else(|| {
                    AppError::invalid_input(format!(
                        "{week_start} + {days_in} days is out of range"
                    ))
                })?;
            run.date = Some(run_date);
        }
    }

    plan.start_date = Some(range.start_date);
    plan.end_date = Some(range.end_date);
    Ok(plan)
}
