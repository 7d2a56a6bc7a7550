// ABOUTME: Typed duration value with a single parse/format boundary for pace and time text
// ABOUTME: Parses `ss`, `mm:ss`, `h:mm:ss` into whole seconds and formats them back zero-padded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Duration Codec
//!
//! Every pace ("7:30" per mile) and elapsed time ("1:45:00") that enters the
//! engine goes through [`Duration::parse`], and every one that leaves it goes
//! through [`Duration::format`]. Validation happens once, on construction.
//!
//! A bare integer is ambiguous: as a pace it means whole **minutes**
//! (`"8"` is 8:00/mile), as an elapsed time it means whole **seconds**.
//! Callers pick the interpretation through [`DurationKind`].

use crate::constants::duration_bounds::{
    MAX_ELAPSED_HOURS, MAX_MINUTES, MAX_PACE_HOURS, MAX_SECONDS,
};
use crate::constants::units::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::errors::{AppError, AppResult};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Accepted shapes: `ss`, `mm:ss`, `h:mm:ss` (one or two leading digits)
static DURATION_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}(:\d{2}){0,2}$").ok());

/// How a duration string should be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationKind {
    /// Pace per distance unit; a bare integer is whole minutes, hours capped at 10
    Pace,
    /// Elapsed time; a bare integer is whole seconds, hours capped at 23
    Elapsed,
}

impl DurationKind {
    const fn max_hours(self) -> u32 {
        match self {
            Self::Pace => MAX_PACE_HOURS,
            Self::Elapsed => MAX_ELAPSED_HOURS,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Pace => "pace",
            Self::Elapsed => "time",
        }
    }
}

/// Non-negative whole number of seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration(u32);

impl Duration {
    /// Zero seconds
    pub const ZERO: Self = Self(0);

    /// Create from whole seconds
    #[must_use]
    pub const fn from_secs(secs: u32) -> Self {
        Self(secs)
    }

    /// Create from fractional seconds, rounding to the nearest second
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` for negative, non-finite or overflowing values
    pub fn from_secs_f64(secs: f64) -> AppResult<Self> {
        if !secs.is_finite() || secs < 0.0 {
            return Err(AppError::invalid_input(format!(
                "Duration must be a non-negative number of seconds, got {secs}"
            )));
        }
        let rounded = secs.round();
        if rounded > f64::from(u32::MAX) {
            return Err(AppError::invalid_input(format!(
                "Duration of {secs} seconds is too large"
            )));
        }
        Ok(Self(rounded as u32))
    }

    /// Whole seconds
    #[must_use]
    pub const fn as_secs(self) -> u32 {
        self.0
    }

    /// Seconds as a float, for arithmetic in the models
    #[must_use]
    pub fn as_secs_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Hours component
    #[must_use]
    pub const fn hours(self) -> u32 {
        self.0 / SECONDS_PER_HOUR
    }

    /// Minutes component (0-59)
    #[must_use]
    pub const fn minutes(self) -> u32 {
        (self.0 % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE
    }

    /// Seconds component (0-59)
    #[must_use]
    pub const fn seconds(self) -> u32 {
        self.0 % SECONDS_PER_MINUTE
    }

    /// Parse pace or time text
    ///
    /// # Errors
    ///
    /// - `AppError::InvalidFormat` if the text does not match `ss`, `mm:ss` or `h:mm:ss`
    /// - `AppError::InvalidPaceRange` if a component is outside its accepted range
    pub fn parse(text: &str, kind: DurationKind) -> AppResult<Self> {
        let trimmed = text.trim();
        let matches = DURATION_PATTERN
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(trimmed));
        if !matches {
            return Err(AppError::invalid_format(format!(
                "Invalid {} '{trimmed}': expected mm:ss or h:mm:ss",
                kind.label()
            ))
            .with_details(serde_json::json!({ "input": trimmed })));
        }

        let components = trimmed
            .split(':')
            .map(|part| {
                part.parse::<u32>().map_err(|_| {
                    AppError::invalid_format(format!(
                        "Invalid {} '{trimmed}': '{part}' is not a number",
                        kind.label()
                    ))
                })
            })
            .collect::<AppResult<Vec<u32>>>()?;

        let (hours, minutes, seconds) = match components.as_slice() {
            [value] => match kind {
                DurationKind::Pace => (0, *value, 0),
                DurationKind::Elapsed => (0, 0, *value),
            },
            [minutes, seconds] => (0, *minutes, *seconds),
            [hours, minutes, seconds] => (*hours, *minutes, *seconds),
            _ => {
                return Err(AppError::invalid_format(format!(
                    "Invalid {} '{trimmed}'",
                    kind.label()
                )))
            }
        };

        Self::check_component(trimmed, kind, "seconds", seconds, MAX_SECONDS)?;
        Self::check_component(trimmed, kind, "minutes", minutes, MAX_MINUTES)?;
        Self::check_component(trimmed, kind, "hours", hours, kind.max_hours())?;

        Ok(Self(
            hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE + seconds,
        ))
    }

    fn check_component(
        input: &str,
        kind: DurationKind,
        name: &str,
        value: u32,
        max: u32,
    ) -> AppResult<()> {
        if value > max {
            return Err(AppError::invalid_pace_range(format!(
                "Invalid {} '{input}': {name} must be between 0 and {max}, got {value}",
                kind.label()
            ))
            .with_details(serde_json::json!({
                "input": input,
                "component": name,
                "value": value,
                "max": max,
            })));
        }
        Ok(())
    }

    /// Parse pace text (bare integer = whole minutes)
    ///
    /// # Errors
    ///
    /// See [`Duration::parse`]
    pub fn parse_pace(text: &str) -> AppResult<Self> {
        Self::parse(text, DurationKind::Pace)
    }

    /// Parse elapsed-time text (bare integer = whole seconds)
    ///
    /// # Errors
    ///
    /// See [`Duration::parse`]
    pub fn parse_elapsed(text: &str) -> AppResult<Self> {
        Self::parse(text, DurationKind::Elapsed)
    }

    /// Format as `mm:ss`, or `hh:mm:ss` when hours are present or `long_form` is requested
    #[must_use]
    pub fn format(self, long_form: bool) -> String {
        let hours = self.hours();
        if hours > 0 || long_form {
            format!("{hours:02}:{:02}:{:02}", self.minutes(), self.seconds())
        } else {
            format!("{:02}:{:02}", self.minutes(), self.seconds())
        }
    }

    /// Pace that covers `distance` units in this total time
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the distance is not positive
    pub fn per_distance(self, distance: f64) -> AppResult<Self> {
        if !distance.is_finite() || distance <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Race distance must be positive, got {distance}"
            )));
        }
        Self::from_secs_f64(self.as_secs_f64() / distance)
    }

    /// Total time to cover `distance` units at this pace
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the distance is negative or non-finite
    pub fn total_for_distance(self, distance: f64) -> AppResult<Self> {
        Self::from_secs_f64(self.as_secs_f64() * distance)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(false))
    }
}

impl FromStr for Duration {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_elapsed(s)
    }
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Wire representations accepted when deserializing a [`Duration`]
#[derive(Deserialize)]
#[serde(untagged)]
enum DurationRepr {
    Text(String),
    Seconds(u32),
}

impl DurationRepr {
    fn into_duration<E: serde::de::Error>(self, kind: DurationKind) -> Result<Duration, E> {
        match self {
            Self::Text(text) => Duration::parse(&text, kind).map_err(E::custom),
            Self::Seconds(secs) => Ok(Duration(secs)),
        }
    }
}

/// Deserializes as elapsed time; pace fields use [`deserialize_pace`]
impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        DurationRepr::deserialize(deserializer)?.into_duration(DurationKind::Elapsed)
    }
}

/// Serde helper for pace fields: bare integers are whole minutes
///
/// Use with `#[serde(deserialize_with = "maratron_core::duration::deserialize_pace")]`.
/// Integer JSON values are still taken as seconds, matching serialization.
///
/// # Errors
///
/// Returns a deserialization error for malformed or out-of-range pace text
pub fn deserialize_pace<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    DurationRepr::deserialize(deserializer)?.into_duration(DurationKind::Pace)
}

/// Optional form of [`deserialize_pace`]
///
/// # Errors
///
/// Returns a deserialization error for malformed or out-of-range pace text
pub fn deserialize_optional_pace<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Duration>, D::Error> {
    Option::<DurationRepr>::deserialize(deserializer)?
        .map(|repr| repr.into_duration(DurationKind::Pace))
        .transpose()
}

/// Parse elapsed-time text into whole seconds
///
/// # Errors
///
/// See [`Duration::parse`]
pub fn parse_duration(text: &str) -> AppResult<u32> {
    Duration::parse_elapsed(text).map(Duration::as_secs)
}

/// Parse pace text into whole seconds per distance unit
///
/// # Errors
///
/// See [`Duration::parse`]
pub fn parse_pace(text: &str) -> AppResult<u32> {
    Duration::parse_pace(text).map(Duration::as_secs)
}

/// Format whole seconds as `mm:ss` / `hh:mm:ss`
#[must_use]
pub fn format_duration(seconds: u32, long_form: bool) -> String {
    Duration::from_secs(seconds).format(long_form)
}
