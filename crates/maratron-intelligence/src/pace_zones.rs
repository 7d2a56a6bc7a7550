// ABOUTME: Training pace zones derived from VDOT and the validator for their physiological ordering
// ABOUTME: Rejects zone sets where interval < tempo < marathon < easy does not hold, never reorders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pace Zones
//!
//! For a fixed VDOT the zones are strictly ordered (lower seconds = faster):
//!
//! ```text
//! repetition < interval < tempo < marathon < easy
//! ```
//!
//! A violation only happens with degenerate inputs, for example a VDOT derived
//! from an unrealistic race time or paces typed by hand. The validator reports
//! it with a coded [`RunningValidationError`] and leaves the zones untouched.

use crate::algorithms::vdot::pace_seconds_for_vdot;
use crate::config::{IntelligenceConfig, TrainingZonesConfig};
use maratron_core::errors::{AppError, AppResult, RunningValidationError, ZoneViolation};
use maratron_core::duration::deserialize_pace;
use maratron_core::{DistanceUnit, Duration};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named training intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaceZone {
    /// Conversational aerobic running, also used for long runs
    Easy,
    /// Equivalent race pace over the marathon distance
    Marathon,
    /// Lactate threshold
    Tempo,
    /// VO2max intervals
    Interval,
    /// Short, fast repetitions for speed and economy
    Repetition,
    /// Equivalent race pace over the target race distance
    Race,
}

impl PaceZone {
    /// All zones in display order
    pub const ALL: [Self; 6] = [
        Self::Easy,
        Self::Marathon,
        Self::Race,
        Self::Tempo,
        Self::Interval,
        Self::Repetition,
    ];

    /// Stable identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Marathon => "marathon",
            Self::Tempo => "tempo",
            Self::Interval => "interval",
            Self::Repetition => "repetition",
            Self::Race => "race",
        }
    }
}

impl fmt::Display for PaceZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaceZone {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "e" => Ok(Self::Easy),
            "marathon" | "m" => Ok(Self::Marathon),
            "tempo" | "threshold" | "t" => Ok(Self::Tempo),
            "interval" | "i" => Ok(Self::Interval),
            "repetition" | "rep" | "r" => Ok(Self::Repetition),
            "race" => Ok(Self::Race),
            other => Err(AppError::invalid_input(format!(
                "Unknown pace zone: '{other}'. Valid options: easy, marathon, tempo, interval, repetition, race"
            ))),
        }
    }
}

/// Complete set of paces for one VDOT, in seconds per distance unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaceZones {
    /// Easy / long-run pace
    #[serde(deserialize_with = "deserialize_pace")]
    pub easy: Duration,
    /// Marathon pace
    #[serde(deserialize_with = "deserialize_pace")]
    pub marathon: Duration,
    /// Tempo pace
    #[serde(deserialize_with = "deserialize_pace")]
    pub tempo: Duration,
    /// Interval pace
    #[serde(deserialize_with = "deserialize_pace")]
    pub interval: Duration,
    /// Repetition pace
    #[serde(deserialize_with = "deserialize_pace")]
    pub repetition: Duration,
    /// Equivalent pace for the target race
    #[serde(deserialize_with = "deserialize_pace")]
    pub race: Duration,
}

impl PaceZones {
    /// Derive every zone from a VDOT using the global zone intensities
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` for a non-positive VDOT or race distance
    pub fn for_vdot(vdot: f64, race_meters: f64, unit: DistanceUnit) -> AppResult<Self> {
        Self::for_vdot_with_config(
            vdot,
            race_meters,
            unit,
            &IntelligenceConfig::global().training_zones,
        )
    }

    /// Derive every zone from a VDOT using explicit zone intensities
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` for a non-positive VDOT or race distance
    pub fn for_vdot_with_config(
        vdot: f64,
        race_meters: f64,
        unit: DistanceUnit,
        config: &TrainingZonesConfig,
    ) -> AppResult<Self> {
        let pace = |zone| {
            pace_seconds_for_vdot(race_meters, vdot, zone, unit, config)
                .and_then(Duration::from_secs_f64)
        };
        Ok(Self {
            easy: pace(PaceZone::Easy)?,
            marathon: pace(PaceZone::Marathon)?,
            tempo: pace(PaceZone::Tempo)?,
            interval: pace(PaceZone::Interval)?,
            repetition: pace(PaceZone::Repetition)?,
            race: pace(PaceZone::Race)?,
        })
    }

    /// Pace for a zone
    #[must_use]
    pub const fn pace(&self, zone: PaceZone) -> Duration {
        match zone {
            PaceZone::Easy => self.easy,
            PaceZone::Marathon => self.marathon,
            PaceZone::Tempo => self.tempo,
            PaceZone::Interval => self.interval,
            PaceZone::Repetition => self.repetition,
            PaceZone::Race => self.race,
        }
    }

    /// Check the physiological ordering of these zones
    ///
    /// # Errors
    ///
    /// Returns the first violated relationship
    pub fn validate(&self, vdot: f64) -> Result<(), RunningValidationError> {
        check_ordering(self.easy, self.marathon, self.tempo, self.interval, vdot)
    }
}

/// Pace text for the four ordered zones, as entered by a runner or caller
#[derive(Debug, Clone, Copy)]
pub struct PaceZoneInput<'a> {
    /// Easy pace (`mm:ss`)
    pub easy: &'a str,
    /// Marathon pace (`mm:ss`)
    pub marathon: &'a str,
    /// Tempo pace (`mm:ss`)
    pub tempo: &'a str,
    /// Interval pace (`mm:ss`)
    pub interval: &'a str,
}

/// Parse and validate a zone set for a VDOT
///
/// # Errors
///
/// - `AppError::InvalidFormat` / `InvalidPaceRange` for malformed pace text
/// - `INVALID_TEMPO_PACE`, `INVALID_TEMPO_MARATHON_RELATIONSHIP` or
///   `INVALID_INTERVAL_PACE` when the ordering does not hold
pub fn validate_zones(zones: &PaceZoneInput<'_>, vdot: f64) -> AppResult<()> {
    let easy = Duration::parse_pace(zones.easy)?;
    let marathon = Duration::parse_pace(zones.marathon)?;
    let tempo = Duration::parse_pace(zones.tempo)?;
    let interval = Duration::parse_pace(zones.interval)?;

    check_ordering(easy, marathon, tempo, interval, vdot).map_err(AppError::from)
}

fn check_ordering(
    easy: Duration,
    marathon: Duration,
    tempo: Duration,
    interval: Duration,
    vdot: f64,
) -> Result<(), RunningValidationError> {
    if tempo >= easy {
        return Err(RunningValidationError::new(
            ZoneViolation::InvalidTempoPace,
            format!("Tempo pace {tempo} must be faster than easy pace {easy} (VDOT {vdot:.1})."),
            vdot,
        ));
    }
    if tempo >= marathon {
        return Err(RunningValidationError::new(
            ZoneViolation::InvalidTempoMarathonRelationship,
            format!(
                "Tempo pace {tempo} must be faster than marathon pace {marathon} (VDOT {vdot:.1})."
            ),
            vdot,
        ));
    }
    if interval >= tempo {
        return Err(RunningValidationError::new(
            ZoneViolation::InvalidIntervalPace,
            format!(
                "Interval pace {interval} must be faster than tempo pace {tempo} (VDOT {vdot:.1})."
            ),
            vdot,
        ));
    }
    Ok(())
}
