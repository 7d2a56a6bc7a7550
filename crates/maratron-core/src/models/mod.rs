// ABOUTME: Shared domain enums for race planning: distance units, race types, training levels
// ABOUTME: Provides parsing, display and unit conversion implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Small value types shared by every engine component. All of them serialize
//! to the lowercase identifiers used by the calling application
//! (`"miles"`, `"half"`, `"intermediate"`, ...).

use crate::constants::race_distances::{
    DISTANCE_10K, DISTANCE_5K, DISTANCE_HALF_MARATHON, DISTANCE_MARATHON,
};
use crate::constants::units::{METERS_PER_KILOMETER, METERS_PER_MILE};
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit that paces and planned distances are expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    /// Statute miles
    #[default]
    Miles,
    /// Kilometers
    Kilometers,
}

impl DistanceUnit {
    /// Meters in one unit
    #[must_use]
    pub const fn meters(self) -> f64 {
        match self {
            Self::Miles => METERS_PER_MILE,
            Self::Kilometers => METERS_PER_KILOMETER,
        }
    }

    /// Convert meters to this unit
    #[must_use]
    pub fn from_meters(self, meters: f64) -> f64 {
        meters / self.meters()
    }

    /// Convert a distance in this unit to meters
    #[must_use]
    pub fn to_meters(self, distance: f64) -> f64 {
        distance * self.meters()
    }

    /// Short label for pace display (`/mi`, `/km`)
    #[must_use]
    pub const fn pace_suffix(self) -> &'static str {
        match self {
            Self::Miles => "/mi",
            Self::Kilometers => "/km",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Miles => write!(f, "miles"),
            Self::Kilometers => write!(f, "kilometers"),
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mi" | "mile" | "miles" => Ok(Self::Miles),
            "km" | "kms" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
                Ok(Self::Kilometers)
            }
            other => Err(AppError::invalid_input(format!(
                "Unknown distance unit: '{other}'. Valid options: miles, kilometers"
            ))),
        }
    }
}

/// Target race distance of a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RaceType {
    /// 5 kilometers
    #[serde(rename = "5k")]
    FiveK,
    /// 10 kilometers
    #[serde(rename = "10k")]
    TenK,
    /// Half marathon
    #[serde(rename = "half")]
    Half,
    /// Marathon
    #[serde(rename = "full")]
    Full,
}

impl RaceType {
    /// All supported race types, shortest first
    pub const ALL: [Self; 4] = [Self::FiveK, Self::TenK, Self::Half, Self::Full];

    /// Race distance in meters
    #[must_use]
    pub const fn meters(self) -> f64 {
        match self {
            Self::FiveK => DISTANCE_5K,
            Self::TenK => DISTANCE_10K,
            Self::Half => DISTANCE_HALF_MARATHON,
            Self::Full => DISTANCE_MARATHON,
        }
    }

    /// Race distance in the given unit
    #[must_use]
    pub fn distance_in(self, unit: DistanceUnit) -> f64 {
        unit.from_meters(self.meters())
    }

    /// Stable identifier (`5k`, `10k`, `half`, `full`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FiveK => "5k",
            Self::TenK => "10k",
            Self::Half => "half",
            Self::Full => "full",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::FiveK => "5K",
            Self::TenK => "10K",
            Self::Half => "Half Marathon",
            Self::Full => "Marathon",
        }
    }
}

impl fmt::Display for RaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RaceType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "5k" => Ok(Self::FiveK),
            "10k" => Ok(Self::TenK),
            "half" | "half-marathon" | "half_marathon" => Ok(Self::Half),
            "full" | "marathon" => Ok(Self::Full),
            other => Err(AppError::invalid_input(format!(
                "Unknown race type: '{other}'. Valid options: 5k, 10k, half, full"
            ))),
        }
    }
}

/// Runner experience level; controls how many quality sessions a plan carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrainingLevel {
    /// New to structured training
    Beginner,
    /// Comfortable with weekly quality sessions
    #[default]
    Intermediate,
    /// High-volume runner handling two quality sessions per week
    Advanced,
}

impl TrainingLevel {
    /// Default runs per week for this level
    #[must_use]
    pub const fn default_runs_per_week(self) -> u8 {
        match self {
            Self::Beginner => 3,
            Self::Intermediate => 4,
            Self::Advanced => 5,
        }
    }
}

impl fmt::Display for TrainingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for TrainingLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(AppError::invalid_input(format!(
                "Unknown training level: '{other}'. Valid options: beginner, intermediate, advanced"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_race_type_serde_identifiers() {
        assert_eq!(serde_json::to_string(&RaceType::Half).unwrap(), "\"half\"");
        let parsed: RaceType = serde_json::from_str("\"5k\"").unwrap();
        assert_eq!(parsed, RaceType::FiveK);
    }

    #[test]
    fn test_marathon_in_miles() {
        let miles = RaceType::Full.distance_in(DistanceUnit::Miles);
        assert!((miles - 26.219).abs() < 0.001);
    }

    #[test]
    fn test_unit_parsing_is_lenient() {
        assert_eq!("KM".parse::<DistanceUnit>().unwrap(), DistanceUnit::Kilometers);
        assert!("furlongs".parse::<DistanceUnit>().is_err());
    }
}
