// ABOUTME: Jack Daniels / Jimmy Gilbert VDOT model: race performance to VDOT and VDOT to pace
// ABOUTME: Closed-form inversion for fixed-intensity zones, bisection for equivalent race times
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # VDOT Model
//!
//! ```text
//! v      = distance / minutes                                   (m/min)
//! VO2    = -4.60 + 0.182258·v + 0.000104·v²
//! %max   = 0.8 + 0.1894393·e^(-0.012778·t) + 0.2989558·e^(-0.1932605·t)
//! VDOT   = VO2 / %max
//! ```
//!
//! Zones with a fixed intensity (Easy, Tempo, Interval, Repetition) invert the
//! VO2 polynomial directly. Marathon and Race paces are equivalent-performance
//! paces, so they come from the race time that yields the same VDOT over the
//! distance, found by bisection.
//!
//! # Scientific References
//!
//! - Daniels, J. & Gilbert, J. (1979). Oxygen Power: Performance Tables for Distance Runners
//! - Daniels, J. (2013). "Daniels' Running Formula" (3rd ed.). Human Kinetics.

use crate::config::{IntelligenceConfig, TrainingZonesConfig};
use crate::pace_zones::PaceZone;
use crate::physiological_constants::daniels::{
    PERCENT_MAX_BASE, PERCENT_MAX_FAST_AMPLITUDE, PERCENT_MAX_FAST_RATE,
    PERCENT_MAX_SLOW_AMPLITUDE, PERCENT_MAX_SLOW_RATE, VO2_INTERCEPT, VO2_LINEAR, VO2_QUADRATIC,
};
use crate::physiological_constants::model_limits::{
    MAX_BISECTION_ITERATIONS, MAX_RACE_MINUTES, MIN_RACE_MINUTES, RACE_TIME_TOLERANCE_SECONDS,
};
use maratron_core::constants::race_distances::DISTANCE_MARATHON;
use maratron_core::duration::deserialize_pace;
use maratron_core::errors::{AppError, AppResult};
use maratron_core::{DistanceUnit, Duration, RaceType};
use serde::{Deserialize, Serialize};

const SECONDS_PER_MINUTE: f64 = 60.0;

/// Calculate VDOT from a race performance
///
/// Returns the unrounded value; callers that persist it use [`round_vdot`].
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if distance or time is non-positive or non-finite
///
/// # Example
///
/// ```rust
/// use maratron_intelligence::vdot_from_performance;
///
/// let vdot = vdot_from_performance(5000.0, 1200.0).unwrap(); // 5K in 20:00
/// assert!((vdot - 49.8).abs() < 0.1);
/// ```
pub fn vdot_from_performance(distance_meters: f64, time_seconds: f64) -> AppResult<f64> {
    if !distance_meters.is_finite() || distance_meters <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Distance must be positive, got {distance_meters}"
        )));
    }
    if !time_seconds.is_finite() || time_seconds <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Time must be positive, got {time_seconds}"
        )));
    }

    Ok(vdot_at(distance_meters, time_seconds / SECONDS_PER_MINUTE))
}

/// VDOT for validated inputs, time in minutes
fn vdot_at(distance_meters: f64, minutes: f64) -> f64 {
    let velocity = distance_meters / minutes;
    vo2_at_velocity(velocity) / percent_max(minutes)
}

/// Oxygen cost (ml/kg/min) of running at `velocity` meters per minute
fn vo2_at_velocity(velocity: f64) -> f64 {
    VO2_QUADRATIC.mul_add(velocity * velocity, VO2_LINEAR.mul_add(velocity, VO2_INTERCEPT))
}

/// Fraction of VO2max sustainable for a race lasting `minutes`
fn percent_max(minutes: f64) -> f64 {
    PERCENT_MAX_FAST_AMPLITUDE.mul_add(
        (-PERCENT_MAX_FAST_RATE * minutes).exp(),
        PERCENT_MAX_SLOW_AMPLITUDE.mul_add((-PERCENT_MAX_SLOW_RATE * minutes).exp(), PERCENT_MAX_BASE),
    )
}

/// Velocity (m/min) whose oxygen cost equals `vo2`: positive root of the VO2 polynomial
fn velocity_for_vo2(vo2: f64) -> AppResult<f64> {
    let discriminant =
        VO2_LINEAR.mul_add(VO2_LINEAR, -4.0 * VO2_QUADRATIC * (VO2_INTERCEPT - vo2));
    if discriminant < 0.0 {
        return Err(AppError::internal(format!(
            "No running velocity yields VO2 {vo2:.2}"
        )));
    }
    let velocity = (discriminant.sqrt() - VO2_LINEAR) / (2.0 * VO2_QUADRATIC);
    if !velocity.is_finite() || velocity <= 0.0 {
        return Err(AppError::internal(format!(
            "VO2 {vo2:.2} maps to a non-positive velocity"
        )));
    }
    Ok(velocity)
}

fn ensure_vdot(vdot: f64) -> AppResult<()> {
    if !vdot.is_finite() || vdot <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "VDOT must be positive, got {vdot}"
        )));
    }
    Ok(())
}

/// Equivalent race time in seconds (unrounded) for a VDOT over a distance
///
/// VDOT falls as race time grows, so a bisection on minutes converges to the
/// unique time with the requested VDOT.
fn race_seconds_for_vdot(vdot: f64, distance_meters: f64) -> AppResult<f64> {
    ensure_vdot(vdot)?;
    if !distance_meters.is_finite() || distance_meters <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Race distance must be positive, got {distance_meters}"
        )));
    }

    let mut fast = MIN_RACE_MINUTES;
    let mut slow = MAX_RACE_MINUTES;
    if vdot_at(distance_meters, fast) < vdot || vdot_at(distance_meters, slow) > vdot {
        return Err(AppError::invalid_input(format!(
            "VDOT {vdot:.1} has no equivalent time over {distance_meters} m"
        )));
    }

    for _ in 0..MAX_BISECTION_ITERATIONS {
        let mid = 0.5 * (fast + slow);
        if vdot_at(distance_meters, mid) > vdot {
            fast = mid;
        } else {
            slow = mid;
        }
        if (slow - fast) * SECONDS_PER_MINUTE < RACE_TIME_TOLERANCE_SECONDS {
            break;
        }
    }

    Ok(0.5 * (fast + slow) * SECONDS_PER_MINUTE)
}

/// Predict the equivalent race time for a VDOT over a distance
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if the VDOT or distance is non-positive or
/// the VDOT has no equivalent time within the model's range
pub fn predict_race_time(vdot: f64, distance_meters: f64) -> AppResult<Duration> {
    Duration::from_secs_f64(race_seconds_for_vdot(vdot, distance_meters)?)
}

/// Unrounded pace in seconds per `unit` for a zone, using explicit zone intensities
///
/// # Errors
///
/// Returns `AppError::InvalidInput` for a non-positive VDOT, or a non-positive
/// `race_meters` when the Race zone is requested
pub fn pace_seconds_for_vdot(
    race_meters: f64,
    vdot: f64,
    zone: PaceZone,
    unit: DistanceUnit,
    zones: &TrainingZonesConfig,
) -> AppResult<f64> {
    ensure_vdot(vdot)?;

    let fixed_intensity = match zone {
        PaceZone::Easy => Some(zones.easy_percent_vo2max),
        PaceZone::Tempo => Some(zones.tempo_percent_vo2max),
        PaceZone::Interval => Some(zones.interval_percent_vo2max),
        PaceZone::Repetition => Some(zones.repetition_percent_vo2max),
        PaceZone::Marathon | PaceZone::Race => None,
    };

    if let Some(fraction) = fixed_intensity {
        let velocity = velocity_for_vo2(vdot * fraction)?;
        return Ok(unit.meters() / velocity * SECONDS_PER_MINUTE);
    }

    let distance = if zone == PaceZone::Marathon {
        DISTANCE_MARATHON
    } else {
        race_meters
    };
    let seconds = race_seconds_for_vdot(vdot, distance)?;
    Ok(seconds / unit.from_meters(distance))
}

/// Predict the training pace per `unit` for a VDOT and zone
///
/// Uses the zone intensities of [`IntelligenceConfig::global`].
///
/// # Errors
///
/// See [`pace_seconds_for_vdot`]
pub fn pace_for_vdot(
    race_meters: f64,
    vdot: f64,
    zone: PaceZone,
    unit: DistanceUnit,
) -> AppResult<Duration> {
    let zones = &IntelligenceConfig::global().training_zones;
    Duration::from_secs_f64(pace_seconds_for_vdot(race_meters, vdot, zone, unit, zones)?)
}

/// Round a VDOT to the integer value callers persist
#[must_use]
pub fn round_vdot(vdot: f64) -> f64 {
    vdot.round()
}

/// Equivalent race performance for a VDOT
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RacePrediction {
    /// Race distance
    pub race_type: RaceType,
    /// Predicted finish time
    pub time: Duration,
    /// Average pace per `unit`
    #[serde(deserialize_with = "deserialize_pace")]
    pub pace: Duration,
    /// Unit of `pace`
    pub unit: DistanceUnit,
}

/// Equivalent finish times for every supported race distance
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if the VDOT is outside the model range
pub fn race_predictions(vdot: f64, unit: DistanceUnit) -> AppResult<Vec<RacePrediction>> {
    RaceType::ALL
        .iter()
        .map(|&race_type| {
            let seconds = race_seconds_for_vdot(vdot, race_type.meters())?;
            Ok(RacePrediction {
                race_type,
                time: Duration::from_secs_f64(seconds)?,
                pace: Duration::from_secs_f64(seconds / race_type.distance_in(unit))?,
                unit,
            })
        })
        .collect()
}
