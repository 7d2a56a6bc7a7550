// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for maratron-cli
// ABOUTME: Fitness commands (VDOT, zones, goals) and planning commands (plans, calendar)

pub mod fitness;
pub mod planning;

use maratron_engine::errors::{AppError, AppResult};
use maratron_engine::RaceType;

/// Race distance in meters from a race name (`5k`, `half`, ...) or a number of meters
pub fn parse_distance_meters(text: &str) -> AppResult<f64> {
    if let Ok(race_type) = text.parse::<RaceType>() {
        return Ok(race_type.meters());
    }
    let meters: f64 = text.trim().parse().map_err(|_| {
        AppError::invalid_input(format!(
            "Unknown distance '{text}': use 5k, 10k, half, full or a number of meters"
        ))
    })?;
    Ok(meters)
}
