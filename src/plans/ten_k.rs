// ABOUTME: 10K plan template
// ABOUTME: One-week taper with alternating threshold and interval work
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::generator::{PlanTemplate, RaceProfile};
use maratron_core::RaceType;

const PROFILE: RaceProfile = RaceProfile {
    race_type: RaceType::TenK,
    taper_weeks: 1,
    long_run_miles: [(4.0, 8.0), (5.0, 10.0), (6.0, 12.0)],
    mid_run_ratio: 0.5,
    min_mid_run_miles: 2.5,
};

/// 10K training plan
#[derive(Debug, Clone, Copy, Default)]
pub struct TenKPlan;

impl PlanTemplate for TenKPlan {
    fn profile(&self) -> &RaceProfile {
        &PROFILE
    }
}
