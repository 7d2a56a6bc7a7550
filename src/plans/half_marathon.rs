// ABOUTME: Half marathon plan template
// ABOUTME: Two-week taper and marathon-paced long runs during the peak phase
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::generator::{PlanTemplate, RaceProfile};
use super::Phase;
use maratron_core::RaceType;
use maratron_intelligence::PaceZone;

const PROFILE: RaceProfile = RaceProfile {
    race_type: RaceType::Half,
    taper_weeks: 2,
    long_run_miles: [(5.0, 12.0), (6.0, 13.0), (8.0, 15.0)],
    mid_run_ratio: 0.45,
    min_mid_run_miles: 3.0,
};

/// Half marathon training plan
#[derive(Debug, Clone, Copy, Default)]
pub struct HalfMarathonPlan;

impl PlanTemplate for HalfMarathonPlan {
    fn profile(&self) -> &RaceProfile {
        &PROFILE
    }

    fn long_run_zone(&self, phase: Phase) -> PaceZone {
        if phase == Phase::Peak {
            PaceZone::Marathon
        } else {
            PaceZone::Easy
        }
    }
}
