// ABOUTME: Marathon plan template
// ABOUTME: Threshold-centred quality work, marathon-paced peak long runs and a two-week taper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Marathon template
//!
//! Peak-phase long runs use marathon pace, which the progressive zone builder
//! blends toward the runner's goal pace in the final weeks.

use super::generator::{PlanTemplate, RaceProfile};
use super::{Phase, RunType};
use maratron_core::RaceType;
use maratron_intelligence::PaceZone;

const PROFILE: RaceProfile = RaceProfile {
    race_type: RaceType::Full,
    taper_weeks: 2,
    long_run_miles: [(8.0, 20.0), (10.0, 20.0), (12.0, 22.0)],
    mid_run_ratio: 0.4,
    min_mid_run_miles: 4.0,
};

/// Marathon training plan
#[derive(Debug, Clone, Copy, Default)]
pub struct MarathonPlan;

impl PlanTemplate for MarathonPlan {
    fn profile(&self) -> &RaceProfile {
        &PROFILE
    }

    fn quality_sessions(&self, phase: Phase, _phase_week: u32, count: usize) -> Vec<RunType> {
        let rotation = match phase {
            Phase::Build => [RunType::Tempo, RunType::Interval],
            Phase::Base | Phase::Peak | Phase::Taper => [RunType::Tempo, RunType::Tempo],
        };
        rotation.into_iter().cycle().take(count).collect()
    }

    fn long_run_zone(&self, phase: Phase) -> PaceZone {
        if phase == Phase::Peak {
            PaceZone::Marathon
        } else {
            PaceZone::Easy
        }
    }
}
