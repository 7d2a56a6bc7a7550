// ABOUTME: 5K plan template
// ABOUTME: Short taper and interval-heavy quality work for speed at VO2max
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::generator::{PlanTemplate, RaceProfile};
use super::{Phase, RunType};
use maratron_core::RaceType;

const PROFILE: RaceProfile = RaceProfile {
    race_type: RaceType::FiveK,
    taper_weeks: 1,
    long_run_miles: [(3.0, 5.0), (4.0, 7.0), (5.0, 9.0)],
    mid_run_ratio: 0.5,
    min_mid_run_miles: 2.0,
};

/// 5K training plan
#[derive(Debug, Clone, Copy, Default)]
pub struct FiveKPlan;

impl PlanTemplate for FiveKPlan {
    fn profile(&self) -> &RaceProfile {
        &PROFILE
    }

    /// Intervals lead from Build onward; the taper week keeps one sharpening session
    fn quality_sessions(&self, phase: Phase, _phase_week: u32, count: usize) -> Vec<RunType> {
        let rotation = match phase {
            Phase::Base => [RunType::Tempo, RunType::Interval],
            Phase::Build | Phase::Peak | Phase::Taper => [RunType::Interval, RunType::Tempo],
        };
        rotation.into_iter().cycle().take(count).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taper_and_intervals_first() {
        assert_eq!(FiveKPlan.profile().taper_weeks, 1);
        assert_eq!(
            FiveKPlan.quality_sessions(Phase::Peak, 1, 2),
            vec![RunType::Interval, RunType::Tempo]
        );
    }
}
