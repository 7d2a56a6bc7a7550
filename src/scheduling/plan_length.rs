// ABOUTME: Plan length policy separating blocking lengths from advisory warnings
// ABOUTME: Produces a tagged Ok/Warning/Error result instead of raising errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Length Policy
//!
//! | Weeks   | Result                          |
//! |---------|---------------------------------|
//! | ≤ 0     | `Error`                         |
//! | 1-3     | `Warning` (too short)           |
//! | 4-30    | `Ok`                            |
//! | 31-52   | `Warning` (consider phasing)    |
//! | > 52    | `Error`                         |
//!
//! Only `Error` blocks plan generation.

use maratron_intelligence::config::{IntelligenceConfig, PlanLengthConfig};
use serde::{Deserialize, Serialize};

/// Result of checking a plan length
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PlanLengthValidation {
    /// Length is within the recommended band
    Ok {
        /// Checked length
        weeks: i64,
    },
    /// Length is accepted, but the runner should be told why it is unusual
    Warning {
        /// Checked length
        weeks: i64,
        /// Advice to surface
        message: String,
    },
    /// Length blocks generation
    Error {
        /// Checked length
        weeks: i64,
        /// Why it is rejected
        message: String,
    },
}

impl PlanLengthValidation {
    /// Whether a plan of this length may be generated
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !matches!(self, Self::Error { .. })
    }

    /// Warning or error text, if any
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Ok { .. } => None,
            Self::Warning { message, .. } | Self::Error { message, .. } => Some(message),
        }
    }
}

/// Plan length policy bound to configurable band edges
#[derive(Debug, Clone)]
pub struct PlanLengthPolicy {
    config: PlanLengthConfig,
}

impl Default for PlanLengthPolicy {
    fn default() -> Self {
        Self::new(IntelligenceConfig::global().plan_length.clone())
    }
}

impl PlanLengthPolicy {
    /// Create a policy with explicit band edges
    #[must_use]
    pub const fn new(config: PlanLengthConfig) -> Self {
        Self { config }
    }

    /// Classify a plan length
    #[must_use]
    pub fn validate(&self, weeks: i64) -> PlanLengthValidation {
        let config = &self.config;
        if weeks <= 0 {
            PlanLengthValidation::Error {
                weeks,
                message: "Plan length must be at least 1 week.".into(),
            }
        } else if weeks > config.max_weeks {
            PlanLengthValidation::Error {
                weeks,
                message: format!("Plan length cannot exceed {} weeks.", config.max_weeks),
            }
        } else if weeks < config.min_recommended_weeks {
            PlanLengthValidation::Warning {
                weeks,
                message: format!(
                    "A {weeks}-week plan is very short; at least {} weeks is recommended to build fitness safely.",
                    config.min_recommended_weeks
                ),
            }
        } else if weeks > config.max_recommended_weeks {
            PlanLengthValidation::Warning {
                weeks,
                message: format!(
                    "A {weeks}-week plan is long; consider phasing it into shorter training blocks."
                ),
            }
        } else {
            PlanLengthValidation::Ok { weeks }
        }
    }
}

/// Classify a plan length using the global configuration
#[must_use]
pub fn validate_plan_length(weeks: i64) -> PlanLengthValidation {
    PlanLengthPolicy::default().validate(weeks)
}
