// ABOUTME: Zone-ordering validation errors raised for degenerate VDOT inputs
// ABOUTME: Carries a coded violation, the offending paces and an actionable remediation hint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Running Validation Errors
//!
//! Raised when a set of pace zones violates the physiological ordering
//! `interval < tempo < marathon < easy`. These are guards against degenerate
//! VDOT inputs (for example one derived from an unrealistic race time), so
//! every error carries a hint telling the runner how to fix the input.

use super::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hint attached to every zone-ordering violation
pub const REMEDIATION_HINT: &str =
    "Please verify your race time or use a more recent race result to recalculate your VDOT.";

/// Which ordering relationship was violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZoneViolation {
    /// Tempo pace is not faster than easy pace
    InvalidTempoPace,
    /// Tempo pace is not faster than marathon pace
    InvalidTempoMarathonRelationship,
    /// Interval pace is not faster than tempo pace
    InvalidIntervalPace,
}

impl ZoneViolation {
    /// Equivalent engine-wide error code
    #[must_use]
    pub const fn error_code(self) -> ErrorCode {
        match self {
            Self::InvalidTempoPace => ErrorCode::InvalidTempoPace,
            Self::InvalidTempoMarathonRelationship => ErrorCode::InvalidTempoMarathonRelationship,
            Self::InvalidIntervalPace => ErrorCode::InvalidIntervalPace,
        }
    }

    /// Stable string code (`INVALID_TEMPO_PACE`, ...)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidTempoPace => "INVALID_TEMPO_PACE",
            Self::InvalidTempoMarathonRelationship => "INVALID_TEMPO_MARATHON_RELATIONSHIP",
            Self::InvalidIntervalPace => "INVALID_INTERVAL_PACE",
        }
    }
}

/// A zone-ordering violation for a given VDOT
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{message} {hint}")]
pub struct RunningValidationError {
    /// Violated relationship
    pub code: ZoneViolation,
    /// What went wrong, quoting the offending paces
    pub message: String,
    /// How to fix the input
    pub hint: String,
    /// VDOT the zones were derived from
    pub vdot: f64,
}

impl RunningValidationError {
    /// Create a violation with the standard remediation hint
    pub fn new(code: ZoneViolation, message: impl Into<String>, vdot: f64) -> Self {
        Self {
            code,
            message: message.into(),
            hint: REMEDIATION_HINT.to_owned(),
            vdot,
        }
    }
}

impl From<RunningValidationError> for AppError {
    fn from(error: RunningValidationError) -> Self {
        let details = serde_json::json!({
            "code": error.code.as_str(),
            "hint": error.hint,
            "vdot": error.vdot,
        });
        Self::new(error.code.error_code(), error.to_string()).with_details(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_converts_to_coded_app_error() {
        let error = RunningValidationError::new(
            ZoneViolation::InvalidIntervalPace,
            "Interval pace 07:30 must be faster than tempo pace 07:10.",
            28.0,
        );
        let app_error = AppError::from(error);

        assert_eq!(app_error.code, ErrorCode::InvalidIntervalPace);
        assert!(app_error.message.contains("more recent race result"));
        assert_eq!(app_error.details["code"], "INVALID_INTERVAL_PACE");
    }

    #[test]
    fn test_violation_serializes_screaming_case() {
        let json = serde_json::to_string(&ZoneViolation::InvalidTempoMarathonRelationship).unwrap();
        assert_eq!(json, "\"INVALID_TEMPO_MARATHON_RELATIONSHIP\"");
    }
}
