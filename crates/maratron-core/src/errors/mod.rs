// ABOUTME: Unified error types and error codes for the training plan engine
// ABOUTME: Defines AppError, ErrorCode, the serializable ErrorResponse and zone-ordering errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every failure surfaced by the engine is a coded `AppError`. Low-level
//! components (duration codec, VDOT model) raise them and they propagate
//! unchanged through plan generation: a malformed input makes the whole plan
//! meaningless, so nothing is retried or defaulted.
//!
//! Advisory outcomes (plan-length warnings, infeasible goals) are *not*
//! errors; they are modeled as tagged result values by the components that
//! produce them.

/// Zone-ordering validation errors
pub mod running;

pub use running::{RunningValidationError, ZoneViolation};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Input validation (3000-3999)
    /// Non-physical numeric input (zero/negative distance or time)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Malformed duration or pace text
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// Duration component outside the accepted numeric bounds
    #[serde(rename = "INVALID_PACE_RANGE")]
    InvalidPaceRange = 3003,

    // Zone ordering (3100-3199)
    /// Tempo pace is not faster than easy pace
    #[serde(rename = "INVALID_TEMPO_PACE")]
    InvalidTempoPace = 3100,
    /// Tempo pace is not faster than marathon pace
    #[serde(rename = "INVALID_TEMPO_MARATHON_RELATIONSHIP")]
    InvalidTempoMarathonRelationship = 3101,
    /// Interval pace is not faster than tempo pace
    #[serde(rename = "INVALID_INTERVAL_PACE")]
    InvalidIntervalPace = 3102,

    // Configuration (6000-6999)
    /// Configuration is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Numerical routine failed to converge or produced a non-finite value
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Data serialization/deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The pace or time format is invalid",
            Self::InvalidPaceRange => "The pace or time is outside the accepted range",
            Self::InvalidTempoPace => "Tempo pace must be faster than easy pace",
            Self::InvalidTempoMarathonRelationship => {
                "Tempo pace must be faster than marathon pace"
            }
            Self::InvalidIntervalPace => "Interval pace must be faster than tempo pace",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal calculation error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether the error was caused by the caller's input (re-prompt instead of report)
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        !matches!(
            self,
            Self::ConfigInvalid | Self::InternalError | Self::SerializationError
        )
    }
}

/// Unified error type for the engine
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional structured context
    pub details: serde_json::Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
            source: None,
        }
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Non-physical numeric input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Malformed duration/pace text
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Duration component out of range
    pub fn invalid_pace_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidPaceRange, message)
    }

    /// Invalid configuration
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal calculation error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serializable error payload handed to the calling UI/API layer
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error body
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Structured context (remediation hints, offending values)
    #[serde(skip_serializing_if = "serde_json::Value::is_null", default)]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                details: error.details,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_classification() {
        assert!(ErrorCode::InvalidFormat.is_user_error());
        assert!(ErrorCode::InvalidTempoPace.is_user_error());
        assert!(!ErrorCode::InternalError.is_user_error());
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::invalid_format("bad pace '7:5'")
            .with_details(serde_json::json!({ "input": "7:5" }));
        let response = ErrorResponse::from(error);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("INVALID_FORMAT"));
        assert!(json.contains("7:5"));
    }

    #[test]
    fn test_display_includes_description() {
        let error = AppError::invalid_input("Distance must be positive");
        assert_eq!(
            error.to_string(),
            "The provided input is invalid: Distance must be positive"
        );
    }
}
