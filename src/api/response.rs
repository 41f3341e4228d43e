//! Response types for the rotation engine API.
//!
//! This module defines the projection response, the error response
//! structures and error handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::AssignmentEntry;

/// Response body for the `/project` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResponse {
    /// Unique identifier for this projection.
    pub projection_id: Uuid,
    /// Version of the engine that produced the schedule.
    pub engine_version: String,
    /// First projected day.
    pub start_date: NaiveDate,
    /// Last projected day (inclusive).
    pub end_date: NaiveDate,
    /// Every cell of the resulting schedule.
    pub assignments: Vec<AssignmentEntry>,
    /// Cells that were not in the seed; the rows a save has to add.
    pub generated: Vec<AssignmentEntry>,
    /// Time spent projecting, in microseconds.
    pub duration_us: u64,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::InvalidDateRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE_RANGE",
                    message,
                    "end_date must be on or after start_date",
                ),
            },
            EngineError::RangeTooLong { max, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "RANGE_TOO_LONG",
                    message,
                    format!("Split the request into spans of at most {} days", max),
                ),
            },
            EngineError::UnknownShiftCode { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_SHIFT_CODE",
                    message,
                    "Expected one of Jour, Nuit, 24h, Repos, Congé, Maladie",
                ),
            },
            EngineError::InvalidEmployee { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_EMPLOYEE", message),
            },
            EngineError::InvalidAbsence { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_ABSENCE", message),
            },
            EngineError::EmployeeNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("EMPLOYEE_NOT_FOUND", message),
            },
        }
    }
}
