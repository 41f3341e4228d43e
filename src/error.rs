//! Error types for the rotation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading a roster or
//! projecting a schedule.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the rotation engine.
///
/// # Example
///
/// ```
/// use rota_engine::error::EngineError;
///
/// let error = EngineError::UnknownShiftCode {
///     code: "Matin".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown shift code: Matin");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The requested date range ends before it starts.
    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidDateRange {
        /// First day of the range.
        start: NaiveDate,
        /// Last day of the range (inclusive).
        end: NaiveDate,
    },

    /// The requested date range covers more days than the station allows.
    #[error("Date range of {days} days exceeds the maximum of {max} days")]
    RangeTooLong {
        /// Number of days requested, both ends included.
        days: i64,
        /// Configured maximum.
        max: u32,
    },

    /// A shift label did not match any known shift code.
    #[error("Unknown shift code: {code}")]
    UnknownShiftCode {
        /// The label that failed to parse.
        code: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An absence range could not be applied.
    #[error("Invalid absence for employee '{employee_id}': {message}")]
    InvalidAbsence {
        /// The employee the absence was recorded for.
        employee_id: String,
        /// A description of what made the absence invalid.
        message: String,
    },

    /// No employee with the given id exists in the roster.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The requested employee id.
        id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
