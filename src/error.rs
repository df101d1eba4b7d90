//! Error types for the Vacation Entitlement Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine and its input boundary can report.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Vacation Entitlement Engine.
///
/// Missing hire dates, over-consumption and the absence of a current period
/// are not errors; they degrade to empty or zeroed results instead.
///
/// # Example
///
/// ```
/// use vacation_engine::error::EngineError;
///
/// let error = EngineError::InvalidDate {
///     field: "start_date".to_string(),
///     value: "2024-13-01".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid date for 'start_date': '2024-13-01'");
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

    /// An entitlement table does not form a valid step function.
    #[error("Invalid entitlement table: {message}")]
    InvalidEntitlementTable {
        /// A description of the rule the table breaks.
        message: String,
    },

    /// A date value could not be read as a calendar date.
    #[error("Invalid date for '{field}': '{value}'")]
    InvalidDate {
        /// The field holding the date.
        field: String,
        /// The raw value that failed to parse.
        value: String,
    },

    /// A leave request record was rejected at the input boundary.
    #[error("Invalid leave request '{request_id}': {message}")]
    InvalidLeaveRequest {
        /// The ID of the offending request.
        request_id: String,
        /// A description of what made the request invalid.
        message: String,
    },

    /// A submitted request asks for more days than the current balance allows.
    #[error("Insufficient balance: requested {requested} days, {available} available")]
    InsufficientBalance {
        /// The number of days asked for.
        requested: u32,
        /// The number of days available in the current period.
        available: u32,
    },

    /// The request being edited is not part of the supplied history.
    #[error("Leave request not found: {request_id}")]
    RequestNotFound {
        /// The ID that was looked up.
        request_id: String,
    },

    /// Anniversary arithmetic left the supported calendar range.
    #[error("Date out of supported range after {date}")]
    DateOutOfRange {
        /// The last representable date before the overflow.
        date: NaiveDate,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
