//! Error types for shiftcal.

use thiserror::Error;

/// Errors that can occur while turning a shift plan into a calendar.
#[derive(Error, Debug)]
pub enum ShiftCalError {
    #[error("Shift '{code}' is not all-day but has no {field}")]
    MissingTimeField { code: String, field: &'static str },

    #[error("Shift '{code}' has malformed {field} '{value}'. Expected HH:MM")]
    MalformedTimeField {
        code: String,
        field: &'static str,
        value: String,
    },

    #[error("Invalid date format '{0}'. Expected YYYY-MM-DD")]
    InvalidDateFormat(String),

    #[error("No shift codes found in input")]
    EmptyInput,

    #[error("Date out of range after {0}")]
    DateOutOfRange(chrono::NaiveDate),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for shiftcal operations.
pub type ShiftCalResult<T> = Result<T, ShiftCalError>;
