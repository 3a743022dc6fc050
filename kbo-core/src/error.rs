//! Error types for the kbo-calendar pipeline.

use thiserror::Error;

/// Errors that can occur while building schedules and calendars.
///
/// Only `Config` and `Io` are meant to escape a whole run. The others are
/// raised at row, line or month scope and are counted by the caller.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Fetch failed for {year}.{month:02}: {reason}")]
    Fetch { year: i32, month: u32, reason: String },

    #[error("Could not decode schedule response for {year}.{month:02}: {reason}")]
    Decode { year: i32, month: u32, reason: String },

    #[error("Row parse error: {0}")]
    RowParse(String),

    #[error("Unknown team: {0}")]
    UnknownTeam(String),

    #[error("Line parse error: {0}")]
    LineParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for schedule operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
