//! Error types for timetable operations.

use thiserror::Error;

use crate::event::Event;

/// Errors that can occur when mutating the timetable or loading configuration.
#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("Hour {0} is outside working hours (9-16)")]
    HourOutOfRange(u32),

    #[error("Event overlaps {} existing event(s)", .conflicts.len())]
    Overlap { conflicts: Vec<Event> },

    #[error("No matching events found")]
    NoMatches,

    #[error("Selection {selection} is out of range (1-{count})")]
    SelectionOutOfRange { selection: usize, count: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for timetable operations.
pub type TimetableResult<T> = Result<T, TimetableError>;
