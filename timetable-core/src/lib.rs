//! Core types for the timetable manager.
//!
//! This crate holds everything that does not touch the terminal:
//! - `Timetable`, the per-weekday event store and its overlap rule
//! - `validate`, pure parsers for everything a user types at a prompt
//! - `record` and `persist`, the flat-file format and load/save
//! - `config`, the optional user configuration file

pub mod config;
pub mod error;
pub mod event;
pub mod persist;
pub mod record;
pub mod timetable;
pub mod validate;
pub mod weekday;

pub use error::{TimetableError, TimetableResult};
pub use event::{Event, WORK_HOURS};
pub use timetable::Timetable;
pub use weekday::WeekStart;
