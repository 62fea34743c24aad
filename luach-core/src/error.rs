//! Error types for the luach core.

use chrono::NaiveDate;
use thiserror::Error;

use crate::event::{DayTime, EventKind};

/// Errors that can occur in luach operations.
#[derive(Error, Debug)]
pub enum LuachError {
    /// The calendar backend cannot represent the requested year.
    #[error("Unsupported year: {year}")]
    UnsupportedYear { year: i64 },

    /// Input outside the gematria domain (1..=999, integers only).
    #[error("Invalid numeral: {0} (must be an integer in 1..=999)")]
    InvalidNumeral(String),

    #[error("Invalid month: {month} (must be 0..=11)")]
    InvalidMonth { month: u32 },

    #[error("Invalid Hebrew date: {day}/{month}/{year}")]
    InvalidHebrewDate { year: i32, month: u8, day: u8 },

    #[error("Invalid date input '{0}'")]
    InvalidDateInput(String),

    #[error("An event of type {kind} ({day_time}) already exists on {date}")]
    DuplicateEvent {
        date: NaiveDate,
        kind: EventKind,
        day_time: DayTime,
    },

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for luach operations.
pub type LuachResult<T> = Result<T, LuachError>;
