//! Error types for the dafyomi ecosystem.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while resolving or exporting daf assignments.
#[derive(Error, Debug)]
pub enum DafYomiError {
    #[error("{date} is before the {cycle} cycle began ({epoch})")]
    BeforeCycleStart {
        cycle: String,
        date: String,
        epoch: NaiveDate,
    },

    #[error("Invalid Hebrew date: {day} {month} {year}")]
    InvalidHebrewDate { year: i32, month: String, day: u8 },

    #[error("Calendar conversion failed: {0}")]
    Calendar(String),

    #[error("Day {0} is outside the supported calendar range")]
    DateOutOfRange(i64),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Unknown cycle '{0}'. Expected 'bavli' or 'yerushalmi'")]
    UnknownCycle(String),

    #[error("Unknown edition '{0}'. Expected 'vilna' or 'schottenstein'")]
    UnknownEdition(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for dafyomi operations.
pub type DafYomiResult<T> = Result<T, DafYomiError>;
