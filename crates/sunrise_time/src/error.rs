//! Error types for calendar handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from date validation, parsing, or offset handling.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Month outside 1..=12.
    InvalidMonth(u32),
    /// Day outside the valid range for its month and year.
    InvalidDay { year: i32, month: u32, day: u32 },
    /// UTC offset outside [-14, 14] hours or not finite.
    InvalidOffset(f64),
    /// Julian Date is NaN or infinite.
    InvalidJulianDay(f64),
    /// Text could not be parsed as a date.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(m) => write!(f, "invalid month {m} (expected 1-12)"),
            Self::InvalidDay { year, month, day } => {
                write!(f, "invalid day {day} for {year:04}-{month:02}")
            }
            Self::InvalidOffset(h) => write!(f, "invalid UTC offset {h} h (expected -14..14)"),
            Self::InvalidJulianDay(jd) => write!(f, "invalid Julian Date {jd} (must be finite)"),
            Self::Parse(msg) => write!(f, "date parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}

impl From<std::num::ParseIntError> for TimeError {
    fn from(e: std::num::ParseIntError) -> Self {
        Self::Parse(e.to_string())
    }
}
