//! Calendar dates and clock conversions for the almanac.
//!
//! This crate provides:
//! - A validated Gregorian `CalendarDate`
//! - The Almanac for Computers day-of-year formula
//! - Julian Date from calendar components
//! - UTC-to-local clock conversion with a fixed offset and DST flag

pub mod calendar;
pub mod error;
pub mod julian;
pub mod local;

pub use calendar::{CalendarDate, days_in_month, is_leap_year};
pub use error::TimeError;
pub use julian::{J2000_JD, UNIX_EPOCH_JD, calendar_to_jd, jd_to_calendar};
pub use local::{ClockTime, LocalOffset};
