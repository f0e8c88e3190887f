//! UTC-to-local clock conversion.
//!
//! The almanac works in UTC hours. Displaying a local time needs a fixed
//! offset plus a daylight-saving flag, both supplied by the caller.

use std::fmt::{Display, Formatter};

use crate::error::TimeError;

/// Fixed UTC offset with an optional one-hour DST shift.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LocalOffset {
    /// Standard-time offset from UTC in hours, east positive.
    pub utc_offset_hours: f64,
    /// Whether daylight saving time is in effect (adds one hour).
    pub dst: bool,
}

impl LocalOffset {
    /// Create an offset, rejecting values outside [-14, 14] hours.
    pub fn new(utc_offset_hours: f64, dst: bool) -> Result<Self, TimeError> {
        if !utc_offset_hours.is_finite() || !(-14.0..=14.0).contains(&utc_offset_hours) {
            return Err(TimeError::InvalidOffset(utc_offset_hours));
        }
        Ok(Self {
            utc_offset_hours,
            dst,
        })
    }

    /// Offset actually applied, including DST.
    pub fn total_hours(&self) -> f64 {
        if self.dst {
            self.utc_offset_hours + 1.0
        } else {
            self.utc_offset_hours
        }
    }

    /// Local clock hour in [0, 24) for a UTC hour.
    pub fn to_local_hours(&self, utc_hours: f64) -> f64 {
        let h = (utc_hours + self.total_hours()).rem_euclid(24.0);
        if h >= 24.0 { 0.0 } else { h }
    }
}

/// Hours and minutes on a 24-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    /// Split a fractional hour in [0, 24) into hour and minute.
    ///
    /// Minutes are truncated, not rounded. Input outside the range is
    /// wrapped first.
    pub fn from_hours(hours: f64) -> Self {
        let h = hours.rem_euclid(24.0);
        let hour = (h.floor() as u32).min(23);
        let minute = ((h - h.floor()) * 60.0).floor().min(59.0) as u32;
        Self { hour, minute }
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_bounds() {
        assert!(LocalOffset::new(-5.0, false).is_ok());
        assert!(LocalOffset::new(5.5, true).is_ok());
        assert!(LocalOffset::new(15.0, false).is_err());
        assert!(LocalOffset::new(f64::NAN, false).is_err());
    }

    #[test]
    fn dst_adds_one_hour() {
        let est = LocalOffset::new(-5.0, false).unwrap();
        let edt = LocalOffset::new(-5.0, true).unwrap();
        assert_eq!(est.total_hours(), -5.0);
        assert_eq!(edt.total_hours(), -4.0);
        assert!((edt.to_local_hours(9.441) - 5.441).abs() < 1e-12);
    }

    #[test]
    fn local_wraps_across_midnight() {
        let tz = LocalOffset::new(-5.0, false).unwrap();
        assert!((tz.to_local_hours(2.0) - 21.0).abs() < 1e-12);
        let ist = LocalOffset::new(5.5, false).unwrap();
        assert!((ist.to_local_hours(20.0) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn clock_time_truncates_minutes() {
        let t = ClockTime::from_hours(5.441);
        assert_eq!(t, ClockTime { hour: 5, minute: 26 });
        assert_eq!(t.to_string(), "05:26");
        let t = ClockTime::from_hours(12.999);
        assert_eq!(t, ClockTime { hour: 12, minute: 59 });
    }

    #[test]
    fn clock_time_wraps() {
        assert_eq!(ClockTime::from_hours(24.25), ClockTime { hour: 0, minute: 15 });
        assert_eq!(ClockTime::from_hours(-0.5), ClockTime { hour: 23, minute: 30 });
    }
}
