//! Validated Gregorian calendar dates.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month, or `None` for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// A calendar date (proleptic Gregorian). Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
    month_length: u32,
}

impl CalendarDate {
    /// Build a date, rejecting months outside 1..=12 and days outside the
    /// month's length.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        let max_day = days_in_month(year, month).ok_or(TimeError::InvalidMonth(month))?;
        if day == 0 || day > max_day {
            return Err(TimeError::InvalidDay { year, month, day });
        }
        Ok(Self {
            year,
            month,
            day,
            month_length: max_day,
        })
    }

    /// Date containing the Julian Date `jd` (UT).
    ///
    /// # Errors
    /// [`TimeError::InvalidJulianDay`] for a non-finite `jd`.
    pub fn from_julian_day(jd: f64) -> Result<Self, TimeError> {
        if !jd.is_finite() {
            return Err(TimeError::InvalidJulianDay(jd));
        }
        let (year, month, day) = jd_to_calendar(jd);
        Self::new(year, month, day.floor() as u32)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Days in this date's month.
    pub fn days_in_month(&self) -> u32 {
        self.month_length
    }

    /// Same year and month, different day.
    pub fn with_day(&self, day: u32) -> Result<Self, TimeError> {
        Self::new(self.year, self.month, day)
    }

    /// Day of the year per the Almanac for Computers (1990), step 1.
    ///
    /// ```text
    /// N1 = floor(275 * month / 9)
    /// N2 = floor((month + 9) / 12)
    /// N3 = 1 + floor((year - 4 * floor(year / 4) + 2) / 3)
    /// N  = N1 - N2 * N3 + day - 30
    /// ```
    ///
    /// N3 only looks at `year mod 4`, so century years such as 1900 count
    /// as leap years here.
    pub fn almanac_day_of_year(&self) -> u32 {
        let month = self.month as i64;
        let n1 = 275 * month / 9;
        let n2 = (month + 9) / 12;
        let n3 = 1 + (i64::from(self.year).rem_euclid(4) + 2) / 3;
        (n1 - n2 * n3 + self.day as i64 - 30) as u32
    }

    /// Julian Date at 0h UT on this date.
    pub fn julian_day(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64)
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`. A leading `-` marks a negative year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (sign, body) = match s.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, s),
        };
        let mut parts = body.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got '{s}'")));
        };
        let year: i32 = y.parse()?;
        let month: u32 = m.parse()?;
        let day: u32 = d.parse()?;
        Self::new(sign * year, month, day)
    }
}
