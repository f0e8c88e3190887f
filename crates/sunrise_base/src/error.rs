//! Error types for almanac calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sunrise_math::MathError;
use sunrise_time::TimeError;

/// Errors from almanac calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AlmanacError {
    /// Invalid calendar date or offset.
    Time(TimeError),
    /// Iterative solver failed (Kepler's equation).
    Math(MathError),
    /// Invalid geographic coordinate.
    InvalidLocation(&'static str),
    /// Zenith angle not usable for a horizon crossing.
    InvalidZenith(&'static str),
    /// Julian Date is NaN or infinite.
    InvalidJulianDay(f64),
}

impl Display for AlmanacError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Math(e) => write!(f, "math error: {e}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::InvalidZenith(msg) => write!(f, "invalid zenith: {msg}"),
            Self::InvalidJulianDay(jd) => write!(f, "invalid Julian Date {jd} (must be finite)"),
        }
    }
}

impl Error for AlmanacError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Math(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for AlmanacError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<MathError> for AlmanacError {
    fn from(e: MathError) -> Self {
        Self::Math(e)
    }
}
