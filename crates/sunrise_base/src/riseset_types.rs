//! Types for sunrise/sunset and twilight calculations.
//!
//! Provides the observer coordinate, zenith selector, event kinds, the
//! result type, and the step-by-step trace of the almanac pipeline.

use crate::error::AlmanacError;

/// Geographic coordinate on Earth's surface. Validated on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    latitude_deg: f64,
    longitude_deg: f64,
}

impl GeoCoordinate {
    /// Create a coordinate.
    ///
    /// Latitude must lie in [-90, 90] (north positive) and longitude in
    /// [-180, 180] (east positive). Non-finite values are rejected.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, AlmanacError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(AlmanacError::InvalidLocation(
                "latitude must be within [-90, 90] degrees",
            ));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(AlmanacError::InvalidLocation(
                "longitude must be within [-180, 180] degrees",
            ));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    /// Latitude in degrees, north positive.
    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    /// Longitude in degrees, east positive.
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    /// Longitude expressed in hours (15 deg per hour).
    pub fn longitude_hours(&self) -> f64 {
        self.longitude_deg / 15.0
    }
}

/// Named zenith angles for a horizon crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Zenith {
    /// Upper limb on the horizon with standard refraction: 90 deg 50'.
    #[default]
    Official,
    /// Sun center 6 deg below the horizon.
    Civil,
    /// Sun center 12 deg below the horizon.
    Nautical,
    /// Sun center 18 deg below the horizon.
    Astronomical,
}

/// All zenith variants, brightest to darkest.
pub const ALL_ZENITHS: [Zenith; 4] = [
    Zenith::Official,
    Zenith::Civil,
    Zenith::Nautical,
    Zenith::Astronomical,
];

impl Zenith {
    /// Zenith distance in degrees.
    pub fn degrees(self) -> f64 {
        match self {
            Self::Official => 90.0 + 50.0 / 60.0, // 90.8333
            Self::Civil => 96.0,
            Self::Nautical => 102.0,
            Self::Astronomical => 108.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Official => "official",
            Self::Civil => "civil",
            Self::Nautical => "nautical",
            Self::Astronomical => "astronomical",
        }
    }

    /// Look up a zenith by its name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_ZENITHS
            .iter()
            .copied()
            .find(|z| z.name().eq_ignore_ascii_case(name))
    }
}

/// Rise/set event kinds, including twilight variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEvent {
    Sunrise,
    Sunset,
    CivilDawn,
    CivilDusk,
    NauticalDawn,
    NauticalDusk,
    AstronomicalDawn,
    AstronomicalDusk,
}

/// All eight events in chronological order for a normal day.
pub const ALL_EVENTS: [SolarEvent; 8] = [
    SolarEvent::AstronomicalDawn,
    SolarEvent::NauticalDawn,
    SolarEvent::CivilDawn,
    SolarEvent::Sunrise,
    SolarEvent::Sunset,
    SolarEvent::CivilDusk,
    SolarEvent::NauticalDusk,
    SolarEvent::AstronomicalDusk,
];

impl SolarEvent {
    /// Zenith that defines this event.
    pub fn zenith(self) -> Zenith {
        match self {
            Self::Sunrise | Self::Sunset => Zenith::Official,
            Self::CivilDawn | Self::CivilDusk => Zenith::Civil,
            Self::NauticalDawn | Self::NauticalDusk => Zenith::Nautical,
            Self::AstronomicalDawn | Self::AstronomicalDusk => Zenith::Astronomical,
        }
    }

    /// Whether this is a rising (morning) event.
    pub fn is_rising(self) -> bool {
        matches!(
            self,
            Self::Sunrise | Self::CivilDawn | Self::NauticalDawn | Self::AstronomicalDawn
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sunrise => "Sunrise",
            Self::Sunset => "Sunset",
            Self::CivilDawn => "Civil dawn",
            Self::CivilDusk => "Civil dusk",
            Self::NauticalDawn => "Nautical dawn",
            Self::NauticalDusk => "Nautical dusk",
            Self::AstronomicalDawn => "Astronomical dawn",
            Self::AstronomicalDusk => "Astronomical dusk",
        }
    }
}

/// Result of a rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolarEventResult {
    /// Event occurs at this UTC hour, in [0, 24).
    Event { utc_hours: f64 },
    /// Sun stays below the zenith circle all day (polar night).
    NeverRises,
    /// Sun stays above the zenith circle all day (midnight sun).
    NeverSets,
}

impl SolarEventResult {
    /// UTC hour of the event, if it happens.
    pub fn utc_hours(&self) -> Option<f64> {
        match *self {
            Self::Event { utc_hours } => Some(utc_hours),
            Self::NeverRises | Self::NeverSets => None,
        }
    }
}

/// Intermediate values of the almanac pipeline for one event.
///
/// Values after the polar check (`hour_angle_hours`, `local_mean_time_hours`)
/// are `None` when the zenith is never crossed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTrace {
    /// Day of the year, N.
    pub day_of_year: u32,
    /// Longitude in hours (east positive).
    pub longitude_hours: f64,
    /// Approximate time of the event in days, t.
    pub approx_time_days: f64,
    /// Sun's mean anomaly M in degrees.
    pub mean_anomaly_deg: f64,
    /// Sun's true longitude L in degrees, [0, 360).
    pub true_longitude_deg: f64,
    /// Right ascension in hours, same quadrant as L.
    pub right_ascension_hours: f64,
    pub sin_declination: f64,
    pub cos_declination: f64,
    /// Cosine of the local hour angle; outside [-1, 1] means no crossing.
    pub cos_hour_angle: f64,
    /// Local hour angle H in hours.
    pub hour_angle_hours: Option<f64>,
    /// Local mean time T in hours, before the UTC shift.
    pub local_mean_time_hours: Option<f64>,
    /// Final result.
    pub result: SolarEventResult,
}
