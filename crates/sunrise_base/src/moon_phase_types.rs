//! Types for lunar phase calculations.

use crate::lunar_elements::SYNODIC_MONTH;

/// How the moon's age is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MoonPhaseMethod {
    /// Mean synodic month counted from a reference new moon. Date only.
    #[default]
    Synodic,
    /// Sun and Moon positions from 1980.0 orbital elements with the main
    /// lunar perturbations.
    Ephemeris,
}

/// Both methods, fastest first.
pub const ALL_METHODS: [MoonPhaseMethod; 2] =
    [MoonPhaseMethod::Synodic, MoonPhaseMethod::Ephemeris];

impl MoonPhaseMethod {
    pub fn name(self) -> &'static str {
        match self {
            Self::Synodic => "synodic",
            Self::Ephemeris => "ephemeris",
        }
    }

    /// Look up a method by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_METHODS
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }
}

/// Tunables for the moon phase calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPhaseConfig {
    /// Days added to the Julian Date before the ephemeris method runs.
    /// Default: 0.0.
    pub julian_day_offset: f64,
}

impl Default for MoonPhaseConfig {
    fn default() -> Self {
        Self {
            julian_day_offset: 0.0,
        }
    }
}

impl MoonPhaseConfig {
    /// Reproduces the historical tool, which added an unexplained two days
    /// to the Julian Date of the ephemeris method.
    pub const LEGACY: Self = Self {
        julian_day_offset: 2.0,
    };
}

/// Auxiliary output of the ephemeris method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EphemerisDetail {
    /// Fraction of the lunation elapsed, [0, 1).
    pub phase_fraction: f64,
    /// Illuminated fraction of the disk, [0, 1].
    pub illuminated_fraction: f64,
    /// Sun's geocentric ecliptic longitude, degrees [0, 360).
    pub sun_longitude_deg: f64,
    /// Moon's true ecliptic longitude, degrees [0, 360).
    pub moon_longitude_deg: f64,
    /// Moon's ecliptic latitude, degrees.
    pub moon_latitude_deg: f64,
    /// Earth-Moon distance, km.
    pub moon_distance_km: f64,
    /// Moon's angular diameter, degrees.
    pub moon_angular_diameter_deg: f64,
    /// Moon's horizontal parallax, degrees.
    pub moon_parallax_deg: f64,
    /// Earth-Sun distance, km.
    pub sun_distance_km: f64,
    /// Sun's angular diameter, degrees.
    pub sun_angular_diameter_deg: f64,
}

/// Moon age with the method that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPhaseResult {
    /// Days since the last new moon, [0, SYNODIC_MONTH).
    pub age_days: f64,
    pub method: MoonPhaseMethod,
    /// Present only for [`MoonPhaseMethod::Ephemeris`].
    pub ephemeris: Option<EphemerisDetail>,
}

impl MoonPhaseResult {
    /// Fraction of the lunation elapsed, [0, 1).
    pub fn phase_fraction(&self) -> f64 {
        self.age_days / SYNODIC_MONTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_offset() {
        assert_eq!(MoonPhaseConfig::default().julian_day_offset, 0.0);
        assert_eq!(MoonPhaseConfig::LEGACY.julian_day_offset, 2.0);
    }

    #[test]
    fn method_names() {
        assert_eq!(
            MoonPhaseMethod::from_name("Ephemeris"),
            Some(MoonPhaseMethod::Ephemeris)
        );
        assert_eq!(MoonPhaseMethod::from_name("synodic"), Some(MoonPhaseMethod::Synodic));
        assert_eq!(MoonPhaseMethod::from_name("fast"), None);
        assert_eq!(MoonPhaseMethod::default(), MoonPhaseMethod::Synodic);
    }

    #[test]
    fn phase_fraction_half_at_mid_lunation() {
        let r = MoonPhaseResult {
            age_days: SYNODIC_MONTH / 2.0,
            method: MoonPhaseMethod::Synodic,
            ephemeris: None,
        };
        assert!((r.phase_fraction() - 0.5).abs() < 1e-15);
    }
}
