//! Orbital elements of the Sun and Moon, epoch 1980 January 0.0.
//!
//! Values from Duffett-Smith, *Practical Astronomy with your Calculator*
//! (1981), as used by John Walker's Moontool.

/// Mean new-moon-to-new-moon interval in days.
pub const SYNODIC_MONTH: f64 = 29.530_587_705_76;

/// Julian Date of a reference new moon (2000-01-06 0h UT) for the mean
/// synodic approximation.
pub const REFERENCE_NEW_MOON_JD: f64 = 2_451_549.5;

/// Julian Date of 1980 January 0.0.
pub const EPOCH_1980_JD: f64 = 2_444_238.5;

/// Length of the tropical year in days.
pub const TROPICAL_YEAR_DAYS: f64 = 365.2422;

// Sun

/// Ecliptic longitude of the Sun at epoch 1980.0, degrees.
pub const SUN_ECLIPTIC_LONGITUDE_EPOCH_DEG: f64 = 278.833_540;

/// Ecliptic longitude of the Sun at perigee, degrees.
pub const SUN_ECLIPTIC_LONGITUDE_PERIGEE_DEG: f64 = 282.596_403;

/// Eccentricity of Earth's orbit.
pub const EARTH_ECCENTRICITY: f64 = 0.016_718;

/// Semi-major axis of Earth's orbit, km.
pub const SUN_SEMI_MAJOR_AXIS_KM: f64 = 1.495_85e8;

/// Sun's angular size at semi-major axis distance, degrees.
pub const SUN_ANGULAR_SIZE_DEG: f64 = 0.533_128;

// Moon

/// Moon's mean longitude at the epoch, degrees.
pub const MOON_MEAN_LONGITUDE_EPOCH_DEG: f64 = 64.975_464;

/// Mean longitude of the perigee at the epoch, degrees.
pub const MOON_MEAN_PERIGEE_EPOCH_DEG: f64 = 349.383_063;

/// Mean longitude of the ascending node at the epoch, degrees.
pub const MOON_NODE_LONGITUDE_EPOCH_DEG: f64 = 151.950_429;

/// Inclination of the Moon's orbit to the ecliptic, degrees.
pub const MOON_INCLINATION_DEG: f64 = 5.145_396;

/// Eccentricity of the Moon's orbit.
pub const MOON_ECCENTRICITY: f64 = 0.054_900;

/// Moon's angular size at semi-major axis distance, degrees.
pub const MOON_ANGULAR_SIZE_DEG: f64 = 0.5181;

/// Semi-major axis of the Moon's orbit, km.
pub const MOON_SEMI_MAJOR_AXIS_KM: f64 = 384_401.0;

/// Moon's parallax at semi-major axis distance, degrees.
pub const MOON_PARALLAX_DEG: f64 = 0.9507;

/// Moon's mean daily motion in longitude, degrees.
pub const MOON_DAILY_MOTION_DEG: f64 = 13.176_396_6;

/// Daily motion of the lunar perigee, degrees.
pub const MOON_PERIGEE_DAILY_MOTION_DEG: f64 = 0.111_404_1;

/// Daily regression of the lunar node, degrees.
pub const MOON_NODE_DAILY_MOTION_DEG: f64 = 0.052_953_9;
