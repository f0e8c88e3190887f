//! Moon age by mean synodic month or by a low-precision ephemeris.
//!
//! The ephemeris follows Duffett-Smith (1981), the same algorithm as
//! Moontool: Sun from a Keplerian orbit, Moon from its mean elements plus
//! evection, annual equation, equation of the centre and variation.
//! Accuracy is a fraction of a day in age.

use sunrise_math::{
    cos_deg, normalize_360, normalize_period, sin_deg, solve_kepler, true_anomaly_deg,
};
use sunrise_time::CalendarDate;

use crate::error::AlmanacError;
use crate::lunar_elements::*;
use crate::moon_phase_types::{
    EphemerisDetail, MoonPhaseConfig, MoonPhaseMethod, MoonPhaseResult,
};

/// Moon age in days by the mean synodic month, [0, SYNODIC_MONTH).
///
/// Counts lunations since [`REFERENCE_NEW_MOON_JD`] and keeps the
/// fractional part, so dates before the reference also come out
/// non-negative.
pub fn synodic_age_days(jd: f64) -> f64 {
    let lunations = (jd - REFERENCE_NEW_MOON_JD) / SYNODIC_MONTH;
    normalize_period(normalize_period(lunations, 1.0) * SYNODIC_MONTH, SYNODIC_MONTH)
}

/// Sun's position and distance at `eday` days after epoch 1980.0.
///
/// Returns `(mean_anomaly_deg, ecliptic_longitude_deg, distance_km,
/// angular_diameter_deg)`.
fn sun_position(eday: f64) -> Result<(f64, f64, f64, f64), AlmanacError> {
    let n = normalize_360((360.0 / TROPICAL_YEAR_DAYS) * eday);
    // perigee-relative mean anomaly
    let m = normalize_360(
        n + SUN_ECLIPTIC_LONGITUDE_EPOCH_DEG - SUN_ECLIPTIC_LONGITUDE_PERIGEE_DEG,
    );

    let ecc_anomaly = solve_kepler(m, EARTH_ECCENTRICITY)?;
    let true_anomaly = true_anomaly_deg(ecc_anomaly, EARTH_ECCENTRICITY);
    let lambda = normalize_360(true_anomaly + SUN_ECLIPTIC_LONGITUDE_PERIGEE_DEG);

    // orbital distance factor
    let f = (1.0 + EARTH_ECCENTRICITY * cos_deg(true_anomaly))
        / (1.0 - EARTH_ECCENTRICITY * EARTH_ECCENTRICITY);
    Ok((m, lambda, SUN_SEMI_MAJOR_AXIS_KM / f, f * SUN_ANGULAR_SIZE_DEG))
}

/// Full ephemeris evaluation at a Julian Date.
///
/// `jd` is used as given; apply any configured offset before calling.
///
/// # Errors
/// [`AlmanacError::Math`] if Kepler's equation fails to converge.
pub fn ephemeris_detail(jd: f64) -> Result<EphemerisDetail, AlmanacError> {
    let eday = jd - EPOCH_1980_JD;
    let (sun_m, sun_lambda, sun_distance_km, sun_angular_diameter_deg) = sun_position(eday)?;

    // Mean elements
    let ml = normalize_360(MOON_DAILY_MOTION_DEG * eday + MOON_MEAN_LONGITUDE_EPOCH_DEG);
    let mm = normalize_360(
        ml - MOON_PERIGEE_DAILY_MOTION_DEG * eday - MOON_MEAN_PERIGEE_EPOCH_DEG,
    );
    let mn = normalize_360(MOON_NODE_LONGITUDE_EPOCH_DEG - MOON_NODE_DAILY_MOTION_DEG * eday);

    // Perturbations
    let evection = 1.2739 * sin_deg(2.0 * (ml - sun_lambda) - mm);
    let annual_eq = 0.1858 * sin_deg(sun_m);
    let a3 = 0.37 * sin_deg(sun_m);
    let mm_corrected = mm + evection - annual_eq - a3;
    let centre = 6.2886 * sin_deg(mm_corrected);
    let a4 = 0.214 * sin_deg(2.0 * mm_corrected);
    let l_corrected = ml + evection + centre - annual_eq + a4;
    let variation = 0.6583 * sin_deg(2.0 * (l_corrected - sun_lambda));
    let l_true = l_corrected + variation;

    // Ecliptic coordinates relative to the corrected node
    let node = mn - 0.16 * sin_deg(sun_m);
    let y = sin_deg(l_true - node) * cos_deg(MOON_INCLINATION_DEG);
    let x = cos_deg(l_true - node);
    let moon_longitude_deg = normalize_360(y.atan2(x).to_degrees() + node);
    let moon_latitude_deg = (sin_deg(l_true - node) * sin_deg(MOON_INCLINATION_DEG))
        .asin()
        .to_degrees();

    // Age and illumination
    let age_deg = normalize_360(l_true - sun_lambda);
    let phase_fraction = age_deg / 360.0;
    let illuminated_fraction = (1.0 - cos_deg(age_deg)) / 2.0;

    // Distance and apparent size
    let moon_distance_km = MOON_SEMI_MAJOR_AXIS_KM
        * (1.0 - MOON_ECCENTRICITY * MOON_ECCENTRICITY)
        / (1.0 + MOON_ECCENTRICITY * cos_deg(mm_corrected + centre));
    let distance_ratio = moon_distance_km / MOON_SEMI_MAJOR_AXIS_KM;

    Ok(EphemerisDetail {
        phase_fraction,
        illuminated_fraction,
        sun_longitude_deg: sun_lambda,
        moon_longitude_deg,
        moon_latitude_deg,
        moon_distance_km,
        moon_angular_diameter_deg: MOON_ANGULAR_SIZE_DEG / distance_ratio,
        moon_parallax_deg: MOON_PARALLAX_DEG / distance_ratio,
        sun_distance_km,
        sun_angular_diameter_deg,
    })
}

/// Moon age at an arbitrary Julian Date.
///
/// The config's `julian_day_offset` applies to the ephemeris method only.
///
/// # Errors
/// [`AlmanacError::InvalidJulianDay`] if `jd` (or `jd` plus the offset) is
/// not finite; [`AlmanacError::Math`] if the ephemeris Kepler solve fails.
pub fn moon_age_at_jd(
    jd: f64,
    method: MoonPhaseMethod,
    config: &MoonPhaseConfig,
) -> Result<MoonPhaseResult, AlmanacError> {
    if !jd.is_finite() {
        return Err(AlmanacError::InvalidJulianDay(jd));
    }
    let shifted = jd + config.julian_day_offset;
    if !shifted.is_finite() {
        return Err(AlmanacError::InvalidJulianDay(shifted));
    }
    match method {
        MoonPhaseMethod::Synodic => Ok(MoonPhaseResult {
            age_days: synodic_age_days(jd),
            method,
            ephemeris: None,
        }),
        MoonPhaseMethod::Ephemeris => {
            let detail = ephemeris_detail(shifted)?;
            let age_days = normalize_period(detail.phase_fraction * SYNODIC_MONTH, SYNODIC_MONTH);
            Ok(MoonPhaseResult {
                age_days,
                method,
                ephemeris: Some(detail),
            })
        }
    }
}

/// Moon age at 0h UT on a calendar date.
///
/// # Errors
/// [`AlmanacError::Math`] if the ephemeris method's Kepler solve fails.
pub fn compute_moon_phase(
    date: &CalendarDate,
    method: MoonPhaseMethod,
    config: &MoonPhaseConfig,
) -> Result<MoonPhaseResult, AlmanacError> {
    moon_age_at_jd(date.julian_day(), method, config)
}
