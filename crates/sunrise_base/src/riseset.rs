//! Sunrise/sunset computation with twilight variants.
//!
//! Implements the sunrise/sunset algorithm of the *Almanac for Computers*
//! (1990), Nautical Almanac Office, U.S. Naval Observatory. Low precision
//! (about a minute at mid latitudes), closed form, no iteration.
//!
//! All angles are degrees; the trig wrappers in `sunrise_math` do the
//! radian conversion.

use sunrise_math::{
    acos_deg, asin_deg, atan_deg, cos_deg, normalize_24, normalize_360, sin_deg, tan_deg,
};
use sunrise_time::CalendarDate;

use crate::error::AlmanacError;
use crate::riseset_types::{ALL_EVENTS, GeoCoordinate, SolarEvent, SolarEventResult, SolarTrace};

/// Sun's mean motion in degrees per day.
const MEAN_MOTION_DEG_PER_DAY: f64 = 0.9856;

/// Mean anomaly offset in degrees.
const MEAN_ANOMALY_OFFSET_DEG: f64 = 3.289;

/// Ecliptic longitude of perihelion in degrees.
const PERIHELION_LONGITUDE_DEG: f64 = 282.634;

/// cos of the obliquity of the ecliptic.
const COS_OBLIQUITY: f64 = 0.91764;

/// sin of the obliquity of the ecliptic.
const SIN_OBLIQUITY: f64 = 0.39782;

/// Sidereal drift of the mean sun in hours per day.
const SIDEREAL_DRIFT_HOURS_PER_DAY: f64 = 0.06571;

/// Local mean time offset in hours.
const LOCAL_MEAN_TIME_OFFSET_HOURS: f64 = 6.622;

/// Reject zenith angles that cannot describe a horizon crossing.
fn validate_zenith(zenith_deg: f64) -> Result<(), AlmanacError> {
    if !zenith_deg.is_finite() {
        return Err(AlmanacError::InvalidZenith("zenith must be finite"));
    }
    if zenith_deg <= 0.0 || zenith_deg >= 180.0 {
        return Err(AlmanacError::InvalidZenith(
            "zenith must be strictly between 0 and 180 degrees",
        ));
    }
    Ok(())
}

/// Run the almanac pipeline, keeping every intermediate value.
fn almanac_pipeline(
    date: &CalendarDate,
    coord: &GeoCoordinate,
    zenith_deg: f64,
    want_sunrise: bool,
) -> SolarTrace {
    // 1. Day of the year
    let day_of_year = date.almanac_day_of_year();

    // 2. Longitude hour and approximate time (06:00 / 18:00 local mean time)
    let lng_hour = coord.longitude_hours();
    let base_hour = if want_sunrise { 6.0 } else { 18.0 };
    let t = day_of_year as f64 + (base_hour - lng_hour) / 24.0;

    // 3. Sun's mean anomaly
    let m = MEAN_MOTION_DEG_PER_DAY * t - MEAN_ANOMALY_OFFSET_DEG;

    // 4. Sun's true longitude
    let l = normalize_360(
        m + 1.916 * sin_deg(m) + 0.020 * sin_deg(2.0 * m) + PERIHELION_LONGITUDE_DEG,
    );

    // 5. Right ascension, moved into L's quadrant, in hours
    let mut ra = normalize_360(atan_deg(COS_OBLIQUITY * tan_deg(l)));
    let l_quadrant = (l / 90.0).floor() * 90.0;
    let ra_quadrant = (ra / 90.0).floor() * 90.0;
    ra += l_quadrant - ra_quadrant;
    let ra_hours = ra / 15.0;

    // 6. Declination
    let sin_dec = SIN_OBLIQUITY * sin_deg(l);
    let cos_dec = cos_deg(asin_deg(sin_dec));

    // 7. Local hour angle
    let lat = coord.latitude_deg();
    let cos_h = (cos_deg(zenith_deg) - sin_dec * sin_deg(lat)) / (cos_dec * cos_deg(lat));

    let mut trace = SolarTrace {
        day_of_year,
        longitude_hours: lng_hour,
        approx_time_days: t,
        mean_anomaly_deg: m,
        true_longitude_deg: l,
        right_ascension_hours: ra_hours,
        sin_declination: sin_dec,
        cos_declination: cos_dec,
        cos_hour_angle: cos_h,
        hour_angle_hours: None,
        local_mean_time_hours: None,
        result: SolarEventResult::NeverRises,
    };

    // Polar check, on both branches so acos never leaves its domain.
    if cos_h > 1.0 {
        return trace;
    }
    if cos_h < -1.0 {
        trace.result = SolarEventResult::NeverSets;
        return trace;
    }

    // 8. Hour angle in hours
    let h_deg = if want_sunrise {
        360.0 - acos_deg(cos_h)
    } else {
        acos_deg(cos_h)
    };
    let h = h_deg / 15.0;

    // 9. Local mean time of the event
    let local_mean =
        h + ra_hours - SIDEREAL_DRIFT_HOURS_PER_DAY * t - LOCAL_MEAN_TIME_OFFSET_HOURS;

    // 10. Back to UTC
    let utc_hours = normalize_24(local_mean - lng_hour);

    trace.hour_angle_hours = Some(h);
    trace.local_mean_time_hours = Some(local_mean);
    trace.result = SolarEventResult::Event { utc_hours };
    trace
}

/// Compute the UTC hour at which the Sun crosses a zenith angle.
///
/// # Arguments
/// * `date` — calendar date of the event
/// * `coord` — observer location
/// * `zenith_deg` — zenith distance defining the event, e.g.
///   [`Zenith::Official`](crate::Zenith::Official)`.degrees()`
/// * `want_sunrise` — `true` for the morning crossing, `false` for evening
///
/// # Returns
/// * `SolarEventResult::Event` with the UTC hour in [0, 24)
/// * `SolarEventResult::NeverRises` if the Sun stays below the zenith circle
/// * `SolarEventResult::NeverSets` if the Sun stays above it
///
/// # Errors
/// [`AlmanacError::InvalidZenith`] for a non-finite zenith or one outside
/// (0, 180) degrees.
pub fn solve_solar_event(
    date: &CalendarDate,
    coord: &GeoCoordinate,
    zenith_deg: f64,
    want_sunrise: bool,
) -> Result<SolarEventResult, AlmanacError> {
    Ok(trace_solar_event(date, coord, zenith_deg, want_sunrise)?.result)
}

/// Same as [`solve_solar_event`], also returning every intermediate value.
pub fn trace_solar_event(
    date: &CalendarDate,
    coord: &GeoCoordinate,
    zenith_deg: f64,
    want_sunrise: bool,
) -> Result<SolarTrace, AlmanacError> {
    validate_zenith(zenith_deg)?;
    Ok(almanac_pipeline(date, coord, zenith_deg, want_sunrise))
}

/// Compute a single named event.
pub fn solve_event(
    date: &CalendarDate,
    coord: &GeoCoordinate,
    event: SolarEvent,
) -> SolarEventResult {
    almanac_pipeline(date, coord, event.zenith().degrees(), event.is_rising()).result
}

/// Compute all 8 rise/set events for a day.
///
/// Returns results in chronological order:
/// AstronomicalDawn, NauticalDawn, CivilDawn, Sunrise,
/// Sunset, CivilDusk, NauticalDusk, AstronomicalDusk.
///
/// Each event is computed independently; an event that cannot occur is
/// reported as NeverRises/NeverSets.
pub fn compute_all_events(
    date: &CalendarDate,
    coord: &GeoCoordinate,
) -> [(SolarEvent, SolarEventResult); 8] {
    ALL_EVENTS.map(|event| (event, solve_event(date, coord, event)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::riseset_types::Zenith;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn zenith_validation() {
        let d = date(2024, 3, 20);
        let c = GeoCoordinate::new(0.0, 0.0).unwrap();
        assert!(solve_solar_event(&d, &c, f64::NAN, true).is_err());
        assert!(solve_solar_event(&d, &c, 0.0, true).is_err());
        assert!(solve_solar_event(&d, &c, 180.0, false).is_err());
        assert!(solve_solar_event(&d, &c, 95.0, false).is_ok());
    }

    #[test]
    fn wayne_nj_trace_matches_almanac_steps() {
        // Worked example from the Almanac: Wayne, NJ, June 25 1990.
        let c = GeoCoordinate::new(40.9, -74.3).unwrap();
        let tr = trace_solar_event(&date(1990, 6, 25), &c, Zenith::Official.degrees(), true)
            .unwrap();
        assert_eq!(tr.day_of_year, 176);
        assert!((tr.approx_time_days - 176.456).abs() < 0.001, "t = {}", tr.approx_time_days);
        assert!((tr.mean_anomaly_deg - 170.626).abs() < 0.001, "M = {}", tr.mean_anomaly_deg);
        assert!((tr.true_longitude_deg - 93.566).abs() < 0.001, "L = {}", tr.true_longitude_deg);
        assert!(
            (tr.right_ascension_hours - 6.259).abs() < 0.001,
            "RA = {}",
            tr.right_ascension_hours
        );
        assert!((tr.sin_declination - 0.39705).abs() < 0.0001);
        assert!((tr.cos_declination - 0.91780).abs() < 0.0001);
        assert!((tr.cos_hour_angle - (-0.39570)).abs() < 0.0001);
        let h = tr.hour_angle_hours.unwrap();
        assert!((h - 16.446).abs() < 0.001, "H = {h}");
        let t_local = tr.local_mean_time_hours.unwrap();
        assert!((t_local - 4.488).abs() < 0.001, "T = {t_local}");
        let utc = tr.result.utc_hours().unwrap();
        assert!((utc - 9.441).abs() < 0.001, "UT = {utc}");
    }

    #[test]
    fn right_ascension_follows_longitude_quadrant() {
        let c = GeoCoordinate::new(45.0, 0.0).unwrap();
        for month in 1..=12 {
            let tr = trace_solar_event(&date(2023, month, 10), &c, 90.8333, true).unwrap();
            let l_quadrant = (tr.true_longitude_deg / 90.0).floor();
            let ra_quadrant = (tr.right_ascension_hours * 15.0 / 90.0).floor();
            assert_eq!(l_quadrant, ra_quadrant, "month {month}");
        }
    }

    #[test]
    fn polar_trace_has_no_hour_angle() {
        let c = GeoCoordinate::new(78.0, 15.6).unwrap();
        let tr = trace_solar_event(&date(2024, 12, 21), &c, 90.8333, true).unwrap();
        assert!(tr.cos_hour_angle > 1.0);
        assert_eq!(tr.hour_angle_hours, None);
        assert_eq!(tr.local_mean_time_hours, None);
        assert_eq!(tr.result, SolarEventResult::NeverRises);
    }

    #[test]
    fn midnight_sun_on_rising_branch() {
        // cos H < -1 on the sunrise branch: no crossing, sun is up all day.
        let c = GeoCoordinate::new(78.0, 15.6).unwrap();
        let r = solve_event(&date(2024, 6, 21), &c, SolarEvent::Sunrise);
        assert_eq!(r, SolarEventResult::NeverSets);
    }

    #[test]
    fn polar_night_on_setting_branch() {
        let c = GeoCoordinate::new(78.0, 15.6).unwrap();
        let r = solve_event(&date(2024, 12, 21), &c, SolarEvent::Sunset);
        assert_eq!(r, SolarEventResult::NeverRises);
    }

    #[test]
    fn equator_equinox_twelve_hour_day() {
        let c = GeoCoordinate::new(0.0, 0.0).unwrap();
        let d = date(2024, 3, 20);
        let rise = solve_event(&d, &c, SolarEvent::Sunrise).utc_hours().unwrap();
        let set = solve_event(&d, &c, SolarEvent::Sunset).utc_hours().unwrap();
        assert!((rise - 6.068).abs() < 0.01, "rise = {rise}");
        assert!((set - 18.177).abs() < 0.01, "set = {set}");
    }

    #[test]
    fn all_events_are_chronological() {
        let c = GeoCoordinate::new(43.6532, -79.3832).unwrap();
        let events = compute_all_events(&date(2021, 12, 18), &c);
        let hours: Vec<f64> = events
            .iter()
            .map(|(_, r)| r.utc_hours().unwrap())
            .collect();
        for pair in hours.windows(2) {
            assert!(pair[0] < pair[1], "not chronological: {hours:?}");
        }
        assert_eq!(events[3].0, SolarEvent::Sunrise);
        assert_eq!(events[4].0, SolarEvent::Sunset);
    }

    #[test]
    fn solve_event_matches_free_zenith() {
        let c = GeoCoordinate::new(43.6532, -79.3832).unwrap();
        let d = date(2021, 12, 18);
        for event in ALL_EVENTS {
            let named = solve_event(&d, &c, event);
            let free =
                solve_solar_event(&d, &c, event.zenith().degrees(), event.is_rising()).unwrap();
            assert_eq!(named, free, "{event:?}");
        }
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let c = GeoCoordinate::new(-33.8688, 151.2093).unwrap();
        let d = date(2024, 1, 15);
        let a = solve_solar_event(&d, &c, 96.0, true).unwrap();
        let b = solve_solar_event(&d, &c, 96.0, true).unwrap();
        let (Some(a), Some(b)) = (a.utc_hours(), b.utc_hours()) else {
            panic!("expected events");
        };
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
