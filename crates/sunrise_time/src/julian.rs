//! Julian Date from Gregorian calendar components.

/// Julian Date of J2000.0 (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-01-01 00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Date for a Gregorian calendar date.
///
/// `day` may carry a fraction (0.5 = noon). January and February are
/// counted as months 13 and 14 of the previous year, and the Gregorian
/// century correction is `B = 2 - A + floor(A / 4)` with
/// `A = floor(year / 100)` (Meeus, *Astronomical Algorithms*, ch. 7).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Calendar date for a Julian Date, inverse of [`calendar_to_jd`].
///
/// Returns `(year, month, day_frac)`. Dates before 1582-10-15 come out in
/// the Julian calendar (Meeus, ch. 7).
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;
    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();
    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch() {
        assert_eq!(calendar_to_jd(2000, 1, 1.5), J2000_JD);
    }

    #[test]
    fn midnight_dates() {
        assert_eq!(calendar_to_jd(2000, 1, 6.0), 2_451_549.5);
        assert_eq!(calendar_to_jd(1990, 6, 25.0), 2_448_067.5);
        assert_eq!(calendar_to_jd(2024, 3, 1.0), 2_460_370.5);
    }

    #[test]
    fn sputnik_launch() {
        // Meeus example 7.a: 1957 October 4.81
        assert!((calendar_to_jd(1957, 10, 4.81) - 2_436_116.31).abs() < 1e-6);
    }

    #[test]
    fn gregorian_reform_day() {
        assert_eq!(calendar_to_jd(1582, 10, 15.0), 2_299_160.5);
    }

    #[test]
    fn consecutive_days_differ_by_one() {
        let feb28 = calendar_to_jd(2024, 2, 28.0);
        let feb29 = calendar_to_jd(2024, 2, 29.0);
        let mar1 = calendar_to_jd(2024, 3, 1.0);
        assert_eq!(feb29 - feb28, 1.0);
        assert_eq!(mar1 - feb29, 1.0);
    }

    #[test]
    fn jd_to_calendar_known_dates() {
        let (y, m, d) = jd_to_calendar(J2000_JD);
        assert_eq!((y, m), (2000, 1));
        assert!((d - 1.5).abs() < 1e-9);

        let (y, m, d) = jd_to_calendar(2_436_116.31);
        assert_eq!((y, m), (1957, 10));
        assert!((d - 4.81).abs() < 1e-6, "day = {d}");

        let (y, m, d) = jd_to_calendar(UNIX_EPOCH_JD);
        assert_eq!((y, m, d), (1970, 1, 1.0));
    }

    #[test]
    fn jd_to_calendar_across_year_end() {
        let (y, m, d) = jd_to_calendar(calendar_to_jd(2023, 12, 31.0));
        assert_eq!((y, m, d), (2023, 12, 31.0));
        let (y, m, d) = jd_to_calendar(calendar_to_jd(2024, 1, 1.0));
        assert_eq!((y, m, d), (2024, 1, 1.0));
    }
}
