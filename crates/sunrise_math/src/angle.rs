//! Degree-based trigonometry and angle normalization.
//!
//! Every angle handed to the almanac pipeline is in degrees. Conversion to
//! radians happens only inside these wrappers.

/// Sine of an angle in degrees.
pub fn sin_deg(deg: f64) -> f64 {
    deg.to_radians().sin()
}

/// Cosine of an angle in degrees.
pub fn cos_deg(deg: f64) -> f64 {
    deg.to_radians().cos()
}

/// Tangent of an angle in degrees.
pub fn tan_deg(deg: f64) -> f64 {
    deg.to_radians().tan()
}

/// Arcsine in degrees, range [-90, 90].
pub fn asin_deg(x: f64) -> f64 {
    x.asin().to_degrees()
}

/// Arccosine in degrees, range [0, 180].
pub fn acos_deg(x: f64) -> f64 {
    x.acos().to_degrees()
}

/// Arctangent in degrees, range (-90, 90).
pub fn atan_deg(x: f64) -> f64 {
    x.atan().to_degrees()
}

/// Wrap `value` into [0, period) with a single floor operation.
///
/// `value - period * floor(value / period)`. Rounding can land exactly on
/// `period` for tiny negative inputs; that case folds back to 0.
pub fn normalize_period(value: f64, period: f64) -> f64 {
    let r = value - period * (value / period).floor();
    if r >= period { 0.0 } else { r }
}

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    normalize_period(deg, 360.0)
}

/// Normalize an hour value to [0, 24).
pub fn normalize_24(hours: f64) -> f64 {
    normalize_period(hours, 24.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trig_known_values() {
        assert!((sin_deg(30.0) - 0.5).abs() < 1e-15);
        assert!((cos_deg(60.0) - 0.5).abs() < 1e-15);
        assert!((tan_deg(45.0) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn inverse_trig_known_values() {
        assert!((asin_deg(0.5) - 30.0).abs() < 1e-12);
        assert!((acos_deg(0.5) - 60.0).abs() < 1e-12);
        assert!((atan_deg(1.0) - 45.0).abs() < 1e-12);
        assert!((acos_deg(-1.0) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn inverse_trig_out_of_domain_is_nan() {
        assert!(acos_deg(1.5).is_nan());
        assert!(asin_deg(-1.5).is_nan());
    }

    #[test]
    fn normalize_zero() {
        assert_eq!(normalize_360(0.0), 0.0);
    }

    #[test]
    fn normalize_positive() {
        assert!((normalize_360(45.0) - 45.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_360_wraps() {
        assert_eq!(normalize_360(360.0), 0.0);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_divides_rather_than_multiplies() {
        // floor(a * 360) would send 400 deg to roughly -51 million.
        assert!((normalize_360(400.0) - 40.0).abs() < 1e-12);
        assert!((normalize_360(123.456) - 123.456).abs() < 1e-12);
    }

    #[test]
    fn normalize_tiny_negative_stays_in_range() {
        let r = normalize_360(-1e-15);
        assert!((0.0..360.0).contains(&r), "got {r}");
        let h = normalize_24(-1e-16);
        assert!((0.0..24.0).contains(&h), "got {h}");
    }

    #[test]
    fn normalize_hours() {
        assert!((normalize_24(25.5) - 1.5).abs() < 1e-12);
        assert!((normalize_24(-0.25) - 23.75).abs() < 1e-12);
        assert_eq!(normalize_24(24.0), 0.0);
        assert!((normalize_24(-49.0) - 23.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_sweep_in_range() {
        let mut a = -100_000.0;
        while a < 100_000.0 {
            let r = normalize_360(a);
            assert!((0.0..360.0).contains(&r), "normalize_360({a}) = {r}");
            a += 97.3;
        }
    }

    #[test]
    fn normalize_arbitrary_period() {
        let p = 29.530_588_705_76;
        assert!((normalize_period(-1.0, p) - (p - 1.0)).abs() < 1e-12);
        assert!((normalize_period(2.0 * p + 3.0, p) - 3.0).abs() < 1e-9);
    }
}
