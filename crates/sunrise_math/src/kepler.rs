//! Kepler's equation `E - e sin E = M` by Newton-Raphson.
//!
//! Mean anomaly comes in as degrees; the eccentric anomaly goes out in
//! radians. The iteration is capped so degenerate input (e >= 1, NaN)
//! fails instead of spinning.

use crate::error::MathError;

/// Stop once the correction step is at most this many radians.
pub const KEPLER_TOLERANCE: f64 = 1.0e-6;

/// Iteration cap used by [`solve_kepler`].
pub const KEPLER_MAX_ITERATIONS: usize = 100;

/// Solve Kepler's equation for the eccentric anomaly, in radians.
///
/// # Arguments
/// * `mean_anomaly_deg` — mean anomaly M in degrees
/// * `eccentricity` — orbital eccentricity, `0 <= e < 1` for a solution to
///   be guaranteed
///
/// # Errors
/// [`MathError::NonConvergence`] after [`KEPLER_MAX_ITERATIONS`] steps.
pub fn solve_kepler(mean_anomaly_deg: f64, eccentricity: f64) -> Result<f64, MathError> {
    solve_kepler_with_limit(mean_anomaly_deg, eccentricity, KEPLER_MAX_ITERATIONS)
}

/// [`solve_kepler`] with an explicit iteration cap.
pub fn solve_kepler_with_limit(
    mean_anomaly_deg: f64,
    eccentricity: f64,
    max_iterations: usize,
) -> Result<f64, MathError> {
    let m = mean_anomaly_deg.to_radians();
    let mut e_anomaly = m;
    let mut residual = f64::INFINITY;

    for _ in 0..max_iterations {
        let delta = e_anomaly - eccentricity * e_anomaly.sin() - m;
        e_anomaly -= delta / (1.0 - eccentricity * e_anomaly.cos());
        residual = delta.abs();
        if residual <= KEPLER_TOLERANCE {
            return Ok(e_anomaly);
        }
    }

    Err(MathError::NonConvergence {
        iterations: max_iterations,
        residual,
    })
}

/// True anomaly in degrees from the eccentric anomaly (radians).
///
/// `v = 2 atan( sqrt((1 + e) / (1 - e)) tan(E / 2) )`, range (-180, 180).
pub fn true_anomaly_deg(eccentric_anomaly_rad: f64, eccentricity: f64) -> f64 {
    let k = ((1.0 + eccentricity) / (1.0 - eccentricity)).sqrt();
    2.0 * (k * (eccentric_anomaly_rad / 2.0).tan()).atan().to_degrees()
}
