//! Numeric primitives for the almanac calculations.
//!
//! This crate provides:
//! - Trigonometry that takes and returns degrees
//! - Angle wrapping into [0, 360), hours into [0, 24), and any other period
//! - A bounded Newton-Raphson solver for Kepler's equation

pub mod angle;
pub mod error;
pub mod kepler;

pub use angle::{
    acos_deg, asin_deg, atan_deg, cos_deg, normalize_24, normalize_360, normalize_period,
    sin_deg, tan_deg,
};
pub use error::MathError;
pub use kepler::{
    KEPLER_MAX_ITERATIONS, KEPLER_TOLERANCE, solve_kepler, solve_kepler_with_limit,
    true_anomaly_deg,
};
