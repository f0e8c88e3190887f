//! Almanac calculations: sunrise, sunset, twilight and lunar phase.
//!
//! This crate provides:
//! - Sunrise/sunset and twilight UTC hours by the U.S. Naval Observatory
//!   *Almanac for Computers* (1990) method
//! - Moon age by mean synodic month or by a low-precision ephemeris
//! - Classification of a moon age into a phase bucket and name
//!
//! Every operation is a pure function of its arguments.

pub mod error;
pub mod lunar_elements;
pub mod moon_phase;
pub mod moon_phase_types;
pub mod phase;
pub mod riseset;
pub mod riseset_types;

pub use error::AlmanacError;
pub use lunar_elements::SYNODIC_MONTH;
pub use moon_phase::{compute_moon_phase, ephemeris_detail, moon_age_at_jd, synodic_age_days};
pub use moon_phase_types::{
    ALL_METHODS, EphemerisDetail, MoonPhaseConfig, MoonPhaseMethod, MoonPhaseResult,
};
pub use phase::{FULL_MOON_BUCKET, PHASE_TABLE, PhaseBucket, PhaseName, classify};
pub use riseset::{compute_all_events, solve_event, solve_solar_event, trace_solar_event};
pub use riseset_types::{
    ALL_EVENTS, ALL_ZENITHS, GeoCoordinate, SolarEvent, SolarEventResult, SolarTrace, Zenith,
};

// Re-export the input types so callers need only this crate.
pub use sunrise_time::{CalendarDate, TimeError};
