//! Moon age to a whole-day bucket, illumination percentage and phase name.
//!
//! The 30 buckets map to eight names as follows (bucket = whole days since
//! new moon):
//!
//! | buckets | name            |
//! |---------|-----------------|
//! | 0       | new             |
//! | 1-5     | waxing crescent |
//! | 6-8     | first quarter   |
//! | 9-14    | waxing gibbous  |
//! | 15-16   | full            |
//! | 17-21   | waning gibbous  |
//! | 22-23   | last quarter    |
//! | 24-28   | waning crescent |
//! | 29      | new             |
//!
//! Breakpoints 0, 6, 9, 15, 17, 22, 24, 30 follow the historical 30-glyph
//! phase string, with full moon starting at bucket 15 so that it agrees
//! with `is_full`.

use crate::lunar_elements::SYNODIC_MONTH;

/// Symbolic moon phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseName {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl PhaseName {
    pub fn name(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::WaxingCrescent => "waxing-crescent",
            Self::FirstQuarter => "first-quarter",
            Self::WaxingGibbous => "waxing-gibbous",
            Self::Full => "full",
            Self::WaningGibbous => "waning-gibbous",
            Self::LastQuarter => "last-quarter",
            Self::WaningCrescent => "waning-crescent",
        }
    }

    /// Moon phase emoji.
    pub fn glyph(self) -> char {
        match self {
            Self::New => '\u{1F311}',
            Self::WaxingCrescent => '\u{1F312}',
            Self::FirstQuarter => '\u{1F313}',
            Self::WaxingGibbous => '\u{1F314}',
            Self::Full => '\u{1F315}',
            Self::WaningGibbous => '\u{1F316}',
            Self::LastQuarter => '\u{1F317}',
            Self::WaningCrescent => '\u{1F318}',
        }
    }
}

use PhaseName::*;

/// Phase name for each whole day of the lunation.
#[rustfmt::skip]
pub const PHASE_TABLE: [PhaseName; 30] = [
    New,
    WaxingCrescent, WaxingCrescent, WaxingCrescent, WaxingCrescent, WaxingCrescent,
    FirstQuarter, FirstQuarter, FirstQuarter,
    WaxingGibbous, WaxingGibbous, WaxingGibbous, WaxingGibbous, WaxingGibbous, WaxingGibbous,
    Full, Full,
    WaningGibbous, WaningGibbous, WaningGibbous, WaningGibbous, WaningGibbous,
    LastQuarter, LastQuarter,
    WaningCrescent, WaningCrescent, WaningCrescent, WaningCrescent, WaningCrescent,
    New,
];

/// Bucket holding the full moon.
pub const FULL_MOON_BUCKET: u32 = 15;

/// Classified moon age.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseBucket {
    /// Whole days since new moon, [0, 29].
    pub bucket: u32,
    /// `bucket / SYNODIC_MONTH * 100`, [0, 100).
    pub percent: f64,
    pub is_full: bool,
    pub name: PhaseName,
}

/// Classify a moon age in days.
///
/// Ages below 0 (or NaN) fall into bucket 0 and ages of 29 or more into
/// bucket 29.
pub fn classify(age_days: f64) -> PhaseBucket {
    let bucket = if age_days >= 29.0 {
        29
    } else if age_days > 0.0 {
        age_days.floor() as u32
    } else {
        0
    };
    PhaseBucket {
        bucket,
        percent: bucket as f64 / SYNODIC_MONTH * 100.0,
        is_full: bucket == FULL_MOON_BUCKET,
        name: PHASE_TABLE[bucket as usize],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_breakpoints() {
        let starts: Vec<usize> = (1..30)
            .filter(|&i| PHASE_TABLE[i] != PHASE_TABLE[i - 1])
            .collect();
        assert_eq!(starts, vec![1, 6, 9, 15, 17, 22, 24, 29]);
        assert_eq!(PHASE_TABLE[0], New);
        assert_eq!(PHASE_TABLE[29], New);
    }

    #[test]
    fn full_bucket() {
        for age in [15.0, 15.3, 15.999] {
            let b = classify(age);
            assert!(b.is_full, "age {age}");
            assert_eq!(b.name, Full);
        }
        assert!(!classify(14.999).is_full);
        assert!(!classify(16.0).is_full);
        assert_eq!(classify(16.0).name, Full);
    }

    #[test]
    fn bucket_and_percent_ranges() {
        let mut age = -1.0;
        while age < 31.0 {
            let b = classify(age);
            assert!(b.bucket <= 29, "age {age}");
            assert!((0.0..100.0).contains(&b.percent), "age {age}: {}", b.percent);
            age += 0.07;
        }
    }

    #[test]
    fn percent_uses_whole_days() {
        let b = classify(7.9);
        assert_eq!(b.bucket, 7);
        assert!((b.percent - 7.0 / SYNODIC_MONTH * 100.0).abs() < 1e-12);
    }

    #[test]
    fn end_of_lunation_is_new() {
        let b = classify(SYNODIC_MONTH - 1e-9);
        assert_eq!(b.bucket, 29);
        assert_eq!(b.name, New);
        assert_eq!(classify(0.2).name, New);
    }

    #[test]
    fn nan_age_is_bucket_zero() {
        assert_eq!(classify(f64::NAN).bucket, 0);
    }

    #[test]
    fn glyphs_are_distinct() {
        let names = [
            New,
            WaxingCrescent,
            FirstQuarter,
            WaxingGibbous,
            Full,
            WaningGibbous,
            LastQuarter,
            WaningCrescent,
        ];
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(a.glyph(), b.glyph());
                assert_ne!(a.name(), b.name());
            }
        }
    }
}
