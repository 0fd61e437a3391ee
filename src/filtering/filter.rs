//! filtering::filter — drop missing and known-faulty samples.
//!
//! Purpose
//! -------
//! Produce the cleaned recording that the fitter trains on. Two rules are
//! applied, in this order:
//!
//! 1. angle is exactly zero (either sign): missing data;
//! 2. the sample matches the [`OutlierBand`] fault signature.
//!
//! Invariants & assumptions
//! ------------------------
//! - Kept samples retain their relative order.
//! - `filter(filter(r)) == filter(r)`: a kept sample matches neither rule,
//!   so a second pass keeps it again.
//! - The output carries the input's provenance label.
use crate::{
    filtering::band::OutlierBand,
    telemetry::recording::Recording,
};

/// FilterOutcome — cleaned recording plus per-rule removal counts.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    pub recording: Recording,
    /// Samples dropped for a zero angle.
    pub zero_angle_removed: usize,
    /// Samples dropped by the angle/speed band.
    pub band_removed: usize,
}

impl FilterOutcome {
    pub fn removed(&self) -> usize {
        self.zero_angle_removed + self.band_removed
    }
}

/// Remove zero-angle and band-matching samples from `recording`.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use steering_fit::filtering::{filter, OutlierBand};
/// # use steering_fit::telemetry::Recording;
/// let rec = Recording::new("r", array![10.0, 10.0, 60.0], array![0.0, 0.3, 0.3]).unwrap();
/// let clean = filter(&rec, &OutlierBand::default());
/// assert_eq!(clean.speeds(), &array![60.0]);
/// ```
pub fn filter(recording: &Recording, band: &OutlierBand) -> Recording {
    filter_with_outcome(recording, band).recording
}

/// Same as [`filter`], also reporting how many samples each rule removed.
pub fn filter_with_outcome(recording: &Recording, band: &OutlierBand) -> FilterOutcome {
    let mut speeds = Vec::with_capacity(recording.len());
    let mut angles = Vec::with_capacity(recording.len());
    let mut zero_angle_removed = 0;
    let mut band_removed = 0;

    for sample in recording.samples() {
        if !sample.is_scorable() {
            zero_angle_removed += 1;
        } else if band.rejects(sample.speed, sample.angle) {
            band_removed += 1;
        } else {
            speeds.push(sample.speed);
            angles.push(sample.angle);
        }
    }

    FilterOutcome {
        recording: Recording::from_validated(recording.source().to_string(), speeds, angles),
        zero_angle_removed,
        band_removed,
    }
}
