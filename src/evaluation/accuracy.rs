//! evaluation::accuracy — tolerance-band accuracy of a coefficient vector.
//!
//! Purpose
//! -------
//! Score how often a model's predicted angle lands inside the tolerance
//! band of the recorded angle, per recording.
//!
//! Key behaviors
//! -------------
//! - [`evaluate`] returns an [`AccuracyResult`] (`correct / total`).
//! - [`evaluate_observed`] does the same and reports each scored sample to
//!   an [`EvalObserver`].
//! - [`evaluate_all`] scores a batch; each recording succeeds or fails on
//!   its own.
//!
//! Invariants & assumptions
//! ------------------------
//! - Zero-angle samples are skipped entirely: counted neither in `total`
//!   nor in `correct`.
//! - `0 <= correct <= total` and `total >= 1` for every returned result,
//!   so the ratio lies in `[0, 1]`.
//! - A recording with no scorable samples yields
//!   `EvalError::NoScorableSamples`, never NaN.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the truncated-model scenario at speed 10, zero-angle
//!   skipping, the all-zero error, negative angles, observer reports, and
//!   batch isolation.
use crate::{
    evaluation::{
        errors::{EvalError, EvalResult},
        report::{EvalObserver, SampleReport, Silent},
        tolerance::ToleranceOptions,
    },
    model::{coefficients::CoefficientVector, predictor::predict},
    telemetry::recording::Recording,
};

/// AccuracyResult — tolerance-band hit rate on one recording.
#[derive(Debug, Clone, PartialEq)]
pub struct AccuracyResult {
    /// Provenance of the scored recording.
    pub source: String,
    pub correct: usize,
    /// Scored samples (zero angles excluded); always `>= 1`.
    pub total: usize,
}

impl AccuracyResult {
    /// `correct / total`, in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        self.correct as f64 / self.total as f64
    }

    /// Whether the ratio reaches `threshold` (the reference acceptance
    /// check uses 0.25).
    pub fn meets(&self, threshold: f64) -> bool {
        self.ratio() >= threshold
    }
}

impl std::fmt::Display for AccuracyResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}/{} ({:.4})", self.source, self.correct, self.total, self.ratio())
    }
}

/// Score `coefficients` against `recording`.
///
/// Parameters
/// ----------
/// - `coefficients`: `&CoefficientVector`
///   Fitted or frozen model.
/// - `recording`: `&Recording`
///   Held-out samples; not filtered here beyond the zero-angle skip.
/// - `tolerance`: `&ToleranceOptions`
///   Band ratios.
///
/// Errors
/// ------
/// - `EvalError::NoScorableSamples` when every angle is zero (or the
///   recording is empty).
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use steering_fit::evaluation::{evaluate, ToleranceOptions};
/// # use steering_fit::model::CoefficientVector;
/// # use steering_fit::telemetry::Recording;
/// let model = CoefficientVector::frozen(vec![0.0, 0.00388192460, -0.0000224144143], "t").unwrap();
/// let rec = Recording::new("r", array![10.0], array![0.04]).unwrap();
/// let acc = evaluate(&model, &rec, &ToleranceOptions::default()).unwrap();
/// assert_eq!(acc.ratio(), 1.0);
/// ```
pub fn evaluate(
    coefficients: &CoefficientVector, recording: &Recording, tolerance: &ToleranceOptions,
) -> EvalResult<AccuracyResult> {
    evaluate_observed(coefficients, recording, tolerance, &mut Silent)
}

/// [`evaluate`], reporting every scored sample to `observer`.
pub fn evaluate_observed<O: EvalObserver + ?Sized>(
    coefficients: &CoefficientVector, recording: &Recording, tolerance: &ToleranceOptions,
    observer: &mut O,
) -> EvalResult<AccuracyResult> {
    let mut correct = 0usize;
    let mut total = 0usize;

    for (index, sample) in recording.samples().enumerate() {
        if !sample.is_scorable() {
            continue;
        }
        total += 1;

        let prediction = predict(coefficients, sample.speed);
        let band = tolerance.band(sample.angle);
        let within_band = band.contains(prediction);
        if within_band {
            correct += 1;
        }

        observer.observe(&SampleReport {
            index,
            speed: sample.speed,
            angle: sample.angle,
            prediction,
            band,
            within_band,
            running_accuracy: correct as f64 / total as f64,
        });
    }

    if total == 0 {
        return Err(EvalError::NoScorableSamples { source: recording.source().to_string() });
    }
    Ok(AccuracyResult { source: recording.source().to_string(), correct, total })
}

/// Score `coefficients` against each recording independently.
///
/// The output has one entry per input, in input order; a failing
/// recording does not affect the others.
pub fn evaluate_all(
    coefficients: &CoefficientVector, recordings: &[Recording], tolerance: &ToleranceOptions,
) -> Vec<EvalResult<AccuracyResult>> {
    recordings.iter().map(|recording| evaluate(coefficients, recording, tolerance)).collect()
}
