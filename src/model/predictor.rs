//! model::predictor — evaluate a coefficient vector at arbitrary speeds.
//!
//! Purpose
//! -------
//! Compute `p(x) = Σᵢ cᵢ·xⁱ` for a [`CoefficientVector`], one speed at a
//! time or over whole recordings (the latter feeding plotting and
//! evaluation).
//!
//! Conventions
//! -----------
//! - Coefficients are constant-term first.
//! - Evaluation is the explicit power sum in `f64`, term by term in
//!   ascending power, so `predict(c, 0.0) == c[0]` exactly.
//!
//! Notes
//! -----
//! - Coefficients in the reference model reach 1e-13 while `speed⁶` reaches
//!   1e12 for |speed| ≈ 100, so high-order terms can cancel. That loss of
//!   precision is a property of the monomial basis and is not compensated
//!   here.
use ndarray::Array1;

use crate::{model::coefficients::CoefficientVector, telemetry::recording::Recording};

/// Evaluate the polynomial at `speed`.
///
/// Examples
/// --------
/// ```rust
/// # use steering_fit::model::{predict, CoefficientVector};
/// let c = CoefficientVector::frozen(vec![0.0, 0.00388192460, -0.0000224144143], "trunc").unwrap();
/// let y = predict(&c, 10.0);
/// assert!((y - 0.0365778).abs() < 1e-6);
/// assert_eq!(predict(&c, 0.0), 0.0);
/// ```
#[inline]
pub fn predict(coefficients: &CoefficientVector, speed: f64) -> f64 {
    power_sum(coefficients.as_slice(), speed)
}

/// Evaluate the polynomial at every speed in `speeds`.
pub fn predict_many(coefficients: &CoefficientVector, speeds: &[f64]) -> Array1<f64> {
    let c = coefficients.as_slice();
    speeds.iter().map(|&speed| power_sum(c, speed)).collect()
}

/// `(speed, predicted angle)` pairs for every sample of `recording`, in
/// recording order. This is what a plotting collaborator draws as the
/// fitted curve.
pub fn curve(coefficients: &CoefficientVector, recording: &Recording) -> Vec<(f64, f64)> {
    let c = coefficients.as_slice();
    recording.speeds().iter().map(|&speed| (speed, power_sum(c, speed))).collect()
}

#[inline]
fn power_sum(c: &[f64], x: f64) -> f64 {
    c.iter().enumerate().map(|(i, ci)| ci * x.powi(i as i32)).sum()
}
