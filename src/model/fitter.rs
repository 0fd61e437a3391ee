//! model::fitter — ordinary least-squares polynomial fit.
//!
//! Purpose
//! -------
//! Fit `angle ≈ Σᵢ cᵢ·speedⁱ` (i = 0..=degree) to a recording by minimizing
//! the sum of squared residuals, returning a [`FittedModel`] whose
//! coefficient vector the predictor can evaluate directly.
//!
//! Key behaviors
//! -------------
//! - Skips zero-angle samples (missing data) even if the caller did not
//!   filter them out.
//! - Builds the Vandermonde design matrix, scales each column to unit
//!   Euclidean norm, and solves with an SVD (`nalgebra`). Column scaling is
//!   what keeps degree-6 fits on speeds around ±100 well conditioned.
//! - Rejects rank-deficient designs instead of returning an arbitrary
//!   minimum-norm solution.
//! - Reports residual sum of squares and R² alongside the coefficients.
//!
//! Invariants & assumptions
//! ------------------------
//! - `degree >= 1`.
//! - At least `degree + 1` non-zero-angle samples are required.
//! - Singular values below `max σ · n · ε` count as zero, mirroring the
//!   usual `rcond = n·ε` convention for polynomial least squares.
//! - Every design entry and column norm must be finite; overflow is
//!   reported before the SVD, and the SVD itself runs under an iteration
//!   cap, so `fit` always terminates.
//! - Coefficients come back constant term first.
//!
//! Testing notes
//! -------------
//! - Unit tests recover known polynomials from noise-free data (including
//!   the reference degree-6 model over ±100), check the error paths
//!   (degree 0, too few samples, zero angles not counted, rank deficiency),
//!   and verify residual statistics on an exact line.
use nalgebra::{DMatrix, DVector, SVD};
use ndarray::Array1;
use statrs::statistics::Statistics;

use crate::{
    model::{
        coefficients::{CoefficientVector, ModelProvenance},
        errors::{ModelError, ModelResult},
        predictor::predict,
    },
    telemetry::recording::{Recording, Sample},
};

/// Degree used by the reference steering model.
pub const DEFAULT_DEGREE: usize = 6;

/// Upper bound on SVD sweeps; a well-scaled design converges in far fewer.
const SVD_MAX_ITERATIONS: usize = 10_000;

/// FitOptions — polynomial fit configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitOptions {
    /// Highest exponent of the fitted polynomial.
    pub degree: usize,
}

impl FitOptions {
    /// Errors
    /// ------
    /// - `ModelError::InvalidDegree` when `degree == 0`.
    pub fn new(degree: usize) -> ModelResult<Self> {
        if degree == 0 {
            return Err(ModelError::InvalidDegree { degree });
        }
        Ok(FitOptions { degree })
    }
}

impl Default for FitOptions {
    fn default() -> Self {
        FitOptions { degree: DEFAULT_DEGREE }
    }
}

/// FittedModel — coefficients plus goodness-of-fit diagnostics.
///
/// Fields
/// ------
/// - `coefficients`: fitted [`CoefficientVector`] tagged
///   `ModelProvenance::Fitted`.
/// - `residual_sum_squares`: Σ (angle − prediction)² over fitted samples.
/// - `r_squared`: `1 − RSS/TSS`, or `None` when all fitted angles are equal.
/// - `samples`: number of samples used (zero angles excluded).
#[derive(Debug, Clone, PartialEq)]
pub struct FittedModel {
    pub coefficients: CoefficientVector,
    pub residual_sum_squares: f64,
    pub r_squared: Option<f64>,
    pub samples: usize,
}

/// Fit a least-squares polynomial of `options.degree` to `recording`.
///
/// Parameters
/// ----------
/// - `recording`: `&Recording`
///   Training samples; normally the output of the outlier filter. Zero
///   angles are skipped here as well.
/// - `options`: `&FitOptions`
///   Polynomial degree.
///
/// Returns
/// -------
/// `ModelResult<FittedModel>`
///   Coefficients `c₀..c_degree` (constant first) with provenance
///   `Fitted { source: recording.source(), degree, samples }`.
///
/// Errors
/// ------
/// - `ModelError::InvalidDegree` when `degree == 0`.
/// - `ModelError::InsufficientData { required, available }` when fewer
///   than `degree + 1` usable samples remain.
/// - `ModelError::RankDeficient { rank, required }` when the speeds do not
///   determine a unique polynomial (e.g. fewer distinct speeds than
///   coefficients).
/// - `ModelError::DesignOverflow { power }` when a speed is so large that
///   `speed^power` (or its column norm) overflows `f64`.
/// - `ModelError::Decomposition` / `ModelError::NonFiniteCoefficient` on
///   numerical failure of the solve.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::Array1;
/// # use steering_fit::model::{fit, FitOptions};
/// # use steering_fit::telemetry::Recording;
/// let speeds: Array1<f64> = (1..=10).map(f64::from).collect();
/// let angles = speeds.mapv(|x| 0.1 + 0.01 * x);
/// let rec = Recording::new("line", speeds, angles).unwrap();
/// let fitted = fit(&rec, &FitOptions::new(1).unwrap()).unwrap();
/// let c = fitted.coefficients.as_slice();
/// assert!((c[0] - 0.1).abs() < 1e-10 && (c[1] - 0.01).abs() < 1e-10);
/// ```
pub fn fit(recording: &Recording, options: &FitOptions) -> ModelResult<FittedModel> {
    let degree = options.degree;
    if degree == 0 {
        return Err(ModelError::InvalidDegree { degree });
    }
    let k = degree + 1;

    let n = recording.scorable_len();
    if n < k {
        return Err(ModelError::InsufficientData { required: k, available: n });
    }
    let (xs, ys): (Vec<f64>, Vec<f64>) =
        recording.samples().filter(Sample::is_scorable).map(|s| (s.speed, s.angle)).unzip();

    let (design, scales) = scaled_vandermonde(&xs, k)?;
    let rhs = DVector::from_column_slice(&ys);

    let svd = SVD::try_new(design, true, true, f64::EPSILON, SVD_MAX_ITERATIONS).ok_or_else(|| {
        ModelError::Decomposition { reason: "SVD did not converge".to_string() }
    })?;
    let tol = svd.singular_values.max() * n as f64 * f64::EPSILON;
    let rank = svd.rank(tol);
    if rank < k {
        return Err(ModelError::RankDeficient { rank, required: k });
    }
    let scaled = svd
        .solve(&rhs, tol)
        .map_err(|reason| ModelError::Decomposition { reason: reason.to_string() })?;

    let values: Array1<f64> = scaled.iter().zip(&scales).map(|(c, s)| c / s).collect();
    let coefficients = CoefficientVector::new(
        values,
        ModelProvenance::Fitted { source: recording.source().to_string(), degree, samples: n },
    )?;

    let residual_sum_squares: f64 = xs
        .iter()
        .zip(&ys)
        .map(|(&x, &y)| (y - predict(&coefficients, x)).powi(2))
        .sum();
    let r_squared = coefficient_of_determination(&ys, residual_sum_squares);

    Ok(FittedModel { coefficients, residual_sum_squares, r_squared, samples: n })
}

/// Vandermonde matrix `[xⁱʲ]` (n × k) with each column divided by its
/// Euclidean norm. Returns the matrix and the norms (1.0 for zero columns)
/// so the solution can be unscaled.
///
/// Errors
/// ------
/// - `ModelError::DesignOverflow { power }` when a power `xʲ` or a column
///   norm is not representable in `f64`.
fn scaled_vandermonde(xs: &[f64], k: usize) -> ModelResult<(DMatrix<f64>, Vec<f64>)> {
    let n = xs.len();
    let mut design = DMatrix::<f64>::zeros(n, k);
    for (row, &x) in xs.iter().enumerate() {
        let mut power: f64 = 1.0;
        for col in 0..k {
            if !power.is_finite() {
                return Err(ModelError::DesignOverflow { power: col });
            }
            design[(row, col)] = power;
            power *= x;
        }
    }

    let mut scales = Vec::with_capacity(k);
    for col in 0..k {
        let norm = design.column(col).norm();
        if !norm.is_finite() {
            return Err(ModelError::DesignOverflow { power: col });
        }
        let scale = if norm > 0.0 { norm } else { 1.0 };
        for row in 0..n {
            design[(row, col)] /= scale;
        }
        scales.push(scale);
    }
    Ok((design, scales))
}

fn coefficient_of_determination(ys: &[f64], rss: f64) -> Option<f64> {
    let mean = Statistics::mean(ys.iter());
    let tss: f64 = ys.iter().map(|y| (y - mean).powi(2)).sum();
    if tss > 0.0 { Some(1.0 - rss / tss) } else { None }
}
