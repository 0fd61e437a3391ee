//! steering_fit — polynomial speed→steering models with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the steering-model workflow to Python via the `_steering_fit`
//! extension module. The workflow learns a fixed-degree polynomial mapping
//! vehicle speed to ground-steering angle from telemetry recordings, then
//! scores any coefficient vector (fitted or frozen) with an asymmetric
//! tolerance band.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules: `telemetry` (sample store),
//!   `filtering` (outlier removal), `model` (fitter, predictor, coefficient
//!   artifacts), `evaluation` (accuracy), and `pipeline` (orchestration).
//! - Define the `SteeringModel` and `AccuracyOutcome` `#[pyclass]` wrappers
//!   and the `#[pymodule]` initializer for `_steering_fit`.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, input validation, and error mapping.
//! - Coefficients are ordered constant term first on both sides of the
//!   boundary.
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are propagated as rich error types
//!   internally and converted to Python `ValueError`s at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on the inner modules and can
//!   ignore the PyO3 items guarded by the `python-bindings` feature.
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in the inner modules and by the
//!   `tests/` integration suite running the full pipeline on inline data.

pub mod evaluation;
pub mod filtering;
pub mod model;
pub mod pipeline;
pub mod telemetry;
#[cfg(feature = "python-bindings")]
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    evaluation::{
        accuracy::{AccuracyResult, evaluate},
        tolerance::{DEFAULT_LOWER_RATIO, DEFAULT_UPPER_RATIO, ToleranceOptions},
    },
    filtering::{band::OutlierBand, filter::filter},
    model::{
        coefficients::CoefficientVector,
        fitter::{DEFAULT_DEGREE, FitOptions, fit},
        predictor::{predict, predict_many},
    },
    utils::{extract_f64_vec, extract_recording},
};

/// SteeringModel — Python-facing wrapper for a coefficient vector.
///
/// Purpose
/// -------
/// Expose fitting, prediction, and accuracy scoring to Python while keeping
/// the Rust-side invariants of [`CoefficientVector`].
///
/// Key behaviors
/// -------------
/// - `SteeringModel.fit(speeds, angles, degree=6, filter_outliers=True)`
///   cleans (optionally) and fits a new model.
/// - `SteeringModel.frozen(coefficients, label=None)`,
///   `SteeringModel.reference()`, and `SteeringModel.parse(text)` build
///   models from literal coefficients.
/// - `predict`, `predict_many`, and `accuracy` delegate to the core modules.
///
/// Fields
/// ------
/// - `inner`: [`CoefficientVector`]
/// - `r_squared`: `Option<f64>`
///   Coefficient of determination for fitted models; `None` for frozen ones.
///
/// Notes
/// -----
/// - Rust callers should use [`CoefficientVector`] and the free functions in
///   [`model`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "steering_fit")]
pub struct SteeringModel {
    inner: CoefficientVector,
    r_squared: Option<f64>,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl SteeringModel {
    #[staticmethod]
    #[pyo3(
        text_signature = "(speeds, angles, /, degree=6, filter_outliers=True)",
        signature = (speeds, angles, degree = DEFAULT_DEGREE, filter_outliers = true)
    )]
    pub fn fit<'py>(
        py: Python<'py>, speeds: &Bound<'py, PyAny>, angles: &Bound<'py, PyAny>, degree: usize,
        filter_outliers: bool,
    ) -> PyResult<SteeringModel> {
        let recording = extract_recording(py, speeds, angles, "python")?;
        let recording =
            if filter_outliers { filter(&recording, &OutlierBand::default()) } else { recording };
        let fitted = fit(&recording, &FitOptions::new(degree)?)?;
        Ok(SteeringModel { inner: fitted.coefficients, r_squared: fitted.r_squared })
    }

    #[staticmethod]
    #[pyo3(signature = (coefficients, label = None))]
    pub fn frozen<'py>(
        py: Python<'py>, coefficients: &Bound<'py, PyAny>, label: Option<&str>,
    ) -> PyResult<SteeringModel> {
        let values = extract_f64_vec(py, coefficients, "coefficients")?;
        let inner = CoefficientVector::frozen(values.to_vec(), label.unwrap_or("python"))?;
        Ok(SteeringModel { inner, r_squared: None })
    }

    #[staticmethod]
    pub fn reference() -> SteeringModel {
        SteeringModel { inner: CoefficientVector::reference(), r_squared: None }
    }

    /// Build from a literal such as `"[0.0, 0.0038, -2.2e-5]"`.
    #[staticmethod]
    pub fn parse(text: &str) -> PyResult<SteeringModel> {
        let inner: CoefficientVector = text.parse()?;
        Ok(SteeringModel { inner, r_squared: None })
    }

    pub fn predict(&self, speed: f64) -> f64 {
        predict(&self.inner, speed)
    }

    pub fn predict_many<'py>(
        &self, py: Python<'py>, speeds: &Bound<'py, PyAny>,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let speeds = extract_f64_vec(py, speeds, "speeds")?;
        let predictions = predict_many(&self.inner, &speeds.to_vec());
        Ok(predictions.into_pyarray(py))
    }

    /// Tolerance-band accuracy on one recording given as two arrays.
    #[pyo3(
        text_signature = "(self, speeds, angles, /, lower_ratio=0.75, upper_ratio=1.25)",
        signature = (speeds, angles, lower_ratio = DEFAULT_LOWER_RATIO, upper_ratio = DEFAULT_UPPER_RATIO)
    )]
    pub fn accuracy<'py>(
        &self, py: Python<'py>, speeds: &Bound<'py, PyAny>, angles: &Bound<'py, PyAny>,
        lower_ratio: f64, upper_ratio: f64,
    ) -> PyResult<AccuracyOutcome> {
        let recording = extract_recording(py, speeds, angles, "python")?;
        let tolerance = ToleranceOptions::new(lower_ratio, upper_ratio)?;
        let inner = evaluate(&self.inner, &recording, &tolerance)?;
        Ok(AccuracyOutcome { inner })
    }

    #[getter]
    pub fn coefficients(&self) -> Vec<f64> {
        self.inner.as_slice().to_vec()
    }

    #[getter]
    pub fn degree(&self) -> usize {
        self.inner.degree()
    }

    #[getter]
    pub fn provenance(&self) -> String {
        self.inner.provenance().to_string()
    }

    #[getter]
    pub fn r_squared(&self) -> Option<f64> {
        self.r_squared
    }

    pub fn polynomial(&self) -> String {
        self.inner.polynomial()
    }

    pub fn __repr__(&self) -> String {
        format!("SteeringModel({}, {})", self.inner, self.inner.provenance())
    }
}

/// AccuracyOutcome — Python view of an [`AccuracyResult`].
#[cfg(feature = "python-bindings")]
#[pyclass(module = "steering_fit")]
pub struct AccuracyOutcome {
    pub inner: AccuracyResult,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl AccuracyOutcome {
    #[getter]
    pub fn correct(&self) -> usize {
        self.inner.correct
    }

    #[getter]
    pub fn total(&self) -> usize {
        self.inner.total
    }

    #[getter]
    pub fn ratio(&self) -> f64 {
        self.inner.ratio()
    }

    pub fn meets(&self, threshold: f64) -> bool {
        self.inner.meets(threshold)
    }

    pub fn __repr__(&self) -> String {
        format!("AccuracyOutcome({})", self.inner)
    }
}

/// _steering_fit — PyO3 module initializer for the Python extension.
///
/// Errors
/// ------
/// - `PyErr` if registering a class fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _steering_fit(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<SteeringModel>()?;
    m.add_class::<AccuracyOutcome>()?;
    m.add("REFERENCE_COEFFICIENTS", model::coefficients::REFERENCE_COEFFICIENTS.to_vec())?;
    Ok(())
}
