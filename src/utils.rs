//! utils — PyO3 conversion helpers shared by the Python bindings.
//!
//! Only compiled with feature `python-bindings`.

use ndarray::Array1;
use numpy::{IntoPyArray, PyArrayMethods, PyReadonlyArray1};
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

use crate::telemetry::recording::Recording;

/// Borrow or copy a Python array-like as a contiguous `f64` array.
///
/// Accepts a 1-D `numpy.ndarray`, anything with a `to_numpy()` method
/// (e.g. `pandas.Series`), or a plain sequence of floats.
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Copy a Python array-like into an owned `Array1<f64>`.
pub fn extract_f64_vec<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>, name: &str,
) -> PyResult<Array1<f64>> {
    let arr = extract_f64_array(py, raw_data)?;
    let slice = arr.as_slice().map_err(|_| {
        PyValueError::new_err(format!("{name} must be a 1-D contiguous float64 array or sequence"))
    })?;
    Ok(Array1::from(slice.to_vec()))
}

/// Build a validated [`Recording`] from paired speed / angle array-likes.
pub fn extract_recording<'py>(
    py: Python<'py>, speeds: &Bound<'py, PyAny>, angles: &Bound<'py, PyAny>, source: &str,
) -> PyResult<Recording> {
    let speeds = extract_f64_vec(py, speeds, "speeds")?;
    let angles = extract_f64_vec(py, angles, "angles")?;
    Ok(Recording::new(source, speeds, angles)?)
}
