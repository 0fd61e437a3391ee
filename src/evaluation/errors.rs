//! evaluation::errors — accuracy scoring failures.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type EvalResult<T> = Result<T, EvalError>;

/// EvalError — conditions that prevent an accuracy ratio from being formed.
///
/// Variants
/// --------
/// - `NoScorableSamples { source }`
///   Every sample of the recording had a zero angle, so the ratio would be
///   `0 / 0`.
/// - `InvalidTolerance { lower_ratio, upper_ratio, reason }`
///   Tolerance ratios are non-finite, negative, or inverted.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    NoScorableSamples { source: String },
    InvalidTolerance { lower_ratio: f64, upper_ratio: f64, reason: &'static str },
}

impl std::error::Error for EvalError {}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::NoScorableSamples { source } => {
                write!(f, "Recording {source:?} has no scorable samples (all angles are zero).")
            }
            EvalError::InvalidTolerance { lower_ratio, upper_ratio, reason } => {
                write!(
                    f,
                    "Invalid tolerance ratios (lower {lower_ratio}, upper {upper_ratio}): {reason}"
                )
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<EvalError> for PyErr {
    fn from(err: EvalError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
