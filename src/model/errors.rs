//! model::errors — failures while building or fitting coefficient vectors.
//!
//! Purpose
//! -------
//! Collect the error conditions of the polynomial model: invalid fit
//! requests (degree, sample count), numerical degeneracies in the least
//! squares solve, and malformed literal coefficient lists.
//!
//! Conventions
//! -----------
//! - `InsufficientData` is the "underdetermined fit" error: fewer scorable
//!   samples than coefficients.
//! - Linear-algebra failures reported by `nalgebra` as `&'static str` are
//!   stored as owned strings.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type ModelResult<T> = Result<T, ModelError>;

/// ModelError — polynomial model construction and fitting failures.
///
/// Variants
/// --------
/// - `InvalidDegree { degree }`
///   Fit degree must be at least 1.
/// - `InsufficientData { required, available }`
///   Fewer non-zero-angle samples than `degree + 1`.
/// - `RankDeficient { rank, required }`
///   The design matrix does not have full column rank (e.g. every sample
///   shares one speed).
/// - `DesignOverflow { power }`
///   A speed raised to `power`, or the norm of that design column, is not
///   representable in `f64`.
/// - `Decomposition { reason }`
///   The SVD solve failed.
/// - `NonFiniteCoefficient { index, value }`
///   A coefficient (fitted or supplied) is NaN/±∞.
/// - `EmptyCoefficients`
///   A coefficient vector needs at least the constant term.
/// - `InvalidCoefficientList { token }`
///   A literal list contained a token that is not a real number.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    // ---- Fit request ----
    InvalidDegree { degree: usize },
    InsufficientData { required: usize, available: usize },

    // ---- Numerical ----
    RankDeficient { rank: usize, required: usize },
    DesignOverflow { power: usize },
    Decomposition { reason: String },
    NonFiniteCoefficient { index: usize, value: f64 },

    // ---- Coefficient vectors ----
    EmptyCoefficients,
    InvalidCoefficientList { token: String },
}

impl std::error::Error for ModelError {}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::InvalidDegree { degree } => {
                write!(f, "Polynomial degree must be at least 1; got {degree}.")
            }
            ModelError::InsufficientData { required, available } => {
                write!(
                    f,
                    "Insufficient data: fit needs at least {required} samples, got {available}."
                )
            }
            ModelError::RankDeficient { rank, required } => {
                write!(f, "Design matrix is rank deficient: rank {rank}, need {required}.")
            }
            ModelError::DesignOverflow { power } => {
                write!(f, "Design matrix overflows f64 at speed^{power}; speeds are too large.")
            }
            ModelError::Decomposition { reason } => {
                write!(f, "Least-squares solve failed: {reason}")
            }
            ModelError::NonFiniteCoefficient { index, value } => {
                write!(f, "Coefficient at index {index} is non-finite: {value}")
            }
            ModelError::EmptyCoefficients => {
                write!(f, "Coefficient vector must contain at least the constant term.")
            }
            ModelError::InvalidCoefficientList { token } => {
                write!(f, "Invalid coefficient list: {token:?} is not a real number.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<ModelError> for PyErr {
    fn from(err: ModelError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
