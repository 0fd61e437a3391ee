//! Errors for outlier-band configuration.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type FilterResult<T> = Result<T, FilterError>;

/// Invalid [`OutlierBand`](crate::filtering::band::OutlierBand) settings.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    /// A bound is NaN/±∞, the speed band is inverted, or an angle threshold
    /// has the wrong sign.
    InvalidBand { field: &'static str, value: f64, reason: &'static str },
}

impl std::error::Error for FilterError {}

impl std::fmt::Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterError::InvalidBand { field, value, reason } => {
                write!(f, "Invalid outlier band: {field} = {value}. {reason}")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<FilterError> for PyErr {
    fn from(err: FilterError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
