//! Coefficient vectors — the versioned polynomial model artifact.
//!
//! Purpose
//! -------
//! Represent a polynomial `c₀ + c₁·x + … + cₙ·xⁿ` as an immutable,
//! validated coefficient vector tagged with where it came from. Fitting
//! produces one; frozen models are supplied literally. Both paths feed the
//! same predictor, so a vector's ordering and provenance travel with it.
//!
//! Key behaviors
//! -------------
//! - [`CoefficientVector::new`] enforces non-emptiness and finiteness.
//! - [`ModelProvenance`] records whether the vector was fitted (source
//!   recording, degree, sample count) or frozen (a caller label).
//! - `FromStr` / `Display` implement the literal interchange format
//!   `[c0, c1, …]`; `Display` round-trips exactly.
//! - [`CoefficientVector::polynomial`] renders `y = c0 + c1x + c2x^2 …`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Index 0 is the constant term. This ordering is the contract between
//!   fitter and predictor and is never reversed.
//! - `len() >= 1`; `degree() == len() - 1`.
//! - All coefficients are finite.
//!
//! Testing notes
//! -------------
//! - Unit tests cover validation, literal parsing (comma and whitespace
//!   separated, bracketed or not), exact Display round-trip, and the
//!   rendered polynomial.
use std::str::FromStr;

use ndarray::Array1;

use crate::model::errors::{ModelError, ModelResult};

/// Coefficients of the reference frozen steering model, constant term first.
pub const REFERENCE_COEFFICIENTS: [f64; 7] = [
    0.00000000e+00,
    3.88192460e-03,
    -2.24144143e-05,
    -5.07314594e-07,
    7.27527660e-09,
    3.34496405e-11,
    -5.53052388e-13,
];

/// Label attached to [`CoefficientVector::reference`].
pub const REFERENCE_LABEL: &str = "reference-degree-6";

/// Where a coefficient vector came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelProvenance {
    /// Produced by the least-squares fitter.
    Fitted { source: String, degree: usize, samples: usize },
    /// Supplied literally by the caller.
    Frozen { label: String },
}

impl std::fmt::Display for ModelProvenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelProvenance::Fitted { source, degree, samples } => {
                write!(f, "fitted on {source} (degree {degree}, {samples} samples)")
            }
            ModelProvenance::Frozen { label } => write!(f, "frozen {label}"),
        }
    }
}

/// CoefficientVector — validated polynomial coefficients plus provenance.
///
/// Fields
/// ------
/// - `values`: `Array1<f64>`
///   Coefficients `c₀..cₙ`, constant term first; finite, non-empty.
/// - `provenance`: [`ModelProvenance`]
///   Version tag for the artifact.
///
/// Notes
/// -----
/// - Equality compares both coefficients and provenance; use
///   [`CoefficientVector::as_slice`] to compare values only.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientVector {
    values: Array1<f64>,
    provenance: ModelProvenance,
}

impl CoefficientVector {
    /// Construct a validated coefficient vector.
    ///
    /// Errors
    /// ------
    /// - `ModelError::EmptyCoefficients` when `values` is empty.
    /// - `ModelError::NonFiniteCoefficient { index, value }` for the first
    ///   NaN/±∞ entry.
    pub fn new(values: Array1<f64>, provenance: ModelProvenance) -> ModelResult<Self> {
        if values.is_empty() {
            return Err(ModelError::EmptyCoefficients);
        }
        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(ModelError::NonFiniteCoefficient { index, value });
            }
        }
        Ok(CoefficientVector { values, provenance })
    }

    /// A frozen model from a literal list.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use steering_fit::model::CoefficientVector;
    /// let model = CoefficientVector::frozen(vec![0.0, 3.88192460e-03, -2.24144143e-05], "v2").unwrap();
    /// assert_eq!(model.degree(), 2);
    /// ```
    pub fn frozen(values: Vec<f64>, label: impl Into<String>) -> ModelResult<Self> {
        CoefficientVector::new(Array1::from(values), ModelProvenance::Frozen { label: label.into() })
    }

    /// The reference degree-6 frozen model.
    pub fn reference() -> Self {
        CoefficientVector {
            values: Array1::from(REFERENCE_COEFFICIENTS.to_vec()),
            provenance: ModelProvenance::Frozen { label: REFERENCE_LABEL.to_string() },
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        self.values.as_slice().unwrap_or(&[])
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    pub fn provenance(&self) -> &ModelProvenance {
        &self.provenance
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false` for a validated vector.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Highest exponent, `len() - 1`.
    pub fn degree(&self) -> usize {
        self.values.len() - 1
    }

    /// Render as `y = c0 + c1x + c2x^2 + …`.
    pub fn polynomial(&self) -> String {
        let mut out = String::from("y = ");
        for (i, c) in self.values.iter().enumerate() {
            match i {
                0 => out.push_str(&format!("{c}")),
                1 => out.push_str(&format!(" + {c}x")),
                _ => out.push_str(&format!(" + {c}x^{i}")),
            }
        }
        out
    }
}

impl std::fmt::Display for CoefficientVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c:e}")?;
        }
        write!(f, "]")
    }
}

/// Parse `[c0, c1, …]`, `c0, c1, …` or whitespace-separated lists.
/// Parsed vectors are frozen with label `literal`.
impl FromStr for CoefficientVector {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(trimmed);

        let values = inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|_| ModelError::InvalidCoefficientList { token: token.to_string() })
            })
            .collect::<ModelResult<Vec<f64>>>()?;

        CoefficientVector::frozen(values, "literal")
    }
}
