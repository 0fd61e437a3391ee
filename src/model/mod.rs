//! model — polynomial speed→steering models.
//!
//! Purpose
//! -------
//! Fit, represent, and evaluate polynomial models relating speed to
//! ground-steering angle.
//!
//! Key behaviors
//! -------------
//! - [`fit`] solves an ordinary least-squares problem for a fixed degree
//!   and returns a [`FittedModel`].
//! - [`CoefficientVector`] is the versioned model artifact shared by fitted
//!   and frozen models, with a literal interchange format.
//! - [`predict`], [`predict_many`], and [`curve`] evaluate a coefficient
//!   vector.
//!
//! Invariants & assumptions
//! ------------------------
//! - Coefficients are always ordered constant term first; the fitter
//!   produces and the predictor consumes that order.
//! - Computation is in `f64` throughout.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use steering_fit::model::{predict, CoefficientVector};
//!
//! let frozen = CoefficientVector::reference();
//! let angle = predict(&frozen, 35.0);
//! assert!(angle.is_finite());
//! ```

pub mod coefficients;
pub mod errors;
pub mod fitter;
pub mod predictor;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::coefficients::{CoefficientVector, ModelProvenance, REFERENCE_COEFFICIENTS};
pub use self::errors::{ModelError, ModelResult};
pub use self::fitter::{DEFAULT_DEGREE, FitOptions, FittedModel, fit};
pub use self::predictor::{curve, predict, predict_many};
