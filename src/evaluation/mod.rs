//! evaluation — tolerance-band accuracy of steering models.
//!
//! Purpose
//! -------
//! Measure, per recording, the fraction of non-zero-angle samples whose
//! predicted angle falls inside an asymmetric band around the recorded
//! angle.
//!
//! Key behaviors
//! -------------
//! - [`ToleranceOptions`] / [`ToleranceBand`] define the sign-aware band.
//! - [`evaluate`], [`evaluate_observed`], and [`evaluate_all`] produce
//!   [`AccuracyResult`] values.
//! - [`EvalObserver`] receives a [`SampleReport`] per scored sample for
//!   interactive progress output.
//!
//! Invariants & assumptions
//! ------------------------
//! - Zero angles are never scored.
//! - Results are independent per recording; batch scoring never aborts on
//!   one bad recording.

pub mod accuracy;
pub mod errors;
pub mod report;
pub mod tolerance;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::accuracy::{AccuracyResult, evaluate, evaluate_all, evaluate_observed};
pub use self::errors::{EvalError, EvalResult};
#[cfg(feature = "obs_slog")]
pub use self::report::SlogObserver;
pub use self::report::{EvalObserver, SampleReport, Silent};
pub use self::tolerance::{
    DEFAULT_LOWER_RATIO, DEFAULT_UPPER_RATIO, ToleranceBand, ToleranceOptions,
};
