//! filtering — outlier removal ahead of model fitting.
//!
//! Purpose
//! -------
//! Clean recordings before they reach the polynomial fitter by removing
//! zero-angle rows (missing data) and samples matching a known
//! angle/speed fault signature.
//!
//! Key behaviors
//! -------------
//! - [`OutlierBand`] holds the thresholds as named, validated fields with
//!   reference defaults.
//! - [`filter`] / [`filter_with_outcome`] return a new, order-preserving
//!   recording; the latter also counts removals per rule.
//!
//! Invariants & assumptions
//! ------------------------
//! - Filtering is idempotent.
//! - The filter never fails; configuration errors are caught when the band
//!   is built.

pub mod band;
pub mod errors;
pub mod filter;

pub use self::band::OutlierBand;
pub use self::errors::{FilterError, FilterResult};
pub use self::filter::{FilterOutcome, filter, filter_with_outcome};
