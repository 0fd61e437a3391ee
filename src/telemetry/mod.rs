//! telemetry — sample store for speed / ground-steering recordings.
//!
//! Purpose
//! -------
//! Own the boundary where raw tabular telemetry enters the crate. Everything
//! downstream works on validated [`Recording`] values and never re-checks
//! lengths or finiteness.
//!
//! Key behaviors
//! -------------
//! - [`load`] coerces two named columns of a [`TabularSource`] into a
//!   [`Recording`].
//! - [`DelimitedTable`] reads the semicolon-separated reference format.
//! - [`TelemetryError`] is the malformed-data error family.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use steering_fit::telemetry::{load, ColumnSpec, DelimitedTable};
//!
//! let table = DelimitedTable::parse("rec", "speed;groundsteering\n12;0.05\n", ';')?;
//! let recording = load(&table, &ColumnSpec::default())?;
//! assert_eq!(recording.len(), 1);
//! # Ok::<(), steering_fit::telemetry::TelemetryError>(())
//! ```
//!
//! Testing notes
//! -------------
//! - [`recording`] tests cover construction invariants and summaries.
//! - [`source`] tests cover parsing and coercion failures.

pub mod errors;
pub mod recording;
pub mod source;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{TelemetryError, TelemetryResult};
pub use self::recording::{ChannelSummary, Recording, RecordingSummary, Sample};
pub use self::source::{ColumnSpec, DelimitedTable, TabularSource, load};
