//! pipeline — configured end-to-end runs over batches of recordings.
//!
//! Purpose
//! -------
//! Tie the telemetry, filtering, model, and evaluation subtrees together
//! behind one options bundle and one umbrella error type.
//!
//! Key behaviors
//! -------------
//! - [`PipelineOptions`] collects every tunable with reference defaults.
//! - [`SteeringPipeline`] loads, fits on pooled training data, and scores
//!   held-out recordings.
//! - [`PipelineError`] absorbs every stage error via `From`.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use steering_fit::pipeline::{PipelineOptions, SteeringPipeline};
//! use steering_fit::telemetry::DelimitedTable;
//!
//! let pipeline = SteeringPipeline::new(PipelineOptions::default());
//! let table = DelimitedTable::parse("rec", "speed;groundsteering\n12;0.05\n", ';')?;
//! let recording = pipeline.load(&table)?;
//! assert_eq!(recording.len(), 1);
//! # Ok::<(), steering_fit::pipeline::PipelineError>(())
//! ```

pub mod errors;
#[cfg(feature = "obs_slog")]
pub mod logging;
pub mod options;
pub mod run;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{PipelineError, PipelineResult};
pub use self::options::PipelineOptions;
pub use self::run::{PipelineReport, SteeringPipeline, TrainingOutcome};
