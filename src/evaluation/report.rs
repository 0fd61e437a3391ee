//! evaluation::report — per-sample reporting hooks for accuracy runs.
//!
//! Purpose
//! -------
//! Let interactive callers watch an evaluation sample by sample without
//! changing what the evaluator returns. Each scored sample produces a
//! [`SampleReport`], handed to an [`EvalObserver`].
//!
//! Key behaviors
//! -------------
//! - `SampleReport`'s `Display` is the human-readable line
//!   `Speed: s | Angle: a | Prediction: p | accuracy r`.
//! - Any `FnMut(&SampleReport)` closure is an observer.
//! - With feature `obs_slog`, [`SlogObserver`] writes one structured
//!   `slog` record per sample.
//!
//! Conventions
//! -----------
//! - Skipped (zero-angle) samples produce no report.
//! - `running_accuracy` is `correct / scored` over the samples reported so
//!   far, including the current one.
use crate::evaluation::tolerance::ToleranceBand;

/// SampleReport — outcome of scoring one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleReport {
    /// 0-based row in the recording (skipped rows keep their index).
    pub index: usize,
    pub speed: f64,
    pub angle: f64,
    pub prediction: f64,
    pub band: ToleranceBand,
    /// Whether `prediction` fell inside `band`.
    pub within_band: bool,
    pub running_accuracy: f64,
}

impl std::fmt::Display for SampleReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Speed: {} | Angle: {} | Prediction: {} | accuracy {}",
            self.speed, self.angle, self.prediction, self.running_accuracy
        )
    }
}

/// Receiver of per-sample reports.
pub trait EvalObserver {
    fn observe(&mut self, report: &SampleReport);
}

impl<F> EvalObserver for F
where
    F: FnMut(&SampleReport),
{
    fn observe(&mut self, report: &SampleReport) {
        self(report)
    }
}

/// Observer that discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl EvalObserver for Silent {
    fn observe(&mut self, _report: &SampleReport) {}
}

/// Observer that logs each report through a `slog::Logger`.
#[cfg(feature = "obs_slog")]
pub struct SlogObserver {
    logger: slog::Logger,
}

#[cfg(feature = "obs_slog")]
impl SlogObserver {
    pub fn new(logger: slog::Logger) -> Self {
        SlogObserver { logger }
    }

    /// Non-blocking terminal logger, the same setup the pipeline uses for
    /// its own summaries.
    pub fn term() -> Self {
        SlogObserver::new(crate::pipeline::logging::term_logger())
    }
}

#[cfg(feature = "obs_slog")]
impl EvalObserver for SlogObserver {
    fn observe(&mut self, report: &SampleReport) {
        slog::info!(self.logger, "{}", report;
            "index" => report.index,
            "within_band" => report.within_band,
            "lower" => report.band.lower,
            "upper" => report.band.upper
        );
    }
}
