//! pipeline::run — `load → filter → fit → evaluate` orchestration.
//!
//! Purpose
//! -------
//! Drive the reference workflow over batches of recordings: the training
//! recordings are concatenated, cleaned, and fitted once; the resulting
//! (or any frozen) coefficient vector is then scored on each held-out
//! recording independently.
//!
//! Key behaviors
//! -------------
//! - [`SteeringPipeline::load`] / [`SteeringPipeline::load_path`] read
//!   recordings with the configured column names.
//! - [`SteeringPipeline::fit`] returns a [`TrainingOutcome`] (fitted model
//!   plus filter counts).
//! - [`SteeringPipeline::evaluate`] returns one result per recording.
//! - [`SteeringPipeline::run`] chains both into a [`PipelineReport`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Training failures abort the run; held-out failures do not.
//! - If the `obs_slog` feature is enabled and `options.verbose == true`, a
//!   terminal slog logger records the training summary, the fitted
//!   polynomial, and one record per scored held-out sample.
use std::path::Path;

#[cfg(feature = "obs_slog")]
use crate::evaluation::{accuracy::evaluate_observed, report::SlogObserver};
use crate::{
    evaluation::{
        accuracy::{AccuracyResult, evaluate},
        errors::EvalResult,
    },
    filtering::filter::{FilterOutcome, filter_with_outcome},
    model::{
        coefficients::CoefficientVector,
        fitter::{FittedModel, fit},
    },
    pipeline::{errors::PipelineResult, options::PipelineOptions},
    telemetry::{
        recording::Recording,
        source::{DEFAULT_DELIMITER, DelimitedTable, TabularSource, load},
    },
};

/// TrainingOutcome — result of the fitting half of the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingOutcome {
    /// Samples in the concatenated training recording before filtering.
    pub raw_samples: usize,
    /// Cleaned training data and per-rule removal counts.
    pub filtered: FilterOutcome,
    pub model: FittedModel,
}

/// PipelineReport — training outcome plus per-recording accuracy.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineReport {
    pub training: TrainingOutcome,
    /// One entry per held-out recording, in input order.
    pub accuracy: Vec<EvalResult<AccuracyResult>>,
}

impl PipelineReport {
    /// `true` when every held-out recording was scored and reached
    /// `threshold`.
    pub fn all_meet(&self, threshold: f64) -> bool {
        self.accuracy.iter().all(|res| res.as_ref().is_ok_and(|acc| acc.meets(threshold)))
    }
}

/// SteeringPipeline — configured entry point for end-to-end runs.
#[derive(Clone)]
pub struct SteeringPipeline {
    options: PipelineOptions,
    #[cfg(feature = "obs_slog")]
    logger: Option<slog::Logger>,
}

impl SteeringPipeline {
    /// Build a pipeline. With `obs_slog` and `options.verbose`, a terminal
    /// logger is attached.
    pub fn new(options: PipelineOptions) -> Self {
        #[cfg(feature = "obs_slog")]
        let logger = options.verbose.then(crate::pipeline::logging::term_logger);
        SteeringPipeline {
            options,
            #[cfg(feature = "obs_slog")]
            logger,
        }
    }

    /// Replace the attached logger (e.g. a test or file drain).
    #[cfg(feature = "obs_slog")]
    pub fn with_logger(mut self, logger: slog::Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Load one recording from any tabular source.
    ///
    /// Errors
    /// ------
    /// - `PipelineError::Telemetry` for missing columns or malformed cells.
    pub fn load<S: TabularSource>(&self, source: &S) -> PipelineResult<Recording> {
        Ok(load(source, &self.options.columns)?)
    }

    /// Load one `;`-separated recording from disk.
    pub fn load_path(&self, path: impl AsRef<Path>) -> PipelineResult<Recording> {
        let table = DelimitedTable::from_path(path, DEFAULT_DELIMITER)?;
        self.load(&table)
    }

    /// Concatenate, filter, and fit the training recordings.
    ///
    /// Parameters
    /// ----------
    /// - `training`: `&[Recording]`
    ///   Recordings to pool; their provenance labels are joined with `+`.
    ///
    /// Errors
    /// ------
    /// - `PipelineError::Model` from the fitter (`InsufficientData` when the
    ///   cleaned pool is too small, `RankDeficient`, ...).
    pub fn fit(&self, training: &[Recording]) -> PipelineResult<TrainingOutcome> {
        let label = training.iter().map(Recording::source).collect::<Vec<_>>().join("+");
        let pooled = Recording::concat(label, training);
        let filtered = filter_with_outcome(&pooled, &self.options.outliers);

        #[cfg(feature = "obs_slog")]
        self.log_training(&pooled, &filtered);

        let model = fit(&filtered.recording, &self.options.fit)?;

        #[cfg(feature = "obs_slog")]
        self.log_model(&model);

        Ok(TrainingOutcome { raw_samples: pooled.len(), filtered, model })
    }

    /// Score `coefficients` on each held-out recording.
    ///
    /// Held-out data is not outlier-filtered; zero angles are skipped by the
    /// evaluator.
    pub fn evaluate(
        &self, coefficients: &CoefficientVector, held_out: &[Recording],
    ) -> Vec<EvalResult<AccuracyResult>> {
        held_out.iter().map(|recording| self.evaluate_one(coefficients, recording)).collect()
    }

    /// Fit on `training`, then score the fitted model on `held_out`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::Array1;
    /// # use steering_fit::pipeline::{PipelineOptions, SteeringPipeline};
    /// # use steering_fit::model::FitOptions;
    /// # use steering_fit::telemetry::Recording;
    /// let speeds: Array1<f64> = (1..=20).map(f64::from).collect();
    /// let angles = speeds.mapv(|s| 0.01 + 0.002 * s);
    /// let rec = Recording::new("line", speeds, angles).unwrap();
    /// let opts = PipelineOptions { fit: FitOptions::new(1).unwrap(), ..Default::default() };
    /// let report = SteeringPipeline::new(opts).run(&[rec.clone()], &[rec]).unwrap();
    /// assert!(report.all_meet(0.99));
    /// ```
    pub fn run(
        &self, training: &[Recording], held_out: &[Recording],
    ) -> PipelineResult<PipelineReport> {
        let training = self.fit(training)?;
        let accuracy = self.evaluate(&training.model.coefficients, held_out);
        Ok(PipelineReport { training, accuracy })
    }

    // ---- Helper Methods ----

    fn evaluate_one(
        &self, coefficients: &CoefficientVector, recording: &Recording,
    ) -> EvalResult<AccuracyResult> {
        #[cfg(feature = "obs_slog")]
        if let Some(logger) = &self.logger {
            let child = logger.new(slog::o!("recording" => recording.source().to_string()));
            let mut observer = SlogObserver::new(child);
            return evaluate_observed(
                coefficients,
                recording,
                &self.options.tolerance,
                &mut observer,
            );
        }
        evaluate(coefficients, recording, &self.options.tolerance)
    }

    #[cfg(feature = "obs_slog")]
    fn log_training(&self, pooled: &Recording, filtered: &FilterOutcome) {
        let Some(logger) = &self.logger else { return };
        if let Some(summary) = pooled.summary() {
            slog::info!(logger, "training data";
                "source" => pooled.source(),
                "samples" => summary.samples,
                "speed_min" => summary.speed.min,
                "speed_max" => summary.speed.max,
                "speed_mean" => summary.speed.mean,
                "angle_min" => summary.angle.min,
                "angle_max" => summary.angle.max,
                "angle_mean" => summary.angle.mean
            );
        }
        slog::info!(logger, "outliers removed";
            "zero_angle" => filtered.zero_angle_removed,
            "band" => filtered.band_removed,
            "kept" => filtered.recording.len()
        );
    }

    #[cfg(feature = "obs_slog")]
    fn log_model(&self, model: &FittedModel) {
        let Some(logger) = &self.logger else { return };
        slog::info!(logger, "fitted {}", model.coefficients.polynomial();
            "provenance" => %model.coefficients.provenance(),
            "coefficients" => %model.coefficients,
            "rss" => model.residual_sum_squares,
            "r_squared" => model.r_squared
        );
    }
}
