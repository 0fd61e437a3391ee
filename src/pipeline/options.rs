//! pipeline::options — configuration bundle for end-to-end runs.

use crate::{
    evaluation::tolerance::ToleranceOptions, filtering::band::OutlierBand,
    model::fitter::FitOptions, telemetry::source::ColumnSpec,
};

/// Pipeline-level configuration.
///
/// Fields:
/// - `columns: ColumnSpec` — speed and angle column names.
/// - `outliers: OutlierBand` — outlier thresholds applied before fitting.
/// - `fit: FitOptions` — polynomial degree.
/// - `tolerance: ToleranceOptions` — accuracy band ratios.
/// - `verbose: bool` — if `true`, logs recording and fit summaries (behind
///   the `obs_slog` feature).
///
/// Constructor:
/// - `new(columns, outliers, fit, tolerance, verbose) -> Self` — assembles
///   already-validated parts; each part validates itself in its own `new`.
///
/// Default:
/// - `columns`: `speed` / `groundsteering`
/// - `outliers`: speed window `[-85, 49]`, angle thresholds `±0.26`
/// - `fit`: degree 6
/// - `tolerance`: `0.75` / `1.25`
/// - `verbose`: `false`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipelineOptions {
    pub columns: ColumnSpec,
    pub outliers: OutlierBand,
    pub fit: FitOptions,
    pub tolerance: ToleranceOptions,
    pub verbose: bool,
}

impl PipelineOptions {
    pub fn new(
        columns: ColumnSpec, outliers: OutlierBand, fit: FitOptions, tolerance: ToleranceOptions,
        verbose: bool,
    ) -> Self {
        PipelineOptions { columns, outliers, fit, tolerance, verbose }
    }

    /// Copy of `self` with `verbose` set.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Verify defaults carry the reference constants.
    fn defaults_match_reference_constants() {
        let opts = PipelineOptions::default();

        assert_eq!(opts.columns, ColumnSpec::new("speed", "groundsteering"));
        assert_eq!(opts.outliers.speed_min, -85.0);
        assert_eq!(opts.outliers.speed_max, 49.0);
        assert_eq!(opts.outliers.positive_angle_threshold, 0.26);
        assert_eq!(opts.outliers.negative_angle_threshold, -0.26);
        assert_eq!(opts.fit.degree, 6);
        assert_eq!(opts.tolerance, ToleranceOptions::new(0.75, 1.25).unwrap());
        assert!(!opts.verbose);
        assert!(opts.verbose(true).verbose);
    }
}
