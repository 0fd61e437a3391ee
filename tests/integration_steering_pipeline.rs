//! Integration tests for the steering-model pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end workflow: semicolon-separated telemetry text,
//!   through loading, outlier filtering, and polynomial fitting, to
//!   tolerance-band accuracy on held-out recordings.
//! - Exercise the frozen reference model and the literal interchange format
//!   alongside freshly fitted models.
//!
//! Coverage
//! --------
//! - `telemetry`: `DelimitedTable` parsing (text and file), `load` with
//!   default and custom columns, malformed-data errors.
//! - `filtering` + `model`: pooled training, outlier removal, coefficient
//!   recovery, `FromStr` / `Display` interchange.
//! - `evaluation` + `pipeline`: per-recording accuracy, batch isolation,
//!   the 0.25 acceptance threshold.
//!
//! Exclusions
//! ----------
//! - Python bindings and the `obs_slog` logger; those are feature-gated.
//! - Numerical edge cases of the fitter; covered by unit tests.
use steering_fit::{
    evaluation::{EvalError, ToleranceOptions, evaluate, evaluate_all},
    filtering::{OutlierBand, filter},
    model::{CoefficientVector, ModelError, REFERENCE_COEFFICIENTS, predict},
    pipeline::{PipelineError, PipelineOptions, SteeringPipeline},
    telemetry::{ColumnSpec, DelimitedTable, TelemetryError, load},
};

/// Render a `;`-separated recording with a timestamp column, the speed
/// column, and the ground-steering column, sampled from the reference
/// polynomial scaled by `gain`.
fn reference_table_text(speeds: impl Iterator<Item = f64>, gain: f64) -> String {
    let reference = CoefficientVector::reference();
    let mut text = String::from("sampleTimeStamp.seconds;speed;groundsteering\n");
    for (t, speed) in speeds.enumerate() {
        let angle = gain * predict(&reference, speed);
        text.push_str(&format!("{};{};{}\n", 1_600_000_000 + t, speed, angle));
    }
    text
}

#[test]
// Purpose
// -------
// Run the reference workflow end to end on inline text: two training
// recordings with injected faults, two held-out recordings.
//
// Given
// -----
// - Training text sampled from the reference curve on `[-95, 95]`, plus
//   zero-angle rows and band outliers.
// - Held-out text sampled at other speeds, one with a 10% gain error.
//
// Expect
// ------
// - Faults removed; reference coefficients recovered to 1e-6 relative.
// - Held-out accuracy 1.0 on both (10% is inside the ±25% band).
fn pipeline_fits_and_scores_reference_telemetry() -> anyhow::Result<()> {
    // Arrange
    let mut train_a = reference_table_text((-19..0).map(|k| 5.0 * k as f64), 1.0);
    train_a.push_str("1600000100;12;0\n1600000101;30;0.4\n");
    let mut train_b = reference_table_text((1..=19).map(|k| 5.0 * k as f64), 1.0);
    train_b.push_str("1600000200;-40;-0.31\n1600000201;-7;-0.0\n");
    let held_a = reference_table_text((-12..=12).map(|k| 7.5 * k as f64 + 0.5), 1.0);
    let held_b = reference_table_text((-12..=12).map(|k| 7.5 * k as f64 + 0.5), 1.1);

    let pipeline = SteeringPipeline::new(PipelineOptions::default());
    let training = vec![
        pipeline.load(&DelimitedTable::parse("rec-a", &train_a, ';')?)?,
        pipeline.load(&DelimitedTable::parse("rec-b", &train_b, ';')?)?,
    ];
    let held_out = vec![
        pipeline.load(&DelimitedTable::parse("held-a", &held_a, ';')?)?,
        pipeline.load(&DelimitedTable::parse("held-b", &held_b, ';')?)?,
    ];

    // Act
    let report = pipeline.run(&training, &held_out)?;

    // Assert
    let training = &report.training;
    assert_eq!(training.raw_samples, 42);
    assert_eq!(training.filtered.zero_angle_removed, 2);
    assert_eq!(training.filtered.band_removed, 2);
    assert_eq!(training.model.samples, 38);

    let fitted = training.model.coefficients.as_slice();
    for (i, (&got, want)) in fitted.iter().zip(REFERENCE_COEFFICIENTS).enumerate() {
        let err = (got - want).abs();
        if want == 0.0 {
            assert!(err < 1e-10, "c{i}: got {got}, want 0");
        } else {
            assert!(err <= 1e-6 * want.abs(), "c{i}: got {got}, want {want}");
        }
    }

    for result in &report.accuracy {
        let acc = result.as_ref().map_err(|e| anyhow::anyhow!("{e}"))?;
        assert_eq!(acc.total, 25, "{acc}");
        assert_eq!(acc.ratio(), 1.0, "{acc}");
    }
    assert!(report.all_meet(0.25));
    Ok(())
}

#[test]
// Purpose
// -------
// Verify the frozen reference model passes the 0.25 acceptance check on
// data it describes, and that a literal round-trip scores identically.
fn frozen_reference_model_meets_acceptance_threshold() -> anyhow::Result<()> {
    // Arrange
    let text = reference_table_text((-16..=16).map(|k| 6.0 * k as f64), 0.95);
    let recording = load(&DelimitedTable::parse("held", &text, ';')?, &ColumnSpec::default())?;
    let frozen = CoefficientVector::reference();
    let literal: CoefficientVector = frozen.to_string().parse()?;
    let tolerance = ToleranceOptions::default();

    // Act
    let direct = evaluate(&frozen, &recording, &tolerance)?;
    let via_literal = evaluate(&literal, &recording, &tolerance)?;

    // Assert
    assert_eq!(direct.total, 32);
    assert!(direct.meets(0.25));
    assert_eq!(direct.correct, via_literal.correct);
    assert_eq!(literal.as_slice(), frozen.as_slice());
    Ok(())
}

#[test]
// Purpose
// -------
// Ensure one bad held-out recording never hides the others' results.
//
// Given
// -----
// - Three recordings; the middle one contains only zero angles.
//
// Expect
// ------
// - Results in input order: `Ok`, `Err(NoScorableSamples)`, `Ok`.
fn batch_evaluation_isolates_unscorable_recordings() -> anyhow::Result<()> {
    let good = reference_table_text((1..=5).map(|k| 10.0 * k as f64), 1.0);
    let zeros = "speed;groundsteering\n20;0\n25;-0\n";
    let columns = ColumnSpec::default();
    let recordings = vec![
        load(&DelimitedTable::parse("first", &good, ';')?, &columns)?,
        load(&DelimitedTable::parse("zeros", zeros, ';')?, &columns)?,
        load(&DelimitedTable::parse("last", &good, ';')?, &columns)?,
    ];

    let results = evaluate_all(&CoefficientVector::reference(), &recordings, &Default::default());

    assert_eq!(results.len(), 3);
    assert!(results[0].as_ref().is_ok_and(|acc| acc.ratio() == 1.0));
    assert_eq!(
        results[1].as_ref().unwrap_err(),
        &EvalError::NoScorableSamples { source: "zeros".to_string() }
    );
    assert!(results[2].is_ok());
    Ok(())
}

#[test]
// Purpose
// -------
// Verify malformed input surfaces as telemetry errors through the
// pipeline, and too little clean data as a model error.
fn pipeline_reports_malformed_and_insufficient_data() -> anyhow::Result<()> {
    let pipeline = SteeringPipeline::new(PipelineOptions::default());

    let bad_cell = DelimitedTable::parse("bad", "speed;groundsteering\n10;abc\n", ';')?;
    let short_row = DelimitedTable::parse("short", "speed;groundsteering\n10;0.1\n11\n", ';')?;
    let tiny = DelimitedTable::parse("tiny", "speed;groundsteering\n10;0.1\n20;0.2\n30;0.3\n", ';')?;

    assert_eq!(
        pipeline.load(&bad_cell).unwrap_err(),
        PipelineError::Telemetry(TelemetryError::UnparsableValue {
            column: "groundsteering".to_string(),
            row: 0,
            value: "abc".to_string(),
        })
    );
    assert_eq!(
        pipeline.load(&short_row).unwrap_err(),
        PipelineError::Telemetry(TelemetryError::ColumnLengthMismatch { speeds: 2, angles: 1 })
    );

    // (30, 0.3) falls in the outlier band, leaving two samples.
    let tiny = pipeline.load(&tiny)?;
    assert_eq!(
        pipeline.fit(&[tiny]).unwrap_err(),
        PipelineError::Model(ModelError::InsufficientData { required: 7, available: 2 })
    );
    Ok(())
}

#[test]
// Purpose
// -------
// Verify file loading and a custom outlier band through the pipeline.
fn pipeline_loads_files_and_honours_custom_band() -> anyhow::Result<()> {
    // Arrange
    let path = std::env::temp_dir().join(format!("steering_fit_it_{}.csv", std::process::id()));
    std::fs::write(&path, "speed;groundsteering\n10;0.3\n60;0.3\n20;-0.5\n")?;
    let strict = OutlierBand::new(0.0, 100.0, 0.25, -0.25)?;

    // Act
    let recording = SteeringPipeline::new(PipelineOptions::default()).load_path(&path);
    std::fs::remove_file(&path)?;
    let recording = recording?;

    // Assert
    assert_eq!(recording.len(), 3);
    assert_eq!(filter(&recording, &OutlierBand::default()).len(), 1);
    assert_eq!(filter(&recording, &strict).len(), 0);
    Ok(())
}
