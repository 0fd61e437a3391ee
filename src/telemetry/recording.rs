//! Sample and recording containers for steering telemetry.
//!
//! Purpose
//! -------
//! Provide validated containers for `(speed, angle)` telemetry. A
//! [`Recording`] holds two parallel `ndarray` columns that came from one
//! source, and is the unit every downstream stage (filtering, fitting,
//! evaluation) consumes.
//!
//! Key behaviors
//! -------------
//! - [`Recording::new`] enforces equal column lengths and finite values.
//! - [`Sample::is_scorable`] encodes the "zero angle means missing" rule in
//!   one place so the fitter, filter and evaluator agree on it.
//! - [`Recording::concat`] joins recordings for pooled fits.
//! - [`Recording::summary`] reports min/max/mean per channel.
//!
//! Invariants & assumptions
//! ------------------------
//! - `speeds.len() == angles.len()`.
//! - Every stored value is finite.
//! - Recordings may be empty (e.g. after filtering); stages that need data
//!   report that through their own errors.
//! - A recording is never mutated after construction; derived recordings
//!   are new values.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based and follows source row order.
//! - Angles of `0.0` and `-0.0` compare equal, so `angle == 0.0` covers
//!   both signs.
//!
//! Testing notes
//! -------------
//! - Unit tests cover construction (happy path, length mismatch,
//!   non-finite values), concatenation order, scorability of signed zeros,
//!   and summary statistics.
use crate::telemetry::errors::{TelemetryError, TelemetryResult};
use ndarray::Array1;
use statrs::statistics::Statistics;

/// Column labels used when a constructor-level value check fails.
const SPEED_LABEL: &str = "speed";
const ANGLE_LABEL: &str = "angle";

/// `Sample` — one `(speed, angle)` observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Wheel/steering speed reading.
    pub speed: f64,
    /// Ground-steering angle reading.
    pub angle: f64,
}

impl Sample {
    pub fn new(speed: f64, angle: f64) -> Sample {
        Sample { speed, angle }
    }

    /// `false` for angles of exactly zero (either sign), which mark
    /// missing data and are neither fitted nor scored.
    #[inline]
    pub fn is_scorable(&self) -> bool {
        self.angle != 0.0
    }
}

/// `Recording` — validated telemetry sequence with a provenance label.
///
/// Purpose
/// -------
/// Represent the ordered samples of one source (typically one CSV file) as
/// two parallel columns, so numerical code can work on contiguous arrays
/// while callers can still iterate over [`Sample`] values.
///
/// Fields
/// ------
/// - `source`: `String`
///   Provenance label (file name or any caller-chosen tag).
/// - `speeds`: `Array1<f64>`
///   Speed column; finite values.
/// - `angles`: `Array1<f64>`
///   Ground-steering column; finite values, same length as `speeds`.
///
/// Invariants
/// ----------
/// - `speeds.len() == angles.len()`.
/// - All entries are finite.
///
/// Performance
/// -----------
/// - Construction is a single O(n) validation scan.
/// - Derived recordings (`filter`, `concat`) allocate new columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Recording {
    source: String,
    speeds: Array1<f64>,
    angles: Array1<f64>,
}

impl Recording {
    /// Construct a validated [`Recording`] from two parallel columns.
    ///
    /// Parameters
    /// ----------
    /// - `source`: `impl Into<String>`
    ///   Provenance label carried into models and accuracy results.
    /// - `speeds`: `Array1<f64>`
    ///   Speed readings in source order.
    /// - `angles`: `Array1<f64>`
    ///   Ground-steering readings in source order.
    ///
    /// Returns
    /// -------
    /// `TelemetryResult<Recording>`
    ///   - `Ok(Recording)` when lengths match and all values are finite.
    ///
    /// Errors
    /// ------
    /// - `TelemetryError::ColumnLengthMismatch { speeds, angles }`
    ///   Returned when the two columns differ in length.
    /// - `TelemetryError::NonFiniteValue { column, row, value }`
    ///   Returned for the first NaN/±∞ found, speeds checked before angles
    ///   within each row.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use steering_fit::telemetry::Recording;
    /// let rec = Recording::new("demo", array![10.0, 20.0], array![0.04, -0.1]).unwrap();
    /// assert_eq!(rec.len(), 2);
    /// assert_eq!(rec.source(), "demo");
    /// ```
    pub fn new(
        source: impl Into<String>, speeds: Array1<f64>, angles: Array1<f64>,
    ) -> TelemetryResult<Self> {
        if speeds.len() != angles.len() {
            return Err(TelemetryError::ColumnLengthMismatch {
                speeds: speeds.len(),
                angles: angles.len(),
            });
        }

        for (row, (&speed, &angle)) in speeds.iter().zip(angles.iter()).enumerate() {
            if !speed.is_finite() {
                return Err(TelemetryError::NonFiniteValue {
                    column: SPEED_LABEL.to_string(),
                    row,
                    value: speed,
                });
            }
            if !angle.is_finite() {
                return Err(TelemetryError::NonFiniteValue {
                    column: ANGLE_LABEL.to_string(),
                    row,
                    value: angle,
                });
            }
        }

        Ok(Recording { source: source.into(), speeds, angles })
    }

    /// Join recordings end to end, preserving each one's internal order.
    ///
    /// The reference workflow fits one model on the union of all available
    /// recordings; this is that union. Inputs were already validated, so
    /// the result is too.
    pub fn concat(source: impl Into<String>, parts: &[Recording]) -> Recording {
        let total: usize = parts.iter().map(Recording::len).sum();
        let mut speeds = Vec::with_capacity(total);
        let mut angles = Vec::with_capacity(total);
        for part in parts {
            speeds.extend(part.speeds.iter().copied());
            angles.extend(part.angles.iter().copied());
        }
        Recording::from_validated(source.into(), speeds, angles)
    }

    /// Build from columns already known to satisfy the invariants (a subset
    /// of another recording's samples).
    pub(crate) fn from_validated(source: String, speeds: Vec<f64>, angles: Vec<f64>) -> Recording {
        debug_assert_eq!(speeds.len(), angles.len());
        Recording { source, speeds: Array1::from(speeds), angles: Array1::from(angles) }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn speeds(&self) -> &Array1<f64> {
        &self.speeds
    }

    pub fn angles(&self) -> &Array1<f64> {
        &self.angles
    }

    pub fn len(&self) -> usize {
        self.speeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speeds.is_empty()
    }

    /// Iterate over samples in source order.
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.speeds.iter().zip(self.angles.iter()).map(|(&speed, &angle)| Sample { speed, angle })
    }

    /// Number of samples with a non-zero angle.
    pub fn scorable_len(&self) -> usize {
        self.samples().filter(Sample::is_scorable).count()
    }

    /// Per-channel min/max/mean, or `None` for an empty recording.
    pub fn summary(&self) -> Option<RecordingSummary> {
        if self.is_empty() {
            return None;
        }
        Some(RecordingSummary {
            samples: self.len(),
            speed: ChannelSummary::of(&self.speeds),
            angle: ChannelSummary::of(&self.angles),
        })
    }
}

/// Min/max/mean of one channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl ChannelSummary {
    fn of(values: &Array1<f64>) -> ChannelSummary {
        ChannelSummary {
            min: Statistics::min(values.iter()),
            max: Statistics::max(values.iter()),
            mean: Statistics::mean(values.iter()),
        }
    }
}

/// Descriptive statistics of a non-empty recording.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordingSummary {
    pub samples: usize,
    pub speed: ChannelSummary,
    pub angle: ChannelSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Recording::new` validation (lengths, finiteness).
    // - Signed-zero handling in `Sample::is_scorable`.
    // - `concat` ordering and `summary` statistics.
    //
    // They intentionally DO NOT cover:
    // - Parsing from text sources (see `telemetry::source`).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `Recording::new` keeps both columns and the label as given.
    //
    // Given
    // -----
    // - `speeds = [1, 2, 3]`, `angles = [0.1, 0.0, -0.2]`, label "r1".
    //
    // Expect
    // ------
    // - `Ok(..)` with identical columns and label.
    fn recording_new_returns_ok_for_valid_columns() {
        // Arrange
        let speeds = array![1.0, 2.0, 3.0];
        let angles = array![0.1, 0.0, -0.2];

        // Act
        let rec = Recording::new("r1", speeds.clone(), angles.clone())
            .expect("valid columns should construct a Recording");

        // Assert
        assert_eq!(rec.speeds(), &speeds);
        assert_eq!(rec.angles(), &angles);
        assert_eq!(rec.source(), "r1");
        assert_eq!(rec.len(), 3);
    }

    #[test]
    // Purpose
    // -------
    // Ensure mismatched column lengths are rejected with both lengths.
    //
    // Given
    // -----
    // - 3 speeds and 2 angles.
    //
    // Expect
    // ------
    // - `Err(ColumnLengthMismatch { speeds: 3, angles: 2 })`.
    fn recording_new_rejects_length_mismatch() {
        let result = Recording::new("r", array![1.0, 2.0, 3.0], array![0.1, 0.2]);

        assert_eq!(
            result.unwrap_err(),
            TelemetryError::ColumnLengthMismatch { speeds: 3, angles: 2 }
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure a NaN angle is rejected and located.
    //
    // Given
    // -----
    // - `angles = [0.1, NaN]`.
    //
    // Expect
    // ------
    // - `Err(NonFiniteValue { column: "angle", row: 1, .. })`.
    fn recording_new_rejects_non_finite_angle() {
        let err = Recording::new("r", array![1.0, 2.0], array![0.1, f64::NAN]).unwrap_err();

        match err {
            TelemetryError::NonFiniteValue { column, row, value } => {
                assert_eq!(column, "angle");
                assert_eq!(row, 1);
                assert!(value.is_nan());
            }
            other => panic!("expected NonFiniteValue, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that both signed zeros are treated as missing angles.
    //
    // Given
    // -----
    // - Samples with angle `0.0`, `-0.0`, and `1e-9`.
    //
    // Expect
    // ------
    // - Only the `1e-9` sample is scorable, and `scorable_len` counts 1.
    fn sample_is_scorable_rejects_both_signed_zeros() {
        let rec = Recording::new("z", array![10.0, 10.0, 10.0], array![0.0, -0.0, 1e-9]).unwrap();

        assert!(!Sample::new(10.0, 0.0).is_scorable());
        assert!(!Sample::new(10.0, -0.0).is_scorable());
        assert!(Sample::new(10.0, 1e-9).is_scorable());
        assert_eq!(rec.scorable_len(), 1);
    }

    #[test]
    // Purpose
    // -------
    // Verify that `concat` appends recordings in argument order.
    //
    // Given
    // -----
    // - `a = [(1, 0.1)]`, `b = [(2, 0.2), (3, 0.3)]`.
    //
    // Expect
    // ------
    // - Speeds `[1, 2, 3]`, angles `[0.1, 0.2, 0.3]`, label "all".
    fn concat_preserves_order_across_parts() {
        // Arrange
        let a = Recording::new("a", array![1.0], array![0.1]).unwrap();
        let b = Recording::new("b", array![2.0, 3.0], array![0.2, 0.3]).unwrap();

        // Act
        let all = Recording::concat("all", &[a, b]);

        // Assert
        assert_eq!(all.speeds(), &array![1.0, 2.0, 3.0]);
        assert_eq!(all.angles(), &array![0.1, 0.2, 0.3]);
        assert_eq!(all.source(), "all");
    }

    #[test]
    // Purpose
    // -------
    // Verify min/max/mean per channel and `None` for empty input.
    //
    // Given
    // -----
    // - `speeds = [-10, 0, 40]`, `angles = [-0.2, 0.1, 0.4]`.
    //
    // Expect
    // ------
    // - Speed min -10, max 40, mean 10; angle min -0.2, max 0.4.
    // - An empty recording has no summary.
    fn summary_reports_channel_extremes_and_mean() {
        // Arrange
        let rec = Recording::new("r", array![-10.0, 0.0, 40.0], array![-0.2, 0.1, 0.4]).unwrap();
        let empty = Recording::new("e", array![], array![]).unwrap();

        // Act
        let summary = rec.summary().expect("non-empty recording has a summary");

        // Assert
        assert_eq!(summary.samples, 3);
        assert_eq!(summary.speed.min, -10.0);
        assert_eq!(summary.speed.max, 40.0);
        assert!((summary.speed.mean - 10.0).abs() < 1e-12);
        assert_eq!(summary.angle.min, -0.2);
        assert_eq!(summary.angle.max, 0.4);
        assert!(empty.summary().is_none());
    }
}
