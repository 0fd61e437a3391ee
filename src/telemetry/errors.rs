//! telemetry::errors — malformed-data errors raised while ingesting recordings.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the sample store. Every
//! variant describes a way a tabular source can fail to become a valid
//! [`Recording`](crate::telemetry::recording::Recording): missing columns,
//! cells that do not coerce to finite reals, or speed/angle columns of
//! different lengths.
//!
//! Key behaviors
//! -------------
//! - Attach the offending column name, 0-based data-row index, and raw cell
//!   text to value-level failures so a bad file can be fixed by hand.
//! - Implement `Display`/`Error` so the type composes with `?` and with the
//!   crate-wide [`PipelineError`](crate::pipeline::errors::PipelineError).
//! - Convert to a Python `ValueError` when `python-bindings` is enabled.
//!
//! Conventions
//! -----------
//! - Row indices count data rows only (the header row is not row 0).
//! - I/O failures are flattened to a `String` reason so the enum stays
//!   `Clone + PartialEq` like the rest of the crate's errors.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for sample-store operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;

/// TelemetryError — malformed-data conditions for telemetry ingestion.
///
/// Variants
/// --------
/// - `EmptySource`
///   The source has no header row at all.
/// - `MissingColumn { column }`
///   A required column is not present in the header.
/// - `UnparsableValue { column, row, value }`
///   A cell could not be coerced to `f64` (empty cells included).
/// - `NonFiniteValue { column, row, value }`
///   A cell coerced to NaN or ±∞.
/// - `ColumnLengthMismatch { speeds, angles }`
///   The speed and angle sequences have different lengths.
/// - `Io { reason }`
///   The underlying reader failed.
#[derive(Debug, Clone, PartialEq)]
pub enum TelemetryError {
    // ---- Source structure ----
    EmptySource,
    MissingColumn { column: String },

    // ---- Cell coercion ----
    UnparsableValue { column: String, row: usize, value: String },
    NonFiniteValue { column: String, row: usize, value: f64 },

    // ---- Recording invariants ----
    ColumnLengthMismatch { speeds: usize, angles: usize },

    // ---- Reader ----
    Io { reason: String },
}

impl std::error::Error for TelemetryError {}

impl std::fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TelemetryError::EmptySource => {
                write!(f, "Malformed data: source has no header row.")
            }
            TelemetryError::MissingColumn { column } => {
                write!(f, "Malformed data: required column {column:?} is missing.")
            }
            TelemetryError::UnparsableValue { column, row, value } => {
                write!(
                    f,
                    "Malformed data: column {column:?} row {row} holds {value:?}, which is not a real number."
                )
            }
            TelemetryError::NonFiniteValue { column, row, value } => {
                write!(f, "Malformed data: column {column:?} row {row} is non-finite: {value}")
            }
            TelemetryError::ColumnLengthMismatch { speeds, angles } => {
                write!(
                    f,
                    "Malformed data: speed column has {speeds} values but angle column has {angles}."
                )
            }
            TelemetryError::Io { reason } => write!(f, "Malformed data: read failed: {reason}"),
        }
    }
}

impl From<std::io::Error> for TelemetryError {
    fn from(err: std::io::Error) -> Self {
        TelemetryError::Io { reason: err.to_string() }
    }
}

#[cfg(feature = "python-bindings")]
impl From<TelemetryError> for PyErr {
    fn from(err: TelemetryError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Verify that value-level errors name the column, row, and raw cell.
    //
    // Given
    // -----
    // - `UnparsableValue { column: "speed", row: 7, value: "abc" }`.
    //
    // Expect
    // ------
    // - The `Display` message contains all three payload items.
    fn unparsable_value_display_includes_column_row_and_cell() {
        // Arrange
        let err = TelemetryError::UnparsableValue {
            column: "speed".to_string(),
            row: 7,
            value: "abc".to_string(),
        };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("speed"), "missing column in: {msg}");
        assert!(msg.contains('7'), "missing row in: {msg}");
        assert!(msg.contains("abc"), "missing cell in: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure `std::io::Error` converts into `TelemetryError::Io` and keeps
    // the reader's message.
    //
    // Given
    // -----
    // - An `io::Error` of kind `NotFound` with message "no such recording".
    //
    // Expect
    // ------
    // - The converted error is `Io` and its reason carries the message.
    fn io_error_converts_and_keeps_reason() {
        // Arrange
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such recording");

        // Act
        let err = TelemetryError::from(io);

        // Assert
        match err {
            TelemetryError::Io { reason } => assert!(reason.contains("no such recording")),
            other => panic!("expected Io, got {other:?}"),
        }
    }
}
