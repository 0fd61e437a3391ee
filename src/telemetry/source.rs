//! telemetry::source — tabular sources and the recording loader.
//!
//! Purpose
//! -------
//! Turn a generic table of text cells into a validated [`Recording`]. The
//! loader only needs two named columns, so any table-like input can be
//! plugged in through the [`TabularSource`] trait; [`DelimitedTable`] is the
//! small delimited-text reader used for the reference recordings
//! (semicolon-separated, one header row).
//!
//! Key behaviors
//! -------------
//! - [`load`] extracts the speed and angle columns named by a
//!   [`ColumnSpec`], coerces every cell to `f64`, and validates the result
//!   through [`Recording::new`].
//! - [`DelimitedTable`] parses text with a configurable delimiter, ignores
//!   blank lines, strips surrounding double quotes, and keeps short rows
//!   short so that ragged input surfaces as a column-length mismatch.
//!
//! Invariants & assumptions
//! ------------------------
//! - Column lookup is by exact (trimmed) header name.
//! - Extra columns are ignored.
//! - Cells are trimmed before coercion; empty cells are unparsable.
//!
//! Conventions
//! -----------
//! - Row indices in errors are 0-based data-row indices.
//! - Quoting is limited to a single pair of surrounding `"`; delimiters
//!   inside quotes are not supported.
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use ndarray::Array1;

use crate::telemetry::{
    errors::{TelemetryError, TelemetryResult},
    recording::Recording,
};

/// Default speed column in the reference recordings.
pub const DEFAULT_SPEED_COLUMN: &str = "speed";
/// Default ground-steering column in the reference recordings.
pub const DEFAULT_ANGLE_COLUMN: &str = "groundsteering";
/// Field delimiter used by the reference recordings.
pub const DEFAULT_DELIMITER: char = ';';

/// A table of named text columns with a provenance label.
///
/// Implementors return the cells of one column in row order. A column that
/// is present but shorter than its siblings is allowed; the loader checks
/// lengths.
pub trait TabularSource {
    /// Provenance label for recordings built from this source.
    fn provenance(&self) -> &str;

    /// Cells of the column named `name`, or `None` if absent.
    fn column(&self, name: &str) -> Option<Vec<&str>>;
}

/// ColumnSpec — which columns hold speed and ground-steering angle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub speed: String,
    pub angle: String,
}

impl ColumnSpec {
    pub fn new(speed: impl Into<String>, angle: impl Into<String>) -> ColumnSpec {
        ColumnSpec { speed: speed.into(), angle: angle.into() }
    }
}

impl Default for ColumnSpec {
    fn default() -> Self {
        ColumnSpec::new(DEFAULT_SPEED_COLUMN, DEFAULT_ANGLE_COLUMN)
    }
}

/// Load a [`Recording`] from a tabular source.
///
/// Parameters
/// ----------
/// - `source`: `&S where S: TabularSource`
///   Table to read. Only the two columns named in `columns` are touched.
/// - `columns`: `&ColumnSpec`
///   Names of the speed and angle columns.
///
/// Returns
/// -------
/// `TelemetryResult<Recording>`
///   A validated recording labelled with `source.provenance()`.
///
/// Errors
/// ------
/// - `TelemetryError::MissingColumn` when either column is absent.
/// - `TelemetryError::UnparsableValue` for the first cell that is not a
///   real number (speed column scanned first).
/// - `TelemetryError::NonFiniteValue` for cells such as `NaN` or `inf`.
/// - `TelemetryError::ColumnLengthMismatch` when the columns differ in
///   length.
///
/// Examples
/// --------
/// ```rust
/// # use steering_fit::telemetry::{load, ColumnSpec, DelimitedTable};
/// let table = DelimitedTable::parse("demo", "speed;groundsteering\n10;0.04\n-20;-0.1\n", ';')
///     .unwrap();
/// let rec = load(&table, &ColumnSpec::default()).unwrap();
/// assert_eq!(rec.len(), 2);
/// ```
pub fn load<S: TabularSource>(source: &S, columns: &ColumnSpec) -> TelemetryResult<Recording> {
    let speeds = coerce_column(source, &columns.speed)?;
    let angles = coerce_column(source, &columns.angle)?;
    Recording::new(source.provenance(), speeds, angles)
}

fn coerce_column<S: TabularSource>(source: &S, name: &str) -> TelemetryResult<Array1<f64>> {
    let cells = source
        .column(name)
        .ok_or_else(|| TelemetryError::MissingColumn { column: name.to_string() })?;

    let mut values = Vec::with_capacity(cells.len());
    for (row, cell) in cells.iter().enumerate() {
        let trimmed = cell.trim();
        let value: f64 = trimmed.parse().map_err(|_| TelemetryError::UnparsableValue {
            column: name.to_string(),
            row,
            value: trimmed.to_string(),
        })?;
        if !value.is_finite() {
            return Err(TelemetryError::NonFiniteValue { column: name.to_string(), row, value });
        }
        values.push(value);
    }
    Ok(Array1::from(values))
}

/// DelimitedTable — in-memory table parsed from delimited text.
///
/// Fields
/// ------
/// - `provenance`: label (usually the file name).
/// - `headers`: trimmed, unquoted header names.
/// - `rows`: data rows; each may be shorter or longer than `headers`.
#[derive(Debug, Clone, PartialEq)]
pub struct DelimitedTable {
    provenance: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl DelimitedTable {
    /// Parse delimited text held in memory.
    ///
    /// Errors
    /// ------
    /// - `TelemetryError::EmptySource` when the text has no non-blank line.
    pub fn parse(
        provenance: impl Into<String>, text: &str, delimiter: char,
    ) -> TelemetryResult<Self> {
        let mut lines = text.lines().filter(|line| !line.trim().is_empty());
        let header = lines.next().ok_or(TelemetryError::EmptySource)?;
        let headers = split_fields(header, delimiter);
        let rows = lines.map(|line| split_fields(line, delimiter)).collect();
        Ok(DelimitedTable { provenance: provenance.into(), headers, rows })
    }

    /// Parse delimited text from any buffered reader.
    pub fn from_reader<R: BufRead>(
        provenance: impl Into<String>, reader: R, delimiter: char,
    ) -> TelemetryResult<Self> {
        let mut text = String::new();
        for line in reader.lines() {
            text.push_str(&line?);
            text.push('\n');
        }
        DelimitedTable::parse(provenance, &text, delimiter)
    }

    /// Read and parse a file; the provenance label is the file name.
    pub fn from_path(path: impl AsRef<Path>, delimiter: char) -> TelemetryResult<Self> {
        let path = path.as_ref();
        let provenance = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let file = File::open(path)?;
        DelimitedTable::from_reader(provenance, BufReader::new(file), delimiter)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl TabularSource for DelimitedTable {
    fn provenance(&self) -> &str {
        &self.provenance
    }

    fn column(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.headers.iter().position(|header| header == name)?;
        Some(self.rows.iter().filter_map(|row| row.get(index).map(String::as_str)).collect())
    }
}

fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter).map(|field| unquote(field.trim()).to_string()).collect()
}

fn unquote(field: &str) -> &str {
    field
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `DelimitedTable` parsing (delimiter, quotes, blank lines, ragged rows).
    // - `load` column extraction, coercion errors, and length checks.
    //
    // They intentionally DO NOT cover:
    // - `from_path`, which only adds file opening on top of `from_reader`.
    // -------------------------------------------------------------------------

    const REFERENCE_TEXT: &str = "\
sampleTimeStamp;speed;groundsteering
1;10;0.04
2;-20.5;-0.1

3;\"30\";0
";

    #[test]
    // Purpose
    // -------
    // Verify the happy path: extra columns ignored, quotes stripped, blank
    // lines skipped.
    //
    // Given
    // -----
    // - `REFERENCE_TEXT` with a timestamp column, a quoted speed cell, and
    //   a blank line.
    //
    // Expect
    // ------
    // - Speeds `[10, -20.5, 30]`, angles `[0.04, -0.1, 0]`, label "ref".
    fn load_extracts_named_columns_from_delimited_text() {
        // Arrange
        let table = DelimitedTable::parse("ref", REFERENCE_TEXT, ';').unwrap();

        // Act
        let rec = load(&table, &ColumnSpec::default()).expect("reference text should load");

        // Assert
        assert_eq!(rec.speeds(), &array![10.0, -20.5, 30.0]);
        assert_eq!(rec.angles(), &array![0.04, -0.1, 0.0]);
        assert_eq!(rec.source(), "ref");
        assert_eq!(table.row_count(), 3);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a missing column is reported by name.
    //
    // Given
    // -----
    // - A table with only `speed`.
    //
    // Expect
    // ------
    // - `Err(MissingColumn { column: "groundsteering" })`.
    fn load_reports_missing_angle_column() {
        let table = DelimitedTable::parse("t", "speed\n1\n", ';').unwrap();

        let err = load(&table, &ColumnSpec::default()).unwrap_err();

        assert_eq!(err, TelemetryError::MissingColumn { column: "groundsteering".to_string() });
    }

    #[test]
    // Purpose
    // -------
    // Ensure an uncoercible cell is reported with column, row and text.
    //
    // Given
    // -----
    // - Second data row has speed "fast".
    //
    // Expect
    // ------
    // - `Err(UnparsableValue { column: "speed", row: 1, value: "fast" })`.
    fn load_reports_unparsable_cell() {
        let table =
            DelimitedTable::parse("t", "speed;groundsteering\n1;0.1\nfast;0.2\n", ';').unwrap();

        let err = load(&table, &ColumnSpec::default()).unwrap_err();

        assert_eq!(
            err,
            TelemetryError::UnparsableValue {
                column: "speed".to_string(),
                row: 1,
                value: "fast".to_string(),
            }
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure textual NaN is rejected rather than silently loaded.
    //
    // Given
    // -----
    // - An angle cell "NaN".
    //
    // Expect
    // ------
    // - `Err(NonFiniteValue { column: "groundsteering", row: 0, .. })`.
    fn load_rejects_nan_cell() {
        let table = DelimitedTable::parse("t", "speed;groundsteering\n1;NaN\n", ';').unwrap();

        let err = load(&table, &ColumnSpec::default()).unwrap_err();

        match err {
            TelemetryError::NonFiniteValue { column, row, .. } => {
                assert_eq!(column, "groundsteering");
                assert_eq!(row, 0);
            }
            other => panic!("expected NonFiniteValue, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that a ragged row surfaces as a column-length mismatch.
    //
    // Given
    // -----
    // - Second data row lacks the angle cell.
    //
    // Expect
    // ------
    // - `Err(ColumnLengthMismatch { speeds: 2, angles: 1 })`.
    fn load_reports_ragged_rows_as_length_mismatch() {
        let table =
            DelimitedTable::parse("t", "speed;groundsteering\n1;0.1\n2\n", ';').unwrap();

        let err = load(&table, &ColumnSpec::default()).unwrap_err();

        assert_eq!(err, TelemetryError::ColumnLengthMismatch { speeds: 2, angles: 1 });
    }

    #[test]
    // Purpose
    // -------
    // Verify custom column names and delimiter, and reader-based parsing.
    //
    // Given
    // -----
    // - Comma-separated text with columns `right_x` and `steer`.
    //
    // Expect
    // ------
    // - Two samples loaded through `from_reader`.
    fn from_reader_honours_custom_columns_and_delimiter() {
        // Arrange
        let text = "right_x,steer\n5,0.2\n6,0.3\n";
        let table = DelimitedTable::from_reader("c", text.as_bytes(), ',').unwrap();
        let columns = ColumnSpec::new("right_x", "steer");

        // Act
        let rec = load(&table, &columns).unwrap();

        // Assert
        assert_eq!(rec.speeds(), &array![5.0, 6.0]);
        assert_eq!(rec.angles(), &array![0.2, 0.3]);
    }

    #[test]
    // Purpose
    // -------
    // Ensure text without any header line is rejected.
    //
    // Given
    // -----
    // - Whitespace-only text.
    //
    // Expect
    // ------
    // - `Err(EmptySource)`.
    fn parse_rejects_blank_text() {
        assert_eq!(DelimitedTable::parse("t", "  \n\n", ';').unwrap_err(), TelemetryError::EmptySource);
    }
}
