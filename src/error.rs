use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the statistics engine and the export adapters.
///
/// Every variant is fatal to the current call; nothing is retried or logged
/// internally. Degenerate aggregates (a culture with no movement data) are
/// not errors and are represented by omitting report keys instead.
#[derive(Error, Debug)]
pub enum CytoError {
    /// The output filename extension does not match the adapter family.
    #[error("unsupported file type {path:?}: expected {expected}")]
    UnsupportedFormat {
        path: PathBuf,
        expected: &'static str,
    },

    /// Culture raw CSV export refuses to touch an existing file.
    #[error("file already exists: {0:?}")]
    FileAlreadyExists(PathBuf),

    /// Statistics were requested on empty or degenerate input.
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// Positions and areas for one cell disagree in length.
    #[error("cell {id}: {positions} positions vs {areas} areas")]
    LengthMismatch {
        id: String,
        positions: usize,
        areas: usize,
    },

    /// A cell's frame count differs from the rest of the culture.
    #[error("cell {id} has {got} frames, culture has {expected}")]
    FrameCountMismatch {
        id: String,
        expected: usize,
        got: usize,
    },

    /// A series-table column disagrees in length with the table.
    #[error("column {label:?} has {got} rows, table has {expected}")]
    ColumnLengthMismatch {
        label: String,
        expected: usize,
        got: usize,
    },

    /// A series table is missing a column the writer needs.
    #[error("required column missing: {0}")]
    MissingColumn(String),

    #[error("spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CytoError>;
