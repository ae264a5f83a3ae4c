use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// LoadError – everything that can go wrong while reading a trajectory CSV
// ---------------------------------------------------------------------------

/// Errors produced while loading a trajectory CSV.
///
/// Every variant names the offending file, and row-level variants carry the
/// 1-based index of the data row (the header is row 0 of the file but is not
/// a data row). Loading is all-or-nothing: any of these means no table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path:?}: file is empty")]
    Empty { path: PathBuf },

    #[error("{path:?}: duplicate column '{name}' in header")]
    DuplicateColumn { path: PathBuf, name: String },

    #[error("{path:?}: row {row} has {found} fields, expected {expected}")]
    RowWidth {
        path: PathBuf,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{path:?}: row {row}, column '{column}': '{value}' is not a number")]
    BadNumber {
        path: PathBuf,
        row: usize,
        column: String,
        value: String,
    },

    #[error("{path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// ColumnNotFoundError – a plot asked for a column the table does not have
// ---------------------------------------------------------------------------

/// A panel referenced a column name absent from the loaded table.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("column '{0}' not found in table")]
pub struct ColumnNotFoundError(pub String);
