//! Error types for the tablescope library.

use std::path::PathBuf;
use thiserror::Error;

use crate::table::ValueKind;

/// Main error type for tablescope operations.
#[derive(Debug, Error)]
pub enum TablescopeError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The table has no rows or no columns.
    #[error("Empty table: {0}")]
    EmptyTable(String),

    /// Columns of a table do not share the same length.
    #[error("Column '{column}' has {found} rows, expected {expected}")]
    RaggedTable {
        column: String,
        expected: usize,
        found: usize,
    },

    /// Two columns share a name once surrounding whitespace is ignored.
    #[error("Duplicate column name: '{0}'")]
    DuplicateColumn(String),

    /// No column with the requested name.
    #[error("Column not found: '{0}'")]
    ColumnNotFound(String),

    /// The operation does not apply to a column of this kind.
    #[error("Column '{column}' holds {kind} values; {operation} requires numeric values")]
    InvalidColumnKind {
        column: String,
        kind: ValueKind,
        operation: &'static str,
    },

    /// Too few non-missing observations for the requested computation.
    #[error("Column '{column}' has {found} non-missing values, {operation} needs at least {required}")]
    InsufficientData {
        column: String,
        operation: &'static str,
        required: usize,
        found: usize,
    },

    /// An argument was outside its accepted range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for tablescope operations.
pub type Result<T> = std::result::Result<T, TablescopeError>;
