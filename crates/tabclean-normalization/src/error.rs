//! Error types for table cleaning.

use thiserror::Error;

/// Errors that can occur while cleaning a table.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CleanError {
    /// Required column not found in the input DataFrame.
    #[error("Column not found: {0}")]
    MissingColumn(String),

    /// Column dtype cannot be handled by the cleaner.
    #[error("Unsupported type for {column}: {dtype}")]
    UnsupportedType {
        /// Column name.
        column: String,
        /// Polars dtype of the column.
        dtype: String,
    },

    /// No non-missing values to compute a mode or mean from.
    #[error("Column has no values to impute from: {0}")]
    EmptyColumn(String),

    /// Table width differs from the configured width.
    #[error("Expected {expected} columns, found {actual}")]
    ShapeMismatch {
        /// Configured column count.
        expected: usize,
        /// Column count of the input.
        actual: usize,
    },

    /// Stop-word pattern failed to compile.
    #[error("Invalid stop-word pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Polars DataFrame operation error.
    #[error("DataFrame error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

/// Result type for cleaning operations.
pub type Result<T> = std::result::Result<T, CleanError>;
