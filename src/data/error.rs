//! Errors raised while loading a job postings source.

use std::path::PathBuf;

use thiserror::Error;

/// Every variant is fatal for the source being loaded; there is no partial load.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The source could not be opened or read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    /// A required column is absent from the header / schema.
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// A Parquet column has a type the loader cannot interpret.
    #[error("column '{column}' has unsupported type {found}")]
    ColumnType { column: &'static str, found: String },

    /// An integer flag column holds something other than 0 or 1.
    #[error("row {row}: column '{column}' holds {value}, expected 0 or 1")]
    InvalidFlag {
        column: &'static str,
        row: usize,
        value: i64,
    },

    /// A required cell is null.
    #[error("row {row}: null value in column '{column}'")]
    NullValue { column: &'static str, row: usize },
}
