//! Errors raised while loading the reliability dataset.

use std::io;

/// Fatal load-time failures. `Io` and `Csv` are data-access problems; the
/// remaining variants describe a file that was read but does not match the
/// expected schema.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("cannot read dataset: {0}")]
    Io(#[from] io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column: {0}")]
    MissingColumn(String),

    #[error("row {row}: column {column} has non-numeric value '{value}'")]
    NonNumeric {
        row: usize,
        column: String,
        value: String,
    },

    #[error("dataset contains no data rows")]
    Empty,
}
