//! Dataset construction errors.

use super::error_code::{self, HinoErrorCode};

/// Errors raised while building a dataset from raw columns or a table.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Dataset has no points")]
    Empty,

    #[error("Dataset has no contextual attributes")]
    NoContextualAttributes,

    #[error("Column not found: {name}")]
    ColumnNotFound { name: String },

    #[error("Column {name} has {found} values, expected {expected}")]
    LengthMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("Column {name} cannot be used as {usage}: {message}")]
    WrongColumnKind {
        name: String,
        usage: &'static str,
        message: String,
    },

    #[error("Non-finite value in attribute {attribute} at row {row}")]
    NonFiniteValue { attribute: usize, row: usize },

    #[error("Table parse error: {0}")]
    Parse(String),
}

impl HinoErrorCode for DatasetError {
    fn error_code(&self) -> &'static str {
        error_code::DATASET_ERROR
    }
}
