//! Top-level error aggregating the subsystem errors.

use super::error_code::HinoErrorCode;
use super::{ConfigError, DatasetError, DetectionError};

/// Errors surfaced by entry points that span several subsystems
/// (e.g. building a model from a table and a config file).
#[derive(Debug, thiserror::Error)]
pub enum HinoError {
    #[error("Detection error: {0}")]
    Detection(#[from] DetectionError),

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl HinoErrorCode for HinoError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Detection(e) => e.error_code(),
            Self::Dataset(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
