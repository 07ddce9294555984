//! Detection errors.
//!
//! Every variant is a violated precondition, reported eagerly at the
//! boundary of the offending call. None of them is retried.

use super::error_code::{self, HinoErrorCode};

/// Errors raised by the detection algorithm and the model mutators.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("Number of quantiles must be at least 2, got {n_quantiles}")]
    InvalidQuantileCount { n_quantiles: i64 },

    #[error("Tolerance limit must be greater than or equal to 0, got {limit}")]
    NegativeLimit { limit: i64 },

    #[error("Maximum outlier fraction must lie in ]0.0; 1.0[, got {fraction}")]
    InvalidOutlierFraction { fraction: f64 },

    #[error("Maximum outlier fraction is not set")]
    OutlierFractionUnset,

    #[error("Cannot compute {what} of an empty sequence")]
    EmptyValues { what: &'static str },

    #[error("{labels} behavioral values supplied for {points} bucketed points")]
    BehaviorCountMismatch { labels: usize, points: usize },

    #[error("Thresholds must be at least 2 finite, strictly increasing values, got {values:?}")]
    InvalidThresholds { values: Vec<f64> },

    #[error("Invalid estimator input {parameter} = {value}: {message}")]
    InvalidEstimatorInput {
        parameter: &'static str,
        value: usize,
        message: &'static str,
    },
}

impl HinoErrorCode for DetectionError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_ARGUMENT
    }
}
