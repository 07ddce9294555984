//! Default parameters derived from the dataset shape.

use hino_core::constants::{LIMIT_CLASS_OFFSET, LIMIT_INTERCEPT, LIMIT_SLOPE};
use hino_core::errors::DetectionError;

/// Estimates the tolerance limit for `n_classes` behavioral values spread
/// over `n_attributes` contextual attributes.
///
/// Both counts must exceed 1: the regression is undefined for a single class
/// and meaningless for a single attribute.
pub fn estimate_limit(n_classes: usize, n_attributes: usize) -> Result<usize, DetectionError> {
    if n_classes <= 1 {
        return Err(DetectionError::InvalidEstimatorInput {
            parameter: "n_classes",
            value: n_classes,
            message: "at least two behavioral values are required",
        });
    }
    if n_attributes <= 1 {
        return Err(DetectionError::InvalidEstimatorInput {
            parameter: "n_attributes",
            value: n_attributes,
            message: "at least two contextual attributes are required",
        });
    }

    let per_attribute = LIMIT_SLOPE * (n_classes as f64 + LIMIT_CLASS_OFFSET).log2() + LIMIT_INTERCEPT;
    let limit = (per_attribute * n_attributes as f64).round_ties_even();
    Ok(limit.max(0.0) as usize)
}

/// Estimates the number of quantiles: small enough for a bucket to hold
/// similar points, large enough to hold one point of every class.
///
/// The result may fall below 2; callers clamp it before use.
pub fn estimate_n_quantiles(n_points: usize, n_classes: usize) -> i64 {
    (n_points as f64 / (n_classes + 1) as f64).round_ties_even() as i64
}
