//! Threshold computation.

use hino_core::constants::MIN_QUANTILES;
use hino_core::errors::DetectionError;

use super::percentile::percentile;
use super::ThresholdSet;

/// Computes the thresholds splitting `values` into `n_quantiles` buckets.
///
/// Fractions are `0, 1/q, ..., (q-2)/q` and then exactly `1.0`. Equal
/// thresholds are merged, so values shared by many points never produce an
/// empty bucket; the attribute may end up with fewer buckets than requested.
pub fn compute_thresholds(values: &[f64], n_quantiles: usize) -> Result<ThresholdSet, DetectionError> {
    if (n_quantiles as i64) < MIN_QUANTILES {
        return Err(DetectionError::InvalidQuantileCount {
            n_quantiles: n_quantiles as i64,
        });
    }
    if values.is_empty() {
        return Err(DetectionError::EmptyValues { what: "quantiles" });
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let step = 1.0 / n_quantiles as f64;
    let mut thresholds: Vec<f64> = (0..n_quantiles - 1)
        .map(|k| percentile(&sorted, k as f64 * step))
        .collect();
    thresholds.push(percentile(&sorted, 1.0));

    thresholds.sort_by(f64::total_cmp);
    thresholds.dedup();

    let max = sorted[sorted.len() - 1];
    if let Some(last) = thresholds.last_mut() {
        *last = max;
    }
    if thresholds.len() == 1 {
        thresholds.push(max);
    }

    Ok(ThresholdSet(thresholds))
}
