//! Tolerance-limit revision.

use hino_core::errors::DetectionError;
use hino_core::types::FxHashMap;

/// Returns a tolerance limit flagging at most `max_fraction` of the points.
///
/// Distinct isolation counts are walked from the largest down, accumulating
/// the share of points at or above the current count. The walk stops at the
/// first count `v` whose share reaches `max_fraction`, and `v` becomes the
/// limit, so only points isolated more often than `v` stay flagged. When the
/// walk reaches the smallest count the limit is `v + 1`, which flags nobody.
pub fn revise_limit(isolation: &[usize], max_fraction: Option<f64>) -> Result<usize, DetectionError> {
    let max_fraction = max_fraction.ok_or(DetectionError::OutlierFractionUnset)?;
    if !(max_fraction > 0.0 && max_fraction < 1.0) {
        return Err(DetectionError::InvalidOutlierFraction {
            fraction: max_fraction,
        });
    }
    if isolation.is_empty() {
        return Err(DetectionError::EmptyValues {
            what: "a tolerance limit",
        });
    }

    let mut frequencies: FxHashMap<usize, usize> = FxHashMap::default();
    for &count in isolation {
        *frequencies.entry(count).or_insert(0) += 1;
    }
    let mut distinct: Vec<(usize, usize)> = frequencies.into_iter().collect();
    distinct.sort_unstable_by(|a, b| b.0.cmp(&a.0));

    let n_points = isolation.len() as f64;
    let last = distinct.len() - 1;
    let mut covered = 0;
    let stop = distinct
        .iter()
        .position(|&(_, frequency)| {
            covered += frequency;
            covered as f64 / n_points >= max_fraction
        })
        .unwrap_or(last);

    let value = distinct[stop].0;
    Ok(if stop == last { value + 1 } else { value })
}
