//! Placement of points into quantile buckets.

use super::{BucketAssignment, BucketOverlap, ThresholdSet};

/// Places every value into the bucket `[t[i], t[i+1])` containing it; the
/// last bucket also takes values equal to the maximum.
///
/// Values outside `[t[0], t[last]]` are left out.
pub fn assign_points(values: &[f64], thresholds: &ThresholdSet) -> BucketAssignment {
    let t = thresholds.values();
    let n_buckets = thresholds.n_buckets();
    let (min, max) = (thresholds.min(), thresholds.max());
    let mut buckets = vec![Vec::new(); n_buckets];

    for (row, &v) in values.iter().enumerate() {
        if !(v >= min && v <= max) {
            continue;
        }
        let bucket = t.partition_point(|&cut| cut <= v).saturating_sub(1).min(n_buckets - 1);
        buckets[bucket].push(row);
    }

    BucketAssignment(buckets)
}

/// Same as [`assign_points`], with bucket bounds widened by `overlap`.
///
/// A point close to a boundary may land in two buckets. With
/// [`BucketOverlap::NONE`] the result equals [`assign_points`].
pub fn assign_points_with_overlap(
    values: &[f64],
    thresholds: &ThresholdSet,
    overlap: BucketOverlap,
) -> BucketAssignment {
    if overlap.is_disjoint() {
        return assign_points(values, thresholds);
    }

    let t = thresholds.values();
    let last_bucket = thresholds.n_buckets() - 1;

    let buckets = (0..=last_bucket)
        .map(|i| {
            let mut lower = t[i];
            if let Some(eps) = overlap.lower.filter(|_| i > 0) {
                lower -= eps * (t[i] - t[i - 1]);
            }
            let mut upper = t[i + 1];
            if let Some(eps) = overlap.upper.filter(|_| i < last_bucket) {
                upper += eps * (t[i + 2] - t[i + 1]);
            }

            values
                .iter()
                .enumerate()
                .filter(|&(_, &v)| lower <= v && (v < upper || (i == last_bucket && v <= upper)))
                .map(|(row, _)| row)
                .collect()
        })
        .collect();

    BucketAssignment(buckets)
}
