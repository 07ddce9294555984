//! Behavioral value counts, globally and per quantile bucket.

use hino_core::errors::DetectionError;
use hino_core::types::BTreeMap;

use crate::quantile::BucketAssignment;

/// Number of points carrying each behavioral value.
pub type LabelCounts<L> = BTreeMap<L, usize>;

/// Counts per bucket of one attribute, in bucket order.
pub type BucketDistribution<L> = Vec<LabelCounts<L>>;

/// Counts the occurrences of each label.
pub fn count_labels<'a, L, I>(labels: I) -> LabelCounts<L>
where
    L: Ord + Clone + 'a,
    I: IntoIterator<Item = &'a L>,
{
    let mut counts = LabelCounts::new();
    for label in labels {
        *counts.entry(label.clone()).or_insert(0) += 1;
    }
    counts
}

/// Tallies the behavioral values present in each bucket of one attribute.
///
/// `behavior` must hold exactly one label per bucketed point: the largest
/// row index referenced by the assignment has to be `behavior.len() - 1`.
pub fn bucket_distribution<L: Ord + Clone>(
    behavior: &[L],
    assignment: &BucketAssignment,
) -> Result<BucketDistribution<L>, DetectionError> {
    let points = assignment.max_index().map_or(0, |max| max + 1);
    if points != behavior.len() || points == 0 {
        return Err(DetectionError::BehaviorCountMismatch {
            labels: behavior.len(),
            points,
        });
    }

    Ok(assignment
        .buckets()
        .iter()
        .map(|bucket| count_labels(bucket.iter().map(|&row| &behavior[row])))
        .collect())
}
