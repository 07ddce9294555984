//! Isolation scoring.
//!
//! A point is isolated in an attribute when no point of the buckets adjacent
//! to its own carries its behavioral value. A value whose every occurrence
//! already sits in the bucket is exempt: there is nowhere else for it to be.
//! Scores add up across attributes.

use std::collections::BTreeSet;

use hino_core::errors::DetectionError;
use hino_core::types::{SmallVec, SmallVec2};

use crate::distribution::{BucketDistribution, LabelCounts};
use crate::quantile::BucketAssignment;

/// Number of attributes in which each point is isolated, row-aligned.
pub type IsolationVector = Vec<usize>;

/// Scores attributes against one dataset's labels and global counts.
pub struct IsolationScorer<'a, L> {
    behavior: &'a [L],
    global: &'a LabelCounts<L>,
}

impl<'a, L: Ord> IsolationScorer<'a, L> {
    pub fn new(behavior: &'a [L], global: &'a LabelCounts<L>) -> Self {
        Self { behavior, global }
    }

    /// Adds one attribute's contribution to `isolation`.
    ///
    /// `assignment` and `distribution` must describe the same buckets of the
    /// same attribute. Fails when `isolation` does not have one slot per
    /// label, or when the assignment references a row past the last label.
    pub fn score_attribute(
        &self,
        assignment: &BucketAssignment,
        distribution: &BucketDistribution<L>,
        isolation: &mut [usize],
    ) -> Result<(), DetectionError> {
        let labels = self.behavior.len();
        let points = assignment.max_index().map_or(0, |max| max + 1);
        if points > labels {
            return Err(DetectionError::BehaviorCountMismatch { labels, points });
        }
        if isolation.len() != labels {
            return Err(DetectionError::BehaviorCountMismatch {
                labels,
                points: isolation.len(),
            });
        }

        let n_buckets = distribution.len();
        for (b, (points, counts)) in assignment.buckets().iter().zip(distribution).enumerate() {
            if points.is_empty() {
                continue;
            }

            let neighbors = neighbors(b, n_buckets);
            let absent: BTreeSet<&L> = counts
                .iter()
                .filter(|&(label, &count)| {
                    self.global.get(label) != Some(&count)
                        && neighbors.iter().all(|&n| !distribution[n].contains_key(label))
                })
                .map(|(label, _)| label)
                .collect();

            if absent.is_empty() {
                continue;
            }
            for &row in points {
                if absent.contains(&self.behavior[row]) {
                    isolation[row] += 1;
                }
            }
        }
        Ok(())
    }

    /// Scores a single attribute into a fresh vector.
    pub fn score(
        &self,
        assignment: &BucketAssignment,
        distribution: &BucketDistribution<L>,
    ) -> Result<IsolationVector, DetectionError> {
        let mut isolation = vec![0; self.behavior.len()];
        self.score_attribute(assignment, distribution, &mut isolation)?;
        Ok(isolation)
    }
}

/// Buckets adjacent to `bucket`: the next one for the first bucket, the
/// previous one for the last, both otherwise. A lone bucket has none.
pub fn neighbors(bucket: usize, n_buckets: usize) -> SmallVec2<usize> {
    let mut out = SmallVec::new();
    if bucket > 0 {
        out.push(bucket - 1);
    }
    if bucket + 1 < n_buckets {
        out.push(bucket + 1);
    }
    out
}
