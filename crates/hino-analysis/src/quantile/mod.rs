//! Quantile partitioning of contextual attributes.
//!
//! Each attribute is cut into buckets holding roughly the same number of
//! points. Thresholds come from [`compute_thresholds`], points are placed
//! with [`assign_points`] (disjoint) or [`assign_points_with_overlap`].

mod assignment;
mod percentile;
mod thresholds;

pub use assignment::{assign_points, assign_points_with_overlap};
pub use thresholds::compute_thresholds;

use hino_core::errors::DetectionError;
use serde::{Deserialize, Serialize};

/// Ordered cut values of one attribute.
///
/// Strictly increasing, at least two values, the last one equal to the
/// attribute's maximum. A constant attribute yields `[v, v]`: a single
/// closed bucket. Deserialization enforces the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>")]
pub struct ThresholdSet(Vec<f64>);

impl TryFrom<Vec<f64>> for ThresholdSet {
    type Error = DetectionError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        let finite = values.iter().all(|v| v.is_finite());
        let increasing = values.windows(2).all(|w| w[0] < w[1]);
        let constant = values.len() == 2 && values[0] == values[1];
        if values.len() < 2 || !finite || !(increasing || constant) {
            return Err(DetectionError::InvalidThresholds { values });
        }
        Ok(Self(values))
    }
}

impl ThresholdSet {
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Number of buckets delimited by these thresholds.
    pub fn n_buckets(&self) -> usize {
        self.0.len() - 1
    }

    pub fn min(&self) -> f64 {
        self.0[0]
    }

    pub fn max(&self) -> f64 {
        self.0[self.0.len() - 1]
    }
}

/// Row indices of one attribute, grouped per bucket in threshold order.
///
/// Indices inside a bucket are ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketAssignment(Vec<Vec<usize>>);

impl BucketAssignment {
    pub fn new(buckets: Vec<Vec<usize>>) -> Self {
        Self(buckets)
    }

    pub fn buckets(&self) -> &[Vec<usize>] {
        &self.0
    }

    pub fn n_buckets(&self) -> usize {
        self.0.len()
    }

    /// Largest row index referenced by any bucket.
    pub fn max_index(&self) -> Option<usize> {
        self.0.iter().filter_map(|b| b.last().copied()).max()
    }

    pub fn into_inner(self) -> Vec<Vec<usize>> {
        self.0
    }
}

/// Optional widening of bucket bounds towards the adjacent buckets.
///
/// `lower = ε` moves the lower bound of bucket `i > 0` down by
/// `ε * (t[i] - t[i-1])`; `upper = ε` moves the upper bound of every
/// non-last bucket up by `ε * (t[i+2] - t[i+1])`. Points near a boundary then
/// belong to both buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketOverlap {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl BucketOverlap {
    /// Disjoint buckets.
    pub const NONE: Self = Self {
        lower: None,
        upper: None,
    };

    pub fn is_disjoint(&self) -> bool {
        self.lower.is_none() && self.upper.is_none()
    }
}
