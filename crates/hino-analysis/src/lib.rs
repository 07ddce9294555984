//! Hino contextual outlier detection.
//!
//! Every contextual attribute is cut into quantile buckets. A point is
//! isolated in an attribute when its behavioral value is missing from the
//! buckets around its own; points isolated in more attributes than the
//! tolerance limit are outliers.
//!
//! - `dataset`: immutable input and the named-column adapter
//! - `quantile`: thresholds and bucket assignment
//! - `distribution`: behavioral counts per bucket
//! - `isolation`: per-attribute isolation scoring
//! - `outliers`: classification and limit revision
//! - `estimators`: defaults derived from the dataset shape
//! - `model`: parameters and the fit pipeline

pub mod dataset;
pub mod distribution;
pub mod estimators;
pub mod isolation;
pub mod model;
pub mod outliers;
pub mod quantile;

pub use dataset::{Column, Dataset, Table};
pub use model::{FitReport, HinoModel};
