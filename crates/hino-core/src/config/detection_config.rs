//! Detection configuration.

use serde::{Deserialize, Serialize};

/// Parameters of a detection run.
///
/// Unset values leave the model's estimated defaults in place.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DetectionConfig {
    /// Number of quantiles built per contextual attribute. Must be >= 2.
    pub n_quantiles: Option<i64>,
    /// Tolerance limit: a point isolated in more attributes than this is an outlier. Must be >= 0.
    pub limit: Option<i64>,
    /// Maximum fraction of outliers, in ]0.0; 1.0[. Triggers limit revision when exceeded.
    pub max_outlier_fraction: Option<f64>,
    /// Score attributes on the rayon pool. Default: true.
    pub parallel: Option<bool>,
}

impl DetectionConfig {
    /// Returns whether attributes are scored in parallel, defaulting to true.
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(true)
    }
}
