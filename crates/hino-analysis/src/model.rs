//! Detection model: parameter management and the fit pipeline.

use std::time::Instant;

use hino_core::config::DetectionConfig;
use hino_core::constants::{FALLBACK_LIMIT, MIN_QUANTILES};
use hino_core::errors::{DatasetError, DetectionError};
use hino_core::types::Label;
use rayon::prelude::*;
use serde::Serialize;

use crate::dataset::{Dataset, Table};
use crate::distribution::bucket_distribution;
use crate::estimators::{estimate_limit, estimate_n_quantiles};
use crate::isolation::{IsolationScorer, IsolationVector};
use crate::outliers::{classify, outlier_fraction, revise_limit};
use crate::quantile::{assign_points, compute_thresholds};

/// Outcome of one detection run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitReport {
    /// Isolation count of every point.
    pub isolation: IsolationVector,
    /// `1` for outliers, `0` otherwise.
    pub outliers: Vec<u8>,
    /// Tolerance limit in effect when the run started.
    pub initial_limit: usize,
    /// Tolerance limit used for `outliers`.
    pub limit: usize,
    pub n_quantiles: usize,
    /// Whether the limit was raised to respect the maximum outlier fraction.
    pub revised: bool,
}

impl FitReport {
    pub fn n_outliers(&self) -> usize {
        self.outliers.iter().filter(|&&o| o == 1).count()
    }

    pub fn outlier_fraction(&self) -> f64 {
        outlier_fraction(&self.outliers)
    }
}

/// Contextual outlier detector over one dataset.
///
/// Construction estimates the tolerance limit and the number of quantiles
/// from the dataset shape; both can be overridden before calling
/// [`fit`](Self::fit).
#[derive(Debug, Clone)]
pub struct HinoModel<L = Label> {
    dataset: Dataset<L>,
    params: Parameters,
}

/// Mutable run parameters, validated on every update.
#[derive(Debug, Clone, Copy)]
struct Parameters {
    limit: usize,
    n_quantiles: usize,
    max_outlier_fraction: Option<f64>,
    parallel: bool,
}

impl Parameters {
    fn set_limit(&mut self, limit: i64) -> Result<(), DetectionError> {
        if limit < 0 {
            return Err(DetectionError::NegativeLimit { limit });
        }
        self.limit = limit as usize;
        Ok(())
    }

    fn set_n_quantiles(&mut self, n_quantiles: i64) -> Result<(), DetectionError> {
        if n_quantiles < MIN_QUANTILES {
            return Err(DetectionError::InvalidQuantileCount { n_quantiles });
        }
        self.n_quantiles = n_quantiles as usize;
        Ok(())
    }

    fn set_max_outlier_fraction(&mut self, fraction: f64) -> Result<(), DetectionError> {
        if !(fraction > 0.0 && fraction < 1.0) {
            return Err(DetectionError::InvalidOutlierFraction { fraction });
        }
        self.max_outlier_fraction = Some(fraction);
        Ok(())
    }
}

impl HinoModel<Label> {
    /// Builds a model from named columns of `table`.
    pub fn from_table(table: &Table, contextual: &[&str], behavior: &str) -> Result<Self, DatasetError> {
        Ok(Self::new(Dataset::from_table(table, contextual, behavior)?))
    }
}

impl<L: Ord + Clone + Send + Sync> HinoModel<L> {
    pub fn new(dataset: Dataset<L>) -> Self {
        let n_classes = dataset.n_classes();
        let n_attributes = dataset.n_attributes();

        let limit = estimate_limit(n_classes, n_attributes).unwrap_or_else(|e| {
            tracing::warn!(error = %e, limit = FALLBACK_LIMIT, "Tolerance limit estimation failed, using fallback");
            FALLBACK_LIMIT
        });

        let estimated = estimate_n_quantiles(dataset.n_points(), n_classes);
        if estimated < MIN_QUANTILES {
            tracing::debug!(estimated, "Quantile estimate raised to the minimum");
        }
        let n_quantiles = estimated.max(MIN_QUANTILES) as usize;

        tracing::debug!(
            n_points = dataset.n_points(),
            n_attributes,
            n_classes,
            limit,
            n_quantiles,
            "Model initialized"
        );

        Self {
            dataset,
            params: Parameters {
                limit,
                n_quantiles,
                max_outlier_fraction: None,
                parallel: true,
            },
        }
    }

    pub fn limit(&self) -> usize {
        self.params.limit
    }

    pub fn n_quantiles(&self) -> usize {
        self.params.n_quantiles
    }

    pub fn max_outlier_fraction(&self) -> Option<f64> {
        self.params.max_outlier_fraction
    }

    pub fn n_points(&self) -> usize {
        self.dataset.n_points()
    }

    pub fn dataset(&self) -> &Dataset<L> {
        &self.dataset
    }

    pub fn is_parallel(&self) -> bool {
        self.params.parallel
    }

    /// Sets the tolerance limit for the next run.
    pub fn set_limit(&mut self, limit: i64) -> Result<(), DetectionError> {
        self.params.set_limit(limit)
    }

    /// Sets the number of quantiles built per attribute.
    pub fn set_n_quantiles(&mut self, n_quantiles: i64) -> Result<(), DetectionError> {
        self.params.set_n_quantiles(n_quantiles)
    }

    /// Caps the share of flagged points; exceeding it triggers one limit revision.
    pub fn set_max_outlier_fraction(&mut self, fraction: f64) -> Result<(), DetectionError> {
        self.params.set_max_outlier_fraction(fraction)
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.params.parallel = parallel;
    }

    /// Applies every value set in `config`. Unset values keep their current
    /// setting. Nothing is applied if any value is invalid.
    pub fn apply_config(&mut self, config: &DetectionConfig) -> Result<(), DetectionError> {
        let mut params = self.params;
        if let Some(n_quantiles) = config.n_quantiles {
            params.set_n_quantiles(n_quantiles)?;
        }
        if let Some(limit) = config.limit {
            params.set_limit(limit)?;
        }
        if let Some(fraction) = config.max_outlier_fraction {
            params.set_max_outlier_fraction(fraction)?;
        }
        if let Some(parallel) = config.parallel {
            params.parallel = parallel;
        }
        self.params = params;
        Ok(())
    }

    /// Number of attributes in which each point is isolated, with the
    /// current number of quantiles.
    pub fn isolation_scores(&self) -> Result<IsolationVector, DetectionError> {
        let start = Instant::now();
        let scorer = IsolationScorer::new(self.dataset.behavior(), self.dataset.distribution());

        let per_attribute = if self.params.parallel {
            self.score_parallel(&scorer)?
        } else {
            self.score_sequential(&scorer)?
        };

        let mut isolation = vec![0; self.n_points()];
        for scores in per_attribute {
            for (total, score) in isolation.iter_mut().zip(scores) {
                *total += score;
            }
        }

        tracing::debug!(
            n_attributes = self.dataset.n_attributes(),
            n_quantiles = self.params.n_quantiles,
            parallel = self.params.parallel,
            elapsed_us = start.elapsed().as_micros() as u64,
            "Isolation scores computed"
        );
        Ok(isolation)
    }

    /// Score attributes in parallel using rayon
    fn score_parallel(&self, scorer: &IsolationScorer<'_, L>) -> Result<Vec<IsolationVector>, DetectionError> {
        self.dataset
            .contextual()
            .par_iter()
            .map(|values| self.score_one(scorer, values))
            .collect()
    }

    /// Score attributes sequentially
    fn score_sequential(&self, scorer: &IsolationScorer<'_, L>) -> Result<Vec<IsolationVector>, DetectionError> {
        self.dataset
            .contextual()
            .iter()
            .map(|values| self.score_one(scorer, values))
            .collect()
    }

    fn score_one(&self, scorer: &IsolationScorer<'_, L>, values: &[f64]) -> Result<IsolationVector, DetectionError> {
        let thresholds = compute_thresholds(values, self.params.n_quantiles)?;
        let assignment = assign_points(values, &thresholds);
        let distribution = bucket_distribution(self.dataset.behavior(), &assignment)?;
        scorer.score(&assignment, &distribution)
    }

    /// Runs detection and returns one `0`/`1` per point, `1` for outliers.
    ///
    /// When a maximum outlier fraction is set and the first classification
    /// exceeds it, the limit is revised once and kept for later runs.
    pub fn fit(&mut self) -> Result<Vec<u8>, DetectionError> {
        Ok(self.fit_report()?.outliers)
    }

    /// Same as [`fit`](Self::fit), keeping the isolation scores and limits.
    pub fn fit_report(&mut self) -> Result<FitReport, DetectionError> {
        let isolation = self.isolation_scores()?;
        let initial_limit = self.params.limit;
        let mut outliers = classify(&isolation, self.params.limit);
        let mut revised = false;

        if let Some(max_fraction) = self.params.max_outlier_fraction {
            let fraction = outlier_fraction(&outliers);
            if fraction > max_fraction {
                self.params.limit = revise_limit(&isolation, Some(max_fraction))?;
                outliers = classify(&isolation, self.params.limit);
                revised = true;
                tracing::info!(
                    from = initial_limit,
                    to = self.params.limit,
                    fraction,
                    max_fraction,
                    "Tolerance limit revised"
                );
            }
        }

        let report = FitReport {
            isolation,
            outliers,
            initial_limit,
            limit: self.params.limit,
            n_quantiles: self.params.n_quantiles,
            revised,
        };
        tracing::debug!(
            n_points = self.n_points(),
            n_outliers = report.n_outliers(),
            limit = report.limit,
            "Detection complete"
        );
        Ok(report)
    }
}
