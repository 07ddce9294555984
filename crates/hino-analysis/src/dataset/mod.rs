//! Input data of a detection run.
//!
//! A [`Dataset`] is immutable once built: row-aligned contextual attributes,
//! one behavioral label per row, and the global label counts derived from
//! them. [`Table`] is the named-column adapter feeding it.

mod table;

pub use table::{Column, Table};

use hino_core::errors::DatasetError;
use hino_core::types::Label;

use crate::distribution::{count_labels, LabelCounts};

/// Contextual attributes and behavioral labels of N points.
#[derive(Debug, Clone)]
pub struct Dataset<L = Label> {
    contextual: Vec<Vec<f64>>,
    behavior: Vec<L>,
    distribution: LabelCounts<L>,
}

impl<L: Ord + Clone> Dataset<L> {
    /// Builds a dataset from column-major contextual values.
    ///
    /// Requires at least one point and one attribute, equal lengths
    /// everywhere, and finite contextual values.
    pub fn new(contextual: Vec<Vec<f64>>, behavior: Vec<L>) -> Result<Self, DatasetError> {
        if behavior.is_empty() {
            return Err(DatasetError::Empty);
        }
        if contextual.is_empty() {
            return Err(DatasetError::NoContextualAttributes);
        }

        let n_points = behavior.len();
        for (attribute, values) in contextual.iter().enumerate() {
            if values.len() != n_points {
                return Err(DatasetError::LengthMismatch {
                    name: format!("attribute {attribute}"),
                    expected: n_points,
                    found: values.len(),
                });
            }
            if let Some(row) = values.iter().position(|v| !v.is_finite()) {
                return Err(DatasetError::NonFiniteValue { attribute, row });
            }
        }

        let distribution = count_labels(&behavior);
        Ok(Self {
            contextual,
            behavior,
            distribution,
        })
    }

    pub fn n_points(&self) -> usize {
        self.behavior.len()
    }

    pub fn n_attributes(&self) -> usize {
        self.contextual.len()
    }

    /// Number of distinct behavioral values.
    pub fn n_classes(&self) -> usize {
        self.distribution.len()
    }

    pub fn contextual(&self) -> &[Vec<f64>] {
        &self.contextual
    }

    pub fn behavior(&self) -> &[L] {
        &self.behavior
    }

    /// Global count of every behavioral value.
    pub fn distribution(&self) -> &LabelCounts<L> {
        &self.distribution
    }
}

impl Dataset<Label> {
    /// Selects `contextual` columns and the `behavior` column of `table`.
    pub fn from_table(table: &Table, contextual: &[&str], behavior: &str) -> Result<Self, DatasetError> {
        let attributes = contextual
            .iter()
            .map(|&name| table.column(name)?.to_numeric(name))
            .collect::<Result<Vec<_>, _>>()?;
        let labels = table.column(behavior)?.to_labels(behavior)?;
        Self::new(attributes, labels)
    }
}
