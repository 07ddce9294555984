//! In-memory table with named columns.

use std::collections::BTreeMap;

use hino_core::errors::DatasetError;
use hino_core::types::Label;
use serde::{Deserialize, Serialize};

/// One column of a [`Table`].
///
/// JSON arrays of integers or text deserialize as `Labels`, so large class
/// ids keep their exact value; arrays holding any fractional number
/// deserialize as `Numeric`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Column {
    Labels(Vec<Label>),
    Numeric(Vec<f64>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(v) => v.len(),
            Self::Labels(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values as contextual numbers. Integer labels convert; text does not.
    pub(crate) fn to_numeric(&self, name: &str) -> Result<Vec<f64>, DatasetError> {
        match self {
            Self::Numeric(v) => Ok(v.clone()),
            Self::Labels(labels) => labels
                .iter()
                .map(|label| {
                    label.as_int().map(|v| v as f64).ok_or_else(|| DatasetError::WrongColumnKind {
                        name: name.to_string(),
                        usage: "a contextual attribute",
                        message: format!("text value {label:?} is not numeric"),
                    })
                })
                .collect(),
        }
    }

    /// Values as behavioral labels. Integral numbers convert to `Label::Int`.
    pub(crate) fn to_labels(&self, name: &str) -> Result<Vec<Label>, DatasetError> {
        match self {
            Self::Labels(v) => Ok(v.clone()),
            Self::Numeric(values) => values
                .iter()
                .map(|&v| {
                    if v.is_finite() && v.fract() == 0.0 && v.abs() <= i64::MAX as f64 {
                        Ok(Label::Int(v as i64))
                    } else {
                        Err(DatasetError::WrongColumnKind {
                            name: name.to_string(),
                            usage: "the behavioral attribute",
                            message: format!("{v} is not an integral class id"),
                        })
                    }
                })
                .collect(),
        }
    }
}

/// Named, equal-length columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: BTreeMap<String, Column>,
    n_rows: Option<usize>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a column. Its length must match the columns already present.
    pub fn with_column(mut self, name: impl Into<String>, column: Column) -> Result<Self, DatasetError> {
        let name = name.into();
        if let Some(expected) = self.n_rows {
            if column.len() != expected {
                return Err(DatasetError::LengthMismatch {
                    name,
                    expected,
                    found: column.len(),
                });
            }
        }
        self.n_rows = Some(column.len());
        self.columns.insert(name, column);
        Ok(self)
    }

    /// Parses a JSON object mapping column names to value arrays.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let columns: BTreeMap<String, Column> =
            serde_json::from_str(json).map_err(|e| DatasetError::Parse(e.to_string()))?;
        columns
            .into_iter()
            .try_fold(Self::new(), |table, (name, column)| table.with_column(name, column))
    }

    pub fn column(&self, name: &str) -> Result<&Column, DatasetError> {
        self.columns.get(name).ok_or_else(|| DatasetError::ColumnNotFound {
            name: name.to_string(),
        })
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows.unwrap_or(0)
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_column_kinds() {
        let table = Table::from_json(r#"{"x": [1.5, 2, 3], "y": ["a", "b", "a"], "z": [1, 2, "c"]}"#).unwrap();
        assert_eq!(table.n_rows(), 3);
        assert_eq!(table.n_columns(), 3);
        assert_eq!(table.column("x").unwrap(), &Column::Numeric(vec![1.5, 2.0, 3.0]));
        assert!(matches!(table.column("y").unwrap(), Column::Labels(_)));
        assert_eq!(
            table.column("z").unwrap(),
            &Column::Labels(vec![Label::Int(1), Label::Int(2), Label::from("c")])
        );
    }

    #[test]
    fn test_large_integer_ids_stay_exact() {
        let table = Table::from_json(r#"{"class": [9007199254740992, 9007199254740993]}"#).unwrap();
        assert_eq!(
            table.column("class").unwrap(),
            &Column::Labels(vec![Label::Int(9007199254740992), Label::Int(9007199254740993)])
        );
    }

    #[test]
    fn test_length_mismatch() {
        let err = Table::new()
            .with_column("a", Column::Numeric(vec![1.0, 2.0]))
            .unwrap()
            .with_column("b", Column::Numeric(vec![1.0]))
            .unwrap_err();
        assert!(matches!(err, DatasetError::LengthMismatch { expected: 2, found: 1, .. }));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(Table::from_json("[1, 2]"), Err(DatasetError::Parse(_))));
        assert!(matches!(
            Table::from_json(r#"{"x": [1.5, "a"]}"#),
            Err(DatasetError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_column() {
        let table = Table::new();
        assert!(matches!(table.column("nope"), Err(DatasetError::ColumnNotFound { .. })));
    }

    #[test]
    fn test_numeric_to_labels() {
        let column = Column::Numeric(vec![0.0, 2.0, -1.0]);
        assert_eq!(
            column.to_labels("class").unwrap(),
            vec![Label::Int(0), Label::Int(2), Label::Int(-1)]
        );
        assert!(Column::Numeric(vec![0.5]).to_labels("class").is_err());
    }

    #[test]
    fn test_labels_to_numeric() {
        let column = Column::Labels(vec![Label::Int(3), Label::Int(-2)]);
        assert_eq!(column.to_numeric("a").unwrap(), vec![3.0, -2.0]);
        let text = Column::Labels(vec![Label::from("x")]);
        assert!(matches!(text.to_numeric("a"), Err(DatasetError::WrongColumnKind { .. })));
    }
}
