//! Continuous vs categorical column classification.

use serde::Serialize;

use crate::table::{Table, ValueKind};

/// Columns with at most this many distinct values are categorical.
pub const DEFAULT_CATEGORICAL_THRESHOLD: usize = 25;

/// How a column should be summarized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnClass {
    /// Many distinct numeric values, summarized by descriptive statistics.
    Continuous,
    /// Few distinct values or non-numeric, summarized by frequency counts.
    Categorical,
}

/// Classification of one column.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedColumn {
    /// Trimmed column name.
    pub name: String,
    pub class: ColumnClass,
    pub kind: ValueKind,
    /// Distinct values, with missing values counted as one value.
    pub distinct_count: usize,
}

/// Classification of every column of a table, in table order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ColumnClassification {
    pub columns: Vec<ClassifiedColumn>,
}

impl ColumnClassification {
    /// Names of continuous columns.
    pub fn continuous(&self) -> Vec<&str> {
        self.names_with(ColumnClass::Continuous)
    }

    /// Names of categorical columns.
    pub fn categorical(&self) -> Vec<&str> {
        self.names_with(ColumnClass::Categorical)
    }

    /// Class of a column by name.
    pub fn class_of(&self, name: &str) -> Option<ColumnClass> {
        let name = name.trim();
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.class)
    }

    fn names_with(&self, class: ColumnClass) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.class == class)
            .map(|c| c.name.as_str())
            .collect()
    }
}

/// Partitions columns into continuous and categorical.
#[derive(Debug, Clone)]
pub struct ColumnClassifier {
    /// Maximum distinct values for a numeric column to stay categorical.
    categorical_threshold: usize,
}

impl ColumnClassifier {
    /// Create a classifier with the default threshold.
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_CATEGORICAL_THRESHOLD)
    }

    pub fn with_threshold(categorical_threshold: usize) -> Self {
        Self {
            categorical_threshold,
        }
    }

    /// Classify every column of the table.
    pub fn classify(&self, table: &Table) -> ColumnClassification {
        let columns = table
            .columns()
            .iter()
            .map(|column| {
                let kind = column.kind();
                let distinct_count = column.distinct_count();
                // Text columns never hold continuous values, even when all-missing
                let class = if column.as_numeric().is_none()
                    || distinct_count <= self.categorical_threshold
                {
                    ColumnClass::Categorical
                } else {
                    ColumnClass::Continuous
                };
                log::debug!(
                    "column '{}': {} values, {} distinct -> {:?}",
                    column.name().trim(),
                    kind,
                    distinct_count,
                    class
                );

                ClassifiedColumn {
                    name: column.name().trim().to_string(),
                    class,
                    kind,
                    distinct_count,
                }
            })
            .collect();

        ColumnClassification { columns }
    }
}

impl Default for ColumnClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify with the default threshold.
pub fn classify(table: &Table) -> ColumnClassification {
    ColumnClassifier::new().classify(table)
}
