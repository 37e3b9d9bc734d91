//! A single named column of typed values.

use std::collections::HashSet;

use super::value::{format_number, CellKey, ValueKind};

/// Typed storage for a column. `None` marks a missing value.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    Numeric(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
}

/// A named column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: ColumnValues,
}

impl Column {
    /// Create a numeric column. `NaN` values are stored as missing.
    pub fn numeric(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.filter(|x| !x.is_nan()))
            .collect();
        Self {
            name: name.into(),
            values: ColumnValues::Numeric(values),
        }
    }

    /// Create a text column.
    pub fn text(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Self {
            name: name.into(),
            values: ColumnValues::Text(values),
        }
    }

    /// Column name as supplied at ingestion.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &ColumnValues {
        &self.values
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        match &self.values {
            ColumnValues::Numeric(v) => v.len(),
            ColumnValues::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The declared kind of this column.
    pub fn kind(&self) -> ValueKind {
        if !self.is_empty() && self.missing_count() == self.len() {
            return ValueKind::Missing;
        }
        match &self.values {
            ColumnValues::Numeric(_) => ValueKind::Numeric,
            ColumnValues::Text(_) => ValueKind::Text,
        }
    }

    /// Check whether the value at `row` is missing.
    pub fn is_missing(&self, row: usize) -> bool {
        match &self.values {
            ColumnValues::Numeric(v) => v.get(row).is_none_or(|x| x.is_none()),
            ColumnValues::Text(v) => v.get(row).is_none_or(|x| x.is_none()),
        }
    }

    /// Count missing values.
    pub fn missing_count(&self) -> usize {
        match &self.values {
            ColumnValues::Numeric(v) => v.iter().filter(|x| x.is_none()).count(),
            ColumnValues::Text(v) => v.iter().filter(|x| x.is_none()).count(),
        }
    }

    /// Numeric storage, if this is a numeric column.
    pub fn as_numeric(&self) -> Option<&[Option<f64>]> {
        match &self.values {
            ColumnValues::Numeric(v) => Some(v),
            ColumnValues::Text(_) => None,
        }
    }

    /// Non-missing numeric values in row order.
    pub fn present_numbers(&self) -> Option<Vec<f64>> {
        self.as_numeric()
            .map(|v| v.iter().flatten().copied().collect())
    }

    /// Render the value at `row` as a label. `None` for missing values.
    pub fn label_at(&self, row: usize) -> Option<String> {
        match &self.values {
            ColumnValues::Numeric(v) => v.get(row).copied().flatten().map(format_number),
            ColumnValues::Text(v) => v.get(row).cloned().flatten(),
        }
    }

    /// Hashable key for the value at `row`.
    pub fn key_at(&self, row: usize) -> CellKey<'_> {
        match &self.values {
            ColumnValues::Numeric(v) => match v.get(row).copied().flatten() {
                Some(x) => CellKey::number(x),
                None => CellKey::Missing,
            },
            ColumnValues::Text(v) => match v.get(row).and_then(|x| x.as_deref()) {
                Some(s) => CellKey::Text(s),
                None => CellKey::Missing,
            },
        }
    }

    /// Number of distinct values, counting missing values as one value.
    pub fn distinct_count(&self) -> usize {
        (0..self.len())
            .map(|row| self.key_at(row))
            .collect::<HashSet<_>>()
            .len()
    }
}
