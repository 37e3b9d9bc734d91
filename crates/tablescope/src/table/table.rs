//! Ordered collection of equal-length columns.

use std::collections::HashSet;

use super::column::Column;
use super::value::CellKey;
use crate::error::{Result, TablescopeError};

/// Represents a parsed dataset.
///
/// All columns have the same number of rows. Column lookups by name ignore
/// surrounding whitespace, so names reported by the classifier (which are
/// trimmed) always resolve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Create a table, checking that every column has the same length and
    /// that trimmed names are unique.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let row_count = columns.first().map(Column::len).unwrap_or(0);
        if let Some(bad) = columns.iter().find(|c| c.len() != row_count) {
            return Err(TablescopeError::RaggedTable {
                column: bad.name().to_string(),
                expected: row_count,
                found: bad.len(),
            });
        }

        let mut names = HashSet::new();
        for column in &columns {
            let name = column.name().trim();
            if !names.insert(name) {
                return Err(TablescopeError::DuplicateColumn(name.to_string()));
            }
        }

        Ok(Self { columns, row_count })
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// True when the table has no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.row_count == 0 || self.columns.is_empty()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        let name = name.trim();
        self.columns.iter().find(|c| c.name().trim() == name)
    }

    /// Get a column by name, or a `ColumnNotFound` error.
    pub fn require_column(&self, name: &str) -> Result<&Column> {
        self.column(name)
            .ok_or_else(|| TablescopeError::ColumnNotFound(name.to_string()))
    }

    /// Trimmed column names in table order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name().trim()).collect()
    }

    /// Hashable keys for every cell of a row.
    pub fn row_key(&self, row: usize) -> Vec<CellKey<'_>> {
        self.columns.iter().map(|c| c.key_at(row)).collect()
    }

    /// Number of rows that repeat an earlier row exactly.
    pub fn duplicate_row_count(&self) -> usize {
        let distinct: HashSet<Vec<CellKey<'_>>> =
            (0..self.row_count).map(|row| self.row_key(row)).collect();
        self.row_count - distinct.len()
    }

    /// Total number of missing cells.
    pub fn missing_cell_count(&self) -> usize {
        self.columns.iter().map(Column::missing_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(vec![
            Column::numeric(" age ", vec![Some(22.0), Some(25.0), Some(22.0), None]),
            Column::text(
                "city",
                vec![Some("NY".into()), Some("LA".into()), Some("NY".into()), None],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_shape() {
        let table = sample();
        assert_eq!(table.row_count(), 4);
        assert_eq!(table.column_count(), 2);
        assert!(!table.is_empty());
        assert_eq!(table.column_names(), vec!["age", "city"]);
    }

    #[test]
    fn test_ragged_columns_rejected() {
        let err = Table::new(vec![
            Column::numeric("a", vec![Some(1.0), Some(2.0)]),
            Column::numeric("b", vec![Some(1.0)]),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            TablescopeError::RaggedTable { expected: 2, found: 1, .. }
        ));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = Table::new(vec![
            Column::numeric("a.1", vec![Some(1.0)]),
            Column::numeric(" a.1 ", vec![Some(2.0)]),
        ])
        .unwrap_err();
        assert!(matches!(err, TablescopeError::DuplicateColumn(name) if name == "a.1"));
    }

    #[test]
    fn test_lookup_ignores_whitespace() {
        let table = sample();
        assert!(table.column("age").is_some());
        assert!(table.column(" city").is_some());
        assert!(matches!(
            table.require_column("zip"),
            Err(TablescopeError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn test_duplicates_and_missing_cells() {
        let table = sample();
        assert_eq!(table.duplicate_row_count(), 1);
        assert_eq!(table.missing_cell_count(), 2);
    }

    #[test]
    fn test_default_table_is_empty() {
        let table = Table::default();
        assert!(table.is_empty());
        assert_eq!(table.duplicate_row_count(), 0);
    }
}
