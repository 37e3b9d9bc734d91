//! Dataset-level shape summary.

use serde::Serialize;

use super::classifier::ColumnClassification;
use crate::table::Table;

/// Shape and composition of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetOverview {
    pub rows: usize,
    /// Number of columns.
    pub features: usize,
    /// Rows identical to an earlier row.
    pub duplicate_rows: usize,
    pub missing_cells: usize,
    pub categorical_columns: usize,
    pub continuous_columns: usize,
}

/// Summarize a table given its column classification.
pub fn overview(table: &Table, classification: &ColumnClassification) -> DatasetOverview {
    DatasetOverview {
        rows: table.row_count(),
        features: table.column_count(),
        duplicate_rows: table.duplicate_row_count(),
        missing_cells: table.missing_cell_count(),
        categorical_columns: classification.categorical().len(),
        continuous_columns: classification.continuous().len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::classify;
    use crate::table::Column;

    #[test]
    fn test_overview() {
        let table = Table::new(vec![
            Column::numeric("id", (0..40).map(|i| Some((i % 30) as f64)).collect()),
            Column::text("group", (0..40).map(|i| Some(format!("g{}", i % 2))).collect()),
        ])
        .unwrap();
        let result = overview(&table, &classify(&table));

        assert_eq!(result.rows, 40);
        assert_eq!(result.features, 2);
        // rows 30..40 repeat rows 0..10 exactly
        assert_eq!(result.duplicate_rows, 10);
        assert_eq!(result.missing_cells, 0);
        assert_eq!(result.continuous_columns, 1);
        assert_eq!(result.categorical_columns, 1);
    }
}
