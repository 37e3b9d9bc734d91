//! Per-column missing value counts.

use indexmap::IndexMap;
use serde::Serialize;

use crate::table::Table;

/// Missing-value summary for one column, the data behind a missingness bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnMissingness {
    pub column: String,
    pub missing: usize,
    /// Non-missing values.
    pub present: usize,
    /// Missing values as a percentage of rows (0 for an empty table).
    pub missing_percentage: f64,
}

/// Missing count per column, keyed by trimmed name in table order.
pub fn missing_counts(table: &Table) -> IndexMap<String, usize> {
    table
        .columns()
        .iter()
        .map(|c| (c.name().trim().to_string(), c.missing_count()))
        .collect()
}

/// Missing and present counts per column, in table order.
pub fn missingness(table: &Table) -> Vec<ColumnMissingness> {
    let rows = table.row_count();
    missing_counts(table)
        .into_iter()
        .map(|(column, missing)| ColumnMissingness {
            column,
            missing,
            present: rows - missing,
            missing_percentage: if rows == 0 {
                0.0
            } else {
                missing as f64 * 100.0 / rows as f64
            },
        })
        .collect()
}
