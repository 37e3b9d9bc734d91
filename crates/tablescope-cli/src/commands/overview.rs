//! Overview command - dataset shape, column classes and missing values.

use std::path::PathBuf;

use colored::Colorize;
use tablescope::analysis::{missingness, overview};

use super::{heading, load};
use crate::cli::AnalysisOptions;

pub fn run(
    file: PathBuf,
    json_output: bool,
    options: &AnalysisOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let (explorer, table, source) = load(&file, options, None)?;
    let classification = explorer.classify(&table);
    let summary = overview(&table, &classification);
    let missing = missingness(&table);

    if json_output {
        let status = serde_json::json!({
            "file": source.file,
            "format": source.format,
            "overview": summary,
            "continuous": classification.continuous(),
            "categorical": classification.categorical(),
            "missing": missing,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Overview of".cyan().bold(),
        source.file.white()
    );
    println!();

    heading("Dataset:");
    println!("  Rows:           {}", summary.rows.to_string().white().bold());
    println!("  Features:       {}", summary.features.to_string().white().bold());
    println!("  Duplicate rows: {}", summary.duplicate_rows.to_string().white());
    println!("  Missing cells:  {}", summary.missing_cells.to_string().white());
    println!();

    heading("Columns:");
    println!(
        "  Continuous ({}):  {}",
        summary.continuous_columns,
        classification.continuous().join(", ").green()
    );
    println!(
        "  Categorical ({}): {}",
        summary.categorical_columns,
        classification.categorical().join(", ").blue()
    );
    println!();

    heading("Missing values:");
    let width = missing.iter().map(|m| m.column.len()).max().unwrap_or(0);
    for m in &missing {
        let count = if m.missing > 0 {
            m.missing.to_string().red()
        } else {
            m.missing.to_string().green()
        };
        println!(
            "  {:width$}  {:>6}  ({:.1}%)",
            m.column,
            count,
            m.missing_percentage,
            width = width
        );
    }

    Ok(())
}
