//! Correlate command - Pearson correlation of the continuous columns.

use std::path::PathBuf;

use colored::{ColoredString, Colorize};
use tablescope::analysis::correlation_matrix;

use super::{heading, load};
use crate::cli::AnalysisOptions;

/// |r| above which a pair is listed as strongly correlated.
const STRONG_CORRELATION: f64 = 0.7;

pub fn run(
    file: PathBuf,
    json_output: bool,
    options: &AnalysisOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let (explorer, table, source) = load(&file, options, None)?;
    let classification = explorer.classify(&table);
    let continuous = classification.continuous();
    let matrix = correlation_matrix(&table, &continuous)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&matrix)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Correlation matrix for".cyan().bold(),
        source.file.white()
    );
    println!();

    if matrix.is_empty() {
        println!("No continuous columns to correlate.");
        return Ok(());
    }

    let width = matrix.columns.iter().map(|c| c.len()).max().unwrap_or(0).max(6);
    print!("  {:width$}", "", width = width);
    for name in &matrix.columns {
        print!("  {:>width$}", name, width = width);
    }
    println!();

    for (name, row) in matrix.columns.iter().zip(&matrix.values) {
        print!("  {:width$}", name.bold(), width = width);
        for &r in row {
            print!("  {:>width$}", shade(r), width = width);
        }
        println!();
    }

    let strong = matrix.strong_pairs(STRONG_CORRELATION);
    if !strong.is_empty() {
        println!();
        heading("Strong correlations:");
        for pair in strong {
            println!("  {} ~ {}: {:+.3}", pair.col_a, pair.col_b, pair.r);
        }
    }

    Ok(())
}

/// Color a coefficient by sign and strength.
fn shade(r: f64) -> ColoredString {
    if r.is_nan() {
        return "-".dimmed();
    }
    let text = format!("{:+.3}", r);
    if r.abs() > STRONG_CORRELATION {
        if r > 0.0 { text.green().bold() } else { text.red().bold() }
    } else if r > 0.0 {
        text.green()
    } else {
        text.red()
    }
}
