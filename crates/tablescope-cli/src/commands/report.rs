//! Report command - write the full exploration report as JSON.

use std::path::PathBuf;

use colored::Colorize;

use super::load;
use crate::cli::AnalysisOptions;

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    options: &AnalysisOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    if output.is_some() {
        println!("{} {}...", "Exploring".cyan().bold(), file.display());
    }

    let (explorer, table, source) = load(&file, options, None)?;
    let report = explorer.explore_table(&table, source)?;
    let json = serde_json::to_string_pretty(&report)?;

    match output {
        Some(path) => {
            std::fs::write(&path, json)?;
            println!();
            println!(
                "  {} rows, {} continuous, {} categorical columns",
                report.overview.rows.to_string().white().bold(),
                report.overview.continuous_columns.to_string().green(),
                report.overview.categorical_columns.to_string().blue()
            );
            println!("{} {}", "Saved:".green().bold(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
