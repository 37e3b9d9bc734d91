//! CLI command implementations.

pub mod correlate;
pub mod describe;
pub mod overview;
pub mod report;
pub mod scatter;
pub mod serve;

use std::path::Path;

use colored::Colorize;
use tablescope::{Explorer, SourceMetadata, Table};

use crate::cli::AnalysisOptions;

/// Build an explorer from the global flags and parse `file` with it.
pub(crate) fn load(
    file: &Path,
    options: &AnalysisOptions,
    bins: Option<usize>,
) -> Result<(Explorer, Table, SourceMetadata), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let explorer = Explorer::with_config(options.explorer_config(bins));
    let (table, source) = explorer.load(file)?;
    log::debug!(
        "loaded {} ({} rows, {} columns, {})",
        source.file,
        source.row_count,
        source.column_count,
        source.format
    );
    Ok((explorer, table, source))
}

/// Render a statistic, showing undefined values as a dash.
pub(crate) fn stat(value: f64) -> String {
    if value.is_nan() {
        "-".to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.4}", value)
    }
}

/// Print a section heading the way every command does.
pub(crate) fn heading(text: &str) {
    println!("{}", text.yellow().bold());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_formatting() {
        assert_eq!(stat(f64::NAN), "-");
        assert_eq!(stat(25.0), "25");
        assert_eq!(stat(-3.0), "-3");
        assert_eq!(stat(12.909944487), "12.9099");
    }
}
