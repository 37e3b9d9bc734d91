//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use tablescope::analysis::{DEFAULT_CATEGORICAL_THRESHOLD, DEFAULT_HISTOGRAM_BINS};
use tablescope::{ExplorerConfig, ParserConfig};

/// tablescope: exploratory data analysis for CSV files
#[derive(Parser)]
#[command(name = "tablescope")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub options: AnalysisOptions,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Options shared by every command that reads a dataset.
#[derive(Args, Clone, Debug)]
pub struct AnalysisOptions {
    /// Field delimiter (auto-detected when omitted), e.g. "," or "\t"
    #[arg(short, long, global = true, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,

    /// Maximum distinct values for a numeric column to count as categorical
    #[arg(short, long, global = true, default_value_t = DEFAULT_CATEGORICAL_THRESHOLD)]
    pub threshold: usize,

    /// Read at most this many data rows
    #[arg(long, global = true)]
    pub max_rows: Option<usize>,

    /// Additional cell value to treat as missing (repeatable)
    #[arg(long = "na", global = true)]
    pub na_values: Vec<String>,
}

impl AnalysisOptions {
    /// Build the library configuration from the command line.
    pub fn explorer_config(&self, bins: Option<usize>) -> ExplorerConfig {
        let mut parser = ParserConfig::default();
        if let Some(d) = self.delimiter {
            parser = parser.with_delimiter(d);
        }
        if let Some(rows) = self.max_rows {
            parser = parser.with_max_rows(rows);
        }
        for marker in &self.na_values {
            parser = parser.with_na_value(marker.clone());
        }

        ExplorerConfig::default()
            .with_parser(parser)
            .with_categorical_threshold(self.threshold)
            .with_histogram_bins(bins.unwrap_or(DEFAULT_HISTOGRAM_BINS))
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show dataset shape, column classification and missing values
    Overview {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize a single column
    Describe {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Column to describe
        #[arg(value_name = "COLUMN")]
        column: String,

        /// Histogram bins for continuous columns
        #[arg(short, long)]
        bins: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the correlation matrix of continuous columns
    Correlate {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Extract x/y points for a relationship plot
    Scatter {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Column for the x axis
        #[arg(value_name = "X")]
        x: String,

        /// Column for the y axis
        #[arg(value_name = "Y")]
        y: String,

        /// Categorical column used to color points
        #[arg(short, long)]
        color_by: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the full exploration report as JSON
    Report {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Serve the analysis as a JSON API for a dashboard frontend
    Serve {
        /// Data file to load at startup (upload one later otherwise)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Port for web server
        #[arg(short, long, default_value = "3141")]
        port: u16,
    },
}

/// Accept a single character, or the escapes `\t` and `tab`.
fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "\\t" | "tab" => Ok(b'\t'),
        _ => {
            let bytes = s.as_bytes();
            if bytes.len() == 1 {
                Ok(bytes[0])
            } else {
                Err(format!(
                    "Invalid delimiter: {:?}. Use a single character or \\t.",
                    s
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(","), Ok(b','));
        assert_eq!(parse_delimiter("\\t"), Ok(b'\t'));
        assert_eq!(parse_delimiter("tab"), Ok(b'\t'));
        assert!(parse_delimiter(";;").is_err());
    }

    #[test]
    fn test_parse_describe_command() {
        let cli = Cli::try_parse_from([
            "tablescope", "describe", "data.csv", "Age", "--bins", "20", "-t", "10", "--na", "?",
        ])
        .unwrap();

        assert_eq!(cli.options.threshold, 10);
        assert_eq!(cli.options.na_values, vec!["?"]);
        match cli.command {
            Commands::Describe { column, bins, .. } => {
                assert_eq!(column, "Age");
                assert_eq!(bins, Some(20));
            }
            _ => panic!("expected describe"),
        }
    }

    #[test]
    fn test_explorer_config_from_options() {
        let cli = Cli::try_parse_from(["tablescope", "overview", "data.csv", "-d", ";"]).unwrap();
        let config = cli.options.explorer_config(None);

        assert_eq!(config.parser.delimiter, Some(b';'));
        assert_eq!(config.categorical_threshold, DEFAULT_CATEGORICAL_THRESHOLD);
        assert_eq!(config.histogram_bins, DEFAULT_HISTOGRAM_BINS);
    }
}
