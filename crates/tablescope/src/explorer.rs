//! Main Explorer struct and public API.

use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use crate::analysis::{
    correlation_matrix, describe_continuous, frequency_table, histogram, missingness, overview,
    ColumnClass, ColumnClassification, ColumnClassifier, ColumnMissingness, CorrelationMatrix,
    DatasetOverview, DescriptiveStats, FrequencyTable, Histogram, DEFAULT_CATEGORICAL_THRESHOLD,
    DEFAULT_HISTOGRAM_BINS,
};
use crate::error::{Result, TablescopeError};
use crate::input::{Parser, ParserConfig, SourceMetadata};
use crate::table::Table;

/// Configuration for exploration.
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Maximum distinct values for a numeric column to count as categorical.
    pub categorical_threshold: usize,
    /// Bins per histogram in reports.
    pub histogram_bins: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            categorical_threshold: DEFAULT_CATEGORICAL_THRESHOLD,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
        }
    }
}

impl ExplorerConfig {
    pub fn with_parser(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_categorical_threshold(mut self, threshold: usize) -> Self {
        self.categorical_threshold = threshold;
        self
    }

    pub fn with_histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = bins;
        self
    }
}

/// Everything the dashboard shows for one dataset.
#[derive(Debug, Clone, Serialize)]
pub struct ExplorationReport {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    pub overview: DatasetOverview,
    pub classification: ColumnClassification,
    pub missing: Vec<ColumnMissingness>,
    /// Correlation over continuous columns.
    pub correlation: CorrelationMatrix,
    /// Descriptive statistics per continuous column.
    pub continuous: IndexMap<String, DescriptiveStats>,
    /// Histogram per continuous column.
    pub histograms: IndexMap<String, Histogram>,
    /// Frequency table per categorical column.
    pub categorical: IndexMap<String, FrequencyTable>,
}

/// Summary of a single column, chosen by its classification.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "class", rename_all = "snake_case")]
pub enum ColumnDetail {
    Continuous {
        stats: DescriptiveStats,
        histogram: Option<Histogram>,
    },
    Categorical {
        frequencies: FrequencyTable,
    },
}

/// The main exploration engine.
pub struct Explorer {
    config: ExplorerConfig,
    parser: Parser,
    classifier: ColumnClassifier,
}

impl Explorer {
    /// Create an explorer with default configuration.
    pub fn new() -> Self {
        Self::with_config(ExplorerConfig::default())
    }

    /// Create an explorer with custom configuration.
    pub fn with_config(config: ExplorerConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        let classifier = ColumnClassifier::with_threshold(config.categorical_threshold);
        Self {
            config,
            parser,
            classifier,
        }
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Parse a file using this explorer's parser settings.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(Table, SourceMetadata)> {
        self.parser.parse_file(path)
    }

    /// Parse uploaded contents using this explorer's parser settings.
    pub fn load_bytes(&self, bytes: &[u8], name: &str) -> Result<(Table, SourceMetadata)> {
        self.parser.parse_bytes(bytes, name)
    }

    /// Classify the columns of a table.
    pub fn classify(&self, table: &Table) -> ColumnClassification {
        self.classifier.classify(table)
    }

    /// Parse and explore a data file.
    pub fn explore(&self, path: impl AsRef<Path>) -> Result<ExplorationReport> {
        let (table, source) = self.load(path)?;
        self.explore_table(&table, source)
    }

    /// Explore an already-parsed table.
    pub fn explore_table(&self, table: &Table, source: SourceMetadata) -> Result<ExplorationReport> {
        if table.is_empty() {
            return Err(TablescopeError::EmptyTable(format!(
                "{} has {} rows and {} columns",
                source.file,
                table.row_count(),
                table.column_count()
            )));
        }

        let classification = self.classify(table);
        let continuous_names = classification.continuous();

        let correlation = correlation_matrix(table, &continuous_names)?;

        let mut continuous = IndexMap::new();
        let mut histograms = IndexMap::new();
        for name in &continuous_names {
            continuous.insert(name.to_string(), describe_continuous(table, name)?);
            if let Ok(h) = histogram(table, name, self.config.histogram_bins) {
                histograms.insert(name.to_string(), h);
            }
        }

        let categorical = classification
            .categorical()
            .into_iter()
            .map(|name| Ok((name.to_string(), frequency_table(table, name)?)))
            .collect::<Result<IndexMap<_, _>>>()?;

        let report = ExplorationReport {
            overview: overview(table, &classification),
            missing: missingness(table),
            source,
            classification,
            correlation,
            continuous,
            histograms,
            categorical,
        };

        log::info!(
            "explored {}: {} continuous, {} categorical columns",
            report.source.file,
            report.overview.continuous_columns,
            report.overview.categorical_columns
        );

        Ok(report)
    }

    /// Summarize one column according to its classification.
    ///
    /// Continuous columns get descriptive statistics and a histogram;
    /// categorical columns get a frequency table.
    pub fn describe_column(&self, table: &Table, column: &str) -> Result<ColumnDetail> {
        let classification = self.classify(table);
        match classification.class_of(column) {
            Some(ColumnClass::Continuous) => Ok(ColumnDetail::Continuous {
                stats: describe_continuous(table, column)?,
                histogram: histogram(table, column, self.config.histogram_bins).ok(),
            }),
            Some(ColumnClass::Categorical) => Ok(ColumnDetail::Categorical {
                frequencies: frequency_table(table, column)?,
            }),
            None => Err(TablescopeError::ColumnNotFound(column.to_string())),
        }
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new()
    }
}
