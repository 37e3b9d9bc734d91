//! Analysis functions over an in-memory [`Table`](crate::table::Table).
//!
//! Every function takes the table by shared reference and computes its
//! result fresh; nothing here holds state between calls.

mod classifier;
mod correlation;
mod distribution;
mod missingness;
mod overview;
mod stats;
mod summary;

pub use classifier::{
    classify, ClassifiedColumn, ColumnClass, ColumnClassification, ColumnClassifier,
    DEFAULT_CATEGORICAL_THRESHOLD,
};
pub use correlation::{correlation_matrix, CorrelationMatrix, CorrelationPair};
pub use distribution::{
    histogram, scatter, Histogram, ScatterPoint, ScatterSeries, DEFAULT_HISTOGRAM_BINS,
};
pub use missingness::{missing_counts, missingness, ColumnMissingness};
pub use overview::{overview, DatasetOverview};
pub use summary::{describe_continuous, frequency_table, DescriptiveStats, FrequencyTable};
