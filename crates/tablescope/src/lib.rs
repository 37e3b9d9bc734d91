//! tablescope: exploratory data analysis for tabular datasets.
//!
//! Load a CSV file into a typed [`Table`], split its columns into continuous
//! and categorical, and compute the statistics an EDA dashboard displays:
//! descriptive statistics, frequency tables, a correlation matrix, missing
//! value counts, histograms and scatter data. Rendering is left to the
//! caller; every result is a plain serializable value.
//!
//! # Example
//!
//! ```no_run
//! use tablescope::Explorer;
//!
//! let explorer = Explorer::new();
//! let report = explorer.explore("titanic.csv").unwrap();
//!
//! println!("Continuous: {:?}", report.classification.continuous());
//! println!("Categorical: {:?}", report.classification.categorical());
//! ```
//!
//! The analysis functions can also be called directly:
//!
//! ```
//! use tablescope::analysis::{classify, describe_continuous};
//! use tablescope::{Column, Table};
//!
//! let table = Table::new(vec![
//!     Column::numeric("age", vec![Some(10.0), Some(20.0), Some(30.0), Some(40.0), None]),
//! ])
//! .unwrap();
//!
//! let stats = describe_continuous(&table, "age").unwrap();
//! assert_eq!(stats.count, 4);
//! assert_eq!(stats.mean, 25.0);
//! assert_eq!(classify(&table).categorical(), vec!["age"]);
//! ```

pub mod analysis;
pub mod error;
pub mod input;
pub mod table;

mod explorer;

pub use crate::explorer::{ColumnDetail, ExplorationReport, Explorer, ExplorerConfig};
pub use analysis::{
    ColumnClass, ColumnClassification, CorrelationMatrix, DescriptiveStats, FrequencyTable,
};
pub use error::{Result, TablescopeError};
pub use input::{Parser, ParserConfig, SourceMetadata};
pub use table::{Column, ColumnValues, Table, ValueKind};
