//! Input parsing and data source handling.

mod parser;
mod source;

pub use parser::{Parser, ParserConfig, DEFAULT_NA_VALUES};
pub use source::SourceMetadata;
