//! In-memory table representation with typed columns and explicit missing values.

mod column;
#[allow(clippy::module_inception)]
mod table;
mod value;

pub use column::{Column, ColumnValues};
pub use table::Table;
pub use value::{format_number, CellKey, ValueKind};
