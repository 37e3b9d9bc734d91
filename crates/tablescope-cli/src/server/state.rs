//! Application state for the web server.

use std::sync::Arc;
use tokio::sync::RwLock;

use tablescope::{Explorer, SourceMetadata, Table};

/// A parsed dataset and where it came from.
pub struct Dataset {
    pub table: Table,
    pub source: SourceMetadata,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The dataset being explored, if one has been loaded.
    pub dataset: Arc<RwLock<Option<Dataset>>>,
    /// Explorer used to parse uploads and summarize columns.
    pub explorer: Arc<Explorer>,
}

impl AppState {
    /// Create state with no dataset loaded.
    pub fn new(explorer: Explorer) -> Self {
        Self {
            dataset: Arc::new(RwLock::new(None)),
            explorer: Arc::new(explorer),
        }
    }

    /// Create state with an already-parsed dataset.
    pub fn with_dataset(explorer: Explorer, table: Table, source: SourceMetadata) -> Self {
        Self {
            dataset: Arc::new(RwLock::new(Some(Dataset { table, source }))),
            explorer: Arc::new(explorer),
        }
    }
}
