//! Dataset upload handler.

use axum::{
    body::Bytes,
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::server::error::ApiError;
use crate::server::state::{AppState, Dataset};

/// Query parameters for an upload.
#[derive(Debug, Deserialize)]
pub struct UploadParams {
    /// File name recorded in the source metadata.
    pub name: Option<String>,
}

/// Response after a dataset is loaded.
#[derive(Serialize)]
pub struct UploadResponse {
    pub file: String,
    pub format: String,
    pub rows: usize,
    pub columns: usize,
    pub hash: String,
}

/// Default name for uploads without `?name=`.
const DEFAULT_UPLOAD_NAME: &str = "upload.csv";

/// Parse a CSV request body and make it the current dataset.
pub async fn upload_dataset(
    State(state): State<AppState>,
    Query(params): Query<UploadParams>,
    body: Bytes,
) -> Result<Json<UploadResponse>, ApiError> {
    if body.is_empty() {
        return Err(ApiError::BadRequest("Request body is empty".to_string()));
    }

    let name = params.name.as_deref().unwrap_or(DEFAULT_UPLOAD_NAME);
    let (table, source) = state.explorer.load_bytes(&body, name)?;

    let response = UploadResponse {
        file: source.file.clone(),
        format: source.format.clone(),
        rows: source.row_count,
        columns: source.column_count,
        hash: source.hash.clone(),
    };

    *state.dataset.write().await = Some(Dataset { table, source });
    log::info!(
        "loaded upload {} ({} rows, {} columns)",
        response.file,
        response.rows,
        response.columns
    );

    Ok(Json(response))
}
