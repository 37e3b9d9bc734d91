//! Analysis handlers over the current dataset.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use tablescope::analysis::{
    correlation_matrix, histogram, missingness, overview, scatter, ColumnMissingness,
    DatasetOverview, Histogram, ScatterSeries,
};
use tablescope::{ColumnClassification, ColumnDetail, CorrelationMatrix, SourceMetadata};

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Response for the overview endpoint.
#[derive(Serialize)]
pub struct OverviewResponse {
    pub source: SourceMetadata,
    pub overview: DatasetOverview,
    pub continuous: Vec<String>,
    pub categorical: Vec<String>,
}

/// Query parameters for the histogram endpoint.
#[derive(Debug, Deserialize)]
pub struct HistogramParams {
    pub bins: Option<usize>,
}

/// Query parameters for the scatter endpoint.
#[derive(Debug, Deserialize)]
pub struct ScatterParams {
    pub x: String,
    pub y: String,
    pub color: Option<String>,
}

/// Get the dataset overview and column lists.
pub async fn get_overview(
    State(state): State<AppState>,
) -> Result<Json<OverviewResponse>, ApiError> {
    let guard = state.dataset.read().await;
    let dataset = guard.as_ref().ok_or_else(ApiError::no_dataset)?;
    let classification = state.explorer.classify(&dataset.table);
    Ok(Json(OverviewResponse {
        source: dataset.source.clone(),
        overview: overview(&dataset.table, &classification),
        continuous: owned(classification.continuous()),
        categorical: owned(classification.categorical()),
    }))
}

/// Get the classification of every column.
pub async fn get_columns(
    State(state): State<AppState>,
) -> Result<Json<ColumnClassification>, ApiError> {
    let guard = state.dataset.read().await;
    let dataset = guard.as_ref().ok_or_else(ApiError::no_dataset)?;
    Ok(Json(state.explorer.classify(&dataset.table)))
}

/// Get statistics or frequencies for one column.
pub async fn get_column(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ColumnDetail>, ApiError> {
    let guard = state.dataset.read().await;
    let dataset = guard.as_ref().ok_or_else(ApiError::no_dataset)?;
    Ok(Json(state.explorer.describe_column(&dataset.table, &name)?))
}

/// Get the correlation matrix over continuous columns.
pub async fn get_correlation(
    State(state): State<AppState>,
) -> Result<Json<CorrelationMatrix>, ApiError> {
    let guard = state.dataset.read().await;
    let dataset = guard.as_ref().ok_or_else(ApiError::no_dataset)?;
    let classification = state.explorer.classify(&dataset.table);
    Ok(Json(correlation_matrix(
        &dataset.table,
        &classification.continuous(),
    )?))
}

/// Get missing value counts per column.
pub async fn get_missing(
    State(state): State<AppState>,
) -> Result<Json<Vec<ColumnMissingness>>, ApiError> {
    let guard = state.dataset.read().await;
    let dataset = guard.as_ref().ok_or_else(ApiError::no_dataset)?;
    Ok(Json(missingness(&dataset.table)))
}

/// Get a histogram of one numeric column.
pub async fn get_histogram(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<HistogramParams>,
) -> Result<Json<Histogram>, ApiError> {
    let bins = params
        .bins
        .unwrap_or(state.explorer.config().histogram_bins);
    let guard = state.dataset.read().await;
    let dataset = guard.as_ref().ok_or_else(ApiError::no_dataset)?;
    Ok(Json(histogram(&dataset.table, &name, bins)?))
}

/// Get scatter points for two numeric columns.
pub async fn get_scatter(
    State(state): State<AppState>,
    Query(params): Query<ScatterParams>,
) -> Result<Json<ScatterSeries>, ApiError> {
    let guard = state.dataset.read().await;
    let dataset = guard.as_ref().ok_or_else(ApiError::no_dataset)?;
    Ok(Json(scatter(
        &dataset.table,
        &params.x,
        &params.y,
        params.color.as_deref(),
    )?))
}

fn owned(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(str::to_string).collect()
}
