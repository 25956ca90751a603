//! Aggregate temperature endpoints
//!
//! Path segments are taken verbatim as date strings; nothing validates
//! them. A nonsense date flows into the TEXT comparison and typically
//! matches no rows, which comes back as an all-null summary, not an
//! error.

use axum::{
    Json,
    extract::{Path, State},
};
use domain::TemperatureSummary;

use crate::{error::ApiError, state::AppState};

/// `GET /api/v1.0/{start}`
///
/// MIN/AVG/MAX temperature over all observations dated on or after
/// `start`.
pub async fn from_start(
    State(state): State<AppState>,
    Path(start): Path<String>,
) -> Result<Json<TemperatureSummary>, ApiError> {
    let summary = state.store.temperature_from(&start).await?;
    Ok(Json(summary))
}

/// `GET /api/v1.0/{start}/{end}`
///
/// Same aggregates over the closed range `[start, end]`.
pub async fn for_range(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TemperatureSummary>, ApiError> {
    let summary = state.store.temperature_range(&start, &end).await?;
    Ok(Json(summary))
}
