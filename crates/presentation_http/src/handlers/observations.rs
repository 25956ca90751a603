//! Listing endpoints: precipitation, stations, temperature observations
//!
//! Each handler is one store call plus row reshaping; empty result
//! sets still produce a 200 with an empty collection.

use std::collections::BTreeMap;

use axum::{Json, extract::State};
use domain::TemperatureReading;
use tracing::debug;

use crate::{error::ApiError, state::AppState};

/// `GET /api/v1.0/precipitation`
///
/// Maps observation date to precipitation amount. Duplicate dates
/// (several stations reporting the same day) collapse last-write-wins,
/// exactly as the upstream dict comprehension did.
pub async fn precipitation(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, Option<f64>>>, ApiError> {
    let readings = state.store.precipitation().await?;

    let mut by_date = BTreeMap::new();
    for reading in readings {
        by_date.insert(reading.date, reading.prcp);
    }

    debug!(dates = by_date.len(), "Precipitation response shaped");
    Ok(Json(by_date))
}

/// `GET /api/v1.0/stations`
///
/// Flat list of distinct station identifiers, in store order.
pub async fn stations(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    let stations = state.store.stations().await?;
    Ok(Json(stations))
}

/// `GET /api/v1.0/tobs`
///
/// Temperature observations for the most-active station over the
/// dataset's final year, one `{date, tobs}` object per row.
pub async fn tobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<TemperatureReading>>, ApiError> {
    let readings = state.store.temperature_observations().await?;
    Ok(Json(readings))
}
