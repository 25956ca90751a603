//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
///
/// Static segments win over captures in axum, so the named API routes
/// take precedence over the `{start}` date capture.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Route index
        .route("/", get(handlers::home::index))
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Climate API (v1.0)
        .route(
            "/api/v1.0/precipitation",
            get(handlers::observations::precipitation),
        )
        .route("/api/v1.0/stations", get(handlers::observations::stations))
        .route("/api/v1.0/tobs", get(handlers::observations::tobs))
        .route("/api/v1.0/{start}", get(handlers::temperature::from_start))
        .route(
            "/api/v1.0/{start}/{end}",
            get(handlers::temperature::for_range),
        )
        // Attach state
        .with_state(state)
}
