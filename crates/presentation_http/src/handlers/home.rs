//! Route index handler

use axum::response::Html;

/// HTML fragment the root path has always served: a welcome line and
/// the available API routes. Touches no state and no store.
const ROUTE_INDEX: &str = "Welcome to the Climate App API!<br/>\
    Available Routes:<br/>\
    /api/v1.0/precipitation<br/>\
    /api/v1.0/stations<br/>\
    /api/v1.0/tobs<br/>\
    /api/v1.0/&lt;start&gt;<br/>\
    /api/v1.0/&lt;start&gt;/&lt;end&gt;";

/// List all available routes
pub async fn index() -> Html<&'static str> {
    Html(ROUTE_INDEX)
}
