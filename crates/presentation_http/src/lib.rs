//! HTTP presentation layer for the climate observations API
//!
//! Read-only JSON endpoints over the fixed observation dataset.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
