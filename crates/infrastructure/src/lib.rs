//! Infrastructure layer for the climate observations API
//!
//! Configuration loading and the SQLite persistence layer (read-only
//! pool, startup schema discovery, observation queries).

pub mod config;
pub mod persistence;

pub use config::{AppConfig, DatabaseConfig, ServerConfig};
pub use persistence::{ObservationSchema, ObservationStore, PersistenceError, open_read_only};
