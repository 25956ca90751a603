//! Domain layer for the climate observations API
//!
//! Contains the observation entity, the row/summary shapes the query
//! layer produces, and the fixed query windows the dataset is served
//! through. This layer has no I/O dependencies.

pub mod observation;
pub mod windows;

pub use observation::{Observation, PrecipitationReading, TemperatureReading, TemperatureSummary};
pub use windows::{DateWindow, PRECIPITATION_WINDOW, TOBS_STATION, TOBS_WINDOW};
