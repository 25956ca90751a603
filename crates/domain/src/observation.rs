//! Observation entity and query result shapes
//!
//! An [`Observation`] is one station's reading on one date. Rows are
//! produced by an external ingestion process and are read-only here;
//! station and date are expected to be unique per row, but nothing in
//! this system enforces or verifies that.
//!
//! Dates are ISO-like `YYYY-MM-DD` strings and stay strings end to
//! end: every filter in the query layer is a lexicographic TEXT
//! comparison, which for this format orders the same as calendar
//! order.

use serde::{Deserialize, Serialize};

/// One weather station reading on one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Station identifier, e.g. `USC00519281`
    pub station: String,
    /// Observation date, `YYYY-MM-DD`
    pub date: String,
    /// Precipitation amount; absent for dates the station reported no
    /// precipitation measurement
    pub prcp: Option<f64>,
    /// Temperature observation
    pub tobs: f64,
}

/// A `(date, prcp)` row from the precipitation query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationReading {
    pub date: String,
    pub prcp: Option<f64>,
}

/// A `(date, tobs)` row from the temperature observations query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReading {
    pub date: String,
    pub tobs: f64,
}

/// Aggregate temperature statistics over a filtered row set
///
/// All three fields are `None` when the filter matched no rows —
/// SQLite's MIN/AVG/MAX over zero rows yield NULL, and that null is
/// passed through to the response rather than treated as an error.
///
/// Serializes with the upper-case keys the API has always used:
///
/// ```
/// use domain::TemperatureSummary;
///
/// let summary = TemperatureSummary {
///     tmin: Some(61.0),
///     tavg: Some(69.5),
///     tmax: Some(78.0),
/// };
/// let json = serde_json::to_string(&summary).expect("serializable");
/// assert_eq!(json, r#"{"TMIN":61.0,"TAVG":69.5,"TMAX":78.0}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSummary {
    #[serde(rename = "TMIN")]
    pub tmin: Option<f64>,
    #[serde(rename = "TAVG")]
    pub tavg: Option<f64>,
    #[serde(rename = "TMAX")]
    pub tmax: Option<f64>,
}

impl TemperatureSummary {
    /// Summary of the empty row set: all three aggregates null
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            tmin: None,
            tavg: None,
            tmax: None,
        }
    }

    /// Whether the underlying filter matched no rows
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tmin.is_none() && self.tavg.is_none() && self.tmax.is_none()
    }
}
