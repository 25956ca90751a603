//! Observation query layer
//!
//! One method per endpoint query shape. Each call runs exactly one
//! statement; connection checkout and return around it is handled by
//! the pool, including on query failure. No state is carried between
//! calls.
//!
//! Caller-supplied dates are bound as-is with no validation: a
//! malformed string simply compares lexicographically against the
//! TEXT date column and usually matches nothing. That mirrors the
//! upstream service, which passed raw path segments straight into the
//! filter.

use domain::{
    PRECIPITATION_WINDOW, PrecipitationReading, TOBS_STATION, TOBS_WINDOW, TemperatureReading,
    TemperatureSummary,
};
use sqlx::SqlitePool;
use tracing::{debug, instrument};

use super::connection::PersistenceError;
use super::schema::{self, ObservationSchema};

#[derive(Debug, sqlx::FromRow)]
struct PrecipitationRow {
    date: String,
    prcp: Option<f64>,
}

#[derive(Debug, sqlx::FromRow)]
struct TemperatureRow {
    date: String,
    tobs: f64,
}

/// Read-only store over the observation table
#[derive(Debug, Clone)]
pub struct ObservationStore {
    pool: SqlitePool,
    schema: ObservationSchema,
}

impl ObservationStore {
    /// Discover the observation schema and wrap the pool
    ///
    /// Fails if the dataset lacks the observation table or one of its
    /// required columns; see [`schema::discover`].
    pub async fn connect(pool: SqlitePool) -> Result<Self, PersistenceError> {
        let schema = schema::discover(&pool).await?;
        Ok(Self { pool, schema })
    }

    /// The schema discovered at startup
    #[must_use]
    pub fn schema(&self) -> &ObservationSchema {
        &self.schema
    }

    /// Precipitation readings inside the fixed window
    ///
    /// The window bounds come from [`domain::PRECIPITATION_WINDOW`],
    /// which covers a single day.
    #[instrument(skip(self))]
    pub async fn precipitation(&self) -> Result<Vec<PrecipitationReading>, PersistenceError> {
        let rows: Vec<PrecipitationRow> =
            sqlx::query_as("SELECT date, prcp FROM measurement WHERE date >= $1 AND date <= $2")
                .bind(PRECIPITATION_WINDOW.start)
                .bind(PRECIPITATION_WINDOW.end)
                .fetch_all(&self.pool)
                .await?;

        debug!(rows = rows.len(), "Precipitation query complete");
        Ok(rows
            .into_iter()
            .map(|r| PrecipitationReading {
                date: r.date,
                prcp: r.prcp,
            })
            .collect())
    }

    /// Distinct station identifiers, in store order
    #[instrument(skip(self))]
    pub async fn stations(&self) -> Result<Vec<String>, PersistenceError> {
        let stations: Vec<String> = sqlx::query_scalar("SELECT DISTINCT station FROM measurement")
            .fetch_all(&self.pool)
            .await?;

        debug!(rows = stations.len(), "Stations query complete");
        Ok(stations)
    }

    /// Temperature readings for the most-active station over its
    /// one-year window
    #[instrument(skip(self))]
    pub async fn temperature_observations(
        &self,
    ) -> Result<Vec<TemperatureReading>, PersistenceError> {
        let rows: Vec<TemperatureRow> = sqlx::query_as(
            "SELECT date, tobs FROM measurement \
             WHERE station = $1 AND date >= $2 AND date <= $3",
        )
        .bind(TOBS_STATION)
        .bind(TOBS_WINDOW.start)
        .bind(TOBS_WINDOW.end)
        .fetch_all(&self.pool)
        .await?;

        debug!(rows = rows.len(), "Temperature observations query complete");
        Ok(rows
            .into_iter()
            .map(|r| TemperatureReading {
                date: r.date,
                tobs: r.tobs,
            })
            .collect())
    }

    /// MIN/AVG/MAX temperature over all dates `>= start`
    #[instrument(skip(self))]
    pub async fn temperature_from(
        &self,
        start: &str,
    ) -> Result<TemperatureSummary, PersistenceError> {
        let (tmin, tavg, tmax): (Option<f64>, Option<f64>, Option<f64>) = sqlx::query_as(
            "SELECT MIN(tobs), AVG(tobs), MAX(tobs) FROM measurement WHERE date >= $1",
        )
        .bind(start)
        .fetch_one(&self.pool)
        .await?;

        Ok(TemperatureSummary { tmin, tavg, tmax })
    }

    /// MIN/AVG/MAX temperature over the closed range `[start, end]`
    #[instrument(skip(self))]
    pub async fn temperature_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<TemperatureSummary, PersistenceError> {
        let (tmin, tavg, tmax): (Option<f64>, Option<f64>, Option<f64>) = sqlx::query_as(
            "SELECT MIN(tobs), AVG(tobs), MAX(tobs) FROM measurement \
             WHERE date >= $1 AND date <= $2",
        )
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;

        Ok(TemperatureSummary { tmin, tavg, tmax })
    }

    /// Whether the store currently answers a trivial query
    ///
    /// Used by the readiness probe only.
    pub async fn ping(&self) -> bool {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .is_ok()
    }
}
