//! Startup schema discovery
//!
//! The observation table is never declared in code; its shape is read
//! back from the dataset itself via `pragma_table_info` and verified
//! against the columns the query layer depends on. Runs once before
//! the server starts accepting requests and has no runtime role
//! afterwards.

use sqlx::SqlitePool;
use tracing::{debug, info};

use super::connection::PersistenceError;

/// Name of the observation table in the dataset
pub const OBSERVATION_TABLE: &str = "measurement";

/// Columns the query layer filters and projects on
const REQUIRED_COLUMNS: [&str; 4] = ["station", "date", "prcp", "tobs"];

/// One column as reported by `pragma_table_info`
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ColumnInfo {
    /// Column name
    pub name: String,
    /// Declared SQLite type, e.g. `TEXT`, `FLOAT`
    #[sqlx(rename = "type")]
    pub sql_type: String,
}

/// Discovered shape of the observation table
#[derive(Debug, Clone)]
pub struct ObservationSchema {
    columns: Vec<ColumnInfo>,
}

impl ObservationSchema {
    /// Table the schema was read from
    #[must_use]
    pub fn table(&self) -> &'static str {
        OBSERVATION_TABLE
    }

    /// Discovered columns, in table order
    #[must_use]
    pub fn columns(&self) -> &[ColumnInfo] {
        &self.columns
    }

    /// Whether the table has a column with the given name
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }
}

/// Reflect the observation table out of the dataset
///
/// Fails fast if the table is absent or lacks a required column; a
/// partially matching dataset never reaches the serving path.
pub async fn discover(pool: &SqlitePool) -> Result<ObservationSchema, PersistenceError> {
    let columns: Vec<ColumnInfo> =
        sqlx::query_as("SELECT name, type FROM pragma_table_info($1) ORDER BY cid")
            .bind(OBSERVATION_TABLE)
            .fetch_all(pool)
            .await?;

    // pragma_table_info returns zero rows for unknown tables
    if columns.is_empty() {
        return Err(PersistenceError::TableMissing {
            table: OBSERVATION_TABLE.to_string(),
        });
    }

    let schema = ObservationSchema { columns };
    for required in REQUIRED_COLUMNS {
        if !schema.has_column(required) {
            return Err(PersistenceError::ColumnMissing {
                table: OBSERVATION_TABLE.to_string(),
                column: required.to_string(),
            });
        }
    }

    debug!(columns = schema.columns.len(), "Observation table reflected");
    info!(table = OBSERVATION_TABLE, "Schema discovery complete");
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn memory_pool() -> SqlitePool {
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn discovery_fails_without_measurement_table() {
        let pool = memory_pool().await;
        let result = discover(&pool).await;
        assert!(matches!(
            result,
            Err(PersistenceError::TableMissing { table }) if table == "measurement"
        ));
    }

    #[tokio::test]
    async fn discovery_fails_on_missing_column() {
        let pool = memory_pool().await;
        sqlx::query("CREATE TABLE measurement (station TEXT, date TEXT, prcp REAL)")
            .execute(&pool)
            .await
            .unwrap();

        let result = discover(&pool).await;
        assert!(matches!(
            result,
            Err(PersistenceError::ColumnMissing { column, .. }) if column == "tobs"
        ));
    }

    #[tokio::test]
    async fn discovery_reflects_all_columns_in_order() {
        let pool = memory_pool().await;
        sqlx::query(
            "CREATE TABLE measurement (
                id INTEGER PRIMARY KEY,
                station TEXT,
                date TEXT,
                prcp FLOAT,
                tobs FLOAT
            )",
        )
        .execute(&pool)
        .await
        .unwrap();

        let schema = discover(&pool).await.unwrap();
        assert_eq!(schema.table(), "measurement");
        assert_eq!(schema.columns().len(), 5);
        assert_eq!(schema.columns()[0].name, "id");
        assert!(schema.has_column("station"));
        assert!(schema.has_column("tobs"));
        assert!(!schema.has_column("humidity"));
    }

    #[tokio::test]
    async fn extra_columns_are_tolerated() {
        let pool = memory_pool().await;
        sqlx::query(
            "CREATE TABLE measurement (station TEXT, date TEXT, prcp REAL, tobs REAL, elevation REAL)",
        )
        .execute(&pool)
        .await
        .unwrap();

        let schema = discover(&pool).await.unwrap();
        assert!(schema.has_column("elevation"));
    }
}
