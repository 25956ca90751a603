//! Database connection management
//!
//! Builds the read-only sqlx pool over the dataset file. The file is
//! populated by an external ingestion process and must already exist;
//! opening with `create_if_missing(false)` turns a missing dataset
//! into a startup error instead of an empty database that would serve
//! nothing.

use std::str::FromStr;

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Persistence errors
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("invalid database path {path:?}: {source}")]
    InvalidPath {
        path: String,
        source: sqlx::Error,
    },

    #[error("table '{table}' not found in the dataset")]
    TableMissing { table: String },

    #[error("table '{table}' is missing expected column '{column}'")]
    ColumnMissing { table: String, column: String },
}

/// Open a read-only connection pool over the dataset file
///
/// Fails if the file does not exist or cannot be opened; no retries,
/// this gates process readiness.
pub async fn open_read_only(config: &DatabaseConfig) -> Result<SqlitePool, PersistenceError> {
    info!(
        path = %config.path,
        max_connections = config.max_connections,
        "Opening read-only database pool"
    );

    let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", config.path))
        .map_err(|source| PersistenceError::InvalidPath {
            path: config.path.clone(),
            source,
        })?
        .read_only(true)
        .create_if_missing(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_dataset_is_a_startup_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig {
            path: dir.path().join("nope.sqlite").display().to_string(),
            max_connections: 1,
        };
        let result = open_read_only(&config).await;
        assert!(result.is_err());
        // The pool must not have created the file as a side effect
        assert!(!dir.path().join("nope.sqlite").exists());
    }

    #[tokio::test]
    async fn existing_dataset_opens_but_rejects_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hawaii.sqlite");

        // Seed a dataset file the way the out-of-scope ingestion would
        {
            let seed = SqlitePool::connect_with(
                SqliteConnectOptions::new()
                    .filename(&path)
                    .create_if_missing(true),
            )
            .await
            .unwrap();
            sqlx::query(
                "CREATE TABLE measurement (
                    id INTEGER PRIMARY KEY,
                    station TEXT,
                    date TEXT,
                    prcp REAL,
                    tobs REAL
                )",
            )
            .execute(&seed)
            .await
            .unwrap();
            seed.close().await;
        }

        let config = DatabaseConfig {
            path: path.display().to_string(),
            max_connections: 1,
        };
        let pool = open_read_only(&config).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM measurement")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);

        let write = sqlx::query("INSERT INTO measurement (station, date, tobs) VALUES ('A', '2017-01-01', 70.0)")
            .execute(&pool)
            .await;
        assert!(write.is_err());

        pool.close().await;
    }

    #[test]
    fn persistence_error_display() {
        let err = PersistenceError::TableMissing {
            table: "measurement".to_string(),
        };
        assert!(err.to_string().contains("measurement"));

        let err = PersistenceError::ColumnMissing {
            table: "measurement".to_string(),
            column: "tobs".to_string(),
        };
        assert!(err.to_string().contains("tobs"));
    }
}
