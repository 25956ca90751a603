//! Database (SQLite) configuration.

use serde::{Deserialize, Serialize};

/// SQLite database configuration
///
/// The database is opened read-only; there is no write path anywhere
/// in this service, so no journal or migration settings exist here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    #[serde(default = "default_db_path")]
    pub path: String,

    /// Maximum number of concurrent database connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_db_path() -> String {
    "hawaii.sqlite".to_string()
}

const fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            max_connections: default_max_connections(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_bundled_dataset() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, "hawaii.sqlite");
        assert_eq!(config.max_connections, 5);
    }
}
