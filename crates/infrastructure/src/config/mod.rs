//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `database`: SQLite database settings
//!
//! Values come from defaults, an optional `config.toml`, and
//! `CLIMATE_*` environment overrides, in that order. Zero-config
//! startup serves the bundled dataset semantics: `hawaii.sqlite` in
//! the working directory on `127.0.0.1:3000`.

mod database;
mod server;

use serde::{Deserialize, Serialize};

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// SQLite database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from defaults, `config.toml` (if present),
    /// and `CLIMATE_*` environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("database.path", "hawaii.sqlite")?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., CLIMATE_SERVER_PORT)
            .add_source(
                config::Environment::with_prefix("CLIMATE")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn default_config_matches_upstream_behavior() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.path, "hawaii.sqlite");
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                "[server]\nport = 8080\n",
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.database.path, "hawaii.sqlite");
    }

    #[test]
    fn database_section_overrides() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                "[database]\npath = \"/data/climate.sqlite\"\nmax_connections = 2\n",
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.database.path, "/data/climate.sqlite");
        assert_eq!(config.database.max_connections, 2);
    }

    #[test]
    fn config_has_debug() {
        let config = AppConfig::default();
        let debug = format!("{config:?}");
        assert!(debug.contains("AppConfig"));
    }
}
