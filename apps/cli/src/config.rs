//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::time::Duration;

use contacts_db::DbConfig;

/// Contacts CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite database file
    pub db_path: String,

    /// Pool upper bound
    pub max_connections: u32,

    /// Seconds to wait for a pooled connection
    pub connect_timeout_secs: u64,

    /// tracing filter directive (e.g. "info", "contacts_db=debug")
    pub log_filter: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = AppConfig {
            db_path: lookup("CONTACTS_DB_PATH").unwrap_or_else(|| "./contacts.db".to_string()),

            max_connections: lookup("CONTACTS_MAX_CONNECTIONS")
                .unwrap_or_else(|| "5".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CONTACTS_MAX_CONNECTIONS".to_string()))?,

            connect_timeout_secs: lookup("CONTACTS_CONNECT_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .parse()
                .map_err(|_| {
                    ConfigError::InvalidValue("CONTACTS_CONNECT_TIMEOUT_SECS".to_string())
                })?,

            log_filter: lookup("CONTACTS_LOG").unwrap_or_else(|| "info".to_string()),
        };

        if config.max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "CONTACTS_MAX_CONNECTIONS".to_string(),
            ));
        }

        Ok(config)
    }

    /// Builds the database configuration.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.db_path)
            .max_connections(self.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
    }
}

/// Configuration error types.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
