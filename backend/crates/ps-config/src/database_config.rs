use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME, DEFAULT_DATABASE_MAX_CONNECTIONS,
    DEFAULT_QUERY_TIMEOUT_SECS, MAX_DATABASE_MAX_CONNECTIONS, MAX_QUERY_TIMEOUT_SECS,
    MIN_DATABASE_MAX_CONNECTIONS, MIN_QUERY_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file; relative paths resolve against the config directory
    pub path: String,
    pub max_connections: u32,
    /// Deadline applied to every statement
    pub query_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            query_timeout_secs: DEFAULT_QUERY_TIMEOUT_SECS,
        }
    }
}

impl DatabaseConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::database("database.path must not be empty"));
        }

        if self.path.contains("..") {
            return Err(ConfigError::database("database.path cannot contain '..'"));
        }

        if !(MIN_DATABASE_MAX_CONNECTIONS..=MAX_DATABASE_MAX_CONNECTIONS)
            .contains(&self.max_connections)
        {
            return Err(ConfigError::database(format!(
                "database.max_connections must be {}-{}, got {}",
                MIN_DATABASE_MAX_CONNECTIONS, MAX_DATABASE_MAX_CONNECTIONS, self.max_connections
            )));
        }

        if !(MIN_QUERY_TIMEOUT_SECS..=MAX_QUERY_TIMEOUT_SECS).contains(&self.query_timeout_secs) {
            return Err(ConfigError::database(format!(
                "database.query_timeout_secs must be {}-{}, got {}",
                MIN_QUERY_TIMEOUT_SECS, MAX_QUERY_TIMEOUT_SECS, self.query_timeout_secs
            )));
        }

        Ok(())
    }
}
