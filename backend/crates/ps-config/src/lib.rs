mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod security_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use security_config::SecurityConfig;
pub use server_config::ServerConfig;

/// Environment variable naming the config directory
pub const CONFIG_DIR_ENV: &str = "PS_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".ps";
const CONFIG_FILE_NAME: &str = "config.toml";

// Server
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 9902;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 4;
const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

// Database
const DEFAULT_DATABASE_FILENAME: &str = "person.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;
const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 5;
const MIN_QUERY_TIMEOUT_SECS: u64 = 1;
const MAX_QUERY_TIMEOUT_SECS: u64 = 300;

// Logging
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_LOG_DIRECTORY: &str = "log";
