use crate::{
    CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR_NAME,
    DatabaseConfig, LoggingConfig, SecurityConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. `.env` in the working directory, if present
    /// 2. `PS_CONFIG_DIR` env var, else `./.ps/`; created when missing
    /// 3. `config.toml` in that directory, else defaults
    /// 4. `PS_*` environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let _ = dotenvy::dotenv();

        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: PS_CONFIG_DIR env var > ./.ps/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.security.validate()?;

        if let Some(file) = &self.logging.file
            && file.trim().is_empty()
        {
            return Err(ConfigError::logging("logging.file must not be empty when set"));
        }

        Ok(())
    }

    /// Absolute paths are kept, relative ones resolve against the config dir.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let path = Path::new(&self.database.path);
        if path.is_absolute() {
            return Ok(path.to_path_buf());
        }

        Ok(Self::config_dir()?.join(path))
    }

    /// `<config dir>/<logging.dir>/<logging.file>`, or `None` for console only
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (never logs key material).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (request timeout {}s)",
            self.server.host, self.server.port, self.server.request_timeout_secs
        );
        info!(
            "  database: {} (max {} connections, query timeout {}s)",
            self.database.path, self.database.max_connections, self.database.query_timeout_secs
        );
        info!(
            "  security: {}",
            if self.security.is_enabled() {
                "bearer gate enabled (RSA key configured)"
            } else {
                "bearer gate disabled"
            }
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("none")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("PS_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("PS_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "PS_SERVER_REQUEST_TIMEOUT_SECS",
            &mut self.server.request_timeout_secs,
        );

        // Database
        Self::apply_env_string("PS_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "PS_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );
        Self::apply_env_parse(
            "PS_DATABASE_QUERY_TIMEOUT_SECS",
            &mut self.database.query_timeout_secs,
        );

        // Security
        Self::apply_env_string("PS_SECURITY_MODULUS", &mut self.security.modulus);
        Self::apply_env_string("PS_SECURITY_EXPONENT", &mut self.security.exponent);

        // Logging
        Self::apply_env_parse("PS_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PS_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PS_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"; anything else is false
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparsable values leave the target untouched
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
