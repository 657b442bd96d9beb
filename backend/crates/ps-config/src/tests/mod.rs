
use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - restores the previous value on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Every PS_* override the loader reads
const OVERRIDE_VARS: [&str; 11] = [
    "PS_SERVER_HOST",
    "PS_SERVER_PORT",
    "PS_SERVER_REQUEST_TIMEOUT_SECS",
    "PS_DATABASE_PATH",
    "PS_DATABASE_MAX_CONNECTIONS",
    "PS_DATABASE_QUERY_TIMEOUT_SECS",
    "PS_SECURITY_MODULUS",
    "PS_SECURITY_EXPONENT",
    "PS_LOG_LEVEL",
    "PS_LOG_COLORED",
    "PS_LOG_FILE",
];

pub(crate) struct ConfigDir {
    pub temp: TempDir,
    _dir_guard: EnvGuard,
    _cleared: Vec<EnvGuard>,
}

impl ConfigDir {
    pub(crate) fn write_toml(&self, contents: &str) {
        std::fs::write(self.temp.path().join("config.toml"), contents).unwrap();
    }
}

/// Temp config directory pointed to by PS_CONFIG_DIR, with overrides cleared
pub(crate) fn setup_config_dir() -> ConfigDir {
    let temp = TempDir::new().unwrap();
    let dir_guard = EnvGuard::set(crate::CONFIG_DIR_ENV, temp.path().to_str().unwrap());
    let cleared = OVERRIDE_VARS.into_iter().map(EnvGuard::remove).collect();

    ConfigDir {
        temp,
        _dir_guard: dir_guard,
        _cleared: cleared,
    }
}
