use error_location::ErrorLocation;
use thiserror::Error;

/// Startup failures. Any of these aborts the process before it binds.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] ps_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] ps_db::DbError),

    #[error("Invalid RSA public key: {0}")]
    PublicKey(#[from] ps_auth::AuthError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
