use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error in {operation}: {source} {location}")]
    Sqlx {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Not found in {operation}: {message} {location}")]
    NotFound {
        operation: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Deadline of {timeout:?} exceeded in {operation} {location}")]
    Timeout {
        operation: &'static str,
        timeout: Duration,
        location: ErrorLocation,
    },

    #[error("Invalid row in {operation}: {message} {location}")]
    InvalidRow {
        operation: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    /// `true` when a lookup or update matched zero rows
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Tag a driver error with the repository operation that produced it
    #[track_caller]
    pub fn sqlx(operation: &'static str, source: sqlx::Error) -> Self {
        Self::Sqlx {
            operation,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(operation: &'static str, message: S) -> Self {
        Self::NotFound {
            operation,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
