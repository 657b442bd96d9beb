use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Failed to decode RSA {component}: {message} {location}")]
    KeyDecode {
        component: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Unexpected signing algorithm: {algorithm} {location}")]
    UnexpectedAlgorithm {
        algorithm: String,
        location: ErrorLocation,
    },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// `true` for failures that reject a single request, as opposed to
    /// startup-time key construction failures
    pub fn is_unauthorized(&self) -> bool {
        !matches!(self, Self::KeyDecode { .. })
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
