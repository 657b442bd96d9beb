//! Conditional bearer-token gate.
//!
//! The gate is built once at startup from an optional public key. Without a
//! key it is disabled and lets everything through. With a key, requests whose
//! path contains the protected marker must carry a valid RSA-signed token in
//! `Authorization`. Nothing about the token is handed to the handlers.

use crate::{AuthError, JwtValidator, PublicKey, Result as AuthErrorResult};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;

/// Paths containing this marker require a token when the gate is enabled
pub const PROTECTED_PATH_MARKER: &str = "/api/v1";

/// Stripped from the header value when present
pub const BEARER_PREFIX: &str = "Bearer ";

/// Why a request was let through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// No key configured
    Disabled,
    /// Path does not contain the protected marker
    Unprotected,
    /// Token verified
    Authorized,
}

#[derive(Clone)]
pub struct BearerGate {
    validator: Option<JwtValidator>,
    protected_marker: String,
}

impl BearerGate {
    /// Gate that checks nothing
    pub fn disabled() -> Self {
        Self {
            validator: None,
            protected_marker: PROTECTED_PATH_MARKER.to_string(),
        }
    }

    pub fn new(public_key: Option<Arc<PublicKey>>) -> Self {
        Self {
            validator: public_key.map(JwtValidator::with_public_key),
            protected_marker: PROTECTED_PATH_MARKER.to_string(),
        }
    }

    pub fn with_protected_marker(mut self, marker: impl Into<String>) -> Self {
        self.protected_marker = marker.into();
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.validator.is_some()
    }

    pub fn is_protected(&self, path: &str) -> bool {
        path.contains(&self.protected_marker)
    }

    /// Decide whether a request may proceed.
    ///
    /// `authorization` is the raw `Authorization` header value, if any.
    #[track_caller]
    pub fn check(&self, path: &str, authorization: Option<&str>) -> AuthErrorResult<GateDecision> {
        let Some(validator) = &self.validator else {
            return Ok(GateDecision::Disabled);
        };

        if !self.is_protected(path) {
            return Ok(GateDecision::Unprotected);
        }

        let header = match authorization {
            Some(value) if !value.is_empty() => value,
            _ => {
                return Err(AuthError::MissingHeader {
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        let token = header.strip_prefix(BEARER_PREFIX).unwrap_or(header);

        let algorithm = validator.validate(token)?;
        log::debug!("Accepted {} token for {}", algorithm.as_str(), path);

        Ok(GateDecision::Authorized)
    }
}

impl Default for BearerGate {
    fn default() -> Self {
        Self::disabled()
    }
}
