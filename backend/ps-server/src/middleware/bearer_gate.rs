//! Axum wiring for the bearer gate.

use crate::{ApiError, AppState, ServerErrorResult};

use ps_auth::{BearerGate, PublicKey};
use ps_config::SecurityConfig;

use std::panic::Location;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;

/// Build the gate from configuration.
///
/// No key material yields a disabled gate. Key material that does not
/// decode is a startup error.
pub fn build_gate(security: &SecurityConfig) -> ServerErrorResult<BearerGate> {
    if !security.is_enabled() {
        return Ok(BearerGate::disabled());
    }

    let public_key = PublicKey::from_components(&security.modulus, &security.exponent)?;
    log::info!(
        "Bearer gate enabled: RSA key {} bits, exponent {}",
        public_key.modulus_bits(),
        public_key.exponent()
    );

    Ok(BearerGate::new(Some(Arc::new(public_key))))
}

/// Reject requests the gate does not let through with a generic 401.
pub async fn require_bearer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let authorization = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let decision = state.gate.check(request.uri().path(), authorization);

    match decision {
        Ok(_) => next.run(request).await,
        Err(e) => {
            log::warn!(
                "Rejected {} {}: {}",
                request.method(),
                request.uri().path(),
                e
            );
            ApiError::Unauthorized {
                location: ErrorLocation::from(Location::caller()),
            }
            .into_response()
        }
    }
}
