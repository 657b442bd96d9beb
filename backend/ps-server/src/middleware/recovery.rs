//! Last-resort handlers for requests that never produce a normal response

use crate::ApiError;

use std::any::Any;
use std::panic::Location;

use axum::{
    BoxError,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use tower::timeout::error::Elapsed;

/// Turn a handler panic into the usual 500 error body
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else {
        "unknown panic payload"
    };

    log::error!("Handler panicked: {}", detail);

    ApiError::internal("Internal server error").into_response()
}

/// Map errors raised by the tower timeout layer
pub async fn handle_timeout(error: BoxError) -> ApiError {
    if error.is::<Elapsed>() {
        ApiError::Timeout {
            location: ErrorLocation::from(Location::caller()),
        }
    } else {
        ApiError::internal(format!("Unhandled middleware error: {error}"))
    }
}
