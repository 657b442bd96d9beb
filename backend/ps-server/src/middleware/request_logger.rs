use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// Header carrying the per-request id set by the router
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Log request id, method, path, status and duration of every request
pub async fn log_requests(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    log::info!(
        "[{}] {} {} -> {} ({})",
        request_id,
        method,
        path,
        response.status().as_u16(),
        humantime::format_duration(started.elapsed())
    );

    response
}
