use axum::{extract::Request, middleware::Next, response::Response};
use chrono::Utc;
use std::time::Instant;

/// Middleware that logs every request on the way in and every response on the
/// way out.
///
/// Emits one `info` event when the request arrives (method, path, wall-clock
/// start) and one when the inner stack has produced a response (status and
/// elapsed milliseconds), whatever that status is. The response is returned
/// untouched; the body streams to the client exactly once and is never
/// buffered here.
///
/// Install it as the outermost layer so the timing covers authentication and
/// rejected requests too.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let started_at = Utc::now();
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    tracing::info!(
        %method,
        %path,
        started_at = %started_at.to_rfc3339(),
        "HTTP {} {} started",
        method,
        path
    );

    let response = next.run(request).await;

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    let status = response.status().as_u16();

    tracing::info!(
        %method,
        %path,
        status,
        elapsed_ms,
        "HTTP {} {} completed with status {} in {:.3}ms",
        method,
        path,
        status,
        elapsed_ms
    );

    response
}
