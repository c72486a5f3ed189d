use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// Log one line per request: method, path, status, latency
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let latency_us = started.elapsed().as_micros() as u64;
    if response.status().is_server_error() {
        tracing::warn!(%method, path = %path, status, latency_us, "HTTP request");
    } else {
        tracing::info!(%method, path = %path, status, latency_us, "HTTP request");
    }
    response
}
