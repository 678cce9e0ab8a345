// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Builds per-request spans carrying the request ID and logs each response with latency

use std::time::Duration;

use axum::body::Body;
use http::{Request, Response};
use tracing::{field, info, info_span, Span};

/// Header carrying the per-request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Create the tracing span for an inbound HTTP request
///
/// The request ID is read from `x-request-id`, which the request-id layer
/// sets before this span is created.
#[must_use]
pub fn make_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
        status_code = field::Empty,
        duration_ms = field::Empty,
    )
}

/// Record status and latency on the request span and emit a completion event
pub fn log_response(response: &Response<Body>, latency: Duration, span: &Span) {
    let duration_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
    span.record("status_code", response.status().as_u16());
    span.record("duration_ms", duration_ms);
    info!(
        status = response.status().as_u16(),
        latency_ms = duration_ms,
        "finished processing request"
    );
}
