// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides request span creation, response logging, and CORS configuration

/// CORS layer configuration
pub mod cors;
/// Request span creation and response logging
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing
pub use self::tracing::{log_response, make_request_span, REQUEST_ID_HEADER};
