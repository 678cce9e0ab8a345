// ABOUTME: System-wide constants for the fitness plan relay
// ABOUTME: Environment variable names, default values, and the placeholder plan text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Hardcoded defaults and the names of the environment variables that override them.

/// Service identity
pub mod service_names {
    /// Default service name used in logs and health responses
    pub const FITNESS_PLAN_RELAY: &str = "fitness-plan-relay";

    /// Service version from Cargo.toml
    pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Environment variable names
pub mod env_vars {
    /// Provider API key (required)
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    /// Provider model name
    pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
    /// Provider base URL
    pub const GEMINI_API_BASE_URL: &str = "GEMINI_API_BASE_URL";
    /// Optional generation temperature
    pub const GEMINI_TEMPERATURE: &str = "GEMINI_TEMPERATURE";
    /// Optional output token cap
    pub const GEMINI_MAX_OUTPUT_TOKENS: &str = "GEMINI_MAX_OUTPUT_TOKENS";
    /// Listen address
    pub const HOST: &str = "HOST";
    /// Listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Outbound request timeout
    pub const HTTP_CLIENT_TIMEOUT_SECS: &str = "HTTP_CLIENT_TIMEOUT_SECS";
    /// Outbound connect timeout
    pub const HTTP_CLIENT_CONNECT_TIMEOUT_SECS: &str = "HTTP_CLIENT_CONNECT_TIMEOUT_SECS";
    /// Comma-separated CORS origins or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Default configuration values
pub mod defaults {
    /// Default listen address
    pub const HOST: &str = "0.0.0.0";
    /// Default listen port
    pub const HTTP_PORT: u16 = 8000;
    /// Default provider model
    pub const GEMINI_MODEL: &str = "gemini-1.5-flash-latest";
    /// Default provider base URL
    pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
    /// Default outbound request timeout in seconds
    pub const HTTP_CLIENT_TIMEOUT_SECS: u64 = 30;
    /// Default outbound connect timeout in seconds
    pub const HTTP_CLIENT_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Default CORS origin policy
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
    /// Inbound request body limit in bytes
    pub const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;
}

/// Plan relay contract values
pub mod plan {
    /// Returned under `plan` when the provider response carries no generated text
    pub const NO_PLAN_PLACEHOLDER: &str = "No plan generated.";

    /// Inbound route for plan generation
    pub const GENERATE_ROUTE: &str = "/generate-fitness-plan/";

    /// Same route without the trailing slash
    pub const GENERATE_ROUTE_NO_SLASH: &str = "/generate-fitness-plan";
}

/// Provider wire constants
pub mod gemini {
    /// Header carrying the API key
    pub const API_KEY_HEADER: &str = "x-goog-api-key";

    /// Method suffix for single-shot generation
    pub const GENERATE_CONTENT_METHOD: &str = "generateContent";
}
