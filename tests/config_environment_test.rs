// ABOUTME: Integration tests for environment-driven configuration loading
// ABOUTME: Exercises ServerConfig::from_env against real process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use fitness_plan_relay::config::{Environment, ServerConfig};
use fitness_plan_relay::errors::ErrorCode;
use serial_test::serial;

const RELAY_VARS: &[&str] = &[
    "GEMINI_API_KEY",
    "GEMINI_MODEL",
    "GEMINI_API_BASE_URL",
    "GEMINI_TEMPERATURE",
    "GEMINI_MAX_OUTPUT_TOKENS",
    "HOST",
    "HTTP_PORT",
    "HTTP_CLIENT_TIMEOUT_SECS",
    "HTTP_CLIENT_CONNECT_TIMEOUT_SECS",
    "CORS_ALLOWED_ORIGINS",
    "ENVIRONMENT",
];

fn clear_relay_vars() {
    for name in RELAY_VARS {
        env::remove_var(name);
    }
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("invalid"),
        Environment::Development
    ); // Default fallback
}

#[test]
#[serial]
fn test_missing_api_key_fails_fast() {
    clear_relay_vars();

    let err = ServerConfig::from_env().unwrap_err();

    assert_eq!(err.code, ErrorCode::ConfigMissing);
    assert!(err.message.contains("GEMINI_API_KEY"));
}

#[test]
#[serial]
fn test_defaults_applied_with_only_api_key() {
    clear_relay_vars();
    env::set_var("GEMINI_API_KEY", "from-env");

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.http_port, 8000);
    assert_eq!(config.gemini.api_key(), "from-env");
    assert_eq!(
        config.gemini.base_url,
        "https://generativelanguage.googleapis.com/v1beta"
    );
    assert_eq!(config.environment, Environment::Development);

    clear_relay_vars();
}

#[test]
#[serial]
fn test_overrides_are_read() {
    clear_relay_vars();
    env::set_var("GEMINI_API_KEY", "k");
    env::set_var("GEMINI_MODEL", "gemini-2.0-flash");
    env::set_var("GEMINI_TEMPERATURE", "0.7");
    env::set_var("GEMINI_MAX_OUTPUT_TOKENS", "2048");
    env::set_var("HOST", "127.0.0.1");
    env::set_var("HTTP_PORT", "9100");
    env::set_var("HTTP_CLIENT_TIMEOUT_SECS", "5");
    env::set_var("CORS_ALLOWED_ORIGINS", "https://app.example.com");
    env::set_var("ENVIRONMENT", "production");

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.bind_address(), "127.0.0.1:9100");
    assert_eq!(config.gemini.model, "gemini-2.0-flash");
    assert_eq!(config.gemini.temperature, Some(0.7));
    assert_eq!(config.gemini.max_output_tokens, Some(2048));
    assert_eq!(config.http_client.timeout_secs, 5);
    assert_eq!(config.cors.allowed_origins, "https://app.example.com");
    assert!(config.environment.is_production());

    clear_relay_vars();
}

#[test]
#[serial]
fn test_invalid_base_url_rejected() {
    clear_relay_vars();
    env::set_var("GEMINI_API_KEY", "k");
    env::set_var("GEMINI_API_BASE_URL", "ftp://example.com/v1beta");

    let err = ServerConfig::from_env().unwrap_err();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);

    clear_relay_vars();
}

#[test]
#[serial]
fn test_unparseable_token_limit_rejected() {
    clear_relay_vars();
    env::set_var("GEMINI_API_KEY", "k");
    env::set_var("GEMINI_MAX_OUTPUT_TOKENS", "lots");

    let err = ServerConfig::from_env().unwrap_err();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains("GEMINI_MAX_OUTPUT_TOKENS"));

    clear_relay_vars();
}
