// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the axum request helper, a fake Gemini upstream, and a scripted provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod axum_test;
pub mod fake_upstream;
pub mod scripted_provider;

use std::sync::Arc;

use axum::Router;
use fitness_plan_relay::config::{GeminiConfig, ServerConfig};
use fitness_plan_relay::llm::LlmProvider;
use fitness_plan_relay::resources::ServerResources;
use fitness_plan_relay::server::build_router;
use serde_json::{json, Value};

/// API key used by every test configuration
pub const TEST_API_KEY: &str = "test-gemini-key";

/// A well-formed fitness profile request body
pub fn sample_profile() -> Value {
    json!({
        "age": 29,
        "weight": 68,
        "height": 172,
        "goals": "run a sub-25 minute 5k",
        "activityLevel": "moderately active"
    })
}

/// Server configuration pointing the Gemini provider at `base_url`
pub fn config_for(base_url: &str) -> ServerConfig {
    ServerConfig::new(GeminiConfig::new(TEST_API_KEY).with_base_url(base_url))
}

/// Full application router backed by the real Gemini provider
pub fn gemini_router(base_url: &str) -> Router {
    let resources =
        ServerResources::from_config(config_for(base_url)).expect("build server resources");
    build_router(Arc::new(resources))
}

/// Full application router backed by an arbitrary provider
pub fn router_with_provider(provider: Arc<dyn LlmProvider>) -> Router {
    let resources = ServerResources::with_provider(config_for("http://127.0.0.1:9/v1beta"), provider);
    build_router(Arc::new(resources))
}
