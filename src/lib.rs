// ABOUTME: Main library entry point for the fitness plan relay
// ABOUTME: Exposes configuration, the Gemini provider, the plan service, and the HTTP router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitness Plan Relay
//!
//! A small HTTP service that accepts a user's fitness profile, turns it into a
//! natural-language prompt, asks Google Gemini for a personalized plan, and
//! relays the generated text back to the caller.
//!
//! ## Request flow
//!
//! 1. `POST /generate-fitness-plan/` with a JSON [`models::FitnessProfile`]
//! 2. [`llm::build_fitness_plan_prompt`] embeds every field in a fixed template
//! 3. [`llm::GeminiProvider`] makes exactly one `generateContent` call
//! 4. The first candidate's text (or a placeholder) is returned as `{"plan": ...}`
//!
//! Provider failures are relayed with the provider's own status code and
//! error payload.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use fitness_plan_relay::config::ServerConfig;
//! use fitness_plan_relay::errors::AppResult;
//! use fitness_plan_relay::resources::ServerResources;
//! use fitness_plan_relay::server;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = Arc::new(ServerResources::from_config(config)?);
//!     server::run(resources).await
//! }
//! ```

/// Configuration management from environment variables
pub mod config;
/// Application constants and configuration defaults
pub mod constants;
/// Unified error handling with standard error codes and HTTP responses
pub mod errors;
/// LLM provider abstraction and the Gemini implementation
pub mod llm;
/// Production logging and structured output
pub mod logging;
/// HTTP middleware for request tracing and CORS
pub mod middleware;
/// Request and response data models
pub mod models;
/// Shared resources injected into route handlers
pub mod resources;
/// `HTTP` route definitions
pub mod routes;
/// Router assembly and server lifecycle
pub mod server;
/// Domain services
pub mod services;
/// Shared utilities
pub mod utils;
