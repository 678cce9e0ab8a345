// ABOUTME: Configuration module for the fitness plan relay
// ABOUTME: Re-exports the environment-driven server configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All settings come from environment variables resolved once at startup.

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, Environment, GeminiConfig, HttpClientConfig, ServerConfig};
