// ABOUTME: Shared server resources handed to every route via axum state
// ABOUTME: Wires configuration, the outbound client, the provider, and the plan service together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::errors::AppResult;
use crate::llm::{GeminiProvider, LlmProvider};
use crate::services::FitnessPlanService;
use crate::utils::http_client::create_client_with_timeout;

/// Everything a request handler needs, built once at startup
///
/// Holds no per-request state; handlers only read from it.
#[derive(Clone)]
pub struct ServerResources {
    /// Validated server configuration
    pub config: Arc<ServerConfig>,
    /// Plan generation service
    pub fitness_plan: FitnessPlanService,
}

impl ServerResources {
    /// Build resources around the Gemini provider described by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the outbound HTTP client cannot be built
    pub fn from_config(config: ServerConfig) -> AppResult<Self> {
        let client = create_client_with_timeout(&config.http_client)?;
        let provider = Arc::new(GeminiProvider::new(&config.gemini, client));
        Ok(Self::with_provider(config, provider))
    }

    /// Build resources around an explicit provider
    #[must_use]
    pub fn with_provider(config: ServerConfig, provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            config: Arc::new(config),
            fitness_plan: FitnessPlanService::new(provider),
        }
    }
}
