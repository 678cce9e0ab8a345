// ABOUTME: Fitness plan relay service: profile to prompt to provider to plan text
// ABOUTME: Owns the no-text placeholder substitution so handlers stay protocol-only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::constants::plan::NO_PLAN_PLACEHOLDER;
use crate::errors::AppResult;
use crate::llm::{build_fitness_plan_prompt, LlmProvider};
use crate::models::{FitnessProfile, GeneratedPlan};

/// Generates fitness plans through a single provider call per request
#[derive(Clone)]
pub struct FitnessPlanService {
    provider: Arc<dyn LlmProvider>,
}

impl FitnessPlanService {
    /// Create a service backed by the given provider
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Name of the backing provider
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Build the prompt from `profile`, call the provider once, and relay its text
    ///
    /// A successful provider answer without text yields the fixed
    /// "No plan generated." placeholder. The call is never retried.
    ///
    /// # Errors
    ///
    /// Propagates provider failures unchanged (upstream status, unreachable
    /// provider, or malformed provider body).
    #[instrument(skip_all, fields(provider = self.provider.name()))]
    pub async fn generate_fitness_plan(&self, profile: &FitnessProfile) -> AppResult<GeneratedPlan> {
        let prompt = build_fitness_plan_prompt(profile);

        match self.provider.generate(&prompt).await? {
            Some(text) => {
                info!(plan_len = text.len(), "Fitness plan generated");
                Ok(GeneratedPlan::new(text))
            }
            None => {
                warn!("Provider returned no plan text, substituting placeholder");
                Ok(GeneratedPlan::new(NO_PLAN_PLACEHOLDER))
            }
        }
    }
}
