// ABOUTME: LLM provider abstraction for the plan relay
// ABOUTME: Defines the single-prompt generation contract implemented by the Gemini provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # LLM Provider Interface
//!
//! The relay needs exactly one capability from a provider: send one prompt,
//! get back generated text. The trait is the seam between the HTTP layer and
//! the outbound call, so tests can substitute a provider without a network.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fitness_plan_relay::config::GeminiConfig;
//! use fitness_plan_relay::llm::{GeminiProvider, LlmProvider};
//!
//! # async fn example() -> fitness_plan_relay::errors::AppResult<()> {
//! let provider = GeminiProvider::new(&GeminiConfig::new("api-key"), reqwest::Client::new());
//! let text = provider.generate("Suggest a warm-up routine").await?;
//! println!("{}", text.unwrap_or_default());
//! # Ok(())
//! # }
//! ```

mod gemini;
pub mod prompts;

pub use gemini::{
    Candidate, ContentPart, GeminiContent, GeminiProvider, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig,
};
pub use prompts::build_fitness_plan_prompt;

use async_trait::async_trait;

use crate::errors::AppResult;

/// Generative-text provider contract
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Unique provider identifier, used in logs
    fn name(&self) -> &'static str;

    /// Send one prompt and return the generated text
    ///
    /// `Ok(None)` means the provider answered successfully but the response
    /// carried no recognizable generated text.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider is unreachable, answers with a
    /// non-success status, or returns a body that is not valid JSON.
    async fn generate(&self, prompt: &str) -> AppResult<Option<String>>;
}
