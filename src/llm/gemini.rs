// ABOUTME: Google Gemini provider for single-prompt plan generation
// ABOUTME: Builds the generateContent envelope, performs the outbound call, and extracts text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Gemini Provider
//!
//! Implementation of [`LlmProvider`] over the Gemini `generateContent` REST
//! method.
//!
//! ## Configuration
//!
//! Set `GEMINI_API_KEY` with a key from Google AI Studio. The key travels in
//! the `x-goog-api-key` header rather than the query string so it never shows
//! up in URLs, error messages, or access logs.
//!
//! ## Wire shape
//!
//! Request: `{"contents":[{"parts":[{"text":"..."}]}]}` plus an optional
//! `generationConfig`. Response text is read from
//! `candidates[0].content.parts[*].text`.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use super::LlmProvider;
use crate::config::GeminiConfig;
use crate::constants::gemini::{API_KEY_HEADER, GENERATE_CONTENT_METHOD};
use crate::errors::{AppError, AppResult};

// ============================================================================
// API Request/Response Types
// ============================================================================

/// `generateContent` request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Prompt units; the relay always sends exactly one
    pub contents: Vec<GeminiContent>,
    /// Sampling overrides, omitted when unset
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub generation_config: Option<GenerationConfig>,
}

/// One prompt unit (request) or one candidate body (response)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiContent {
    /// Author role; absent on single-turn requests
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub role: Option<String>,
    /// Ordered content parts
    #[serde(default)]
    pub parts: Vec<ContentPart>,
}

/// One content part
///
/// Only text is relevant to the relay; other part kinds (function calls,
/// inline data) deserialize with `text: None` and are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPart {
    /// Text payload
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text: Option<String>,
}

/// Generation configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub temperature: Option<f32>,
    /// Cap on generated tokens
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_output_tokens: Option<u32>,
}

/// `generateContent` response body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    /// Response candidates; empty when the prompt was blocked
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Response candidate
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content
    #[serde(default)]
    pub content: Option<GeminiContent>,
    /// Why generation stopped (STOP, MAX_TOKENS, SAFETY, ...)
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, all text parts concatenated in order
    ///
    /// Returns `None` when there is no candidate, no content, or no text part.
    #[must_use]
    pub fn plan_text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let mut texts = parts.iter().filter_map(|part| part.text.as_deref()).peekable();
        texts.peek()?;
        Some(texts.collect())
    }

    /// Finish reason of the first candidate
    #[must_use]
    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates.first()?.finish_reason.as_deref()
    }
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Google Gemini provider
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    url: String,
    generation_config: Option<GenerationConfig>,
}

impl GeminiProvider {
    /// Create a provider from configuration and a (pooled) HTTP client
    #[must_use]
    pub fn new(config: &GeminiConfig, client: Client) -> Self {
        let generation_config = if config.temperature.is_some() || config.max_output_tokens.is_some() {
            Some(GenerationConfig {
                temperature: config.temperature,
                max_output_tokens: config.max_output_tokens,
            })
        } else {
            None
        };

        Self {
            client,
            api_key: config.api_key().to_owned(),
            url: format!(
                "{}/models/{}:{GENERATE_CONTENT_METHOD}",
                config.base_url, config.model
            ),
            generation_config,
        }
    }

    /// Full `generateContent` endpoint URL (contains no credential)
    #[must_use]
    pub fn generate_content_url(&self) -> &str {
        &self.url
    }

    /// Wrap a prompt in the provider envelope: one content unit holding one text part
    #[must_use]
    pub fn build_request(&self, prompt: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![GeminiContent {
                role: None,
                parts: vec![ContentPart {
                    text: Some(prompt.to_owned()),
                }],
            }],
            generation_config: self.generation_config,
        }
    }

    /// Map a transport failure to an unreachable-provider error
    ///
    /// The URL is stripped first so nothing endpoint-specific leaks to callers.
    fn map_transport_error(error: reqwest::Error) -> AppError {
        let error = error.without_url();
        let reason = if error.is_timeout() {
            "timed out"
        } else if error.is_connect() {
            "connection failed"
        } else {
            "request failed"
        };
        warn!(error = %error, "Plan provider unreachable");
        AppError::upstream_unreachable(format!("Plan provider {reason}: {error}"))
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    #[instrument(skip(self, prompt), fields(provider = "gemini", prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> AppResult<Option<String>> {
        let request = self.build_request(prompt);

        debug!("Sending request to Gemini API");

        let response = self
            .client
            .post(&self.url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(Self::map_transport_error)?;

        if !status.is_success() {
            warn!(status = %status, "Gemini API returned an error status");
            return Err(AppError::upstream(status.as_u16(), &body));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "Failed to parse Gemini response");
            AppError::upstream_malformed(format!("Failed to parse plan provider response: {e}"), &body)
        })?;

        let text = parsed.plan_text();
        if text.is_none() {
            warn!(
                finish_reason = parsed.finish_reason().unwrap_or("none"),
                "Gemini response carried no generated text"
            );
        } else {
            debug!("Successfully received Gemini response");
        }

        Ok(text)
    }
}

impl Debug for GeminiProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiProvider")
            .field("url", &self.url)
            .field("api_key", &"[REDACTED]")
            .field("generation_config", &self.generation_config)
            // Omit `client` field as HTTP clients are not useful to debug
            .finish_non_exhaustive()
    }
}
