// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Loads listener, provider, HTTP client, and CORS settings and validates them at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management
//!
//! Configuration is resolved once at process startup. Anything required that
//! is missing, or anything present that does not parse, is a startup error so
//! that a misconfigured relay never accepts traffic.

use std::env;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

use crate::constants::{defaults, env_vars};
use crate::errors::{AppError, AppResult};

/// Accepted temperature range for generation
const TEMPERATURE_RANGE: RangeInclusive<f32> = 0.0..=2.0;

/// Environment type for deployment-sensitive defaults
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Generative-content provider configuration
#[derive(Clone)]
pub struct GeminiConfig {
    api_key: String,
    /// Model path segment, e.g. `gemini-1.5-flash-latest`
    pub model: String,
    /// Base URL without trailing slash
    pub base_url: String,
    /// Optional sampling temperature
    pub temperature: Option<f32>,
    /// Optional cap on generated tokens
    pub max_output_tokens: Option<u32>,
}

impl GeminiConfig {
    /// Build a provider configuration with default model and endpoint
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: defaults::GEMINI_MODEL.to_owned(),
            base_url: defaults::GEMINI_API_BASE_URL.to_owned(),
            temperature: None,
            max_output_tokens: None,
        }
    }

    /// Point the provider at a different base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// The provider credential. Never log this value.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl Debug for GeminiConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .finish()
    }
}

/// Outbound HTTP client timeout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl HttpClientConfig {
    /// Request timeout as a [`Duration`]
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connect timeout as a [`Duration`]
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: defaults::HTTP_CLIENT_TIMEOUT_SECS,
            connect_timeout_secs: defaults::HTTP_CLIENT_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origin list, or `*` for any origin
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
        }
    }
}

/// Complete relay configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address
    pub host: String,
    /// Listen port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Provider settings
    pub gemini: GeminiConfig,
    /// Outbound client timeouts
    pub http_client: HttpClientConfig,
    /// CORS policy
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Build a configuration with defaults for everything but the credential
    #[must_use]
    pub fn new(gemini: GeminiConfig) -> Self {
        Self {
            host: defaults::HOST.to_owned(),
            http_port: defaults::HTTP_PORT,
            environment: Environment::default(),
            gemini,
            http_client: HttpClientConfig::default(),
            cors: CorsConfig::default(),
        }
    }

    /// Load configuration from process environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `GEMINI_API_KEY` is missing or any value fails to parse
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or any value fails to parse
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(env_vars::GEMINI_API_KEY)
            .map(|key| key.trim().to_owned())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                AppError::config_missing(format!(
                    "{} environment variable not set",
                    env_vars::GEMINI_API_KEY
                ))
            })?;

        let base_url = lookup(env_vars::GEMINI_API_BASE_URL)
            .unwrap_or_else(|| defaults::GEMINI_API_BASE_URL.to_owned());
        validate_base_url(&base_url)?;

        let temperature: Option<f32> = parse_optional(&lookup, env_vars::GEMINI_TEMPERATURE)?;
        if let Some(value) = temperature {
            if !TEMPERATURE_RANGE.contains(&value) {
                return Err(AppError::config_invalid(format!(
                    "{} must be between 0.0 and 2.0, got {value}",
                    env_vars::GEMINI_TEMPERATURE
                )));
            }
        }

        let gemini = GeminiConfig {
            model: lookup(env_vars::GEMINI_MODEL)
                .filter(|model| !model.trim().is_empty())
                .unwrap_or_else(|| defaults::GEMINI_MODEL.to_owned()),
            temperature,
            max_output_tokens: parse_optional(&lookup, env_vars::GEMINI_MAX_OUTPUT_TOKENS)?,
            ..GeminiConfig::new(api_key).with_base_url(base_url)
        };

        Ok(Self {
            host: lookup(env_vars::HOST).unwrap_or_else(|| defaults::HOST.to_owned()),
            http_port: parse_or(&lookup, env_vars::HTTP_PORT, defaults::HTTP_PORT)?,
            environment: lookup(env_vars::ENVIRONMENT)
                .map(|value| Environment::from_str_or_default(&value))
                .unwrap_or_default(),
            gemini,
            http_client: HttpClientConfig {
                timeout_secs: parse_positive(
                    &lookup,
                    env_vars::HTTP_CLIENT_TIMEOUT_SECS,
                    defaults::HTTP_CLIENT_TIMEOUT_SECS,
                )?,
                connect_timeout_secs: parse_positive(
                    &lookup,
                    env_vars::HTTP_CLIENT_CONNECT_TIMEOUT_SECS,
                    defaults::HTTP_CLIENT_CONNECT_TIMEOUT_SECS,
                )?,
            },
            cors: CorsConfig {
                allowed_origins: lookup(env_vars::CORS_ALLOWED_ORIGINS)
                    .unwrap_or_else(|| defaults::CORS_ALLOWED_ORIGINS.to_owned()),
            },
        })
    }

    /// Socket address string the listener binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Human-readable configuration summary with the credential redacted
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Fitness Plan Relay Configuration:\n\
             - Listen: {}\n\
             - Environment: {}\n\
             - Provider Model: {}\n\
             - Provider URL: {}\n\
             - Provider API Key: [REDACTED]\n\
             - Generation Config: {}\n\
             - Upstream Timeout: {}s (connect {}s)\n\
             - CORS Origins: {}",
            self.bind_address(),
            self.environment,
            self.gemini.model,
            self.gemini.base_url,
            if self.gemini.temperature.is_some() || self.gemini.max_output_tokens.is_some() {
                "Custom"
            } else {
                "Provider default"
            },
            self.http_client.timeout_secs,
            self.http_client.connect_timeout_secs,
            self.cors.allowed_origins,
        )
    }
}

fn validate_base_url(base_url: &str) -> AppResult<()> {
    let parsed = Url::parse(base_url).map_err(|e| {
        AppError::config_invalid(format!(
            "{} is not a valid URL: {e}",
            env_vars::GEMINI_API_BASE_URL
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(AppError::config_invalid(format!(
            "{} must use http or https, got {scheme}",
            env_vars::GEMINI_API_BASE_URL
        ))),
    }
}

fn parse_optional<T, F>(lookup: &F, name: &str) -> AppResult<Option<T>>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|e| {
                AppError::config_invalid(format!("Invalid {name} value '{raw}': {e}"))
            })
        })
        .transpose()
}

fn parse_or<T, F>(lookup: &F, name: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    Ok(parse_optional(lookup, name)?.unwrap_or(default))
}

/// Like [`parse_or`], but zero is rejected
fn parse_positive<F>(lookup: &F, name: &str, default: u64) -> AppResult<u64>
where
    F: Fn(&str) -> Option<String>,
{
    match parse_or(lookup, name, default)? {
        0 => Err(AppError::config_invalid(format!(
            "{name} must be greater than zero"
        ))),
        value => Ok(value),
    }
}
