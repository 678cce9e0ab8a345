// ABOUTME: Outbound HTTP client construction with pooled connections and timeouts
// ABOUTME: Builds the single reqwest client shared by every provider call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use reqwest::{Client, ClientBuilder};

use crate::config::HttpClientConfig;
use crate::constants::service_names;
use crate::errors::{AppError, AppResult};

/// Create the outbound HTTP client with the configured timeouts
///
/// The client pools connections, so build it once at startup and clone it
/// wherever it is needed.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized
pub fn create_client_with_timeout(config: &HttpClientConfig) -> AppResult<Client> {
    ClientBuilder::new()
        .timeout(config.timeout())
        .connect_timeout(config.connect_timeout())
        .user_agent(format!(
            "{}/{}",
            service_names::FITNESS_PLAN_RELAY,
            service_names::SERVICE_VERSION
        ))
        .build()
        .map_err(|e| AppError::internal("Failed to build outbound HTTP client").with_source(e))
}
