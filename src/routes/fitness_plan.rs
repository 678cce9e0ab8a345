// ABOUTME: Fitness plan route handler: the relay's single generation endpoint
// ABOUTME: Extracts the profile, delegates to the plan service, and shapes the JSON response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fitness plan routes
//!
//! `POST /generate-fitness-plan/` (and the same path without the trailing
//! slash) accepts a [`FitnessProfile`] and answers `{"plan": "..."}`. A body
//! that fails extraction is rejected before any provider call is made.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::{debug, warn};

use crate::constants::plan::{GENERATE_ROUTE, GENERATE_ROUTE_NO_SLASH};
use crate::errors::AppError;
use crate::models::FitnessProfile;
use crate::resources::ServerResources;

/// Fitness plan routes
pub struct FitnessPlanRoutes;

impl FitnessPlanRoutes {
    /// Create the plan generation routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(GENERATE_ROUTE, post(Self::handle_generate_plan))
            .route(GENERATE_ROUTE_NO_SLASH, post(Self::handle_generate_plan))
            .with_state(resources)
    }

    /// Handle plan generation
    async fn handle_generate_plan(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<FitnessProfile>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(profile) = payload.map_err(|rejection| {
            debug!(status = %rejection.status(), "Rejected fitness profile");
            AppError::invalid_input(rejection.body_text())
        })?;

        let plan = resources
            .fitness_plan
            .generate_fitness_plan(&profile)
            .await
            .inspect_err(|e| {
                warn!(
                    code = ?e.code,
                    status = e.http_status(),
                    "Fitness plan relay failed"
                );
            })?;

        Ok((StatusCode::OK, Json(plan)).into_response())
    }
}
