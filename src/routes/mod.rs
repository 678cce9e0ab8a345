// ABOUTME: Route module organization for the relay's HTTP endpoints
// ABOUTME: Groups route definitions by domain, each with thin handlers over the service layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the fitness plan relay
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the service layer.

/// Fitness plan generation route
pub mod fitness_plan;
/// Health check and readiness routes
pub mod health;

/// Fitness plan route handlers
pub use fitness_plan::FitnessPlanRoutes;
/// Health route handlers
pub use health::HealthRoutes;
