// ABOUTME: Domain service layer for business logic kept out of route handlers
// ABOUTME: Hosts the fitness plan relay service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Protocol-agnostic logic lives here so that route handlers only deal with
//! extraction and response shaping.

/// Fitness plan generation: prompt building, provider call, placeholder fallback
pub mod fitness_plan;

pub use fitness_plan::FitnessPlanService;
