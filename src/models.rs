// ABOUTME: Request and response data models for fitness plan generation
// ABOUTME: Defines the inbound FitnessProfile and the outbound GeneratedPlan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Both entities live only for the duration of one request. Field presence and
//! JSON types are enforced by deserialization; nothing else is validated.

use serde::{Deserialize, Serialize};

/// A user's fitness parameters, as posted by the caller
///
/// Units for `weight` and `height` are not part of the contract; they are
/// passed through to the prompt as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitnessProfile {
    /// Age in years
    pub age: u32,
    /// Body weight; integers beyond 2^53 lose precision as `f64`
    pub weight: f64,
    /// Body height; same `f64` bound as `weight`
    pub height: f64,
    /// Free-form goals, e.g. "run a half marathon"
    pub goals: String,
    /// Free-form activity level, e.g. "moderately active"
    pub activity_level: String,
}

/// The relayed plan text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPlan {
    /// Generated plan, or the placeholder when the provider returned no text
    pub plan: String,
}

impl GeneratedPlan {
    /// Wrap plan text
    #[must_use]
    pub fn new(plan: impl Into<String>) -> Self {
        Self { plan: plan.into() }
    }
}
