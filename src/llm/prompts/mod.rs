// ABOUTME: Prompt construction for fitness plan generation
// ABOUTME: Embeds every FitnessProfile field verbatim after a compile-time instruction preamble
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Prompts
//!
//! The instruction preamble is loaded at compile time from markdown for easy
//! maintenance. Profile values are appended one per line, unmodified.

use crate::models::FitnessProfile;

/// Instruction preamble for fitness plan generation
pub const FITNESS_PLAN_INSTRUCTIONS: &str = include_str!("fitness_plan.md");

/// Build the instruction text sent upstream for a profile
///
/// Every field's value appears verbatim in the result.
#[must_use]
pub fn build_fitness_plan_prompt(profile: &FitnessProfile) -> String {
    format!(
        "{}\n\nAge: {}\nWeight: {}\nHeight: {}\nGoals: {}\nActivity level: {}\n",
        FITNESS_PLAN_INSTRUCTIONS.trim_end(),
        profile.age,
        profile.weight,
        profile.height,
        profile.goals,
        profile.activity_level,
    )
}
