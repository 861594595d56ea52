// ABOUTME: Configuration module: environment-driven settings for the planning engine
// ABOUTME: Explicitly constructed and passed in, never a global singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Echelon Training Intelligence

//! Configuration management. Settings are read once from the environment
//! into a [`PlannerConfig`] value that callers pass to the components that
//! need it.

/// Environment-based configuration parsing
pub mod environment;

pub use environment::PlannerConfig;
