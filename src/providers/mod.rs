// ABOUTME: Fitness-metrics provider abstraction and concrete HTTP implementation
// ABOUTME: The async trait is the only I/O boundary of the planning engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Echelon Training Intelligence

//! # Provider Module
//!
//! Defines the [`FitnessDataSource`] capability the core consumes: fetching
//! fitness history and pushing/verifying structured workouts. One concrete
//! implementation targets an intervals.icu-style HTTP API; tests substitute
//! in-memory doubles.

/// Shared provider traits and wire-format types
pub mod core;
/// Shared pooled HTTP client with configured timeouts
pub mod http_client;
/// intervals.icu-style provider implementation
pub mod intervals;

pub use core::{
    AthleteProfile, CreatedWorkout, FitnessDataSource, PowerCurve, ProviderInterval, ProviderStep,
    ProviderWorkout, ProviderWorkoutType,
};
pub use intervals::IntervalsProvider;
