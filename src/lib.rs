// ABOUTME: Library entry point for the Echelon training-planning backend
// ABOUTME: Plan generation, performance projection, and provider sync orchestration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Echelon Training Intelligence

#![deny(unsafe_code)]

//! # Echelon
//!
//! A training-planning backend for endurance athletes: stores-adjacent
//! logic that turns fitness trend data, a race calendar, and availability
//! windows into a day-by-day structured workout plan, projects future
//! fitness/fatigue state, and pushes generated workouts to a remote
//! fitness-metrics provider.
//!
//! ## Architecture
//!
//! - **models**: Typed domain records (fitness samples, races, goals,
//!   calendar days, workout structures)
//! - **intelligence**: The algorithmic core - trend projection, FTP
//!   prediction, race preparation, and heuristic plan generation
//! - **providers**: The `FitnessDataSource` capability and its HTTP
//!   implementation
//! - **sync**: Orchestration of plan generation, wire conversion, pushes,
//!   retries, and status checks
//! - **config** / **logging** / **errors**: Ambient concerns
//!
//! The core is pure computation: provider calls are the only suspension
//! points, and each request builds its own component instances, so there
//! is no shared mutable state between concurrent requests.
//!
//! ## Example
//!
//! ```rust,no_run
//! use echelon::config::PlannerConfig;
//! use echelon::providers::IntervalsProvider;
//! use echelon::sync::PlanSyncOrchestrator;
//! use chrono::NaiveDate;
//!
//! # async fn run() -> echelon::errors::AppResult<()> {
//! let config = PlannerConfig::from_env()?;
//! let provider = IntervalsProvider::new(&config, "api-key");
//! let orchestrator = PlanSyncOrchestrator::new(&provider, config);
//!
//! let start = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap_or_default();
//! let end = NaiveDate::from_ymd_opt(2025, 6, 29).unwrap_or_default();
//! let report = orchestrator.sync(&[], &[], &[], start, end, None).await?;
//! println!("synced {} workouts, {} failed", report.success, report.failed);
//! # Ok(())
//! # }
//! ```

/// Configuration management
pub mod config;
/// Shared domain constants
pub mod constants;
/// Unified error handling
pub mod errors;
/// Trend projection, prediction, and plan generation
pub mod intelligence;
/// Structured logging setup
pub mod logging;
/// Typed domain records
pub mod models;
/// Remote fitness-metrics provider capability
pub mod providers;
/// Plan sync orchestration
pub mod sync;

pub use config::PlannerConfig;
pub use errors::{AppError, AppResult, ErrorCode};
pub use intelligence::{
    FitnessMetricsProjector, PerformancePredictor, RacePreparationAnalyzer, TrainingPlanner,
    WorkoutLibrary,
};
pub use providers::{FitnessDataSource, IntervalsProvider};
pub use sync::PlanSyncOrchestrator;
