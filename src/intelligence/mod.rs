// ABOUTME: Intelligence module: projection, prediction, planning, and workout generation
// ABOUTME: Pure computation over fitness samples, goals, and calendar records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Echelon Training Intelligence

//! # Intelligence Module
//!
//! The algorithmic core of the backend: fitness-trend projection, FTP
//! prediction, race-preparation analysis, and heuristic plan generation.
//! Everything here is synchronous computation over caller-supplied data;
//! no module performs I/O.

/// Fitness trend and TSB projection primitives
pub mod fitness_projector;
/// Linear-trend FTP prediction with confidence scoring
pub mod performance_predictor;
/// Race-preparation targets and readiness scoring
pub mod race_preparation;
/// Linear regression primitives shared by the predictors
pub mod statistical_analysis;
/// Day-by-day training plan derivation
pub mod training_planner;
/// Parameterized workout template catalogue
pub mod workout_library;

pub use fitness_projector::{FitnessField, FitnessMetricsProjector};
pub use performance_predictor::{
    MetricsTrends, PerformancePrediction, PerformancePredictor, RaceReadiness, TrendDirection,
};
pub use race_preparation::{RacePreparation, RacePreparationAnalyzer, WeeklyTssTarget};
pub use statistical_analysis::{linear_regression, slope_over, RegressionResult};
pub use training_planner::TrainingPlanner;
pub use workout_library::{WorkoutKind, WorkoutLibrary};
