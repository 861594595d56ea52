// ABOUTME: FitnessDataSource trait and provider wire-format types
// ABOUTME: Wire steps normalize mixed power fields with ramp precedence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Echelon Training Intelligence

use crate::errors::AppResult;
use crate::models::{FitnessSample, PowerTarget};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Workout type vocabulary understood by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderWorkoutType {
    /// Long aerobic session
    Endurance,
    /// Threshold session
    Threshold,
    /// `VO2max` intervals
    Vo2max,
    /// Sprint work
    Sprint,
    /// Recovery spin
    Recovery,
    /// Generic fallback; also absorbs unknown provider values
    #[serde(other)]
    Workout,
}

/// A leaf step in the provider wire format.
///
/// The wire format is loose: a step may arrive carrying both a constant
/// `power` and a `start_power`/`end_power` pair. [`Self::power_target`]
/// normalizes such steps with the ramp taking precedence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderStep {
    /// Step duration in seconds
    pub duration: u32,
    /// Constant power in watts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<f64>,
    /// Ramp start power in watts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_power: Option<f64>,
    /// Ramp end power in watts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_power: Option<f64>,
    /// Step display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ProviderStep {
    /// Normalize the step's power fields into a single target.
    ///
    /// A complete ramp pair wins over a constant power; a step with neither
    /// resolves to a steady 0 W.
    #[must_use]
    pub fn power_target(&self) -> PowerTarget {
        if let (Some(start_watts), Some(end_watts)) = (self.start_power, self.end_power) {
            PowerTarget::Ramp {
                start_watts,
                end_watts,
            }
        } else {
            PowerTarget::Steady {
                watts: self.power.unwrap_or(0.0),
            }
        }
    }
}

/// One element of a provider workout: a repeat block or a leaf step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProviderInterval {
    /// Nested block executed `repeat` times
    Repeat {
        /// Number of repetitions
        repeat: u32,
        /// Nested wire intervals
        intervals: Vec<ProviderInterval>,
    },
    /// Leaf step
    Step(ProviderStep),
}

/// A structured workout in the provider wire format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderWorkout {
    /// Workout name
    pub name: String,
    /// Workout description
    #[serde(default)]
    pub description: String,
    /// Provider workout type
    #[serde(rename = "type")]
    pub workout_type: ProviderWorkoutType,
    /// Scheduled day, serialized as "YYYY-MM-DD"
    pub date: NaiveDate,
    /// Recursive interval structure
    pub intervals: Vec<ProviderInterval>,
}

/// Identifier returned by the provider for a pushed workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedWorkout {
    /// Provider-side workout id
    pub id: String,
}

/// Athlete profile as reported by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteProfile {
    /// Provider-side athlete id
    pub id: String,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Provider-side FTP in watts, when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ftp: Option<f64>,
}

/// Best-power curve as parallel duration/wattage arrays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerCurve {
    /// Effort durations in seconds
    #[serde(default)]
    pub secs: Vec<u32>,
    /// Best average power for each duration
    #[serde(default)]
    pub watts: Vec<f64>,
}

/// Capability contract for the remote fitness-metrics provider.
///
/// Remote calls are the engine's only suspension points; implementations
/// apply per-call timeouts so a slow provider cannot stall unrelated batch
/// items beyond its own entry.
#[async_trait]
pub trait FitnessDataSource: Send + Sync {
    /// Fetch the athlete's daily fitness samples, oldest first.
    ///
    /// Absent bounds default to the last 90 days.
    ///
    /// # Errors
    /// Returns `AppError::ExternalServiceError` on network failure or a
    /// non-success response.
    async fn get_fitness_history(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> AppResult<Vec<FitnessSample>>;

    /// Fetch the athlete profile.
    ///
    /// # Errors
    /// Returns `AppError::ExternalServiceError` on network failure or a
    /// non-success response.
    async fn get_athlete(&self) -> AppResult<AthleteProfile>;

    /// Fetch the athlete's best-power curve.
    ///
    /// # Errors
    /// Returns `AppError::ExternalServiceError` on network failure or a
    /// non-success response.
    async fn get_power_curve(&self) -> AppResult<PowerCurve>;

    /// Push a structured workout; returns the provider-assigned id.
    ///
    /// # Errors
    /// Returns `AppError::ExternalServiceError` on network failure or a
    /// non-success response.
    async fn create_workout(&self, workout: &ProviderWorkout) -> AppResult<CreatedWorkout>;

    /// Fetch a previously pushed workout by id, for status verification.
    ///
    /// # Errors
    /// Returns `AppError::ExternalServiceError` on network failure or a
    /// non-success response (including a deleted workout).
    async fn get_workout(&self, id: &str) -> AppResult<ProviderWorkout>;

    /// List planned workouts in a date window, defaulting to the last
    /// 30 days.
    ///
    /// # Errors
    /// Returns `AppError::ExternalServiceError` on network failure or a
    /// non-success response.
    async fn get_planned_workouts(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> AppResult<Vec<ProviderWorkout>>;
}
