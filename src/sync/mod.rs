// ABOUTME: Plan sync orchestration: wire conversion, push, retry, and status checks
// ABOUTME: Batch items fail independently; a failed push never aborts the batch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Echelon Training Intelligence

//! # Plan Sync Orchestration
//!
//! Turns goals and availability into a generated plan, converts each
//! workout into the provider wire format, and pushes them one by one.
//! Failures are captured as data per workout; `resync` retries exactly the
//! failed subset and `check_status` verifies pushed workouts still exist
//! on the provider.

use crate::config::PlannerConfig;
use crate::errors::AppResult;
use crate::intelligence::TrainingPlanner;
use crate::models::{
    DayAvailability, Interval, PlannedWorkout, PowerGoal, PowerTarget, Race,
};
use crate::providers::{
    CreatedWorkout, FitnessDataSource, ProviderInterval, ProviderStep, ProviderWorkout,
    ProviderWorkoutType,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// A workout successfully pushed to the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncedWorkout {
    /// Provider-assigned workout id
    pub provider_id: String,
    /// Scheduled day
    pub date: NaiveDate,
    /// Workout name
    pub name: String,
}

/// A workout whose push failed.
///
/// The full workout is retained so [`PlanSyncOrchestrator::resync`] can
/// retry it without regenerating the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncFailure {
    /// Scheduled day
    pub date: NaiveDate,
    /// Workout name
    pub name: String,
    /// Error reported for the failed push
    pub error: String,
    /// The workout to retry
    pub workout: PlannedWorkout,
}

/// Aggregated result of one sync batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncReport {
    /// Number of successfully pushed workouts
    pub success: usize,
    /// Number of failed pushes
    pub failed: usize,
    /// Pushed workouts, in plan order
    pub synced: Vec<SyncedWorkout>,
    /// Failed workouts, in plan order
    pub failed_workouts: Vec<SyncFailure>,
}

/// Result of retrying previously failed pushes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResyncReport {
    /// Failures that now pushed successfully
    pub newly_synced: Vec<SyncedWorkout>,
    /// Failures that failed again
    pub still_failed: Vec<SyncFailure>,
}

/// Verification state of a pushed workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncState {
    /// The workout still exists on the provider
    Synced,
    /// The provider lookup failed
    Error,
}

/// Timestamped status-check entry for one pushed workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncStatus {
    /// Provider-assigned workout id
    pub provider_id: String,
    /// Scheduled day
    pub date: NaiveDate,
    /// Workout name
    pub name: String,
    /// Verification outcome
    pub status: SyncState,
    /// Provider error when the lookup failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// When the check ran
    pub last_check: DateTime<Utc>,
}

/// Pushes generated training plans to the remote provider
pub struct PlanSyncOrchestrator<'a> {
    source: &'a dyn FitnessDataSource,
    config: PlannerConfig,
}

impl<'a> PlanSyncOrchestrator<'a> {
    /// Create an orchestrator over a provider and configuration
    #[must_use]
    pub fn new(source: &'a dyn FitnessDataSource, config: PlannerConfig) -> Self {
        Self { source, config }
    }

    /// Generate a plan for `[start, end]` and push every workout.
    ///
    /// Each push succeeds or fails independently; the batch always runs to
    /// completion and reports both partitions in plan order. `prompt` is
    /// accepted for API parity but does not yet steer generation.
    ///
    /// # Errors
    /// Returns `AppError::ExternalServiceError` only when the initial
    /// fitness-history fetch fails; push failures are recorded as data.
    pub async fn sync(
        &self,
        races: &[Race],
        power_goals: &[PowerGoal],
        calendar: &[DayAvailability],
        start: NaiveDate,
        end: NaiveDate,
        _prompt: Option<&str>,
    ) -> AppResult<SyncReport> {
        let history = self.source.get_fitness_history(None, None).await?;
        let current_ftp = TrainingPlanner::current_ftp(&history, self.config.default_ftp_fallback);

        let plan = TrainingPlanner::generate(races, power_goals, calendar, start, end, current_ftp);

        let mut synced = Vec::new();
        let mut failed_workouts = Vec::new();
        for planned in plan {
            match self.push(&planned).await {
                Ok(created) => synced.push(SyncedWorkout {
                    provider_id: created.id,
                    date: planned.date,
                    name: planned.template.name.clone(),
                }),
                Err(e) => {
                    warn!(date = %planned.date, name = %planned.template.name, error = %e, "workout push failed");
                    failed_workouts.push(SyncFailure {
                        date: planned.date,
                        name: planned.template.name.clone(),
                        error: e.to_string(),
                        workout: planned,
                    });
                }
            }
        }

        info!(
            success = synced.len(),
            failed = failed_workouts.len(),
            "plan sync completed"
        );
        Ok(SyncReport {
            success: synced.len(),
            failed: failed_workouts.len(),
            synced,
            failed_workouts,
        })
    }

    /// Retry exactly the previously failed workouts.
    pub async fn resync(&self, failed: &[SyncFailure]) -> ResyncReport {
        let mut newly_synced = Vec::new();
        let mut still_failed = Vec::new();

        for failure in failed {
            match self.push(&failure.workout).await {
                Ok(created) => newly_synced.push(SyncedWorkout {
                    provider_id: created.id,
                    date: failure.workout.date,
                    name: failure.workout.template.name.clone(),
                }),
                Err(e) => still_failed.push(SyncFailure {
                    date: failure.workout.date,
                    name: failure.workout.template.name.clone(),
                    error: e.to_string(),
                    workout: failure.workout.clone(),
                }),
            }
        }

        ResyncReport {
            newly_synced,
            still_failed,
        }
    }

    /// Verify each pushed workout still exists on the provider.
    ///
    /// Provider errors are captured per item and never abort the batch.
    pub async fn check_status(&self, synced: &[SyncedWorkout]) -> Vec<SyncStatus> {
        let mut statuses = Vec::with_capacity(synced.len());

        for workout in synced {
            let last_check = Utc::now();
            let status = match self.source.get_workout(&workout.provider_id).await {
                Ok(_) => SyncStatus {
                    provider_id: workout.provider_id.clone(),
                    date: workout.date,
                    name: workout.name.clone(),
                    status: SyncState::Synced,
                    error: None,
                    last_check,
                },
                Err(e) => SyncStatus {
                    provider_id: workout.provider_id.clone(),
                    date: workout.date,
                    name: workout.name.clone(),
                    status: SyncState::Error,
                    error: Some(e.to_string()),
                    last_check,
                },
            };
            statuses.push(status);
        }

        statuses
    }

    async fn push(&self, planned: &PlannedWorkout) -> AppResult<CreatedWorkout> {
        planned.template.validate()?;
        let provider_workout = convert_workout(planned);
        self.source.create_workout(&provider_workout).await
    }
}

/// Convert a planned workout into the provider wire format.
#[must_use]
pub fn convert_workout(planned: &PlannedWorkout) -> ProviderWorkout {
    ProviderWorkout {
        name: planned.template.name.clone(),
        description: planned.template.description.clone(),
        workout_type: determine_workout_type(
            &planned.template.name,
            &planned.template.description,
        ),
        date: planned.date,
        intervals: convert_intervals(&planned.template.intervals),
    }
}

/// Classify a workout's provider type from its name and description.
///
/// The keyword precedence is fixed and behaviorally significant: endurance
/// (matched in name or description) wins over threshold, then vo2max,
/// sprint, and recovery; anything else is a generic workout.
#[must_use]
pub fn determine_workout_type(name: &str, description: &str) -> ProviderWorkoutType {
    let name = name.to_lowercase();
    let description = description.to_lowercase();

    if name.contains("endurance") || description.contains("endurance") {
        ProviderWorkoutType::Endurance
    } else if name.contains("seuil") || name.contains("threshold") {
        ProviderWorkoutType::Threshold
    } else if name.contains("vo2") {
        ProviderWorkoutType::Vo2max
    } else if name.contains("sprint") || name.contains("puissance") {
        ProviderWorkoutType::Sprint
    } else if name.contains("récup") || name.contains("recovery") {
        ProviderWorkoutType::Recovery
    } else {
        ProviderWorkoutType::Workout
    }
}

fn convert_intervals(intervals: &[Interval]) -> Vec<ProviderInterval> {
    intervals
        .iter()
        .map(|interval| match interval {
            Interval::Repeat { count, intervals } => ProviderInterval::Repeat {
                repeat: *count,
                intervals: convert_intervals(intervals),
            },
            Interval::Step {
                name,
                duration_seconds,
                power,
            } => {
                let (power, start_power, end_power) = match power {
                    PowerTarget::Steady { watts } => (Some(*watts), None, None),
                    PowerTarget::Ramp {
                        start_watts,
                        end_watts,
                    } => (None, Some(*start_watts), Some(*end_watts)),
                };
                ProviderInterval::Step(ProviderStep {
                    duration: *duration_seconds,
                    power,
                    start_power,
                    end_power,
                    name: name.clone(),
                })
            }
        })
        .collect()
}
