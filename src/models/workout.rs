// ABOUTME: Generated workout structures: recursive intervals with steady or ramped power
// ABOUTME: The tagged-variant layout makes leaf power targets mutually exclusive by type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Echelon Training Intelligence

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Power target of a leaf interval.
///
/// A step holds exactly one of a constant power or a start/end ramp pair;
/// the enum makes the "never both" invariant unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerTarget {
    /// Constant power in watts
    Steady {
        /// Target wattage held for the step's duration
        watts: f64,
    },
    /// Linear ramp between two wattages
    Ramp {
        /// Wattage at the start of the step
        start_watts: f64,
        /// Wattage at the end of the step
        end_watts: f64,
    },
}

/// One element of a workout: a timed effort or a repeated block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interval {
    /// A single timed effort at a power target
    Step {
        /// Display name ("Warm-up", "Main Set", ...)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        /// Effort duration in seconds; must be positive
        duration_seconds: u32,
        /// Power target for the effort
        power: PowerTarget,
    },
    /// A block of nested intervals executed `count` times
    Repeat {
        /// Number of repetitions; must be positive
        count: u32,
        /// Nested intervals executed in order
        intervals: Vec<Interval>,
    },
}

impl Interval {
    /// Steady-power step
    #[must_use]
    pub fn step(name: Option<&str>, duration_seconds: u32, watts: f64) -> Self {
        Self::Step {
            name: name.map(ToOwned::to_owned),
            duration_seconds,
            power: PowerTarget::Steady { watts },
        }
    }

    /// Ramped-power step
    #[must_use]
    pub fn ramp(name: Option<&str>, duration_seconds: u32, start_watts: f64, end_watts: f64) -> Self {
        Self::Step {
            name: name.map(ToOwned::to_owned),
            duration_seconds,
            power: PowerTarget::Ramp {
                start_watts,
                end_watts,
            },
        }
    }

    /// Repeated block of nested intervals
    #[must_use]
    pub fn repeat(count: u32, intervals: Vec<Self>) -> Self {
        Self::Repeat { count, intervals }
    }

    /// Validate durations, powers, and repeat counts recursively.
    ///
    /// # Errors
    /// Returns `AppError::InvalidInput` on a zero-duration step, a negative
    /// power value, or a zero-count repeat block.
    pub fn validate(&self) -> AppResult<()> {
        match self {
            Self::Step {
                duration_seconds,
                power,
                ..
            } => {
                if *duration_seconds == 0 {
                    return Err(AppError::invalid_input(
                        "interval duration must be positive",
                    ));
                }
                match power {
                    PowerTarget::Steady { watts } => {
                        if *watts < 0.0 {
                            return Err(AppError::invalid_input(format!(
                                "interval power must be non-negative, got {watts}"
                            )));
                        }
                    }
                    PowerTarget::Ramp {
                        start_watts,
                        end_watts,
                    } => {
                        if *start_watts < 0.0 || *end_watts < 0.0 {
                            return Err(AppError::invalid_input(format!(
                                "ramp powers must be non-negative, got {start_watts}..{end_watts}"
                            )));
                        }
                    }
                }
                Ok(())
            }
            Self::Repeat { count, intervals } => {
                if *count == 0 {
                    return Err(AppError::invalid_input("repeat count must be positive"));
                }
                intervals.iter().try_for_each(Self::validate)
            }
        }
    }
}

/// A generated workout: named, described, and structured as ordered intervals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    /// Workout name, also used for provider-side type classification
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Ordered interval structure
    pub intervals: Vec<Interval>,
}

impl WorkoutTemplate {
    /// Validate every interval in the template.
    ///
    /// # Errors
    /// Returns `AppError::InvalidInput` for the first malformed interval.
    pub fn validate(&self) -> AppResult<()> {
        self.intervals.iter().try_for_each(Interval::validate)
    }
}

/// A workout template assigned to a calendar day by the plan generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedWorkout {
    /// Day the workout is scheduled on
    pub date: NaiveDate,
    /// The generated workout
    pub template: WorkoutTemplate,
}
