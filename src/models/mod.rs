// ABOUTME: Domain model re-exports for fitness samples, goals, calendar, and workouts
// ABOUTME: All records owned by external collaborators are read-only to the core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Echelon Training Intelligence

//! # Domain Models
//!
//! Explicit, typed records for everything the planning engine consumes or
//! produces. Races, power goals, and day availability are owned by the
//! persistence collaborator; fitness samples by the remote metrics provider.
//! Workout templates are generated, never persisted by the core.

/// Calendar availability records
pub mod calendar;
/// Fitness metric samples (CTL/ATL/TSB/FTP)
pub mod fitness;
/// Athlete goals: races and power targets
pub mod goals;
/// Generated workout structures
pub mod workout;

pub use calendar::{DayAvailability, TimeSlot};
pub use fitness::FitnessSample;
pub use goals::{PowerGoal, Race, RacePriority};
pub use workout::{Interval, PlannedWorkout, PowerTarget, WorkoutTemplate};
