// ABOUTME: Athlete goal models: races with priority levels and FTP targets
// ABOUTME: Owned by the persistence collaborator, read-only to the planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Echelon Training Intelligence

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Race priority, A being the season's key events.
///
/// The derived ordering (A < B < C) is what the planner sorts by when two
/// races share a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RacePriority {
    /// Key event of the season
    A,
    /// Important but secondary event
    B,
    /// Training race
    C,
}

impl std::fmt::Display for RacePriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
        }
    }
}

/// A race on the athlete's calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    /// Identifier assigned by the persistence collaborator
    pub id: i64,
    /// Race name, used in generated workout descriptions
    pub name: String,
    /// Race day
    pub date: NaiveDate,
    /// Course distance in kilometres
    pub distance_km: f64,
    /// Total elevation gain in metres
    pub elevation_m: f64,
    /// Priority level
    pub priority: RacePriority,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Race {
    /// Check the non-negativity invariants on distance and elevation.
    ///
    /// # Errors
    /// Returns `AppError::InvalidInput` when distance or elevation is negative.
    pub fn validate(&self) -> AppResult<()> {
        if self.distance_km < 0.0 {
            return Err(AppError::invalid_input(format!(
                "race '{}' has negative distance: {}",
                self.name, self.distance_km
            )));
        }
        if self.elevation_m < 0.0 {
            return Err(AppError::invalid_input(format!(
                "race '{}' has negative elevation: {}",
                self.name, self.elevation_m
            )));
        }
        Ok(())
    }
}

/// A target FTP to reach by a given date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerGoal {
    /// Identifier assigned by the persistence collaborator
    pub id: i64,
    /// Target functional threshold power in watts
    pub target_ftp: f64,
    /// Date by which the target should be reached
    pub target_date: NaiveDate,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
