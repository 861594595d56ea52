// ABOUTME: Day-availability calendar records with time slots and remote-work flag
// ABOUTME: At most one record per calendar date; availability is opt-in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Echelon Training Intelligence

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A training time slot within a day, as "HH:MM" strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Slot start, "HH:MM"
    pub start: String,
    /// Slot end, "HH:MM"
    pub end: String,
}

/// Availability settings for one calendar day.
///
/// Days without a record are treated as unavailable: the athlete opts in
/// to training days explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAvailability {
    /// Calendar date; unique across records
    pub date: NaiveDate,
    /// Whether the athlete can train this day
    #[serde(default = "default_available")]
    pub available: bool,
    /// Ordered training slots within the day
    #[serde(default)]
    pub time_slots: Vec<TimeSlot>,
    /// Whether this is a remote-work day
    #[serde(default)]
    pub is_remote_work: bool,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

const fn default_available() -> bool {
    true
}

impl DayAvailability {
    /// Check the one-record-per-date invariant over a set of records.
    ///
    /// # Errors
    /// Returns `AppError::ResourceAlreadyExists` naming the first duplicated
    /// date encountered.
    pub fn ensure_unique_dates(records: &[Self]) -> AppResult<()> {
        let mut seen = HashSet::new();
        for record in records {
            if !seen.insert(record.date) {
                return Err(AppError::conflict(format!(
                    "duplicate availability record for {}",
                    record.date
                )));
            }
        }
        Ok(())
    }
}
