// ABOUTME: Daily fitness sample model with chronic/acute load and FTP fields
// ABOUTME: TSB is recomputed from loads wherever it feeds scoring decisions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Echelon Training Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of fitness metrics, as reported by the remote metrics provider.
///
/// Samples arrive ordered by date, one per day, and are immutable once
/// fetched. The stored `tsb` field is whatever the provider last computed;
/// it can lag behind `ctl`/`atl`, so scoring paths use [`Self::computed_tsb`]
/// instead of trusting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessSample {
    /// Calendar day this sample describes
    pub date: NaiveDate,
    /// Chronic training load (long-horizon fitness)
    #[serde(default)]
    pub ctl: f64,
    /// Acute training load (short-horizon fatigue)
    #[serde(default)]
    pub atl: f64,
    /// Training stress balance as stored by the provider
    #[serde(default)]
    pub tsb: f64,
    /// Functional threshold power in watts
    #[serde(default)]
    pub ftp: f64,
}

impl FitnessSample {
    /// Training stress balance recomputed from the load fields.
    ///
    /// Authoritative over the stored `tsb` whenever the two disagree.
    #[must_use]
    pub fn computed_tsb(&self) -> f64 {
        self.ctl - self.atl
    }
}
