// ABOUTME: Fitness metric trends and TSB projection from daily sample history
// ABOUTME: Local linear slopes keep projection cheap and monotonic, no fitted model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Echelon Training Intelligence

use crate::constants::{PEAK_TSB_MAX, PEAK_TSB_MIN, TREND_WINDOW};
use crate::models::FitnessSample;
use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Which metric of a fitness sample a trend is measured over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessField {
    /// Chronic training load
    Ctl,
    /// Acute training load
    Atl,
    /// Training stress balance, recomputed from the load fields
    Tsb,
    /// Functional threshold power
    Ftp,
}

impl FitnessField {
    fn value_of(self, sample: &FitnessSample) -> f64 {
        match self {
            Self::Ctl => sample.ctl,
            Self::Atl => sample.atl,
            Self::Tsb => sample.computed_tsb(),
            Self::Ftp => sample.ftp,
        }
    }
}

/// Projects future fitness state from a time-ordered sample history
pub struct FitnessMetricsProjector;

impl FitnessMetricsProjector {
    /// Average daily change of `field` over the last `window` samples
    /// (all samples if fewer are available).
    ///
    /// Fewer than 2 samples in the window yield the neutral trend 0.0.
    #[must_use]
    pub fn trend(samples: &[FitnessSample], window: usize, field: FitnessField) -> f64 {
        let recent = &samples[samples.len().saturating_sub(window)..];
        if recent.len() < 2 {
            return 0.0;
        }

        let delta = field.value_of(&recent[recent.len() - 1]) - field.value_of(&recent[0]);
        delta / recent.len() as f64
    }

    /// Project TSB on `target_date` by extrapolating CTL and ATL linearly
    /// from the last known sample using their 7-day trends.
    ///
    /// Returns 0.0 for an empty history. Projecting onto the last sample's
    /// own date is a no-op: the result equals its ctl − atl.
    #[must_use]
    pub fn project_tsb(samples: &[FitnessSample], target_date: NaiveDate) -> f64 {
        let Some(last) = samples.last() else {
            return 0.0;
        };

        let days = (target_date - last.date).num_days() as f64;
        let ctl_trend = Self::trend(samples, TREND_WINDOW, FitnessField::Ctl);
        let atl_trend = Self::trend(samples, TREND_WINDOW, FitnessField::Atl);

        let projected_ctl = ctl_trend.mul_add(days, last.ctl);
        let projected_atl = atl_trend.mul_add(days, last.atl);
        projected_ctl - projected_atl
    }

    /// Find the day within `[today, today + horizon_days)` whose projected
    /// TSB falls inside the peaking band and is the maximum in that band.
    #[must_use]
    pub fn find_peak_date(samples: &[FitnessSample], horizon_days: u32) -> Option<NaiveDate> {
        Self::find_peak_date_from(samples, Utc::now().date_naive(), horizon_days)
    }

    /// Deterministic variant of [`Self::find_peak_date`] scanning from an
    /// explicit reference date.
    ///
    /// The maximum projected TSB inside `[PEAK_TSB_MIN, PEAK_TSB_MAX]` wins;
    /// equal values keep the earliest date. `None` when no day qualifies.
    #[must_use]
    pub fn find_peak_date_from(
        samples: &[FitnessSample],
        reference: NaiveDate,
        horizon_days: u32,
    ) -> Option<NaiveDate> {
        let mut best_tsb = f64::NEG_INFINITY;
        let mut peak_date = None;

        for offset in 0..horizon_days {
            let date = reference + Duration::days(i64::from(offset));
            let projected = Self::project_tsb(samples, date);

            if (PEAK_TSB_MIN..=PEAK_TSB_MAX).contains(&projected) && projected > best_tsb {
                best_tsb = projected;
                peak_date = Some(date);
            }
        }

        peak_date
    }
}
