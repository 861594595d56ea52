// ABOUTME: Shared domain constants for training-load projection and planning
// ABOUTME: Single source of truth for thresholds referenced by multiple modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Echelon Training Intelligence

//! Domain constants shared across modules. Thresholds used by a single
//! module live next to their use site instead.

/// Fallback FTP in watts when no fitness history is available
pub const DEFAULT_FTP_FALLBACK: f64 = 200.0;

/// Default lookback window for fitness history fetches, in days
pub const DEFAULT_FITNESS_HISTORY_DAYS: i64 = 90;

/// Default lookback window for planned-workout listings, in days
pub const DEFAULT_PLANNED_WORKOUT_DAYS: i64 = 30;

/// Lower bound of the TSB peaking band; an athlete inside the band is
/// considered fresh enough to perform without being detrained
pub const PEAK_TSB_MIN: f64 = 5.0;

/// Upper bound of the TSB peaking band
pub const PEAK_TSB_MAX: f64 = 15.0;

/// Window in samples over which local metric trends are measured
pub const TREND_WINDOW: usize = 7;

/// Horizon in days scanned when searching for a peak-form date
pub const DEFAULT_PEAK_HORIZON_DAYS: u32 = 60;

/// Elevation gain above which a race counts as a mountain course, in metres
pub const MOUNTAIN_ELEVATION_M: f64 = 2000.0;
