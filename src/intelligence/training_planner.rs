// ABOUTME: Day-by-day training plan derivation from races, availability, and FTP
// ABOUTME: Fixed heuristic phase selection by weeks-to-race, no search or optimization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Echelon Training Intelligence

use crate::models::{DayAvailability, FitnessSample, PlannedWorkout, PowerGoal, Race};
use chrono::NaiveDate;
use tracing::debug;

use super::workout_library::WorkoutLibrary;

/// Weeks-to-race at or below which the taper phase starts
const TAPER_WEEKS: i64 = 2;

/// Weeks-to-race at or below which race-specific preparation runs
const RACE_SPECIFIC_WEEKS: i64 = 8;

/// Derives an ordered, date-tagged workout sequence for a date range
pub struct TrainingPlanner;

impl TrainingPlanner {
    /// Resolve the athlete's current FTP from the most recent sample,
    /// falling back to `fallback` when no history exists.
    #[must_use]
    pub fn current_ftp(samples: &[FitnessSample], fallback: f64) -> f64 {
        samples.last().map_or(fallback, |s| s.ftp)
    }

    /// Generate a training plan across `[start, end]` inclusive.
    ///
    /// Days absent from `calendar` or marked unavailable produce no workout;
    /// availability is an explicit opt-in, so an empty calendar yields an
    /// empty plan. For each available day the earliest race strictly after
    /// that day selects the phase: taper within 2 weeks, race-specific
    /// within 8, base otherwise (and base when no race is upcoming).
    ///
    /// `power_goals` is part of the planning contract but does not yet
    /// influence workout selection.
    #[must_use]
    pub fn generate(
        races: &[Race],
        _power_goals: &[PowerGoal],
        calendar: &[DayAvailability],
        start: NaiveDate,
        end: NaiveDate,
        current_ftp: f64,
    ) -> Vec<PlannedWorkout> {
        let mut sorted_races: Vec<&Race> = races.iter().collect();
        sorted_races.sort_by(|a, b| a.date.cmp(&b.date).then(a.priority.cmp(&b.priority)));

        let mut plan = Vec::new();
        for day in start.iter_days() {
            if day > end {
                break;
            }

            let Some(setting) = calendar.iter().find(|d| d.date == day) else {
                continue;
            };
            if !setting.available {
                continue;
            }

            // The lookahead is recomputed per day: the race list is stable
            // mid-iteration but the next race changes as days pass it.
            let next_race = sorted_races.iter().find(|r| r.date > day).copied();

            let template = match next_race {
                Some(race) => {
                    let weeks_to_race = (race.date - day).num_days() / 7;
                    if weeks_to_race <= TAPER_WEEKS {
                        WorkoutLibrary::taper(current_ftp, race)
                    } else if weeks_to_race <= RACE_SPECIFIC_WEEKS {
                        WorkoutLibrary::race_specific(current_ftp, race)
                    } else {
                        WorkoutLibrary::base(current_ftp)
                    }
                }
                None => WorkoutLibrary::base(current_ftp),
            };

            plan.push(PlannedWorkout {
                date: day,
                template,
            });
        }

        debug!(
            workouts = plan.len(),
            from = %start,
            to = %end,
            "training plan generated"
        );
        plan
    }
}
