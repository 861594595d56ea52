// ABOUTME: Race-preparation analysis: target CTL, weekly TSS ramp, readiness scoring
// ABOUTME: Targets derive from course distance and elevation, scores from current load state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Echelon Training Intelligence

use crate::constants::{MOUNTAIN_ELEVATION_M, PEAK_TSB_MAX, PEAK_TSB_MIN};
use crate::models::{FitnessSample, Race};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Base CTL target for a short, flat race
const BASE_TARGET_CTL: f64 = 80.0;

/// Weight of the CTL component in the readiness score
const CTL_WEIGHT: f64 = 0.4;

/// Weight of the TSB component in the readiness score
const TSB_WEIGHT: f64 = 0.3;

/// Weight of the volume component in the readiness score
const VOLUME_WEIGHT: f64 = 0.3;

// TODO: derive the volume score from provider workout history instead of
// this fixed default once weekly volume is wired in.
const DEFAULT_VOLUME_SCORE: f64 = 80.0;

/// Distance in kilometres above which a race counts as long
const LONG_DISTANCE_KM: f64 = 100.0;

/// One week of the CTL ramp toward a race
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTssTarget {
    /// Week number, starting at 1
    pub week: u32,
    /// CTL to reach by the end of the week, one decimal
    pub target_ctl: f64,
    /// Approximate TSS to accumulate during the week
    pub weekly_tss: u32,
}

/// Race-preparation assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RacePreparation {
    /// Days remaining until the race
    pub days_to_race: i64,
    /// CTL still to build (negative when already above target)
    pub fitness_gap: f64,
    /// Week-by-week TSS ramp toward the target CTL
    pub weekly_tss_targets: Vec<WeeklyTssTarget>,
    /// Readiness on a 0-100 scale
    pub readiness_score: u32,
    /// Preparation guidance for this course profile and load state
    pub recommendations: Vec<String>,
}

/// Analyzes preparation state for a specific race
pub struct RacePreparationAnalyzer;

impl RacePreparationAnalyzer {
    /// CTL target for a race, scaled by distance and elevation.
    #[must_use]
    pub fn target_ctl(race: &Race) -> f64 {
        (race.distance_km / 100.0)
            .mul_add(10.0, (race.elevation_m / 1000.0).mul_add(5.0, BASE_TARGET_CTL))
    }

    /// Weekly TSS plan ramping CTL evenly from `current_ctl` to
    /// `target_ctl` over the whole weeks remaining.
    ///
    /// Returns an empty plan with fewer than 7 days available.
    #[must_use]
    pub fn weekly_tss_plan(
        current_ctl: f64,
        target_ctl: f64,
        days_available: i64,
    ) -> Vec<WeeklyTssTarget> {
        let weeks_available = days_available / 7;
        if weeks_available < 1 {
            return Vec::new();
        }

        let weekly_increase = (target_ctl - current_ctl) / weeks_available as f64;

        let mut plan = Vec::with_capacity(weeks_available as usize);
        let mut week_ctl = current_ctl;
        for week in 1..=weeks_available {
            week_ctl += weekly_increase;
            plan.push(WeeklyTssTarget {
                week: week as u32,
                target_ctl: (week_ctl * 10.0).round() / 10.0,
                weekly_tss: (week_ctl * 7.0).round().max(0.0) as u32,
            });
        }

        plan
    }

    /// Readiness score on 0-100, blending CTL progress toward target,
    /// proximity of TSB to the peaking band, and training volume.
    ///
    /// TSB is recomputed from the load fields, never read from the stored
    /// sample value.
    #[must_use]
    pub fn readiness_score(race: &Race, sample: &FitnessSample) -> u32 {
        let target_ctl = Self::target_ctl(race);
        let ctl_score = ((sample.ctl / target_ctl) * 100.0).min(100.0);

        let tsb = sample.computed_tsb();
        let tsb_score = if (PEAK_TSB_MIN..=PEAK_TSB_MAX).contains(&tsb) {
            100.0
        } else {
            (tsb - 10.0).abs().mul_add(-5.0, 100.0).max(0.0)
        };

        let score = CTL_WEIGHT.mul_add(
            ctl_score,
            TSB_WEIGHT.mul_add(tsb_score, VOLUME_WEIGHT * DEFAULT_VOLUME_SCORE),
        );
        score.round().max(0.0) as u32
    }

    /// Full preparation assessment for `race` from the latest sample.
    #[must_use]
    pub fn analyze(race: &Race, sample: &FitnessSample, reference: NaiveDate) -> RacePreparation {
        let days_to_race = (race.date - reference).num_days();
        let target_ctl = Self::target_ctl(race);

        RacePreparation {
            days_to_race,
            fitness_gap: target_ctl - sample.ctl,
            weekly_tss_targets: Self::weekly_tss_plan(sample.ctl, target_ctl, days_to_race),
            readiness_score: Self::readiness_score(race, sample),
            recommendations: Self::recommendations(race, sample, target_ctl),
        }
    }

    fn recommendations(race: &Race, sample: &FitnessSample, target_ctl: f64) -> Vec<String> {
        let mut recommendations = Vec::new();

        if sample.ctl < target_ctl * 0.8 {
            recommendations.push(format!(
                "Augmentez progressivement votre charge d'entraînement pour atteindre un CTL cible de {}.",
                target_ctl.round()
            ));
        }

        let tsb = sample.computed_tsb();
        if tsb < -10.0 {
            recommendations.push(
                "Votre fatigue est élevée. Prévoyez une période de récupération pour optimiser votre forme."
                    .to_owned(),
            );
        } else if tsb > 20.0 {
            recommendations.push(
                "Votre forme est bonne mais attention à maintenir une charge d'entraînement suffisante."
                    .to_owned(),
            );
        }

        if race.elevation_m > MOUNTAIN_ELEVATION_M {
            recommendations.push(
                "Cette course comporte un dénivelé important. Incluez des séances spécifiques en montée dans votre préparation."
                    .to_owned(),
            );
        }

        if race.distance_km > LONG_DISTANCE_KM {
            recommendations.push(
                "Pour cette longue distance, focalisez-vous sur l'endurance de base et la gestion de l'effort."
                    .to_owned(),
            );
        }

        recommendations
    }
}
