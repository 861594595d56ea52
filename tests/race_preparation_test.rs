// ABOUTME: Unit tests for race-preparation analysis
// ABOUTME: Covers CTL targets, weekly TSS ramps, readiness scoring, and guidance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Echelon Training Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use echelon::intelligence::RacePreparationAnalyzer;
use echelon::models::{FitnessSample, Race, RacePriority};

fn race(distance_km: f64, elevation_m: f64, date: NaiveDate) -> Race {
    Race {
        id: 1,
        name: "Étape du Tour".to_owned(),
        date,
        distance_km,
        elevation_m,
        priority: RacePriority::A,
        description: None,
    }
}

fn sample(ctl: f64, atl: f64) -> FitnessSample {
    FitnessSample {
        date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        ctl,
        atl,
        tsb: 0.0,
        ftp: 250.0,
    }
}

fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
}

#[test]
fn test_target_ctl_flat_century() {
    let target = RacePreparationAnalyzer::target_ctl(&race(100.0, 0.0, june(29)));
    assert!((target - 90.0).abs() < f64::EPSILON, "expected 90, got {target}");
}

#[test]
fn test_target_ctl_scales_with_profile() {
    // 80 base + 174/100 x 10 + 5000/1000 x 5 = 80 + 17.4 + 25 = 122.4
    let target = RacePreparationAnalyzer::target_ctl(&race(174.0, 5000.0, june(29)));
    assert!((target - 122.4).abs() < 1e-9, "expected 122.4, got {target}");
}

#[test]
fn test_weekly_tss_plan_ramps_evenly() {
    let plan = RacePreparationAnalyzer::weekly_tss_plan(50.0, 90.0, 28);
    assert_eq!(plan.len(), 4);

    let ctls: Vec<f64> = plan.iter().map(|w| w.target_ctl).collect();
    assert_eq!(ctls, vec![60.0, 70.0, 80.0, 90.0]);

    let tss: Vec<u32> = plan.iter().map(|w| w.weekly_tss).collect();
    assert_eq!(tss, vec![420, 490, 560, 630]);

    assert_eq!(plan[0].week, 1);
    assert_eq!(plan[3].week, 4);
}

#[test]
fn test_weekly_tss_plan_empty_under_one_week() {
    assert!(RacePreparationAnalyzer::weekly_tss_plan(50.0, 90.0, 6).is_empty());
}

#[test]
fn test_readiness_score_at_target_in_band() {
    // CTL at target, TSB 10 inside the peaking band, fixed volume 80:
    // 0.4 x 100 + 0.3 x 100 + 0.3 x 80 = 94.
    let r = race(100.0, 0.0, june(29));
    let score = RacePreparationAnalyzer::readiness_score(&r, &sample(90.0, 80.0));
    assert_eq!(score, 94);
}

#[test]
fn test_readiness_score_ctl_component_is_capped() {
    // CTL far above target must not push the CTL component past 100.
    let r = race(100.0, 0.0, june(29));
    let score = RacePreparationAnalyzer::readiness_score(&r, &sample(180.0, 170.0));
    assert_eq!(score, 94);
}

#[test]
fn test_readiness_score_penalizes_tsb_distance() {
    // TSB -20: 100 - |−20 − 10| x 5 = max(0, -50) = 0 from the TSB term.
    // 0.4 x 100 + 0.3 x 0 + 0.3 x 80 = 64.
    let r = race(100.0, 0.0, june(29));
    let score = RacePreparationAnalyzer::readiness_score(&r, &sample(90.0, 110.0));
    assert_eq!(score, 64);
}

#[test]
fn test_analyze_reports_gap_and_plan() {
    let r = race(100.0, 0.0, june(29));
    let preparation = RacePreparationAnalyzer::analyze(&r, &sample(50.0, 45.0), june(1));

    assert_eq!(preparation.days_to_race, 28);
    assert!((preparation.fitness_gap - 40.0).abs() < f64::EPSILON);
    assert_eq!(preparation.weekly_tss_targets.len(), 4);
}

#[test]
fn test_recommendations_cover_load_and_profile() {
    // CTL well under target, mountainous and long course.
    let r = race(174.0, 5000.0, june(29));
    let preparation = RacePreparationAnalyzer::analyze(&r, &sample(40.0, 38.0), june(1));

    assert!(preparation
        .recommendations
        .iter()
        .any(|m| m.contains("CTL cible")));
    assert!(preparation
        .recommendations
        .iter()
        .any(|m| m.contains("dénivelé important")));
    assert!(preparation
        .recommendations
        .iter()
        .any(|m| m.contains("longue distance")));
}

#[test]
fn test_recommendations_flag_fatigue_from_recomputed_tsb() {
    // Stored tsb says 0, loads say -20: the fatigue warning must fire.
    let r = race(100.0, 0.0, june(29));
    let mut fatigued = sample(90.0, 110.0);
    fatigued.tsb = 0.0;
    let preparation = RacePreparationAnalyzer::analyze(&r, &fatigued, june(1));

    assert!(preparation
        .recommendations
        .iter()
        .any(|m| m.contains("fatigue est élevée")));
}
