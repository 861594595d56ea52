// ABOUTME: Unit tests for plan sync orchestration against an in-memory provider
// ABOUTME: Covers per-item failure isolation, resync partitioning, status checks, conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Echelon Training Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use echelon::config::PlannerConfig;
use echelon::errors::{AppError, AppResult};
use echelon::models::{DayAvailability, FitnessSample, PlannedWorkout};
use echelon::providers::{
    AthleteProfile, CreatedWorkout, FitnessDataSource, PowerCurve, ProviderInterval, ProviderStep,
    ProviderWorkout, ProviderWorkoutType,
};
use echelon::sync::{convert_workout, determine_workout_type, PlanSyncOrchestrator, SyncState};
use echelon::WorkoutLibrary;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap() + Duration::days(offset)
}

fn available(date: NaiveDate) -> DayAvailability {
    DayAvailability {
        date,
        available: true,
        time_slots: Vec::new(),
        is_remote_work: false,
        notes: None,
    }
}

/// In-memory provider double with switchable failure modes
#[derive(Default)]
struct StubSource {
    history: Vec<FitnessSample>,
    fail_creates: bool,
    missing_workout_ids: Vec<String>,
    created: Mutex<Vec<ProviderWorkout>>,
    counter: AtomicUsize,
}

#[async_trait]
impl FitnessDataSource for StubSource {
    async fn get_fitness_history(
        &self,
        _start: Option<NaiveDate>,
        _end: Option<NaiveDate>,
    ) -> AppResult<Vec<FitnessSample>> {
        Ok(self.history.clone())
    }

    async fn get_athlete(&self) -> AppResult<AthleteProfile> {
        Ok(AthleteProfile {
            id: "athlete-1".to_owned(),
            name: Some("Test Athlete".to_owned()),
            ftp: Some(250.0),
        })
    }

    async fn get_power_curve(&self) -> AppResult<PowerCurve> {
        Ok(PowerCurve {
            secs: vec![60, 300, 1200],
            watts: vec![450.0, 320.0, 260.0],
        })
    }

    async fn create_workout(&self, workout: &ProviderWorkout) -> AppResult<CreatedWorkout> {
        if self.fail_creates {
            return Err(AppError::external_service(
                "provider returned 503 Service Unavailable: maintenance",
            ));
        }
        self.created.lock().unwrap().push(workout.clone());
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(CreatedWorkout {
            id: format!("wk-{n}"),
        })
    }

    async fn get_workout(&self, id: &str) -> AppResult<ProviderWorkout> {
        if self.missing_workout_ids.iter().any(|m| m == id) {
            return Err(AppError::external_service(format!(
                "provider returned 404 Not Found: workout {id}"
            )));
        }
        Ok(ProviderWorkout {
            name: "Entraînement de base".to_owned(),
            description: String::new(),
            workout_type: ProviderWorkoutType::Workout,
            date: day(0),
            intervals: Vec::new(),
        })
    }

    async fn get_planned_workouts(
        &self,
        _start: Option<NaiveDate>,
        _end: Option<NaiveDate>,
    ) -> AppResult<Vec<ProviderWorkout>> {
        Ok(self.created.lock().unwrap().clone())
    }
}

#[tokio::test]
async fn test_sync_pushes_every_available_day() {
    let source = StubSource::default();
    let orchestrator = PlanSyncOrchestrator::new(&source, PlannerConfig::default());
    let calendar = vec![available(day(0)), available(day(1))];

    let report = orchestrator
        .sync(&[], &[], &calendar, day(0), day(1), None)
        .await
        .unwrap();

    assert_eq!(report.success, 2);
    assert_eq!(report.failed, 0);
    assert_eq!(report.synced.len(), 2);
    assert_eq!(report.synced[0].provider_id, "wk-1");
    assert_eq!(report.synced[0].date, day(0));
    assert_eq!(report.synced[1].date, day(1));

    let pushed = source.created.lock().unwrap();
    assert_eq!(pushed.len(), 2);
    // No history: the fallback FTP parameterizes the base workout; its
    // warm-up runs at 60% of 200 W.
    let ProviderInterval::Step(warmup) = &pushed[0].intervals[0] else {
        panic!("warm-up should be a leaf step");
    };
    assert_eq!(warmup.power, Some(120.0));
}

#[tokio::test]
async fn test_sync_records_failures_without_raising() {
    let source = StubSource {
        fail_creates: true,
        ..StubSource::default()
    };
    let orchestrator = PlanSyncOrchestrator::new(&source, PlannerConfig::default());
    let calendar = vec![available(day(0))];

    let report = orchestrator
        .sync(&[], &[], &calendar, day(0), day(0), None)
        .await
        .unwrap();

    assert_eq!(report.success, 0);
    assert_eq!(report.failed, 1);
    assert_eq!(report.failed_workouts.len(), 1);

    let failure = &report.failed_workouts[0];
    assert_eq!(failure.date, day(0));
    assert!(
        failure.error.contains("503"),
        "provider message should be preserved verbatim: {}",
        failure.error
    );
    // The workout is retained for resync.
    assert_eq!(failure.workout.template.name, failure.name);
}

#[tokio::test]
async fn test_sync_failure_isolation_preserves_order() {
    // Two days, pushes always fail: both failures are reported, in plan
    // order, and the batch still completes.
    let source = StubSource {
        fail_creates: true,
        ..StubSource::default()
    };
    let orchestrator = PlanSyncOrchestrator::new(&source, PlannerConfig::default());
    let calendar = vec![available(day(0)), available(day(3))];

    let report = orchestrator
        .sync(&[], &[], &calendar, day(0), day(3), None)
        .await
        .unwrap();

    assert_eq!(report.failed, 2);
    let dates: Vec<NaiveDate> = report.failed_workouts.iter().map(|f| f.date).collect();
    assert_eq!(dates, vec![day(0), day(3)]);
}

#[tokio::test]
async fn test_resync_partitions_retries() {
    // First pass fails everything.
    let failing = StubSource {
        fail_creates: true,
        ..StubSource::default()
    };
    let orchestrator = PlanSyncOrchestrator::new(&failing, PlannerConfig::default());
    let calendar = vec![available(day(0))];
    let report = orchestrator
        .sync(&[], &[], &calendar, day(0), day(0), None)
        .await
        .unwrap();
    assert_eq!(report.failed, 1);

    // Retry against a healthy provider: the failure moves to newly-synced.
    let healthy = StubSource::default();
    let retry_orchestrator = PlanSyncOrchestrator::new(&healthy, PlannerConfig::default());
    let resync = retry_orchestrator.resync(&report.failed_workouts).await;

    assert_eq!(resync.newly_synced.len(), 1);
    assert!(resync.still_failed.is_empty());
    assert_eq!(resync.newly_synced[0].provider_id, "wk-1");
    assert_eq!(resync.newly_synced[0].date, day(0));

    // Retry against a still-failing provider: the failure stays failed.
    let still_failing = StubSource {
        fail_creates: true,
        ..StubSource::default()
    };
    let failing_orchestrator =
        PlanSyncOrchestrator::new(&still_failing, PlannerConfig::default());
    let resync = failing_orchestrator.resync(&report.failed_workouts).await;

    assert!(resync.newly_synced.is_empty());
    assert_eq!(resync.still_failed.len(), 1);
    assert!(resync.still_failed[0].error.contains("503"));
}

#[tokio::test]
async fn test_check_status_captures_errors_per_item() {
    let source = StubSource {
        missing_workout_ids: vec!["wk-gone".to_owned()],
        ..StubSource::default()
    };
    let orchestrator = PlanSyncOrchestrator::new(&source, PlannerConfig::default());

    let synced = vec![
        echelon::sync::SyncedWorkout {
            provider_id: "wk-1".to_owned(),
            date: day(0),
            name: "Entraînement de base".to_owned(),
        },
        echelon::sync::SyncedWorkout {
            provider_id: "wk-gone".to_owned(),
            date: day(1),
            name: "Entraînement de base".to_owned(),
        },
    ];

    let statuses = orchestrator.check_status(&synced).await;
    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[0].status, SyncState::Synced);
    assert!(statuses[0].error.is_none());
    assert_eq!(statuses[1].status, SyncState::Error);
    assert!(statuses[1].error.as_deref().unwrap().contains("404"));
}

#[test]
fn test_workout_type_classification_round_trip() {
    assert_eq!(
        determine_workout_type("Séance Seuil", ""),
        ProviderWorkoutType::Threshold
    );
    assert_eq!(
        determine_workout_type("Séance Endurance", ""),
        ProviderWorkoutType::Endurance
    );
    // Endurance is matched in the description too, and outranks everything.
    assert_eq!(
        determine_workout_type("Sortie libre", "endurance de base"),
        ProviderWorkoutType::Endurance
    );
    assert_eq!(
        determine_workout_type("Séance VO2max", ""),
        ProviderWorkoutType::Vo2max
    );
    assert_eq!(
        determine_workout_type("Développement puissance", ""),
        ProviderWorkoutType::Sprint
    );
    assert_eq!(
        determine_workout_type("Séance Récupération", ""),
        ProviderWorkoutType::Recovery
    );
    assert_eq!(
        determine_workout_type("Entraînement de base", ""),
        ProviderWorkoutType::Workout
    );
}

#[test]
fn test_convert_workout_emits_ramp_fields() {
    let planned = PlannedWorkout {
        date: day(0),
        template: WorkoutLibrary::ftp_test(250.0),
    };
    let wire = convert_workout(&planned);

    let ProviderInterval::Step(ramp) = &wire.intervals[1] else {
        panic!("ramp-up should convert to a leaf step");
    };
    assert_eq!(ramp.power, None, "ramp steps must not carry constant power");
    assert_eq!(ramp.start_power, Some(175.0));
    assert_eq!(ramp.end_power, Some(225.0));

    let json = serde_json::to_value(&wire).unwrap();
    let ramp_json = &json["intervals"][1];
    assert!(ramp_json.get("power").is_none());
    assert_eq!(ramp_json["start_power"], 175.0);
    assert_eq!(json["type"], "workout");
    assert_eq!(json["date"], "2025-06-02");
}

#[test]
fn test_convert_workout_recurses_repeat_blocks() {
    let planned = PlannedWorkout {
        date: day(0),
        template: WorkoutLibrary::threshold(250.0),
    };
    let wire = convert_workout(&planned);
    assert_eq!(wire.workout_type, ProviderWorkoutType::Threshold);

    let ProviderInterval::Repeat { repeat, intervals } = &wire.intervals[1] else {
        panic!("main set should convert to a repeat block");
    };
    assert_eq!(*repeat, 3);
    let ProviderInterval::Step(effort) = &intervals[0] else {
        panic!("nested interval should be a leaf step");
    };
    assert_eq!(effort.duration, 1200);
    assert_eq!(effort.power, Some(237.5));
}

#[test]
fn test_provider_step_ramp_takes_precedence() {
    // A loose wire step carrying both power forms normalizes to the ramp.
    let step = ProviderStep {
        duration: 300,
        power: Some(200.0),
        start_power: Some(150.0),
        end_power: Some(250.0),
        name: None,
    };
    match step.power_target() {
        echelon::models::PowerTarget::Ramp {
            start_watts,
            end_watts,
        } => {
            assert!((start_watts - 150.0).abs() < f64::EPSILON);
            assert!((end_watts - 250.0).abs() < f64::EPSILON);
        }
        other => panic!("expected ramp to win over constant power, got {other:?}"),
    }
}

#[test]
fn test_provider_interval_deserializes_repeat_blocks() {
    let json = r#"{"repeat":3,"intervals":[{"duration":1200,"power":237.5}]}"#;
    let interval: ProviderInterval = serde_json::from_str(json).unwrap();
    let ProviderInterval::Repeat { repeat, intervals } = interval else {
        panic!("object with a repeat field should parse as a repeat block");
    };
    assert_eq!(repeat, 3);
    assert_eq!(intervals.len(), 1);
}
