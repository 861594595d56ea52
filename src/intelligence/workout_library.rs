// ABOUTME: Workout template catalogue parameterized by the athlete's current FTP
// ABOUTME: Includes the keyword-ordered prompt classifier for free-text requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Echelon Training Intelligence

//! Workout templates. Interval powers are fixed fractions of FTP; the
//! fractions and durations are domain constants that downstream consumers
//! (and athletes' training plans) depend on, so they are reproduced exactly.
//! User-facing names and descriptions are in French, matching the product.

use crate::constants::MOUNTAIN_ELEVATION_M;
use crate::models::{Interval, Race, WorkoutTemplate};
use serde::{Deserialize, Serialize};

/// Kinds of workouts the library can generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
    /// Threshold repeats just below FTP
    Threshold,
    /// Short high-power intervals above FTP
    Vo2max,
    /// Maximal sprints with long recoveries
    Sprint,
    /// Long steady aerobic ride
    Endurance,
    /// Light spin to promote recovery
    Recovery,
    /// 20-minute FTP test protocol
    FtpTest,
    /// General-improvement session outside race preparation
    Base,
    /// Race-preparation session, flat or mountain variant
    RaceSpecific,
    /// Reduced-load session in the final weeks before a race
    Taper,
}

/// Keyword patterns matched against free-text prompts, in priority order.
/// First match wins; order is behaviorally significant.
const PROMPT_PATTERNS: &[(&[&str], WorkoutKind)] = &[
    (&["seuil", "threshold"], WorkoutKind::Threshold),
    (&["vo2"], WorkoutKind::Vo2max),
    (&["sprint", "puissance"], WorkoutKind::Sprint),
    (&["endurance", "long"], WorkoutKind::Endurance),
    (&["récup", "recovery"], WorkoutKind::Recovery),
    (&["test", "ftp"], WorkoutKind::FtpTest),
];

/// Catalogue of workout templates parameterized by current FTP
pub struct WorkoutLibrary;

impl WorkoutLibrary {
    /// Classify a free-text prompt into a workout kind.
    ///
    /// Matching is case-insensitive and follows the fixed priority order of
    /// [`PROMPT_PATTERNS`]; prompts matching nothing default to endurance.
    #[must_use]
    pub fn classify_prompt(prompt: &str) -> WorkoutKind {
        let lowered = prompt.to_lowercase();
        PROMPT_PATTERNS
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
            .map_or(WorkoutKind::Endurance, |(_, kind)| *kind)
    }

    /// Generate the template for `kind` at the given FTP.
    ///
    /// Race-aware kinds (race-specific, taper) use `race` for profile and
    /// naming; without an upcoming race they fall back to the base session,
    /// mirroring the planner's no-race branch.
    #[must_use]
    pub fn generate(kind: WorkoutKind, ftp: f64, race: Option<&Race>) -> WorkoutTemplate {
        match kind {
            WorkoutKind::Threshold => Self::threshold(ftp),
            WorkoutKind::Vo2max => Self::vo2max(ftp),
            WorkoutKind::Sprint => Self::sprint(ftp),
            WorkoutKind::Endurance => Self::endurance(ftp),
            WorkoutKind::Recovery => Self::recovery(ftp),
            WorkoutKind::FtpTest => Self::ftp_test(ftp),
            WorkoutKind::Base => Self::base(ftp),
            WorkoutKind::RaceSpecific => {
                race.map_or_else(|| Self::base(ftp), |r| Self::race_specific(ftp, r))
            }
            WorkoutKind::Taper => race.map_or_else(|| Self::base(ftp), |r| Self::taper(ftp, r)),
        }
    }

    /// Threshold session: 3 × 20 min at 95% FTP
    #[must_use]
    pub fn threshold(ftp: f64) -> WorkoutTemplate {
        WorkoutTemplate {
            name: "Séance Seuil".to_owned(),
            description: "Entraînement au seuil pour améliorer votre endurance".to_owned(),
            intervals: vec![
                Interval::step(Some("Warm-up"), 900, ftp * 0.6),
                Interval::repeat(
                    3,
                    vec![
                        Interval::step(None, 1200, ftp * 0.95), // 20 minutes
                        Interval::step(None, 300, ftp * 0.55),  // 5 minutes
                    ],
                ),
                Interval::step(Some("Cool-down"), 600, ftp * 0.55),
            ],
        }
    }

    /// `VO2max` session: 6 × 3 min at 115% FTP
    #[must_use]
    pub fn vo2max(ftp: f64) -> WorkoutTemplate {
        WorkoutTemplate {
            name: "Séance VO2max".to_owned(),
            description: "Intervalles intensifs pour améliorer votre VO2max".to_owned(),
            intervals: vec![
                Interval::step(Some("Warm-up"), 900, ftp * 0.6),
                Interval::repeat(
                    6,
                    vec![
                        Interval::step(None, 180, ftp * 1.15),
                        Interval::step(None, 180, ftp * 0.5),
                    ],
                ),
                Interval::step(Some("Cool-down"), 600, ftp * 0.55),
            ],
        }
    }

    /// Sprint session: 8 × 30 s at 200% FTP
    #[must_use]
    pub fn sprint(ftp: f64) -> WorkoutTemplate {
        WorkoutTemplate {
            name: "Séance Sprint".to_owned(),
            description: "Développement de la puissance maximale".to_owned(),
            intervals: vec![
                Interval::step(Some("Warm-up"), 1200, ftp * 0.6),
                Interval::repeat(
                    8,
                    vec![
                        Interval::step(None, 30, ftp * 2.0),
                        Interval::step(None, 270, ftp * 0.5), // 4:30 recovery
                    ],
                ),
                Interval::step(Some("Cool-down"), 600, ftp * 0.55),
            ],
        }
    }

    /// Endurance session: 2 h at 70% FTP
    #[must_use]
    pub fn endurance(ftp: f64) -> WorkoutTemplate {
        WorkoutTemplate {
            name: "Séance Endurance".to_owned(),
            description: "Développement de l'endurance de base".to_owned(),
            intervals: vec![Interval::step(Some("Main Set"), 7200, ftp * 0.7)],
        }
    }

    /// Recovery session: 1 h at 50% FTP
    #[must_use]
    pub fn recovery(ftp: f64) -> WorkoutTemplate {
        WorkoutTemplate {
            name: "Séance Récupération".to_owned(),
            description: "Séance légère pour favoriser la récupération".to_owned(),
            intervals: vec![Interval::step(Some("Recovery"), 3600, ftp * 0.5)],
        }
    }

    /// 20-minute FTP test with a ramped opener
    #[must_use]
    pub fn ftp_test(ftp: f64) -> WorkoutTemplate {
        WorkoutTemplate {
            name: "Test FTP".to_owned(),
            description: "Test FTP de 20 minutes".to_owned(),
            intervals: vec![
                Interval::step(Some("Warm-up"), 1200, ftp * 0.6),
                Interval::ramp(Some("Ramp-up"), 300, ftp * 0.7, ftp * 0.9),
                Interval::step(Some("Recovery"), 300, ftp * 0.5),
                Interval::step(Some("Test"), 1200, ftp * 1.05),
                Interval::step(Some("Cool-down"), 600, ftp * 0.5),
            ],
        }
    }

    /// Base session for general improvement: 4 × 8 min at 88% FTP
    #[must_use]
    pub fn base(ftp: f64) -> WorkoutTemplate {
        WorkoutTemplate {
            name: "Entraînement de base".to_owned(),
            description: "Séance d'amélioration générale".to_owned(),
            intervals: vec![
                Interval::step(Some("Warm-up"), 900, ftp * 0.6),
                Interval::repeat(
                    4,
                    vec![
                        Interval::step(None, 480, ftp * 0.88), // 8 minutes
                        Interval::step(None, 120, ftp * 0.5),
                    ],
                ),
                Interval::step(Some("Cool-down"), 600, ftp * 0.55),
            ],
        }
    }

    /// Race-preparation session, switched on the course profile:
    /// sustained climbing efforts above 2000 m of gain, short punchy
    /// efforts otherwise.
    #[must_use]
    pub fn race_specific(ftp: f64, race: &Race) -> WorkoutTemplate {
        if race.elevation_m > MOUNTAIN_ELEVATION_M {
            WorkoutTemplate {
                name: "Entraînement spécifique montagne".to_owned(),
                description: format!("Préparation pour {}", race.name),
                intervals: vec![
                    Interval::step(Some("Warm-up"), 900, ftp * 0.6),
                    Interval::repeat(
                        3,
                        vec![
                            Interval::step(None, 1200, ftp * 0.92), // 20 minutes
                            Interval::step(None, 300, ftp * 0.5),
                        ],
                    ),
                    Interval::step(Some("Cool-down"), 600, ftp * 0.55),
                ],
            }
        } else {
            WorkoutTemplate {
                name: "Entraînement spécifique plat".to_owned(),
                description: format!("Préparation pour {}", race.name),
                intervals: vec![
                    Interval::step(Some("Warm-up"), 900, ftp * 0.6),
                    Interval::repeat(
                        5,
                        vec![
                            Interval::step(None, 300, ftp * 1.05),
                            Interval::step(None, 180, ftp * 0.5),
                        ],
                    ),
                    Interval::step(Some("Cool-down"), 600, ftp * 0.55),
                ],
            }
        }
    }

    /// Taper session: short openers at 110% FTP on reduced volume
    #[must_use]
    pub fn taper(ftp: f64, race: &Race) -> WorkoutTemplate {
        WorkoutTemplate {
            name: "Affinage pré-course".to_owned(),
            description: format!("Affinage pour {}", race.name),
            intervals: vec![
                Interval::step(Some("Warm-up"), 900, ftp * 0.6),
                Interval::repeat(
                    4,
                    vec![
                        Interval::step(None, 120, ftp * 1.1),
                        Interval::step(None, 240, ftp * 0.5),
                    ],
                ),
                Interval::step(Some("Cool-down"), 600, ftp * 0.55),
            ],
        }
    }
}
