// ABOUTME: FTP prediction from a linear trend fit with a heuristic confidence score
// ABOUTME: Rule-based training recommendations and race-readiness analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Echelon Training Intelligence

//! FTP prediction over fitness history. The model is a plain linear trend
//! of FTP against day offset; the confidence score blends fit quality with
//! sample sufficiency and makes no claim of statistical validity.

use crate::constants::TREND_WINDOW;
use crate::models::FitnessSample;
use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::statistical_analysis::{linear_regression, slope_over, RegressionResult};

/// Weight of the R-squared term in the confidence score
const R2_WEIGHT: f64 = 0.6;

/// Weight of the sample-sufficiency term in the confidence score
const SAMPLE_WEIGHT: f64 = 0.4;

/// Sample count below which the sufficiency term contributes nothing
const MIN_SAMPLES: f64 = 10.0;

/// Sample count at which the sufficiency term saturates
const MAX_SAMPLES: f64 = 90.0;

/// Slope magnitude below which a metric trend counts as stable
const TREND_SLOPE_THRESHOLD: f64 = 0.5;

/// Predicted FTP gain percentage considered an excellent progression
const FTP_GAIN_PCT: f64 = 5.0;

/// CTL below which training load is considered low
const LOW_CTL: f64 = 40.0;

/// CTL above which training load warrants fatigue monitoring
const HIGH_CTL: f64 = 100.0;

/// ATL/CTL ratio above which fatigue is flagged
const FATIGUE_RATIO: f64 = 1.1;

/// TSB below which form is considered deeply negative
const DEEP_NEGATIVE_TSB: f64 = -20.0;

/// TSB above which the athlete is at peak form
const PEAK_FORM_TSB: f64 = 15.0;

/// FTP readiness ratio below which the target is considered missed
const READINESS_LOW: f64 = 0.9;

/// FTP readiness ratio above which the target is comfortably exceeded
const READINESS_HIGH: f64 = 1.1;

/// Direction of a metric's recent trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Slope above +0.5 per sample
    Increasing,
    /// Slope below −0.5 per sample
    Decreasing,
    /// Anything in between, or too few samples to tell
    Stable,
}

/// Trend directions for the three load metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsTrends {
    /// Chronic load trend
    pub ctl: TrendDirection,
    /// Acute load trend
    pub atl: TrendDirection,
    /// Stress-balance trend
    pub tsb: TrendDirection,
}

/// Outcome of an FTP prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformancePrediction {
    /// FTP of the most recent sample, absent without history
    pub current_ftp: Option<f64>,
    /// Projected FTP at the prediction date, rounded to whole watts
    pub predicted_ftp: Option<f64>,
    /// Confidence score in percent, one decimal, 0 without history
    pub confidence: f64,
    /// Date the prediction applies to
    pub predicted_date: Option<NaiveDate>,
    /// Rule-based guidance derived from current state and projection
    pub recommendations: Vec<String>,
    /// Recent trend directions, absent without history
    pub trends: Option<MetricsTrends>,
}

impl PerformancePrediction {
    /// Null prediction returned for an empty sample history
    fn empty() -> Self {
        Self {
            current_ftp: None,
            predicted_ftp: None,
            confidence: 0.0,
            predicted_date: None,
            recommendations: Vec::new(),
            trends: None,
        }
    }
}

/// Readiness assessment for a target race
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceReadiness {
    /// Projected FTP on race day
    pub predicted_ftp: Option<f64>,
    /// Projected FTP over target FTP, as a rounded percentage
    pub ftp_readiness_pct: f64,
    /// Direction of the chronic-load trend
    pub fitness_trend: TrendDirection,
    /// Guidance based on readiness, trend, and time remaining
    pub recommendations: Vec<String>,
}

/// Predicts future FTP and derives qualitative recommendations
pub struct PerformancePredictor;

impl PerformancePredictor {
    /// Predict FTP `days_ahead` days from today.
    #[must_use]
    pub fn predict(samples: &[FitnessSample], days_ahead: i64) -> PerformancePrediction {
        Self::predict_from(samples, days_ahead, Utc::now().date_naive())
    }

    /// Deterministic variant of [`Self::predict`] with an explicit reference
    /// date for the day-offset axis.
    ///
    /// Never fails: an empty history yields the null prediction and a
    /// degenerate fit (single sample, or all samples on one day) falls back
    /// to a flat trend at the latest FTP.
    #[must_use]
    pub fn predict_from(
        samples: &[FitnessSample],
        days_ahead: i64,
        reference: NaiveDate,
    ) -> PerformancePrediction {
        let Some(last) = samples.last() else {
            return PerformancePrediction::empty();
        };

        let points: Vec<(f64, f64)> = samples
            .iter()
            .map(|s| ((s.date - reference).num_days() as f64, s.ftp))
            .collect();

        let regression = linear_regression(&points).unwrap_or(RegressionResult {
            slope: 0.0,
            intercept: last.ftp,
            r_squared: 0.0,
        });

        let predicted = regression.predict(days_ahead as f64);
        let confidence = Self::confidence(regression.r_squared, samples.len());

        let ctls: Vec<f64> = samples.iter().map(|s| s.ctl).collect();
        let atls: Vec<f64> = samples.iter().map(|s| s.atl).collect();
        let tsbs: Vec<f64> = samples.iter().map(FitnessSample::computed_tsb).collect();

        let recommendations = Self::recommendations(
            last.ftp,
            predicted,
            last.ctl,
            last.atl,
            last.computed_tsb(),
        );

        PerformancePrediction {
            current_ftp: Some(last.ftp),
            predicted_ftp: Some(predicted.round()),
            confidence,
            predicted_date: reference.checked_add_signed(Duration::days(days_ahead)),
            recommendations,
            trends: Some(MetricsTrends {
                ctl: Self::classify_trend(&ctls),
                atl: Self::classify_trend(&atls),
                tsb: Self::classify_trend(&tsbs),
            }),
        }
    }

    /// Confidence score in percent, rounded to one decimal.
    ///
    /// Blends fit quality (R-squared, weight 0.6) with sample sufficiency
    /// (weight 0.4): fewer than 10 samples contribute nothing from the
    /// sufficiency term, 90 or more contribute its full weight.
    #[must_use]
    pub fn confidence(r_squared: f64, sample_count: usize) -> f64 {
        let r2_score = r_squared.clamp(0.0, 1.0);
        let sample_score =
            ((sample_count as f64 - MIN_SAMPLES) / (MAX_SAMPLES - MIN_SAMPLES)).clamp(0.0, 1.0);

        let confidence = r2_score.mul_add(R2_WEIGHT, sample_score * SAMPLE_WEIGHT) * 100.0;
        (confidence * 10.0).round() / 10.0
    }

    /// Classify the trend of a metric from its last 7 values.
    ///
    /// Fewer than 7 values classify as stable by definition.
    #[must_use]
    pub fn classify_trend(values: &[f64]) -> TrendDirection {
        if values.len() < TREND_WINDOW {
            return TrendDirection::Stable;
        }

        let slope = slope_over(&values[values.len() - TREND_WINDOW..]);
        if slope > TREND_SLOPE_THRESHOLD {
            TrendDirection::Increasing
        } else if slope < -TREND_SLOPE_THRESHOLD {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        }
    }

    /// Assess readiness for a race on `race_date` against a target FTP.
    #[must_use]
    pub fn analyze_race_readiness(
        samples: &[FitnessSample],
        race_date: NaiveDate,
        target_ftp: f64,
        required_ctl: f64,
    ) -> RaceReadiness {
        Self::analyze_race_readiness_from(
            samples,
            race_date,
            target_ftp,
            required_ctl,
            Utc::now().date_naive(),
        )
    }

    /// Deterministic variant of [`Self::analyze_race_readiness`].
    #[must_use]
    pub fn analyze_race_readiness_from(
        samples: &[FitnessSample],
        race_date: NaiveDate,
        target_ftp: f64,
        _required_ctl: f64,
        reference: NaiveDate,
    ) -> RaceReadiness {
        let days_until_race = (race_date - reference).num_days();
        let prediction = Self::predict_from(samples, days_until_race, reference);

        let fitness_trend = prediction
            .trends
            .map_or(TrendDirection::Stable, |t| t.ctl);

        let Some(predicted_ftp) = prediction.predicted_ftp else {
            return RaceReadiness {
                predicted_ftp: None,
                ftp_readiness_pct: 0.0,
                fitness_trend,
                recommendations: Vec::new(),
            };
        };

        let ftp_readiness = if target_ftp > 0.0 {
            predicted_ftp / target_ftp
        } else {
            0.0
        };

        RaceReadiness {
            predicted_ftp: Some(predicted_ftp),
            ftp_readiness_pct: (ftp_readiness * 100.0).round(),
            fitness_trend,
            recommendations: Self::race_recommendations(
                ftp_readiness,
                fitness_trend,
                days_until_race,
            ),
        }
    }

    fn recommendations(
        current_ftp: f64,
        predicted_ftp: f64,
        current_ctl: f64,
        current_atl: f64,
        current_tsb: f64,
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        if current_ftp > 0.0 {
            let ftp_change = ((predicted_ftp - current_ftp) / current_ftp) * 100.0;
            if ftp_change > FTP_GAIN_PCT {
                recommendations.push(
                    "La progression prévue est excellente. Maintenez votre approche actuelle."
                        .to_owned(),
                );
            } else if ftp_change < 0.0 {
                recommendations.push(
                    "Attention à la baisse prévue de FTP. Augmentez l'intensité des entraînements."
                        .to_owned(),
                );
            }
        }

        if current_ctl < LOW_CTL {
            recommendations
                .push("Charge d'entraînement faible. Augmentez progressivement le volume.".to_owned());
        } else if current_ctl > HIGH_CTL {
            recommendations.push(
                "Charge d'entraînement élevée. Surveillez la fatigue et la récupération.".to_owned(),
            );
        }

        if current_atl > current_ctl * FATIGUE_RATIO {
            recommendations
                .push("Niveau de fatigue élevé. Prévoyez une période de récupération.".to_owned());
        }

        if current_tsb < DEEP_NEGATIVE_TSB {
            recommendations
                .push("Forme basse. Diminuez temporairement la charge d'entraînement.".to_owned());
        } else if current_tsb > PEAK_FORM_TSB {
            recommendations
                .push("Pic de forme. Période idéale pour des objectifs importants.".to_owned());
        }

        recommendations
    }

    fn race_recommendations(
        ftp_readiness: f64,
        fitness_trend: TrendDirection,
        days_until_race: i64,
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        if ftp_readiness < READINESS_LOW {
            recommendations
                .push("Objectif FTP non atteint. Intensifiez les séances spécifiques.".to_owned());
        } else if ftp_readiness > READINESS_HIGH {
            recommendations
                .push("Excellent niveau de FTP. Focalisez-vous sur la spécificité course.".to_owned());
        }

        if fitness_trend == TrendDirection::Decreasing && days_until_race > 14 {
            recommendations
                .push("Forme en baisse. Ajustez la charge pour inverser la tendance.".to_owned());
        } else if fitness_trend == TrendDirection::Increasing && days_until_race < 7 {
            recommendations.push(
                "Réduisez progressivement la charge pour un pic de forme optimal.".to_owned(),
            );
        }

        if days_until_race <= 7 {
            recommendations
                .push("Derniers jours : focalisez-vous sur l'affinage et la récupération.".to_owned());
        } else if days_until_race <= 21 {
            recommendations
                .push("Phase finale : maintenez l'intensité mais réduisez le volume.".to_owned());
        }

        recommendations
    }
}
