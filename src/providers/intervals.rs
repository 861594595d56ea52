// ABOUTME: intervals.icu-style provider client over the shared pooled HTTP client
// ABOUTME: Bearer-token auth, JSON bodies, date-window query parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Echelon Training Intelligence

use crate::config::PlannerConfig;
use crate::constants::{DEFAULT_FITNESS_HISTORY_DAYS, DEFAULT_PLANNED_WORKOUT_DAYS};
use crate::errors::{AppError, AppResult};
use crate::models::FitnessSample;
use crate::providers::http_client::{initialize_shared_client, shared_client};
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::core::{
    AthleteProfile, CreatedWorkout, FitnessDataSource, PowerCurve, ProviderWorkout,
};

/// Client for an intervals.icu-style fitness-metrics API
pub struct IntervalsProvider {
    base_url: String,
    api_key: String,
}

impl IntervalsProvider {
    /// Create a provider client from configuration and an API key.
    ///
    /// The first construction also configures the shared HTTP client's
    /// timeouts from `config`.
    #[must_use]
    pub fn new(config: &PlannerConfig, api_key: impl Into<String>) -> Self {
        initialize_shared_client(config.api_timeout_secs, config.connect_timeout_secs);
        Self {
            base_url: config.provider_base_url.trim_end_matches('/').to_owned(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> AppResult<T> {
        debug!(path, "provider GET");
        let response = shared_client()
            .get(self.endpoint(path))
            .bearer_auth(&self.api_key)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                AppError::external_service(format!("provider request failed: {e}")).with_source(e)
            })?;

        Self::decode(response).await
    }

    async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        debug!(path, "provider POST");
        let response = shared_client()
            .post(self.endpoint(path))
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                AppError::external_service(format!("provider request failed: {e}")).with_source(e)
            })?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> AppResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(format!(
                "provider returned {status}: {body}"
            )));
        }

        response.json::<T>().await.map_err(|e| {
            AppError::external_service(format!("provider response malformed: {e}")).with_source(e)
        })
    }

    fn date_window(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        default_days_back: i64,
    ) -> [(&'static str, String); 2] {
        let today = Utc::now().date_naive();
        let start = start.unwrap_or(today - Duration::days(default_days_back));
        let end = end.unwrap_or(today);
        [("start", start.to_string()), ("end", end.to_string())]
    }
}

#[async_trait]
impl FitnessDataSource for IntervalsProvider {
    async fn get_fitness_history(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> AppResult<Vec<FitnessSample>> {
        let query = Self::date_window(start, end, DEFAULT_FITNESS_HISTORY_DAYS);
        self.get_json("athlete/fitness", &query).await
    }

    async fn get_athlete(&self) -> AppResult<AthleteProfile> {
        self.get_json("athlete", &[]).await
    }

    async fn get_power_curve(&self) -> AppResult<PowerCurve> {
        self.get_json("power-curve", &[]).await
    }

    async fn create_workout(&self, workout: &ProviderWorkout) -> AppResult<CreatedWorkout> {
        self.post_json("workout", workout).await
    }

    async fn get_workout(&self, id: &str) -> AppResult<ProviderWorkout> {
        self.get_json(&format!("workout/{id}"), &[]).await
    }

    async fn get_planned_workouts(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> AppResult<Vec<ProviderWorkout>> {
        let query = Self::date_window(start, end, DEFAULT_PLANNED_WORKOUT_DAYS);
        self.get_json("workouts", &query).await
    }
}
