// ABOUTME: Environment variable parsing for provider endpoint, timeouts, and FTP fallback
// ABOUTME: Validates values at load time and falls back to documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Echelon Training Intelligence

//! Environment-based configuration for deployment-specific settings

use crate::constants::DEFAULT_FTP_FALLBACK;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::info;
use url::Url;

/// Default metrics-provider API base URL
const DEFAULT_PROVIDER_BASE_URL: &str = "https://intervals.icu/api/v1";

/// Default per-request timeout in seconds
const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Recognized environment variables
const ENV_PROVIDER_BASE_URL: &str = "ECHELON_PROVIDER_BASE_URL";
const ENV_API_TIMEOUT_SECS: &str = "ECHELON_API_TIMEOUT_SECS";
const ENV_CONNECT_TIMEOUT_SECS: &str = "ECHELON_CONNECT_TIMEOUT_SECS";
const ENV_DEFAULT_FTP: &str = "ECHELON_DEFAULT_FTP";

/// Runtime configuration for the planning engine.
///
/// Constructed once (usually via [`Self::from_env`]) and passed explicitly
/// to the components that need it; there is no cached global accessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Base URL of the remote fitness-metrics provider API
    pub provider_base_url: String,
    /// Per-request timeout for provider calls, in seconds
    pub api_timeout_secs: u64,
    /// Connection timeout for provider calls, in seconds
    pub connect_timeout_secs: u64,
    /// FTP in watts assumed when no fitness history is available
    pub default_ftp_fallback: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            provider_base_url: DEFAULT_PROVIDER_BASE_URL.to_owned(),
            api_timeout_secs: DEFAULT_API_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            default_ftp_fallback: DEFAULT_FTP_FALLBACK,
        }
    }
}

impl PlannerConfig {
    /// Load configuration from environment variables, validating each value.
    ///
    /// Unset variables fall back to defaults; set-but-invalid values are
    /// rejected rather than silently ignored.
    ///
    /// # Errors
    /// Returns `AppError::ConfigError` for an unparseable base URL, a
    /// non-numeric timeout, or a non-positive FTP fallback.
    pub fn from_env() -> AppResult<Self> {
        let provider_base_url =
            env::var(ENV_PROVIDER_BASE_URL).unwrap_or_else(|_| DEFAULT_PROVIDER_BASE_URL.to_owned());
        Url::parse(&provider_base_url).map_err(|e| {
            AppError::config(format!(
                "{ENV_PROVIDER_BASE_URL} is not a valid URL: {provider_base_url}"
            ))
            .with_source(e)
        })?;

        let api_timeout_secs = parse_env_u64(ENV_API_TIMEOUT_SECS, DEFAULT_API_TIMEOUT_SECS)?;
        let connect_timeout_secs =
            parse_env_u64(ENV_CONNECT_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS)?;

        let default_ftp_fallback = match env::var(ENV_DEFAULT_FTP) {
            Ok(raw) => raw.parse::<f64>().map_err(|e| {
                AppError::config(format!("{ENV_DEFAULT_FTP} is not a number: {raw}")).with_source(e)
            })?,
            Err(_) => DEFAULT_FTP_FALLBACK,
        };
        if default_ftp_fallback <= 0.0 {
            return Err(AppError::config(format!(
                "{ENV_DEFAULT_FTP} must be positive, got {default_ftp_fallback}"
            )));
        }

        let config = Self {
            provider_base_url,
            api_timeout_secs,
            connect_timeout_secs,
            default_ftp_fallback,
        };
        info!(
            provider = %config.provider_base_url,
            timeout_secs = config.api_timeout_secs,
            "planner configuration loaded"
        );
        Ok(config)
    }
}

fn parse_env_u64(name: &str, default: u64) -> AppResult<u64> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|e| AppError::config(format!("{name} is not a number: {raw}")).with_source(e)),
        Err(_) => Ok(default),
    }
}
