// ABOUTME: Unit tests for environment-based configuration
// ABOUTME: Validates defaults, overrides, and rejection of malformed values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Echelon Training Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use echelon::config::PlannerConfig;
use echelon::errors::ErrorCode;
use serial_test::serial;
use std::env;

const ENV_VARS: &[&str] = &[
    "ECHELON_PROVIDER_BASE_URL",
    "ECHELON_API_TIMEOUT_SECS",
    "ECHELON_CONNECT_TIMEOUT_SECS",
    "ECHELON_DEFAULT_FTP",
];

fn clear_env() {
    for var in ENV_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = PlannerConfig::from_env().unwrap();
    assert_eq!(config.provider_base_url, "https://intervals.icu/api/v1");
    assert_eq!(config.api_timeout_secs, 30);
    assert_eq!(config.connect_timeout_secs, 10);
    assert!((config.default_ftp_fallback - 200.0).abs() < f64::EPSILON);

    assert_eq!(config, PlannerConfig::default());
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var("ECHELON_PROVIDER_BASE_URL", "https://metrics.example.com/v2");
    env::set_var("ECHELON_API_TIMEOUT_SECS", "5");
    env::set_var("ECHELON_CONNECT_TIMEOUT_SECS", "2");
    env::set_var("ECHELON_DEFAULT_FTP", "265.5");

    let config = PlannerConfig::from_env().unwrap();
    assert_eq!(config.provider_base_url, "https://metrics.example.com/v2");
    assert_eq!(config.api_timeout_secs, 5);
    assert_eq!(config.connect_timeout_secs, 2);
    assert!((config.default_ftp_fallback - 265.5).abs() < f64::EPSILON);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_base_url_rejected() {
    clear_env();
    env::set_var("ECHELON_PROVIDER_BASE_URL", "not a url");

    let err = PlannerConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigError);

    clear_env();
}

#[test]
#[serial]
fn test_non_numeric_timeout_rejected() {
    clear_env();
    env::set_var("ECHELON_API_TIMEOUT_SECS", "soon");

    let err = PlannerConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigError);
    assert!(err.message.contains("ECHELON_API_TIMEOUT_SECS"));

    clear_env();
}

#[test]
#[serial]
fn test_non_positive_ftp_fallback_rejected() {
    clear_env();
    env::set_var("ECHELON_DEFAULT_FTP", "0");

    let err = PlannerConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigError);

    clear_env();
}
