// ABOUTME: Unit tests for logging configuration parsing
// ABOUTME: Verifies env-driven level and format selection without installing a subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Echelon Training Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use echelon::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

#[test]
#[serial]
fn test_defaults_without_environment() {
    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");

    let config = LoggingConfig::from_env();
    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
}

#[test]
#[serial]
fn test_env_overrides_level_and_format() {
    env::set_var("RUST_LOG", "debug,hyper=warn");
    env::set_var("LOG_FORMAT", "json");

    let config = LoggingConfig::from_env();
    assert_eq!(config.level, "debug,hyper=warn");
    assert_eq!(config.format, LogFormat::Json);

    env::set_var("LOG_FORMAT", "compact");
    assert_eq!(LoggingConfig::from_env().format, LogFormat::Compact);

    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
}
