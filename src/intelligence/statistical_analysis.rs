// ABOUTME: Linear regression and slope primitives for fitness trend analysis
// ABOUTME: Least-squares fit over explicit (x, y) points with R-squared quality
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Echelon Training Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Linear regression fit results
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Slope of the regression line (rate of change per x unit)
    pub slope: f64,
    /// Y-intercept of the regression line
    pub intercept: f64,
    /// Coefficient of determination (goodness of fit, 0-1)
    pub r_squared: f64,
}

impl RegressionResult {
    /// Evaluate the fitted line at `x`
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }
}

/// Least-squares linear regression over explicit (x, y) points.
///
/// # Errors
/// Returns `AppError::InvalidInput` with fewer than 2 points or when all
/// x values coincide (zero variance).
pub fn linear_regression(points: &[(f64, f64)]) -> AppResult<RegressionResult> {
    if points.len() < 2 {
        return Err(AppError::invalid_input(format!(
            "insufficient data points for regression: need at least 2, got {}",
            points.len()
        )));
    }

    let n = points.len() as f64;
    let sum_x = points.iter().map(|(x, _)| x).sum::<f64>();
    let sum_y = points.iter().map(|(_, y)| y).sum::<f64>();
    let sum_xx = points.iter().map(|(x, _)| x * x).sum::<f64>();
    let sum_xy = points.iter().map(|(x, y)| x * y).sum::<f64>();
    let sum_yy = points.iter().map(|(_, y)| y * y).sum::<f64>();

    let mean_x = sum_x / n;
    let mean_y = sum_y / n;

    let denominator = (n * mean_x).mul_add(-mean_x, sum_xx);
    if denominator.abs() < f64::EPSILON {
        return Err(AppError::invalid_input(
            "cannot calculate regression: zero variance in x",
        ));
    }

    let slope = (n * mean_x).mul_add(-mean_y, sum_xy) / denominator;
    let intercept = slope.mul_add(-mean_x, mean_y);

    let numerator = (n * mean_x).mul_add(-mean_y, sum_xy);
    let denominator_corr =
        ((n * mean_x).mul_add(-mean_x, sum_xx) * (n * mean_y).mul_add(-mean_y, sum_yy)).sqrt();
    let correlation = if denominator_corr == 0.0 {
        0.0
    } else {
        numerator / denominator_corr
    };

    Ok(RegressionResult {
        slope,
        intercept,
        r_squared: correlation * correlation,
    })
}

/// Least-squares slope over a value series indexed 0, 1, 2, ...
///
/// Returns 0.0 with fewer than 2 values; the neutral slope keeps callers
/// free of error handling on degenerate windows.
#[must_use]
pub fn slope_over(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let n = values.len() as f64;
    let mean_x = (n - 1.0) / 2.0;
    let mean_y = values.iter().sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut variance = 0.0;
    for (i, y) in values.iter().enumerate() {
        let dx = i as f64 - mean_x;
        covariance = dx.mul_add(y - mean_y, covariance);
        variance = dx.mul_add(dx, variance);
    }

    if variance == 0.0 {
        0.0
    } else {
        covariance / variance
    }
}
