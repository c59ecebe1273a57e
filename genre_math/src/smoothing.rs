//! Holt's linear exponential smoothing
//!
//! Maintains a smoothed level and an additive trend, with no seasonal term:
//! - Level: `l_t = α·y_t + (1-α)·(l_{t-1} + b_{t-1})`
//! - Trend: `b_t = β·(l_t - l_{t-1}) + (1-β)·b_{t-1}`
//! - Forecast: `ŷ_{t+h} = l_t + h·b_t`
//!
//! The state is seeded from the first two observations (`l = y_1`,
//! `b = y_1 - y_0`), so one-step-ahead errors accumulate from the third
//! observation onwards.

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// Lower bound for fitted smoothing parameters
pub const MIN_PARAM: f64 = 1e-4;
/// Upper bound for fitted smoothing parameters
pub const MAX_PARAM: f64 = 1.0 - 1e-4;

const COARSE_STEP: f64 = 0.05;
const REFINE_ROUNDS: usize = 10;

/// Holt's linear (additive trend) exponential smoothing
#[derive(Debug, Clone)]
pub struct HoltLinear {
    alpha: f64,
    beta: f64,
    level: Option<f64>,
    trend: Option<f64>,
    sse: f64,
    values_seen: usize,
}

impl HoltLinear {
    /// Create a new Holt model with the specified smoothing parameters
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(MathError::InvalidInput(
                "Alpha must be between 0 and 1 (exclusive)".to_string(),
            ));
        }
        if !(beta > 0.0 && beta < 1.0) {
            return Err(MathError::InvalidInput(
                "Beta must be between 0 and 1 (exclusive)".to_string(),
            ));
        }

        Ok(Self {
            alpha,
            beta,
            level: None,
            trend: None,
            sse: 0.0,
            values_seen: 0,
        })
    }

    /// Feed the next observation into the model
    pub fn update(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(MathError::InvalidInput(format!(
                "Observation {} is not a finite number",
                value
            )));
        }
        self.values_seen += 1;

        match (self.level, self.trend) {
            (None, _) => {
                self.level = Some(value);
            }
            (Some(first), None) => {
                self.trend = Some(value - first);
                self.level = Some(value);
            }
            (Some(prev_level), Some(prev_trend)) => {
                let predicted = prev_level + prev_trend;
                self.sse += (value - predicted).powi(2);

                let new_level = self.alpha * value + (1.0 - self.alpha) * predicted;
                let new_trend =
                    self.beta * (new_level - prev_level) + (1.0 - self.beta) * prev_trend;

                self.level = Some(new_level);
                self.trend = Some(new_trend);
            }
        }

        Ok(())
    }

    /// Get the current level
    pub fn level(&self) -> Result<f64> {
        self.level.ok_or_else(|| {
            MathError::InsufficientData("Level not calculated yet".to_string())
        })
    }

    /// Get the current trend
    pub fn trend(&self) -> Result<f64> {
        self.trend.ok_or_else(|| {
            MathError::InsufficientData("Trend needs at least 2 observations".to_string())
        })
    }

    /// Forecast h steps ahead of the last observation
    pub fn forecast(&self, h: usize) -> Result<f64> {
        match (self.level, self.trend) {
            (Some(level), Some(trend)) => Ok(level + (h as f64) * trend),
            _ => Err(MathError::InsufficientData(
                "Not enough data to make a forecast".to_string(),
            )),
        }
    }

    /// Forecast steps `1..=horizon` ahead of the last observation
    pub fn forecast_horizon(&self, horizon: usize) -> Result<Vec<f64>> {
        if horizon == 0 {
            return Err(MathError::InvalidInput(
                "Forecast horizon must be greater than zero".to_string(),
            ));
        }

        (1..=horizon).map(|h| self.forecast(h)).collect()
    }

    /// Sum of squared one-step-ahead errors seen so far
    pub fn sse(&self) -> f64 {
        self.sse
    }

    /// Number of observations consumed
    pub fn values_seen(&self) -> usize {
        self.values_seen
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }
}

/// Smoothing parameters selected by [`fit_holt`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoltParams {
    pub alpha: f64,
    pub beta: f64,
    /// In-sample sum of squared one-step errors at these parameters
    pub sse: f64,
}

/// A Holt model fitted to a complete series
#[derive(Debug, Clone)]
pub struct HoltFit {
    pub params: HoltParams,
    pub model: HoltLinear,
}

impl HoltFit {
    /// Project `horizon` values past the end of the fitted series
    pub fn forecast(&self, horizon: usize) -> Result<Vec<f64>> {
        self.model.forecast_horizon(horizon)
    }
}

/// In-sample sum of squared one-step errors for the given parameters
pub fn sum_squared_errors(values: &[f64], alpha: f64, beta: f64) -> Result<f64> {
    Ok(run(values, alpha, beta)?.sse())
}

/// Fit Holt's linear smoothing by least squares over `alpha` and `beta`.
///
/// A coarse grid over `(0, 1)²` is refined around the incumbent with a
/// halving step. Candidates only replace the incumbent when strictly better,
/// so the result is deterministic for a given input.
pub fn fit_holt(values: &[f64]) -> Result<HoltFit> {
    if values.len() < 3 {
        return Err(MathError::InsufficientData(format!(
            "Holt smoothing needs at least 3 observations, got {}",
            values.len()
        )));
    }
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(MathError::InvalidInput(format!(
            "Series contains a non-finite value: {}",
            bad
        )));
    }

    let mut best = HoltParams {
        alpha: MIN_PARAM,
        beta: MIN_PARAM,
        sse: f64::INFINITY,
    };

    let coarse: Vec<f64> = (1..20).map(|i| i as f64 * COARSE_STEP).collect();
    for &alpha in &coarse {
        for &beta in &coarse {
            consider(values, alpha, beta, &mut best)?;
        }
    }

    let mut step = COARSE_STEP / 2.0;
    for _ in 0..REFINE_ROUNDS {
        let (center_alpha, center_beta) = (best.alpha, best.beta);
        for da in -2i32..=2 {
            for db in -2i32..=2 {
                let alpha = (center_alpha + da as f64 * step).clamp(MIN_PARAM, MAX_PARAM);
                let beta = (center_beta + db as f64 * step).clamp(MIN_PARAM, MAX_PARAM);
                consider(values, alpha, beta, &mut best)?;
            }
        }
        step /= 2.0;
    }

    if !best.sse.is_finite() {
        return Err(MathError::CalculationError(
            "No smoothing parameters produced a finite error".to_string(),
        ));
    }

    let model = run(values, best.alpha, best.beta)?;
    Ok(HoltFit {
        params: best,
        model,
    })
}

fn consider(values: &[f64], alpha: f64, beta: f64, best: &mut HoltParams) -> Result<()> {
    let sse = sum_squared_errors(values, alpha, beta)?;
    if sse < best.sse {
        *best = HoltParams { alpha, beta, sse };
    }
    Ok(())
}

fn run(values: &[f64], alpha: f64, beta: f64) -> Result<HoltLinear> {
    let mut model = HoltLinear::new(alpha, beta)?;
    for &value in values {
        model.update(value)?;
    }
    Ok(model)
}
