//! # Genre Math
//!
//! Numeric building blocks for genre trend forecasting.
//! This crate provides Holt's linear (additive-trend) exponential smoothing
//! and a deterministic least-squares fit of its smoothing parameters.

use thiserror::Error;

pub mod smoothing;

pub use smoothing::{fit_holt, sum_squared_errors, HoltFit, HoltLinear, HoltParams};

/// Errors that can occur in forecasting calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for forecasting math operations
pub type Result<T> = std::result::Result<T, MathError>;
