//! Error types for the genre_forecast crate

use genre_math::MathError;
use thiserror::Error;

/// Custom error types for the genre_forecast crate
#[derive(Debug, Error)]
pub enum TrendError {
    /// Error related to input data loading or shape
    #[error("Data error: {0}")]
    DataError(String),

    /// No genre qualified for the requested computation
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from the numeric kernels
    #[error("Math error: {0}")]
    Math(#[from] MathError),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from Polars operations
    #[error("Polars error: {0}")]
    PolarsError(String),

    /// Error writing chart documents
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Error writing CSV exports
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, TrendError>;

impl From<polars::prelude::PolarsError> for TrendError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        TrendError::PolarsError(err.to_string())
    }
}
