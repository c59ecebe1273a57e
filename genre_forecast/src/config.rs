//! Analysis configuration

use crate::aggregate::Period;
use crate::error::{Result, TrendError};
use crate::forecast::DEFAULT_HORIZON;
use crate::series::default_window;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Inputs, periods and forecast settings for one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// CSV file holding the movie table
    pub input_path: PathBuf,
    /// Directory charts and CSV exports are written to
    pub output_dir: PathBuf,
    /// Periods summarised with bar charts, in chart order
    pub periods: Vec<Period>,
    /// Years covered by the yearly series
    pub window: Period,
    /// Number of years projected past the window
    pub horizon: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("movie_data.csv"),
            output_dir: PathBuf::from("charts"),
            periods: vec![
                Period::new(2000, 2010),
                Period::new(2011, 2021),
                Period::new(2000, 2021),
            ],
            window: default_window(),
            horizon: DEFAULT_HORIZON,
        }
    }
}

impl AnalysisConfig {
    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    pub fn with_periods(mut self, periods: Vec<Period>) -> Self {
        self.periods = periods;
        self
    }

    pub fn with_window(mut self, window: Period) -> Self {
        self.window = window;
        self
    }

    /// Check the settings before any data is touched
    pub fn validate(&self) -> Result<()> {
        if self.horizon == 0 {
            return Err(TrendError::InvalidParameter(
                "Forecast horizon must be greater than zero".to_string(),
            ));
        }
        if self.window.is_empty() {
            return Err(TrendError::InvalidParameter(format!(
                "Analysis window {} is empty",
                self.window
            )));
        }
        if let Some(period) = self.periods.iter().find(|p| p.is_empty()) {
            return Err(TrendError::InvalidParameter(format!(
                "Period {} ends before it starts",
                period
            )));
        }
        Ok(())
    }
}
