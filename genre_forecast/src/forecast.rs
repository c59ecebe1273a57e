//! Short-horizon genre forecasts with Holt's linear smoothing

use crate::error::{Result, TrendError};
use crate::genre::Genre;
use crate::series::YearlySeries;
use genre_math::{fit_holt, HoltParams};
use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

/// Number of future years projected by default
pub const DEFAULT_HORIZON: usize = 4;

/// Observed years a genre needs before it is forecast
pub const MIN_OBSERVED_YEARS: usize = 3;

/// Projected values for the years right after the analysis window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSeries {
    /// Year of the first projected value
    pub start_year: i32,
    pub values: Vec<f64>,
    /// Smoothing parameters the projection came from, when fitted
    pub fit: Option<HoltParams>,
}

impl ForecastSeries {
    pub fn new(start_year: i32, values: Vec<f64>) -> Self {
        Self {
            start_year,
            values,
            fit: None,
        }
    }

    pub fn with_fit(mut self, params: HoltParams) -> Self {
        self.fit = Some(params);
        self
    }

    pub fn horizon(&self) -> usize {
        self.values.len()
    }

    /// Value for the final projected year
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// `(year, value)` pairs in ascending year order
    pub fn points(&self) -> Vec<(i32, f64)> {
        (self.start_year..)
            .zip(self.values.iter().copied())
            .collect()
    }
}

/// Forecasts keyed by genre, in the order the genres were processed
pub type Forecasts = IndexMap<Genre, ForecastSeries>;

/// Fit the dense yearly series and project `horizon` years past the window.
///
/// Returns `Ok(None)` when the genre has too few observed years; such a genre
/// is left out of the forecasts rather than reported as an error.
pub fn forecast(series: &YearlySeries, horizon: usize) -> Result<Option<ForecastSeries>> {
    if horizon == 0 {
        return Err(TrendError::InvalidParameter(
            "Forecast horizon must be greater than zero".to_string(),
        ));
    }
    if series.observed_len() < MIN_OBSERVED_YEARS {
        debug!(
            "Skipping {} {:?}: only {} observed years",
            series.genre,
            series.metric,
            series.observed_len()
        );
        return Ok(None);
    }

    let fit = fit_holt(&series.values())?;
    let values = fit.forecast(horizon)?;
    debug!(
        "{} {:?}: alpha={:.4} beta={:.4} sse={:.4}",
        series.genre, series.metric, fit.params.alpha, fit.params.beta, fit.params.sse
    );

    Ok(Some(
        ForecastSeries::new(series.window.end + 1, values).with_fit(fit.params),
    ))
}

/// Forecast every qualifying series, keeping the input order
pub fn forecast_all<'a, I>(series: I, horizon: usize) -> Result<Forecasts>
where
    I: IntoIterator<Item = &'a YearlySeries>,
{
    let mut forecasts = Forecasts::new();
    for s in series {
        if let Some(projection) = forecast(s, horizon)? {
            forecasts.insert(s.genre, projection);
        }
    }
    Ok(forecasts)
}
