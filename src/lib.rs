//! # Genre Trends
//!
//! `genre_trends_workspace` bundles the genre statistics and forecasting
//! crates behind a single import.
//!
//! ## Example
//!
//! ```
//! use genre_trends_workspace::prelude::*;
//!
//! let records: Vec<MovieRecord> = (2000..=2021)
//!     .map(|year| MovieRecord::new(year, "Drama", 6.0 + 0.1 * (year - 2000) as f64, 50.0))
//!     .collect();
//!
//! let yearly = build_yearly_series(&records, Genre::Drama, Metric::Rating, default_window());
//! assert_eq!(yearly.values().len(), 22);
//!
//! let forecasts = forecast_all([&yearly], DEFAULT_HORIZON).unwrap();
//! assert_eq!(select_winner(&forecasts).unwrap(), Genre::Drama);
//! ```

pub use genre_forecast;
pub use genre_math;

/// The types and functions needed for a typical analysis
pub mod prelude {
    pub use genre_forecast::series::default_window;
    pub use genre_forecast::{
        aggregate, build_yearly_series, filter_window, forecast, forecast_all, run_analysis,
        select_winner, AnalysisConfig, AnalysisReport, Chart, ChartSink, DataLoader,
        ForecastSeries, Forecasts, Genre, JsonChartSink, MemoryChartSink, Metric, MovieRecord,
        Period, PeriodStats, TrendError, YearlySeries, DEFAULT_HORIZON,
    };
    pub use genre_math::{fit_holt, HoltParams};
}
