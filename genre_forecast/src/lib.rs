//! # Genre Forecast
//!
//! Descriptive statistics and short-horizon forecasts of movie genre
//! popularity, measured by average rating and box-office collection.
//!
//! ## Features
//!
//! - CSV loading of the movie table with lenient type coercion
//! - Per-genre means and counts over any inclusive range of years
//! - Per-genre yearly series over a fixed window, missing years at zero
//! - Holt linear smoothing forecasts for genres with enough history
//! - Winner selection on the final forecast year
//! - Chart descriptions rendered through a pluggable [`ChartSink`]
//!
//! ## Quick Start
//!
//! ```rust
//! use genre_forecast::aggregate::aggregate;
//! use genre_forecast::data::MovieRecord;
//! use genre_forecast::genre::Genre;
//!
//! let records = vec![
//!     MovieRecord::new(2005, "Action Thriller", 7.0, 100.0),
//!     MovieRecord::new(2005, "Drama", 8.0, 50.0),
//!     MovieRecord::new(2006, "Action", 6.0, 80.0),
//! ];
//!
//! let stats = aggregate(&records, 2000, 2010);
//! assert_eq!(stats.count(Genre::Action), 2);
//! assert_eq!(stats.mean_rating(Genre::Action), 6.5);
//! assert!(stats.mean_rating(Genre::Horror).is_nan());
//! ```

pub mod aggregate;
pub mod analysis;
pub mod charts;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod forecast;
pub mod genre;
pub mod series;
pub mod utils;
pub mod winner;

// Re-export commonly used types
pub use crate::aggregate::{aggregate, Period, PeriodStats};
pub use crate::analysis::{run_analysis, AnalysisReport};
pub use crate::charts::{Chart, ChartSink, JsonChartSink, MemoryChartSink};
pub use crate::config::AnalysisConfig;
pub use crate::data::{DataLoader, MovieRecord};
pub use crate::error::{Result, TrendError};
pub use crate::forecast::{forecast, forecast_all, ForecastSeries, Forecasts, DEFAULT_HORIZON};
pub use crate::genre::{Genre, Metric};
pub use crate::series::{build_yearly_series, filter_window, YearlySeries};
pub use crate::winner::select_winner;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
