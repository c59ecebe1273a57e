//! Per-genre yearly time series over the fixed analysis window

use crate::aggregate::Period;
use crate::data::MovieRecord;
use crate::genre::{Genre, Metric};
use crate::utils::nan_mean;
use indexmap::IndexMap;
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

pub const WINDOW_START: i32 = 2000;
pub const WINDOW_END: i32 = 2021;

/// The default analysis window, 2000 to 2021
pub fn default_window() -> Period {
    Period::new(WINDOW_START, WINDOW_END)
}

/// Keep only records whose year falls inside `window`
pub fn filter_window(records: &[MovieRecord], window: Period) -> Vec<MovieRecord> {
    records
        .iter()
        .filter(|record| window.contains(record.year))
        .cloned()
        .collect()
}

/// Mean of one metric per year for one genre.
///
/// Holds only the years that had usable observations. [`YearlySeries::values`]
/// gives the dense view over the whole window, with missing years at 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlySeries {
    pub genre: Genre,
    pub metric: Metric,
    pub window: Period,
    observed: BTreeMap<i32, f64>,
}

impl YearlySeries {
    /// Per-year means for the years that had observations, ascending
    pub fn observed(&self) -> &BTreeMap<i32, f64> {
        &self.observed
    }

    /// Length of the series before reindexing onto the window
    pub fn observed_len(&self) -> usize {
        self.observed.len()
    }

    /// Dense `year -> mean` mapping over the window, missing years at 0
    pub fn reindexed(&self) -> BTreeMap<i32, f64> {
        self.window
            .years()
            .map(|year| (year, self.value_at(year)))
            .collect()
    }

    /// Dense values over the window in ascending year order
    pub fn values(&self) -> Vec<f64> {
        self.window.years().map(|year| self.value_at(year)).collect()
    }

    pub fn value_at(&self, year: i32) -> f64 {
        self.observed.get(&year).copied().unwrap_or(0.0)
    }
}

/// Build the yearly mean series of `metric` for one genre.
///
/// Records outside `window` are ignored. A year whose values are all NaN
/// carries no observation and is treated as missing.
pub fn build_yearly_series(
    records: &[MovieRecord],
    genre: Genre,
    metric: Metric,
    window: Period,
) -> YearlySeries {
    let mut by_year: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
    for record in records.iter().filter(|r| genre.matches(&r.genre)) {
        if let Some(year) = record.year.filter(|y| window.contains(Some(*y))) {
            by_year.entry(year).or_default().push(metric.value(record));
        }
    }

    let observed: BTreeMap<i32, f64> = by_year
        .into_iter()
        .map(|(year, values)| (year, nan_mean(values)))
        .filter(|(_, mean)| !mean.is_nan())
        .collect();

    debug!(
        "{} {:?}: {} observed years in {}",
        genre,
        metric,
        observed.len(),
        window
    );

    YearlySeries {
        genre,
        metric,
        window,
        observed,
    }
}

/// Yearly series of `metric` for every genre, in processing order
pub fn build_all_yearly_series(
    records: &[MovieRecord],
    metric: Metric,
    window: Period,
) -> IndexMap<Genre, YearlySeries> {
    Genre::ALL
        .iter()
        .map(|&genre| (genre, build_yearly_series(records, genre, metric, window)))
        .collect()
}
