//! Chart descriptions and the sinks that render them
//!
//! Builders turn statistics and forecasts into [`Chart`] values; a
//! [`ChartSink`] decides what rendering means. The analysis code never
//! touches a display directly.

use crate::aggregate::PeriodStats;
use crate::error::Result;
use crate::forecast::Forecasts;
use crate::genre::{Genre, Metric};
use crate::series::YearlySeries;
use indexmap::IndexMap;
use log::info;
use serde::Serialize;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

const RATING_AXIS: &str = "Average Rating";
const BOX_OFFICE_AXIS: &str = "Average Box Office Collection (INR in Crores)";

/// One bar of a bar chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// One line of a line chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub label: String,
    pub points: Vec<(i32, f64)>,
    pub style: LineStyle,
    pub markers: bool,
}

/// A chart ready to be handed to a sink
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Chart {
    Bar {
        title: String,
        x_label: String,
        y_label: String,
        color: String,
        bars: Vec<Bar>,
    },
    Line {
        title: String,
        x_label: String,
        y_label: String,
        x_ticks: Vec<i32>,
        series: Vec<LineSeries>,
    },
}

impl Chart {
    pub fn title(&self) -> &str {
        match self {
            Chart::Bar { title, .. } | Chart::Line { title, .. } => title,
        }
    }
}

/// Destination for rendered charts
pub trait ChartSink {
    fn render(&mut self, chart: &Chart) -> Result<()>;
}

/// Keeps every chart in memory
#[derive(Debug, Default)]
pub struct MemoryChartSink {
    pub charts: Vec<Chart>,
}

impl MemoryChartSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChartSink for MemoryChartSink {
    fn render(&mut self, chart: &Chart) -> Result<()> {
        self.charts.push(chart.clone());
        Ok(())
    }
}

/// Writes each chart as a pretty-printed JSON document named after its title
#[derive(Debug)]
pub struct JsonChartSink {
    output_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl JsonChartSink {
    /// Create the sink, creating `output_dir` if needed
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Result<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        fs::create_dir_all(&output_dir)?;
        Ok(Self {
            output_dir,
            written: Vec::new(),
        })
    }

    /// Files written so far, in render order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ChartSink for JsonChartSink {
    fn render(&mut self, chart: &Chart) -> Result<()> {
        let path = self
            .output_dir
            .join(format!("{}.json", slugify(chart.title())));
        let writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(writer, chart)?;

        info!("Wrote chart '{}' to {}", chart.title(), path.display());
        self.written.push(path);
        Ok(())
    }
}

/// Lowercase alphanumerics with single dashes between words
pub fn slugify(title: &str) -> String {
    title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

fn metric_axis(metric: Metric) -> &'static str {
    match metric {
        Metric::Rating => RATING_AXIS,
        Metric::BoxOffice => BOX_OFFICE_AXIS,
    }
}

/// Bar chart of one metric per genre, labelled with movie counts
pub fn period_bar_chart(stats: &PeriodStats, metric: Metric) -> Chart {
    let (values, title, color) = match metric {
        Metric::Rating => (&stats.ratings, "Average Rating", "skyblue"),
        Metric::BoxOffice => (
            &stats.box_office,
            "Average Box Office Collection",
            "lightgreen",
        ),
    };

    let bars = values
        .iter()
        .map(|(genre, &value)| Bar {
            label: format!("{} ({} movies)", genre, stats.count(*genre)),
            value,
        })
        .collect();

    Chart::Bar {
        title: format!("{} for Each Genre from {}", title, stats.period),
        x_label: "Genre".to_string(),
        y_label: metric_axis(metric).to_string(),
        color: color.to_string(),
        bars,
    }
}

fn forecast_years(forecasts: &Forecasts) -> Vec<i32> {
    let start = forecasts.values().map(|f| f.start_year).min();
    let end = forecasts
        .values()
        .map(|f| f.start_year + f.horizon() as i32 - 1)
        .max();
    match (start, end) {
        (Some(start), Some(end)) => (start..=end).collect(),
        _ => Vec::new(),
    }
}

/// Forecast lines only, one per genre with markers
pub fn forecast_chart(forecasts: &Forecasts, metric: Metric, horizon: usize) -> Chart {
    let x_ticks = forecast_years(forecasts);
    let span = match (x_ticks.first(), x_ticks.last()) {
        (Some(first), Some(last)) => format!(" ({}-{})", first, last),
        _ => String::new(),
    };
    let (subject, y_label) = match metric {
        Metric::Rating => ("Average Rating", "Predicted Average Rating"),
        Metric::BoxOffice => (
            "Box Office Collections",
            "Predicted Box Office Collection (INR in Crores)",
        ),
    };

    let series = forecasts
        .iter()
        .map(|(genre, forecast)| LineSeries {
            label: genre.to_string(),
            points: forecast.points(),
            style: LineStyle::Solid,
            markers: true,
        })
        .collect();

    Chart::Line {
        title: format!(
            "Genre Preference Prediction ({}) for the Next {} Years{}",
            subject, horizon, span
        ),
        x_label: "Year".to_string(),
        y_label: y_label.to_string(),
        x_ticks,
        series,
    }
}

/// Observed yearly means as solid lines followed by dashed forecasts
pub fn trend_chart(
    yearly: &IndexMap<Genre, YearlySeries>,
    forecasts: &Forecasts,
    metric: Metric,
) -> Chart {
    let mut series: Vec<LineSeries> = yearly
        .iter()
        .map(|(genre, s)| LineSeries {
            label: genre.to_string(),
            points: s.observed().iter().map(|(&y, &v)| (y, v)).collect(),
            style: LineStyle::Solid,
            markers: false,
        })
        .collect();
    series.extend(forecasts.iter().map(|(genre, forecast)| LineSeries {
        label: format!("{} (forecast)", genre),
        points: forecast.points(),
        style: LineStyle::Dashed,
        markers: false,
    }));

    let first = yearly.values().map(|s| s.window.start).min();
    let last = forecast_years(forecasts)
        .last()
        .copied()
        .or_else(|| yearly.values().map(|s| s.window.end).max());
    let x_ticks: Vec<i32> = match (first, last) {
        (Some(first), Some(last)) => (first..=last).collect(),
        _ => Vec::new(),
    };

    let (subject, y_label) = match metric {
        Metric::Rating => ("Average Rating", "Average Rating"),
        Metric::BoxOffice => (
            "Box Office Collection",
            "Box Office Collection (INR in Crores)",
        ),
    };
    let span = match (x_ticks.first(), x_ticks.last()) {
        (Some(first), Some(last)) => format!(" ({}-{})", first, last),
        _ => String::new(),
    };

    Chart::Line {
        title: format!("Trend Line for {}{}", subject, span),
        x_label: "Year".to_string(),
        y_label: y_label.to_string(),
        x_ticks,
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(
            slugify("Trend Line for Average Rating (2000-2025)"),
            "trend-line-for-average-rating-2000-2025"
        );
        assert_eq!(slugify("  Box  Office!! "), "box-office");
    }
}
