//! The full batch: period summaries, yearly series, forecasts and winners

use crate::aggregate::{aggregate, PeriodStats};
use crate::charts::{forecast_chart, period_bar_chart, trend_chart, ChartSink};
use crate::config::AnalysisConfig;
use crate::data::MovieRecord;
use crate::error::Result;
use crate::forecast::{forecast_all, Forecasts};
use crate::genre::{Genre, Metric};
use crate::series::{build_all_yearly_series, filter_window, YearlySeries};
use crate::winner::select_winner;
use indexmap::IndexMap;
use log::info;
use serde::Serialize;

/// Everything one analysis run produced
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub periods: Vec<PeriodStats>,
    pub rating_forecasts: Forecasts,
    pub box_office_forecasts: Forecasts,
    pub rating_winner: Genre,
    pub box_office_winner: Genre,
    pub horizon: usize,
}

impl AnalysisReport {
    pub fn forecasts(&self, metric: Metric) -> &Forecasts {
        match metric {
            Metric::Rating => &self.rating_forecasts,
            Metric::BoxOffice => &self.box_office_forecasts,
        }
    }

    pub fn winner(&self, metric: Metric) -> Genre {
        match metric {
            Metric::Rating => self.rating_winner,
            Metric::BoxOffice => self.box_office_winner,
        }
    }

    /// The result line for one metric
    pub fn summary_line(&self, metric: Metric) -> String {
        format!(
            "The most preferred genre based on {} in the next {} years is predicted to be: {}",
            metric.description(),
            self.horizon,
            self.winner(metric)
        )
    }

    /// Rating line first, then box office
    pub fn summary_lines(&self) -> Vec<String> {
        Metric::ALL.iter().map(|&m| self.summary_line(m)).collect()
    }
}

/// Run the whole analysis over `records`, rendering charts into `sink`.
///
/// Fails with `EmptyInput` when no genre has enough history to forecast for
/// either metric.
pub fn run_analysis<S>(
    records: &[MovieRecord],
    config: &AnalysisConfig,
    sink: &mut S,
) -> Result<AnalysisReport>
where
    S: ChartSink + ?Sized,
{
    config.validate()?;

    let mut periods = Vec::with_capacity(config.periods.len());
    for period in &config.periods {
        let stats = aggregate(records, period.start, period.end);
        for metric in Metric::ALL {
            sink.render(&period_bar_chart(&stats, metric))?;
        }
        periods.push(stats);
    }
    info!("Summarised {} periods", periods.len());

    let in_window = filter_window(records, config.window);
    info!(
        "{} of {} records fall inside {}",
        in_window.len(),
        records.len(),
        config.window
    );

    let (rating_yearly, rating_forecasts) = project(&in_window, Metric::Rating, config)?;
    sink.render(&forecast_chart(&rating_forecasts, Metric::Rating, config.horizon))?;
    let (box_office_yearly, box_office_forecasts) =
        project(&in_window, Metric::BoxOffice, config)?;
    sink.render(&forecast_chart(
        &box_office_forecasts,
        Metric::BoxOffice,
        config.horizon,
    ))?;

    sink.render(&trend_chart(&rating_yearly, &rating_forecasts, Metric::Rating))?;
    sink.render(&trend_chart(
        &box_office_yearly,
        &box_office_forecasts,
        Metric::BoxOffice,
    ))?;

    let rating_winner = select_winner(&rating_forecasts)?;
    let box_office_winner = select_winner(&box_office_forecasts)?;

    Ok(AnalysisReport {
        periods,
        rating_forecasts,
        box_office_forecasts,
        rating_winner,
        box_office_winner,
        horizon: config.horizon,
    })
}

fn project(
    records: &[MovieRecord],
    metric: Metric,
    config: &AnalysisConfig,
) -> Result<(IndexMap<Genre, YearlySeries>, Forecasts)> {
    let yearly = build_all_yearly_series(records, metric, config.window);
    let projected = forecast_all(yearly.values(), config.horizon)?;
    info!(
        "Forecast {:?} for {} of {} genres",
        metric,
        projected.len(),
        yearly.len()
    );
    Ok((yearly, projected))
}
