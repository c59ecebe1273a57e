//! CSV export of period statistics

use crate::aggregate::PeriodStats;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct PeriodRow<'a> {
    genre: &'a str,
    mean_rating: f64,
    mean_box_office: f64,
    count: usize,
}

/// Write one row per genre, in genre name order, with a header.
///
/// Genres without movies are written with `NaN` means.
pub fn write_period_stats_csv<W: Write>(stats: &PeriodStats, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (genre, &count) in &stats.counts {
        csv_writer.serialize(PeriodRow {
            genre: genre.label(),
            mean_rating: stats.mean_rating(*genre),
            mean_box_office: stats.mean_box_office(*genre),
            count,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// File name used for a period's export, e.g. `period_2000_2010.csv`
pub fn period_file_name(stats: &PeriodStats) -> String {
    format!("period_{}_{}.csv", stats.period.start, stats.period.end)
}
