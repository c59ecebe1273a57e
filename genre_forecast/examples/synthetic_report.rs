use genre_forecast::utils::synthetic_records;
use genre_forecast::{run_analysis, AnalysisConfig, Chart, MemoryChartSink, Metric};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate a reproducible movie table
    let records = synthetic_records(2_000, 42)?;
    println!("Generated {} synthetic movies", records.len());

    let config = AnalysisConfig::default();
    let mut sink = MemoryChartSink::new();
    let report = run_analysis(&records, &config, &mut sink)?;

    for chart in &sink.charts {
        match chart {
            Chart::Bar { title, bars, .. } => println!("{} ({} bars)", title, bars.len()),
            Chart::Line { title, series, .. } => println!("{} ({} lines)", title, series.len()),
        }
    }

    for metric in Metric::ALL {
        println!("\nFinal-year forecasts ({}):", metric.description());
        for (genre, forecast) in report.forecasts(metric) {
            if let Some(last) = forecast.last() {
                println!("  {:<14} {:>10.2}", genre.label(), last);
            }
        }
    }

    println!();
    for line in report.summary_lines() {
        println!("{}", line);
    }

    Ok(())
}
