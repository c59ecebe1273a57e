use genre_forecast::charts::JsonChartSink;
use genre_forecast::export::{period_file_name, write_period_stats_csv};
use genre_forecast::{run_analysis, AnalysisConfig, DataLoader};
use log::info;
use std::fs::File;
use std::io::BufWriter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AnalysisConfig::default();
    config.validate()?;

    let records = DataLoader::from_csv(&config.input_path)?;
    let mut sink = JsonChartSink::new(&config.output_dir)?;
    let report = run_analysis(&records, &config, &mut sink)?;

    for stats in &report.periods {
        let path = config.output_dir.join(period_file_name(stats));
        write_period_stats_csv(stats, BufWriter::new(File::create(&path)?))?;
        info!("Wrote period summary to {}", path.display());
    }
    info!("Wrote {} charts to {}", sink.written().len(), config.output_dir.display());

    for line in report.summary_lines() {
        println!("{}", line);
    }

    Ok(())
}
