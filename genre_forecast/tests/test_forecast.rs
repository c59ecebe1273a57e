use approx::assert_abs_diff_eq;
use genre_forecast::data::MovieRecord;
use genre_forecast::error::TrendError;
use genre_forecast::forecast::{forecast, forecast_all, ForecastSeries, DEFAULT_HORIZON};
use genre_forecast::genre::{Genre, Metric};
use genre_forecast::series::{build_all_yearly_series, build_yearly_series, default_window};
use rstest::rstest;

fn records_in_years(genre: &str, years: &[i32]) -> Vec<MovieRecord> {
    years
        .iter()
        .map(|&year| MovieRecord::new(year, genre, 5.0 + 0.1 * (year - 2000) as f64, 10.0))
        .collect()
}

#[rstest]
#[case(&[], false)]
#[case(&[2001], false)]
#[case(&[2001, 2015], false)]
#[case(&[2001, 2015, 2020], true)]
#[case(&[2000, 2001, 2002, 2003], true)]
fn test_precondition_on_observed_years(#[case] years: &[i32], #[case] produced: bool) {
    let records = records_in_years("Musical", years);
    let series = build_yearly_series(&records, Genre::Musical, Metric::Rating, default_window());

    let result = forecast(&series, DEFAULT_HORIZON).unwrap();
    assert_eq!(result.is_some(), produced);
    if let Some(projection) = result {
        assert_eq!(projection.horizon(), DEFAULT_HORIZON);
        assert_eq!(projection.start_year, 2022);
    }
}

#[test]
fn test_linear_history_is_extended() {
    let years: Vec<i32> = (2000..=2021).collect();
    let records = records_in_years("Drama", &years);
    let series = build_yearly_series(&records, Genre::Drama, Metric::Rating, default_window());

    let projection = forecast(&series, 4).unwrap().unwrap();
    let expected = [7.2, 7.3, 7.4, 7.5];
    for (value, expected) in projection.values.iter().zip(expected) {
        assert_abs_diff_eq!(*value, expected, epsilon = 1e-6);
    }

    let years: Vec<i32> = projection.points().iter().map(|(y, _)| *y).collect();
    assert_eq!(years, vec![2022, 2023, 2024, 2025]);

    let fit = projection.fit.expect("fitted parameters recorded");
    assert!(fit.alpha > 0.0 && fit.alpha < 1.0);
    assert!(fit.beta > 0.0 && fit.beta < 1.0);
}

#[rstest]
#[case(1)]
#[case(4)]
#[case(7)]
fn test_horizon_controls_length(#[case] horizon: usize) {
    let records = records_in_years("Horror", &[2004, 2008, 2012, 2016]);
    let series = build_yearly_series(&records, Genre::Horror, Metric::BoxOffice, default_window());

    let projection = forecast(&series, horizon).unwrap().unwrap();
    assert_eq!(projection.values.len(), horizon);
    assert!(projection.values.iter().all(|v| v.is_finite()));
}

#[test]
fn test_zero_horizon_is_rejected() {
    let records = records_in_years("Horror", &[2004, 2008, 2012]);
    let series = build_yearly_series(&records, Genre::Horror, Metric::Rating, default_window());

    assert!(matches!(
        forecast(&series, 0),
        Err(TrendError::InvalidParameter(_))
    ));
}

#[test]
fn test_forecast_all_skips_short_histories_and_keeps_order() {
    let mut records = records_in_years("Spy", &[2002, 2009, 2017]);
    records.extend(records_in_years("Romance", &[2003, 2011, 2019, 2021]));
    records.extend(records_in_years("Dance", &[2010]));

    let yearly = build_all_yearly_series(&records, Metric::Rating, default_window());
    let forecasts = forecast_all(yearly.values(), DEFAULT_HORIZON).unwrap();

    let genres: Vec<Genre> = forecasts.keys().copied().collect();
    assert_eq!(genres, vec![Genre::Romance, Genre::Spy]);
}

#[test]
fn test_forecast_series_accessors() {
    let series = ForecastSeries::new(2022, vec![1.0, 2.0, 3.0]);
    assert_eq!(series.last(), Some(3.0));
    assert_eq!(series.points(), vec![(2022, 1.0), (2023, 2.0), (2024, 3.0)]);
    assert!(series.fit.is_none());
    assert_eq!(ForecastSeries::new(2022, Vec::new()).last(), None);
}
