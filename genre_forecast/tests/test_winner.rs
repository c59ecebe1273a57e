use genre_forecast::error::TrendError;
use genre_forecast::forecast::{ForecastSeries, Forecasts};
use genre_forecast::genre::Genre;
use genre_forecast::winner::select_winner;

fn forecasts(entries: Vec<(Genre, Vec<f64>)>) -> Forecasts {
    entries
        .into_iter()
        .map(|(genre, values)| (genre, ForecastSeries::new(2022, values)))
        .collect()
}

#[test]
fn test_highest_final_value_wins() {
    let map = forecasts(vec![
        (Genre::Drama, vec![7.9, 8.0, 8.1, 8.2]),
        (Genre::Horror, vec![9.5, 9.0, 8.5, 7.9]),
    ]);
    assert_eq!(select_winner(&map).unwrap(), Genre::Drama);
}

#[test]
fn test_only_final_period_is_compared() {
    let map = forecasts(vec![
        (Genre::Comedy, vec![100.0, 1.0]),
        (Genre::Family, vec![0.0, 2.0]),
    ]);
    assert_eq!(select_winner(&map).unwrap(), Genre::Family);
}

#[test]
fn test_ties_go_to_first_in_iteration_order() {
    let map = forecasts(vec![
        (Genre::Thriller, vec![5.0]),
        (Genre::Action, vec![5.0]),
    ]);
    assert_eq!(select_winner(&map).unwrap(), Genre::Thriller);

    let reversed = forecasts(vec![
        (Genre::Action, vec![5.0]),
        (Genre::Thriller, vec![5.0]),
    ]);
    assert_eq!(select_winner(&reversed).unwrap(), Genre::Action);
}

#[test]
fn test_nan_never_beats_a_number() {
    let map = forecasts(vec![
        (Genre::Epic, vec![f64::NAN]),
        (Genre::Period, vec![-3.0]),
    ]);
    assert_eq!(select_winner(&map).unwrap(), Genre::Period);
}

#[test]
fn test_empty_forecasts_fail() {
    let result = select_winner(&Forecasts::new());
    assert!(matches!(result, Err(TrendError::EmptyInput(_))));
}
