use genre_forecast::data::MovieRecord;
use genre_forecast::genre::{Genre, Metric};
use genre_forecast::series::{
    build_all_yearly_series, build_yearly_series, default_window, filter_window,
};
use pretty_assertions::assert_eq;

fn sparse_records() -> Vec<MovieRecord> {
    vec![
        MovieRecord::new(1998, "Comedy", 9.0, 900.0),
        MovieRecord::new(2003, "Comedy", 6.0, 40.0),
        MovieRecord::new(2003, "Romantic Comedy", 8.0, 60.0),
        MovieRecord::new(2010, "Comedy", 7.0, 55.0),
        MovieRecord::new(2024, "Comedy", 1.0, 1.0),
    ]
}

#[test]
fn test_series_always_covers_the_window() {
    let records = filter_window(&sparse_records(), default_window());
    let series = build_yearly_series(&records, Genre::Comedy, Metric::Rating, default_window());

    let values = series.values();
    assert_eq!(values.len(), 22);
    assert_eq!(values[3], 7.0); // 2003
    assert_eq!(values[10], 7.0); // 2010
    assert_eq!(values[0], 0.0);
    assert_eq!(values[21], 0.0);

    let reindexed = series.reindexed();
    let years: Vec<i32> = reindexed.keys().copied().collect();
    assert_eq!(years, (2000..=2021).collect::<Vec<_>>());
    assert_eq!(reindexed[&2003], 7.0);
}

#[test]
fn test_observed_length_is_pre_reindex() {
    let records = filter_window(&sparse_records(), default_window());
    let series = build_yearly_series(&records, Genre::Comedy, Metric::BoxOffice, default_window());

    assert_eq!(series.observed_len(), 2);
    assert_eq!(series.observed().get(&2003), Some(&50.0));
    assert_eq!(series.observed().get(&2010), Some(&55.0));
}

#[test]
fn test_out_of_window_years_are_ignored() {
    let series = build_yearly_series(
        &sparse_records(),
        Genre::Comedy,
        Metric::Rating,
        default_window(),
    );
    assert_eq!(series.observed_len(), 2);
    assert!(series.observed().get(&1998).is_none());
}

#[test]
fn test_genre_without_movies_is_all_zero() {
    let series = build_yearly_series(&sparse_records(), Genre::Spy, Metric::Rating, default_window());
    assert_eq!(series.observed_len(), 0);
    assert_eq!(series.values(), vec![0.0; 22]);
}

#[test]
fn test_all_nan_year_counts_as_missing() {
    let records = vec![
        MovieRecord::new(2004, "Crime", f64::NAN, 10.0),
        MovieRecord::new(2005, "Crime", 6.0, 12.0),
    ];
    let series = build_yearly_series(&records, Genre::Crime, Metric::Rating, default_window());

    assert_eq!(series.observed_len(), 1);
    assert_eq!(series.value_at(2004), 0.0);
    assert_eq!(series.value_at(2005), 6.0);
}

#[test]
fn test_all_series_follow_processing_order() {
    let all = build_all_yearly_series(&sparse_records(), Metric::Rating, default_window());
    let genres: Vec<Genre> = all.keys().copied().collect();
    assert_eq!(genres, Genre::ALL.to_vec());
}

#[test]
fn test_filter_window_is_inclusive() {
    let filtered = filter_window(&sparse_records(), default_window());
    assert_eq!(filtered.len(), 3);
    assert!(filtered.iter().all(|r| matches!(r.year, Some(2000..=2021))));
}
