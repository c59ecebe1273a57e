use genre_forecast::data::{DataLoader, MovieRecord};
use genre_forecast::error::TrendError;
use std::io::Write;
use tempfile::NamedTempFile;

fn csv_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn test_data_loader_from_csv() {
    let file = csv_file(&[
        "Title,Year,Genre,Rating,BoxOfficeCollection",
        "Movie A,2005,Action Thriller,7.0,100",
        "Movie B,2005,Drama,8.0,50",
        "Movie C,2006,Action,6.0,80",
    ]);

    let records = DataLoader::from_csv(file.path()).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(
        records[0],
        MovieRecord::new(2005, "Action Thriller", 7.0, 100.0)
    );
    assert_eq!(records[2], MovieRecord::new(2006, "Action", 6.0, 80.0));
}

#[test]
fn test_bad_cells_become_missing_values() {
    let file = csv_file(&[
        "Year,Genre,Rating,BoxOfficeCollection",
        "2005,Drama,7.5,abc",
        "unknown,Comedy,N/A,20",
        "2010-05-01,Horror,6.0,",
    ]);

    let records = DataLoader::from_csv(file.path()).unwrap();
    assert_eq!(records.len(), 3);

    assert_eq!(records[0].year, Some(2005));
    assert_eq!(records[0].rating, 7.5);
    assert!(records[0].box_office.is_nan());

    assert_eq!(records[1].year, None);
    assert!(records[1].rating.is_nan());
    assert_eq!(records[1].box_office, 20.0);

    assert_eq!(records[2].year, Some(2010));
    assert_eq!(records[2].genre, "Horror");
    assert!(records[2].box_office.is_nan());
}

#[test]
fn test_missing_column_is_a_data_error() {
    let file = csv_file(&["Year,Genre,Rating", "2005,Drama,7.5"]);

    let result = DataLoader::from_csv(file.path());
    assert!(matches!(result, Err(TrendError::DataError(_))));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let result = DataLoader::from_csv("nonexistent_movie_data.csv");
    assert!(matches!(result, Err(TrendError::IoError(_))));
}
