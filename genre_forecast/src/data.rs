//! Movie records and the CSV loader that produces them

use crate::error::{Result, TrendError};
use chrono::{Datelike, NaiveDate};
use log::{debug, info, warn};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

pub const YEAR_COLUMN: &str = "Year";
pub const GENRE_COLUMN: &str = "Genre";
pub const RATING_COLUMN: &str = "Rating";
pub const BOX_OFFICE_COLUMN: &str = "BoxOfficeCollection";

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d-%m-%Y", "%Y/%m/%d"];

/// One input row.
///
/// `year` is `None` when the cell was missing or could not be read as a
/// year; numeric cells that failed coercion hold `NaN`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub year: Option<i32>,
    pub genre: String,
    pub rating: f64,
    pub box_office: f64,
}

impl MovieRecord {
    pub fn new(year: i32, genre: &str, rating: f64, box_office: f64) -> Self {
        Self {
            year: Some(year),
            genre: genre.to_string(),
            rating,
            box_office,
        }
    }
}

/// Loader for the movie table
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load movie records from a CSV file with a header row
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<MovieRecord>> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let df = CsvReader::new(file)
            .infer_schema(None)
            .has_header(true)
            .finish()?;

        info!("Loaded {} rows from {}", df.height(), path.display());
        Self::from_dataframe(&df)
    }

    /// Convert an existing DataFrame into movie records
    pub fn from_dataframe(df: &DataFrame) -> Result<Vec<MovieRecord>> {
        let years = Self::year_column(df)?;
        let genres = Self::text_column(df, GENRE_COLUMN)?;
        let ratings = Self::numeric_column(df, RATING_COLUMN)?;
        let box_office = Self::numeric_column(df, BOX_OFFICE_COLUMN)?;

        let missing_years = years.iter().filter(|y| y.is_none()).count();
        if missing_years > 0 {
            warn!(
                "{} rows have a missing or unreadable {} and will be excluded from every period",
                missing_years, YEAR_COLUMN
            );
        }

        let records: Vec<MovieRecord> = years
            .into_iter()
            .zip(genres)
            .zip(ratings.into_iter().zip(box_office))
            .map(|((year, genre), (rating, box_office))| MovieRecord {
                year,
                genre,
                rating,
                box_office,
            })
            .collect();

        debug!("Converted {} rows into movie records", records.len());
        Ok(records)
    }

    fn column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Series> {
        df.column(name).map_err(|e| {
            TrendError::DataError(format!("Column '{}' not found: {}", name, e))
        })
    }

    /// Years may arrive as integers or as text (a bare year or a date)
    fn year_column(df: &DataFrame) -> Result<Vec<Option<i32>>> {
        let col = Self::column(df, YEAR_COLUMN)?;

        match col.dtype() {
            DataType::Utf8 => Ok(col
                .utf8()?
                .into_iter()
                .map(|cell| cell.and_then(parse_year))
                .collect()),
            _ => {
                let cast = col.cast(&DataType::Int64)?;
                let years = cast
                    .i64()?
                    .into_iter()
                    .map(|cell| cell.and_then(|year| i32::try_from(year).ok()))
                    .collect();
                Ok(years)
            }
        }
    }

    fn text_column(df: &DataFrame, name: &str) -> Result<Vec<String>> {
        let cast = Self::column(df, name)?.cast(&DataType::Utf8)?;
        let values = cast
            .utf8()?
            .into_iter()
            .map(|cell| cell.unwrap_or_default().to_string())
            .collect();
        Ok(values)
    }

    /// Non-strict cast; unparseable or empty cells become NaN
    fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
        let cast = Self::column(df, name)?.cast(&DataType::Float64)?;
        let values = cast
            .f64()?
            .into_iter()
            .map(|cell| cell.unwrap_or(f64::NAN))
            .collect();
        Ok(values)
    }
}

/// Read a year from a text cell: a bare 4-digit year or a full date
pub fn parse_year(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if trimmed.len() == 4 {
        if let Ok(year) = trimmed.parse::<i32>() {
            return Some(year);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .map(|date| date.year())
}
