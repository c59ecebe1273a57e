//! Per-genre statistics over an inclusive range of years

use crate::data::MovieRecord;
use crate::genre::Genre;
use crate::utils::nan_mean;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;

/// Inclusive `[start, end]` range of years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    pub start: i32,
    pub end: i32,
}

impl Period {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Records without a readable year never fall inside a period
    pub fn contains(&self, year: Option<i32>) -> bool {
        matches!(year, Some(y) if self.start <= y && y <= self.end)
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.start..=self.end
    }

    /// Number of years covered; zero for a reversed period
    pub fn len(&self) -> usize {
        usize::try_from(self.end - self.start + 1).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Mean rating, mean box office and movie count per genre for one period.
///
/// Maps iterate in genre name order. A genre without matching movies has a
/// count of 0 and NaN means.
#[derive(Debug, Clone, Serialize)]
pub struct PeriodStats {
    pub period: Period,
    pub ratings: BTreeMap<Genre, f64>,
    pub box_office: BTreeMap<Genre, f64>,
    pub counts: BTreeMap<Genre, usize>,
}

impl PeriodStats {
    pub fn mean_rating(&self, genre: Genre) -> f64 {
        self.ratings.get(&genre).copied().unwrap_or(f64::NAN)
    }

    pub fn mean_box_office(&self, genre: Genre) -> f64 {
        self.box_office.get(&genre).copied().unwrap_or(f64::NAN)
    }

    pub fn count(&self, genre: Genre) -> usize {
        self.counts.get(&genre).copied().unwrap_or(0)
    }
}

/// Aggregate ratings, box office and counts for each genre over
/// `start_year..=end_year`.
///
/// A record counts towards every genre whose label appears in its genre text.
pub fn aggregate(records: &[MovieRecord], start_year: i32, end_year: i32) -> PeriodStats {
    let period = Period::new(start_year, end_year);
    let in_period: Vec<&MovieRecord> = records
        .iter()
        .filter(|record| period.contains(record.year))
        .collect();

    let mut ratings = BTreeMap::new();
    let mut box_office = BTreeMap::new();
    let mut counts = BTreeMap::new();

    for genre in Genre::ALL {
        let matching: Vec<&MovieRecord> = in_period
            .iter()
            .copied()
            .filter(|record| genre.matches(&record.genre))
            .collect();

        ratings.insert(genre, nan_mean(matching.iter().map(|r| r.rating)));
        box_office.insert(genre, nan_mean(matching.iter().map(|r| r.box_office)));
        counts.insert(genre, matching.len());
    }

    debug!(
        "Aggregated {} of {} records for {}",
        in_period.len(),
        records.len(),
        period
    );

    PeriodStats {
        period,
        ratings,
        box_office,
        counts,
    }
}
