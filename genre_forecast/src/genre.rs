//! The closed set of genres and the metrics tracked for them

use crate::data::MovieRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// One of the 22 genre labels matched against a movie's free-text genre.
///
/// Ordering is lexicographic by label, so maps keyed by `Genre` iterate in
/// name order. [`Genre::ALL`] holds the processing order instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Romance,
    Action,
    Drama,
    Comedy,
    Family,
    Thriller,
    Musical,
    Mystery,
    Biography,
    Horror,
    Crime,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    War,
    Fantasy,
    History,
    Adventure,
    Epic,
    Period,
    Biographical,
    Sports,
    Spy,
    Dance,
}

impl Genre {
    /// Every genre, in processing order
    pub const ALL: [Genre; 22] = [
        Genre::Romance,
        Genre::Action,
        Genre::Drama,
        Genre::Comedy,
        Genre::Family,
        Genre::Thriller,
        Genre::Musical,
        Genre::Mystery,
        Genre::Biography,
        Genre::Horror,
        Genre::Crime,
        Genre::SciFi,
        Genre::War,
        Genre::Fantasy,
        Genre::History,
        Genre::Adventure,
        Genre::Epic,
        Genre::Period,
        Genre::Biographical,
        Genre::Sports,
        Genre::Spy,
        Genre::Dance,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Genre::Romance => "Romance",
            Genre::Action => "Action",
            Genre::Drama => "Drama",
            Genre::Comedy => "Comedy",
            Genre::Family => "Family",
            Genre::Thriller => "Thriller",
            Genre::Musical => "Musical",
            Genre::Mystery => "Mystery",
            Genre::Biography => "Biography",
            Genre::Horror => "Horror",
            Genre::Crime => "Crime",
            Genre::SciFi => "Sci-Fi",
            Genre::War => "War",
            Genre::Fantasy => "Fantasy",
            Genre::History => "History",
            Genre::Adventure => "Adventure",
            Genre::Epic => "Epic",
            Genre::Period => "Period",
            Genre::Biographical => "Biographical",
            Genre::Sports => "Sports",
            Genre::Spy => "Spy",
            Genre::Dance => "Dance",
        }
    }

    /// Case-insensitive substring test against a free-text genre field.
    ///
    /// Not a whole-word match: "War" also matches "Award".
    pub fn matches(self, genre_text: &str) -> bool {
        genre_text
            .to_lowercase()
            .contains(&self.label().to_lowercase())
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl PartialOrd for Genre {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Genre {
    fn cmp(&self, other: &Self) -> Ordering {
        self.label().cmp(other.label())
    }
}

/// The numeric field a statistic or series is computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Rating,
    BoxOffice,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Rating, Metric::BoxOffice];

    /// Extract this metric from a record
    pub fn value(self, record: &MovieRecord) -> f64 {
        match self {
            Metric::Rating => record.rating,
            Metric::BoxOffice => record.box_office,
        }
    }

    /// Phrase used in the result summary
    pub fn description(self) -> &'static str {
        match self {
            Metric::Rating => "average rating",
            Metric::BoxOffice => "box office collections",
        }
    }
}
