//! Pick the genre with the highest final forecast

use crate::error::{Result, TrendError};
use crate::forecast::Forecasts;
use crate::genre::Genre;

/// Genre whose final projected value is highest.
///
/// Only a strictly greater value replaces the leader, so ties go to the
/// genre met first in the map's iteration order. A NaN final value never
/// beats a number.
pub fn select_winner(forecasts: &Forecasts) -> Result<Genre> {
    let mut best: Option<(Genre, f64)> = None;

    for (&genre, series) in forecasts {
        let Some(last) = series.last() else {
            continue;
        };
        best = match best {
            None => Some((genre, last)),
            Some((_, leader)) if last > leader || (leader.is_nan() && !last.is_nan()) => {
                Some((genre, last))
            }
            keep => keep,
        };
    }

    best.map(|(genre, _)| genre).ok_or_else(|| {
        TrendError::EmptyInput("No genre has enough history to be forecast".to_string())
    })
}
