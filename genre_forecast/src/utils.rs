//! Utility functions for the genre_forecast crate

use crate::data::MovieRecord;
use crate::error::{Result, TrendError};
use crate::genre::Genre;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use statrs::statistics::Statistics;

/// Arithmetic mean that skips NaN cells; NaN when nothing is left
pub fn nan_mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().filter(|v| !v.is_nan()).mean()
}

/// Generate reproducible movie records for demos and tests.
///
/// Each record carries one to three genre labels joined by ", ", a year in
/// 2000..=2021, a rating around 6.5 and a positive box-office figure.
pub fn synthetic_records(count: usize, seed: u64) -> Result<Vec<MovieRecord>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let rating_dist = Normal::new(6.5, 1.2)
        .map_err(|e| TrendError::InvalidParameter(format!("Rating distribution: {}", e)))?;
    let box_office_dist = Normal::new(60.0, 35.0)
        .map_err(|e| TrendError::InvalidParameter(format!("Box office distribution: {}", e)))?;

    let records = (0..count)
        .map(|_| {
            let label_count = rng.gen_range(1..=3);
            let genre = Genre::ALL
                .choose_multiple(&mut rng, label_count)
                .map(|g| g.label())
                .collect::<Vec<_>>()
                .join(", ");
            let rating: f64 = rating_dist.sample(&mut rng);
            let box_office: f64 = box_office_dist.sample(&mut rng);

            MovieRecord::new(
                rng.gen_range(2000..=2021),
                &genre,
                rating.clamp(1.0, 10.0),
                box_office.abs(),
            )
        })
        .collect();

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_mean() {
        assert_eq!(nan_mean(vec![7.0, 6.0]), 6.5);
        assert_eq!(nan_mean(vec![f64::NAN, 4.0]), 4.0);
        assert!(nan_mean(Vec::new()).is_nan());
        assert!(nan_mean(vec![f64::NAN]).is_nan());
    }

    #[test]
    fn test_synthetic_records_are_reproducible() {
        let first = synthetic_records(50, 7).unwrap();
        let second = synthetic_records(50, 7).unwrap();
        assert_eq!(first, second);
        assert!(first
            .iter()
            .all(|r| matches!(r.year, Some(2000..=2021)) && r.box_office >= 0.0));
    }
}
