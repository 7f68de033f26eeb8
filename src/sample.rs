use std::cell::OnceCell;
use std::collections::BTreeMap;
use std::error;
use std::fmt;

use rand::rngs::OsRng;
use rand::{Rng, RngCore};

use crate::stats::Stats;

#[derive(Debug)]
pub enum Error {
    InvalidArgument(String),
    EntropyUnavailable(rand::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
            Error::EntropyUnavailable(source) => {
                write!(f, "no secure randomness source available: {}", source)
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::InvalidArgument(_) => None,
            Error::EntropyUnavailable(source) => Some(source),
        }
    }
}

/// A fixed sequence of random integers drawn uniformly from an inclusive
/// range, kept in draw order. Immutable once constructed; the derived
/// statistics are computed on first access and cached for the lifetime of
/// the sample.
#[derive(Debug)]
pub struct Sample {
    lower: i64,
    upper: i64,
    values: Vec<i64>,
    stats: OnceCell<Stats>,
}

impl Sample {
    /// Draws `count` independent values from `[lower, upper]` using the
    /// operating system's secure randomness source.
    pub fn draw(count: usize, lower: i64, upper: i64) -> Result<Sample, Error> {
        if count == 0 {
            return Err(Error::InvalidArgument(
                "count must be at least 1".to_string(),
            ));
        }
        if upper < lower {
            return Err(Error::InvalidArgument(format!(
                "upper bound {} is below lower bound {}",
                upper, lower
            )));
        }

        // Probe with a single byte so a missing entropy source surfaces as
        // an error here instead of a panic mid-draw.
        let mut probe = [0u8; 1];
        OsRng
            .try_fill_bytes(&mut probe)
            .map_err(Error::EntropyUnavailable)?;

        let values = (0..count)
            .map(|_| OsRng.gen_range(lower..=upper))
            .collect();
        Ok(Sample {
            lower,
            upper,
            values,
            stats: OnceCell::new(),
        })
    }

    pub fn count(&self) -> usize {
        self.values.len()
    }

    pub fn lower_bound(&self) -> i64 {
        self.lower
    }

    pub fn upper_bound(&self) -> i64 {
        self.upper
    }

    /// The drawn values, in draw order.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn stats(&self) -> &Stats {
        self.stats
            .get_or_init(|| Stats::compute(&self.values).expect("sample length is nonzero"))
    }

    pub fn mean(&self) -> f64 {
        self.stats().mean
    }

    /// Mean squared deviation from the mean, denominator `count`.
    pub fn population_variance(&self) -> f64 {
        self.stats().variance
    }

    pub fn population_std_dev(&self) -> f64 {
        self.stats().std_dev
    }

    pub fn median(&self) -> f64 {
        self.stats().median
    }

    /// Occurrences of each distinct value, ascending by value.
    pub fn frequencies(&self) -> &BTreeMap<i64, u64> {
        &self.stats().frequencies
    }

    pub fn frequency_percentages(&self) -> BTreeMap<i64, f64> {
        self.stats().percentages()
    }

    /// Standard deviation of a continuous uniform distribution over the
    /// range, `(upper - lower) / sqrt(12)`.
    pub fn uniform_std_dev(&self) -> f64 {
        (self.upper as f64 - self.lower as f64) / 12f64.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_count() {
        assert!(matches!(
            Sample::draw(0, 1, 10),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn rejects_inverted_bounds() {
        assert!(matches!(
            Sample::draw(3, 10, 1),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn degenerate_range_draws_the_only_value() {
        let sample = Sample::draw(1, 5, 5).unwrap();
        assert_eq!(sample.values(), [5]);
        assert_eq!(sample.population_variance(), 0.);
        assert_eq!(sample.median(), 5.);
    }

    #[test]
    fn negative_bounds_work() {
        let sample = Sample::draw(8, -20, -10).unwrap();
        assert_eq!(sample.count(), 8);
        assert!(sample.values().iter().all(|&v| (-20..=-10).contains(&v)));
    }

    #[test]
    fn repeated_accessors_return_identical_results() {
        let sample = Sample::draw(16, 1, 6).unwrap();
        let before = sample.values().to_vec();
        let first = sample.mean();
        let second = sample.mean();
        assert_eq!(first.to_bits(), second.to_bits());
        assert_eq!(sample.values(), &before[..]);
        // both reads hit the same cached table
        assert!(std::ptr::eq(sample.frequencies(), sample.frequencies()));
    }

    #[test]
    fn mean_matches_the_drawn_values() {
        let sample = Sample::draw(5, 1, 10).unwrap();
        let expected = sample.values().iter().sum::<i64>() as f64 / 5.;
        assert!((sample.mean() - expected).abs() < 1e-9);
    }

    #[test]
    fn uniform_std_dev_uses_the_range_width() {
        let sample = Sample::draw(1, 1, 13).unwrap();
        assert!((sample.uniform_std_dev() - 12. / 12f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = Sample::draw(0, 1, 10).unwrap_err();
        assert!(err.to_string().contains("count"));
        let err = Sample::draw(3, 10, 1).unwrap_err();
        assert!(err.to_string().contains("bound"));
    }
}
