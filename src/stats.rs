use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Stats {
    pub min: i64,
    pub max: i64,
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub median: f64,
    pub frequencies: BTreeMap<i64, u64>,
}

impl Stats {
    pub fn compute(data: &[i64]) -> Option<Stats> {
        if data.is_empty() {
            return None;
        }
        let min = *data.iter().min().expect("data length is nonzero");
        let max = *data.iter().max().expect("data length is nonzero");
        let sum: i128 = data.iter().map(|&value| value as i128).sum();
        let mean = sum as f64 / data.len() as f64;

        // population variance, denominator n
        let variance = data
            .iter()
            .map(|value| (mean - (*value as f64)).powf(2.))
            .sum::<f64>()
            / (data.len() as f64);

        let mut frequencies = BTreeMap::new();
        for &value in data {
            *frequencies.entry(value).or_insert(0) += 1;
        }

        Some(Stats {
            min,
            max,
            mean,
            variance,
            std_dev: variance.sqrt(),
            median: median(data),
            frequencies,
        })
    }

    /// Frequency table scaled to percent of the sample size.
    pub fn percentages(&self) -> BTreeMap<i64, f64> {
        let total: u64 = self.frequencies.values().sum();
        self.frequencies
            .iter()
            .map(|(&value, &count)| (value, count as f64 / total as f64 * 100.))
            .collect()
    }
}

fn median(data: &[i64]) -> f64 {
    let mut sorted = data.to_vec();
    sorted.sort_unstable();
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2] as f64
    } else {
        (sorted[n / 2 - 1] as f64 + sorted[n / 2] as f64) / 2.
    }
}
