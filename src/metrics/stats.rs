//! @ai:module:intent Descriptive statistics over duration samples
//! @ai:module:layer domain
//! @ai:module:public_api summarize
//! @ai:module:stateless true

use crate::error::{BenchError, Result};
use crate::metrics::types::{DurationSample, StatsSummary};
use std::cmp::Ordering;

/// @ai:intent Compute average, median, sample std dev, min and max
/// @ai:pre sample has at least 2 durations
/// @ai:effects pure
pub fn summarize(sample: &DurationSample) -> Result<StatsSummary> {
    let values = sample.as_slice();

    if values.len() < 2 {
        return Err(BenchError::InsufficientSampleSize { len: values.len() });
    }

    let mean = average(values);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(StatsSummary {
        // Summation rounding can push the mean of a constant sample past its bounds.
        average: mean.clamp(min, max),
        median: median(values),
        std_dev: std_dev(values, mean),
        min,
        max,
    })
}

/// @ai:intent Arithmetic mean
/// @ai:pre values is non-empty
/// @ai:effects pure
fn average(values: &[f64]) -> f64 {
    let (sum, count) = values
        .iter()
        .fold((0.0, 0u32), |(s, c), v| (s + v, c + 1));

    sum / count as f64
}

/// @ai:intent Middle value, or the mean of the two middle values for even lengths
/// @ai:pre values is non-empty
/// @ai:effects pure
fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mid = sorted.len() / 2;

    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// @ai:intent Bessel-corrected standard deviation
/// @ai:pre values has at least 2 elements
/// @ai:effects pure
fn std_dev(values: &[f64], mean: f64) -> f64 {
    let squares: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    (squares / (values.len() - 1) as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn assert_ordering(stats: &StatsSummary) {
        assert!(stats.min <= stats.median && stats.median <= stats.max);
        assert!(stats.min <= stats.average && stats.average <= stats.max);
    }

    #[test]
    fn test_summarize_five_points() {
        let sample = DurationSample::from(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let stats = summarize(&sample).unwrap();

        assert!(close(stats.average, 3.0));
        assert!(close(stats.median, 3.0));
        assert!(close(stats.min, 1.0));
        assert!(close(stats.max, 5.0));
        assert!(close(stats.std_dev, 2.5f64.sqrt()));
        assert!(close(stats.std_dev, 1.581139));
    }

    #[test]
    fn test_summarize_two_points() {
        let stats = summarize(&DurationSample::from(vec![2.0, 4.0])).unwrap();

        assert!(close(stats.average, 3.0));
        assert!(close(stats.median, 3.0));
        assert!(close(stats.std_dev, 1.414214));
        assert!(close(stats.min, 2.0));
        assert!(close(stats.max, 4.0));
    }

    #[test]
    fn test_median_of_unsorted_even_sample() {
        let stats = summarize(&DurationSample::from(vec![0.4, 0.1, 0.3, 0.2])).unwrap();
        assert!(close(stats.median, 0.25));
        assert!(close(stats.min, 0.1));
        assert!(close(stats.max, 0.4));
    }

    #[test]
    fn test_single_point_is_insufficient() {
        let err = summarize(&DurationSample::from(vec![1.0])).unwrap_err();
        assert!(matches!(err, BenchError::InsufficientSampleSize { len: 1 }));
    }

    #[test]
    fn test_empty_is_insufficient() {
        let err = summarize(&DurationSample::default()).unwrap_err();
        assert!(matches!(err, BenchError::InsufficientSampleSize { len: 0 }));
    }

    #[test]
    fn test_constant_sample_has_zero_spread() {
        let stats = summarize(&DurationSample::from(vec![0.7; 6])).unwrap();
        assert!(close(stats.std_dev, 0.0));
        assert_ordering(&stats);
    }

    #[test]
    fn test_summarize_is_deterministic() {
        let sample = DurationSample::from(vec![0.031, 0.029, 0.035, 0.030, 0.032]);
        assert_eq!(summarize(&sample).unwrap(), summarize(&sample).unwrap());
    }

    #[test]
    fn test_ordering_invariant_over_varied_samples() {
        let samples = [
            vec![0.5, 0.1],
            vec![3.0, 1.0, 2.0],
            vec![10.0, 0.001, 0.002, 0.003],
            vec![1e-9, 5.0, 5.0, 5.0, 5.0],
            vec![0.2, 0.2, 0.9, 0.1, 0.3, 0.25, 0.4],
        ];

        for values in samples {
            let stats = summarize(&DurationSample::from(values)).unwrap();
            assert_ordering(&stats);
        }
    }
}
