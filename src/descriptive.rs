//! Descriptive summary of a duration sample.
//!
//! # References
//!
//! - Hyndman & Fan (1996), "Sample Quantiles in Statistical Packages",
//!   *The American Statistician* 50(4).

use u_numflow::stats;

use crate::estimate::Estimate;
use crate::sample::Sample;

/// Count, location and spread of a sample.
///
/// No rounding is applied; presentation rounding belongs to the caller.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummaryStatistics {
    /// Number of observations.
    pub count: usize,
    /// Sum of all observations.
    pub sum: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Middle value (average of the two middle values for even `count`).
    pub median: f64,
    /// Sample variance with Bessel's correction; `0` for a single observation.
    pub variance: f64,
    /// Sample standard deviation; `0` for a single observation.
    pub std_dev: f64,
    /// Smallest observation.
    pub min: f64,
    /// Largest observation.
    pub max: f64,
    /// `max - min`.
    pub range: f64,
    /// Coefficient of variation in percent, `100 * std_dev / mean`.
    pub cv: f64,
}

/// Summarizes a sample.
///
/// Returns `Insufficient` only for an empty sample. A single observation is
/// summarized with zero spread. Accumulation runs over the sorted durations,
/// so any permutation of the sample yields the same bits.
///
/// # Examples
///
/// ```
/// use u_timestudy::descriptive::summarize;
/// use u_timestudy::sample::Sample;
///
/// let sample = Sample::from_values([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
/// let s = summarize(&sample).into_option().unwrap();
/// assert_eq!(s.count, 8);
/// assert!((s.mean - 5.0).abs() < 1e-12);
/// assert!((s.median - 4.5).abs() < 1e-12);
/// assert!((s.std_dev - 2.138089935299395).abs() < 1e-10);
/// ```
pub fn summarize(sample: &Sample) -> Estimate<SummaryStatistics> {
    let sorted = sample.sorted_values();
    let data = sorted.as_slice();
    let (Some(mean), Some(median), Some(&min), Some(&max)) = (
        stats::mean(data),
        stats::median(data),
        data.first(),
        data.last(),
    ) else {
        return Estimate::too_few(1, data.len());
    };

    // A lone observation carries no observable variance.
    let variance = stats::variance(data).unwrap_or(0.0);
    let std_dev = variance.sqrt();
    let cv = if mean > 0.0 { std_dev / mean * 100.0 } else { 0.0 };

    Estimate::Available(SummaryStatistics {
        count: data.len(),
        sum: data.iter().sum(),
        mean,
        median,
        variance,
        std_dev,
        min,
        max,
        range: max - min,
        cv,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn location_within_bounds(
            data in proptest::collection::vec(0.01_f64..1e3, 1..=60)
        ) {
            let s = summarize(&Sample::from_values(data.iter().copied()))
                .into_option()
                .expect("non-empty");
            prop_assert!(s.min <= s.median && s.median <= s.max);
            prop_assert!(s.min <= s.mean + 1e-9 && s.mean <= s.max + 1e-9);
            prop_assert!(s.std_dev >= 0.0);
        }

        #[test]
        fn order_independent(
            data in proptest::collection::vec(0.01_f64..1e3, 1..=40)
        ) {
            let forward = summarize(&Sample::from_values(data.iter().copied()));
            let reversed = summarize(&Sample::from_values(data.iter().rev().copied()));
            let (f, r) = (forward.into_option().expect("f"), reversed.into_option().expect("r"));
            prop_assert_eq!(f.sum.to_bits(), r.sum.to_bits());
            prop_assert_eq!(f.mean.to_bits(), r.mean.to_bits());
            prop_assert_eq!(f.std_dev.to_bits(), r.std_dev.to_bits());
            prop_assert_eq!(f, r);
        }
    }
}
