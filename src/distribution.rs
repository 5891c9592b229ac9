//! Equal-width frequency distribution of durations.
//!
//! # Examples
//!
//! ```
//! use std::num::NonZeroUsize;
//!
//! use u_timestudy::distribution::histogram;
//! use u_timestudy::sample::Sample;
//!
//! let sample = Sample::from_values([1.0, 2.0, 2.5, 3.0, 4.0, 5.0]);
//! let buckets = NonZeroUsize::new(4).unwrap();
//! let h = histogram(&sample, buckets).into_option().unwrap();
//! assert_eq!(h.bins.len(), 4);
//! assert_eq!(h.bins.iter().map(|b| b.count).sum::<usize>(), 6);
//! ```

use std::num::NonZeroUsize;

use crate::estimate::Estimate;
use crate::sample::Sample;

/// Default number of buckets.
pub const DEFAULT_BUCKET_COUNT: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => panic!("bucket count must be non-zero"),
};

/// One histogram bucket.
///
/// Buckets are half-open `[start, end)` except the last, which is closed so
/// that the sample maximum is counted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistogramBin {
    /// Lower edge (inclusive).
    pub start: f64,
    /// Upper edge (exclusive, inclusive for the last bin).
    pub end: f64,
    /// Observations in this bin.
    pub count: usize,
    /// `count / n`.
    pub frequency: f64,
}

/// Result of histogram binning.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Histogram {
    /// Bin width; `0` when every observation is identical.
    pub bin_width: f64,
    /// Bins in ascending order.
    pub bins: Vec<HistogramBin>,
}

/// Bins the sample into `bucket_count` equal-width buckets over `[min, max]`.
///
/// When every observation is identical a single bin `[v, v]` holding all of
/// them is returned regardless of `bucket_count`. A value lying exactly on an
/// interior edge goes to the bin it opens.
///
/// `bucket_count` is non-zero by type; raw counts are checked by
/// [`AnalysisConfig::with_bucket_count`](crate::report::AnalysisConfig::with_bucket_count).
///
/// Returns `Insufficient` for an empty sample.
pub fn histogram(sample: &Sample, bucket_count: NonZeroUsize) -> Estimate<Histogram> {
    let data = sample.values();
    let n = data.len();
    let (Some(min_val), Some(max_val)) = (
        data.iter().copied().reduce(f64::min),
        data.iter().copied().reduce(f64::max),
    ) else {
        return Estimate::too_few(1, 0);
    };
    let nf = n as f64;

    if max_val == min_val {
        return Estimate::Available(Histogram {
            bin_width: 0.0,
            bins: vec![HistogramBin {
                start: min_val,
                end: max_val,
                count: n,
                frequency: 1.0,
            }],
        });
    }

    let n_bins = bucket_count.get();
    let bin_width = (max_val - min_val) / n_bins as f64;

    // Compute edges; pin the last one to max so rounding cannot exclude it.
    let mut edges: Vec<f64> = (0..n_bins)
        .map(|i| min_val + i as f64 * bin_width)
        .collect();
    edges.push(max_val);

    let mut counts = vec![0_usize; n_bins];
    for &x in data {
        counts[bin_index(&edges, x)] += 1;
    }

    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: edges[i],
            end: edges[i + 1],
            count,
            frequency: count as f64 / nf,
        })
        .collect();

    Estimate::Available(Histogram { bin_width, bins })
}

/// Bin holding `x`, judged against the emitted edges rather than the raw
/// division so boundary values land where the edges say they do.
fn bin_index(edges: &[f64], x: f64) -> usize {
    let n_bins = edges.len() - 1;
    let width = edges[1] - edges[0];
    let mut bin = (((x - edges[0]) / width).floor().max(0.0) as usize).min(n_bins - 1);
    while bin > 0 && x < edges[bin] {
        bin -= 1;
    }
    while bin + 1 < n_bins && x >= edges[bin + 1] {
        bin += 1;
    }
    bin
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn counts_sum_to_n(
            data in proptest::collection::vec(0.01_f64..1e3, 1..=100),
            bucket_count in 1_usize..=40,
        ) {
            let buckets = NonZeroUsize::new(bucket_count).expect("range starts at 1");
            let h = histogram(&Sample::from_values(data.iter().copied()), buckets)
                .into_option()
                .expect("non-empty");
            let total: usize = h.bins.iter().map(|b| b.count).sum();
            prop_assert_eq!(total, data.len());
        }

        #[test]
        fn values_fall_inside_their_bin(
            data in proptest::collection::vec(0.01_f64..1e3, 2..=60),
            bucket_count in 1_usize..=20,
        ) {
            let buckets = NonZeroUsize::new(bucket_count).expect("range starts at 1");
            let h = histogram(&Sample::from_values(data.iter().copied()), buckets)
                .into_option()
                .expect("non-empty");
            if h.bins.len() > 1 {
                let last = h.bins.len() - 1;
                let edges: Vec<f64> = h.bins.iter().map(|b| b.start).chain([h.bins[last].end]).collect();
                for &x in &data {
                    let i = bin_index(&edges, x);
                    prop_assert!(x >= h.bins[i].start);
                    prop_assert!(x < h.bins[i].end || (i == last && x <= h.bins[i].end));
                }
            }
        }
    }
}
