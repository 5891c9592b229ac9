//! Tukey-fence outlier flagging.
//!
//! Quartiles use R-7 linear interpolation: for sorted `x[0..n]`,
//! `h = p(n-1)` and `Q(p) = x[⌊h⌋] + (h - ⌊h⌋)(x[⌊h⌋+1] - x[⌊h⌋])`.
//!
//! # References
//!
//! - Tukey (1977), *Exploratory Data Analysis*.
//! - Hyndman & Fan (1996), *The American Statistician* 50(4), pp. 361–365.

use u_numflow::stats;

use crate::estimate::Estimate;
use crate::sample::Sample;

/// Multiplier applied to the IQR to place the fences.
pub const IQR_FENCE_MULTIPLIER: f64 = 1.5;

/// Below this many observations quartiles are interpolated from too few
/// order statistics to be trusted.
pub const MIN_RELIABLE_OBSERVATIONS: usize = 4;

/// A flagged observation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutlierPoint {
    /// Zero-based position in the sample.
    pub index: usize,
    /// Observed duration.
    pub value: f64,
}

/// Quartiles, fences and flagged observations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutlierReport {
    /// 25th percentile.
    pub q1: f64,
    /// 50th percentile.
    pub median: f64,
    /// 75th percentile.
    pub q3: f64,
    /// `q3 - q1`.
    pub iqr: f64,
    /// `q1 - 1.5 * iqr`.
    pub lower_fence: f64,
    /// `q3 + 1.5 * iqr`.
    pub upper_fence: f64,
    /// Observations strictly outside the fences, in sample order.
    pub outliers: Vec<OutlierPoint>,
    /// Set when `n < 4`; flags are still reported but should not be relied on.
    pub low_confidence: bool,
}

impl OutlierReport {
    /// Flagged values in sample order.
    pub fn values(&self) -> Vec<f64> {
        self.outliers.iter().map(|o| o.value).collect()
    }
}

/// Flags observations outside `[Q1 - 1.5 IQR, Q3 + 1.5 IQR]`.
///
/// Returns `Insufficient` only for an empty sample.
///
/// # Examples
///
/// ```
/// use u_timestudy::outlier::detect_outliers;
/// use u_timestudy::sample::Sample;
///
/// let sample = Sample::from_values([5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 50.0]);
/// let report = detect_outliers(&sample).into_option().unwrap();
/// assert!((report.q1 - 6.5).abs() < 1e-12);
/// assert!((report.q3 - 9.5).abs() < 1e-12);
/// assert!((report.upper_fence - 14.0).abs() < 1e-12);
/// assert_eq!(report.values(), vec![50.0]);
/// assert_eq!(report.outliers[0].index, 6);
/// ```
pub fn detect_outliers(sample: &Sample) -> Estimate<OutlierReport> {
    let data = sample.values();
    let sorted = sample.sorted_values();
    let (Some(q1), Some(median), Some(q3)) = (
        stats::quantile_sorted(&sorted, 0.25),
        stats::quantile_sorted(&sorted, 0.5),
        stats::quantile_sorted(&sorted, 0.75),
    ) else {
        return Estimate::too_few(1, data.len());
    };

    let iqr = q3 - q1;
    let lower_fence = q1 - IQR_FENCE_MULTIPLIER * iqr;
    let upper_fence = q3 + IQR_FENCE_MULTIPLIER * iqr;

    let outliers = data
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v < lower_fence || v > upper_fence)
        .map(|(index, &value)| OutlierPoint { index, value })
        .collect();

    Estimate::Available(OutlierReport {
        q1,
        median,
        q3,
        iqr,
        lower_fence,
        upper_fence,
        outliers,
        low_confidence: data.len() < MIN_RELIABLE_OBSERVATIONS,
    })
}
