//! Confidence interval on the mean duration.
//!
//! Time studies rarely collect more than a few dozen cycles, so the interval
//! uses Student's t critical value `t(α/2, n-1)` instead of the normal z.
//!
//! # References
//!
//! - Montgomery & Runger (2018), *Applied Statistics and Probability for
//!   Engineers*, 7th ed., Appendix Table V.

use u_numflow::stats;

use crate::error::ConfigError;
use crate::estimate::Estimate;
use crate::sample::Sample;

/// Largest degrees of freedom served from [`T_TABLE`]. From `df = 31` on the
/// normal z value is used; at `df = 30` the tabled t exceeds z by under 4%
/// (at 99%) and the gap keeps shrinking.
pub const T_TABLE_MAX_DF: usize = 30;

/// Two-tailed Student-t critical values for df = 1..=30, columns 90/95/99%.
const T_TABLE: [[f64; 3]; T_TABLE_MAX_DF] = [
    [6.314, 12.706, 63.657],
    [2.920, 4.303, 9.925],
    [2.353, 3.182, 5.841],
    [2.132, 2.776, 4.604],
    [2.015, 2.571, 4.032],
    [1.943, 2.447, 3.707],
    [1.895, 2.365, 3.499],
    [1.860, 2.306, 3.355],
    [1.833, 2.262, 3.250],
    [1.812, 2.228, 3.169],
    [1.796, 2.201, 3.106],
    [1.782, 2.179, 3.055],
    [1.771, 2.160, 3.012],
    [1.761, 2.145, 2.977],
    [1.753, 2.131, 2.947],
    [1.746, 2.120, 2.921],
    [1.740, 2.110, 2.898],
    [1.734, 2.101, 2.878],
    [1.729, 2.093, 2.861],
    [1.725, 2.086, 2.845],
    [1.721, 2.080, 2.831],
    [1.717, 2.074, 2.819],
    [1.714, 2.069, 2.807],
    [1.711, 2.064, 2.797],
    [1.708, 2.060, 2.787],
    [1.706, 2.056, 2.779],
    [1.703, 2.052, 2.771],
    [1.701, 2.048, 2.763],
    [1.699, 2.045, 2.756],
    [1.697, 2.042, 2.750],
];

/// Two-tailed standard normal critical values, columns 90/95/99%.
const Z_CRITICAL: [f64; 3] = [1.645, 1.960, 2.576];

/// Supported two-sided confidence levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfidenceLevel {
    /// 90% confidence.
    P90,
    /// 95% confidence.
    #[default]
    P95,
    /// 99% confidence.
    P99,
}

impl ConfidenceLevel {
    /// The level as a probability (e.g. `0.95`).
    pub fn probability(self) -> f64 {
        match self {
            ConfidenceLevel::P90 => 0.90,
            ConfidenceLevel::P95 => 0.95,
            ConfidenceLevel::P99 => 0.99,
        }
    }

    fn column(self) -> usize {
        match self {
            ConfidenceLevel::P90 => 0,
            ConfidenceLevel::P95 => 1,
            ConfidenceLevel::P99 => 2,
        }
    }

    /// Two-tailed critical value for `df` degrees of freedom.
    ///
    /// Returns `None` for `df = 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_timestudy::confidence::ConfidenceLevel;
    ///
    /// assert_eq!(ConfidenceLevel::P95.t_critical(1), Some(12.706));
    /// assert_eq!(ConfidenceLevel::P95.t_critical(30), Some(2.042));
    /// assert_eq!(ConfidenceLevel::P95.t_critical(120), Some(1.960));
    /// assert_eq!(ConfidenceLevel::P95.t_critical(0), None);
    /// ```
    pub fn t_critical(self, df: usize) -> Option<f64> {
        match df {
            0 => None,
            1..=T_TABLE_MAX_DF => Some(T_TABLE[df - 1][self.column()]),
            _ => Some(Z_CRITICAL[self.column()]),
        }
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = ConfigError;

    /// Accepts exactly 0.90, 0.95 or 0.99; nothing is rounded to the nearest
    /// supported level.
    fn try_from(p: f64) -> Result<Self, Self::Error> {
        const TOL: f64 = 1e-9;
        [ConfidenceLevel::P90, ConfidenceLevel::P95, ConfidenceLevel::P99]
            .into_iter()
            .find(|level| (level.probability() - p).abs() < TOL)
            .ok_or(ConfigError::UnsupportedConfidenceLevel(p))
    }
}

/// Two-sided interval on the population mean.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfidenceInterval {
    /// Level the interval was built at.
    pub level: ConfidenceLevel,
    /// Sample mean (interval center).
    pub mean: f64,
    /// `mean - margin`.
    pub lower: f64,
    /// `mean + margin`.
    pub upper: f64,
    /// Half-width, `t_critical * std_error`.
    pub margin: f64,
    /// Standard error of the mean, `s / sqrt(n)`.
    pub std_error: f64,
    /// Degrees of freedom, `n - 1`.
    pub df: usize,
    /// Critical value used.
    pub t_critical: f64,
}

/// Computes the t-based confidence interval on the mean.
///
/// Returns `Insufficient` when `n < 2`.
///
/// # Examples
///
/// ```
/// use u_timestudy::confidence::{confidence_interval, ConfidenceLevel};
/// use u_timestudy::sample::Sample;
///
/// let sample = Sample::from_values([1.0, 2.0]);
/// let ci = confidence_interval(&sample, ConfidenceLevel::P95).into_option().unwrap();
/// assert_eq!(ci.df, 1);
/// assert!((ci.margin - 6.353).abs() < 1e-9);
/// ```
pub fn confidence_interval(sample: &Sample, level: ConfidenceLevel) -> Estimate<ConfidenceInterval> {
    let sorted = sample.sorted_values();
    let data = sorted.as_slice();
    let n = data.len();
    let (Some(mean), Some(std_dev)) = (stats::mean(data), stats::std_dev(data)) else {
        return Estimate::too_few(2, n);
    };
    let df = n - 1;
    let Some(t_critical) = level.t_critical(df) else {
        return Estimate::too_few(2, n);
    };

    let std_error = std_dev / (n as f64).sqrt();
    let margin = t_critical * std_error;

    Estimate::Available(ConfidenceInterval {
        level,
        mean,
        lower: mean - margin,
        upper: mean + margin,
        margin,
        std_error,
        df,
        t_critical,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::Shortfall;

    #[test]
    fn try_from_accepts_supported_levels() {
        assert_eq!(ConfidenceLevel::try_from(0.90), Ok(ConfidenceLevel::P90));
        assert_eq!(ConfidenceLevel::try_from(0.95), Ok(ConfidenceLevel::P95));
        assert_eq!(ConfidenceLevel::try_from(0.99), Ok(ConfidenceLevel::P99));
    }

    #[test]
    fn try_from_rejects_other_levels() {
        for p in [0.0, 0.8, 0.949, 0.975, 1.0, 95.0, f64::NAN] {
            let err = ConfidenceLevel::try_from(p).unwrap_err();
            assert_eq!(err.field(), "confidence_level");
        }
    }

    #[test]
    fn table_matches_textbook_rows() {
        assert_eq!(ConfidenceLevel::P90.t_critical(1), Some(6.314));
        assert_eq!(ConfidenceLevel::P99.t_critical(1), Some(63.657));
        assert_eq!(ConfidenceLevel::P95.t_critical(9), Some(2.262));
        assert_eq!(ConfidenceLevel::P99.t_critical(20), Some(2.845));
        assert_eq!(ConfidenceLevel::P90.t_critical(30), Some(1.697));
    }

    #[test]
    fn large_df_uses_z() {
        assert_eq!(ConfidenceLevel::P90.t_critical(31), Some(1.645));
        assert_eq!(ConfidenceLevel::P95.t_critical(1000), Some(1.960));
        assert_eq!(ConfidenceLevel::P99.t_critical(31), Some(2.576));
    }

    #[test]
    fn critical_values_decrease_with_df() {
        for level in [ConfidenceLevel::P90, ConfidenceLevel::P95, ConfidenceLevel::P99] {
            for df in 1..=T_TABLE_MAX_DF {
                let here = level.t_critical(df).expect("df > 0");
                let next = level.t_critical(df + 1).expect("df > 0");
                assert!(next < here, "{level:?} df={df}: {next} >= {here}");
            }
        }
    }

    #[test]
    fn wider_level_gives_wider_interval() {
        let sample = Sample::from_values([10.2, 9.8, 10.5, 10.1, 9.7, 10.0]);
        let m90 = confidence_interval(&sample, ConfidenceLevel::P90)
            .into_option()
            .expect("n=6")
            .margin;
        let m95 = confidence_interval(&sample, ConfidenceLevel::P95)
            .into_option()
            .expect("n=6")
            .margin;
        let m99 = confidence_interval(&sample, ConfidenceLevel::P99)
            .into_option()
            .expect("n=6")
            .margin;
        assert!(m90 < m95 && m95 < m99);
    }

    /// n = 5, mean = 3, s = sqrt(2.5), t(0.025, 4) = 2.776.
    #[test]
    fn textbook_interval() {
        let sample = Sample::from_values([1.0, 2.0, 3.0, 4.0, 5.0]);
        let ci = confidence_interval(&sample, ConfidenceLevel::P95)
            .into_option()
            .expect("n=5");
        let expected_margin = 2.776 * 2.5_f64.sqrt() / 5.0_f64.sqrt();
        assert!((ci.mean - 3.0).abs() < 1e-12);
        assert!((ci.margin - expected_margin).abs() < 1e-12);
        assert!((ci.lower - (3.0 - expected_margin)).abs() < 1e-12);
        assert!((ci.upper - (3.0 + expected_margin)).abs() < 1e-12);
        assert_eq!(ci.df, 4);
    }

    #[test]
    fn constant_sample_has_zero_margin() {
        let sample = Sample::from_values([10.0, 10.0, 10.0, 10.0]);
        let ci = confidence_interval(&sample, ConfidenceLevel::P99)
            .into_option()
            .expect("n=4");
        assert_eq!(ci.margin, 0.0);
        assert_eq!(ci.lower, ci.upper);
    }

    #[test]
    fn fewer_than_two_is_insufficient() {
        for values in [vec![], vec![4.0]] {
            let n = values.len();
            let e = confidence_interval(&Sample::from_values(values), ConfidenceLevel::P95);
            assert_eq!(
                e.shortfall(),
                Some(Shortfall::TooFewObservations {
                    needed: 2,
                    actual: n
                })
            );
        }
    }
}
