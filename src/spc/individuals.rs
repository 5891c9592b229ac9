//! Individuals (I) and moving-range (MR) chart limits for a time-ordered
//! series of element durations.
//!
//! Each plotted point is one measured cycle, so process variation is
//! estimated from the average moving range of consecutive observations.
//!
//! # Control Chart Factors
//!
//! E2 and D4 for subgroup size 2 are sourced from ASTM E2587.
//!
//! # References
//!
//! - Montgomery, D.C. (2019). *Introduction to Statistical Quality Control*, 8th ed.,
//!   Chapter 6: Control Charts for Variables.
//! - ASTM E2587 — Standard Practice for Use of Control Charts

use u_numflow::stats;

use super::chart::ControlLimits;
use crate::estimate::Estimate;
use crate::sample::Sample;

/// E2 factor for the individuals chart, `3 / d2` with `d2 = 1.128` (n = 2).
pub const E2: f64 = 2.660;

/// D4 factor for the moving-range chart upper limit (n = 2).
pub const D4_MR: f64 = 3.267;

/// Limits and supporting series of an I-MR chart.
///
/// # Examples
///
/// ```
/// use u_timestudy::sample::Sample;
/// use u_timestudy::spc::individuals_chart;
///
/// let chart = individuals_chart(&Sample::from_values([1.0, 2.0])).into_option().unwrap();
/// assert!((chart.mr_bar - 1.0).abs() < 1e-12);
/// assert!((chart.limits.cl - 1.5).abs() < 1e-12);
/// assert!((chart.limits.ucl - 4.16).abs() < 1e-12);
/// assert_eq!(chart.limits.lcl, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndividualsChart {
    /// Individuals chart limits (center line is the sample mean).
    pub limits: ControlLimits,
    /// Moving-range chart limits.
    pub mr_limits: ControlLimits,
    /// Average moving range.
    pub mr_bar: f64,
    /// `|x[i] - x[i-1]|` for `i = 1..n`.
    pub moving_ranges: Vec<f64>,
    /// Zero-based indices of observations outside the individuals limits.
    pub out_of_control: Vec<usize>,
}

/// Computes I-MR chart limits from the sample in its recorded order.
///
/// The individuals LCL is clamped at zero: a duration cannot be negative, so
/// a negative limit carries no information. This is a domain clamp, not part
/// of the Shewhart construction.
///
/// Returns `Insufficient` when fewer than 2 observations are available (no
/// moving range can be formed).
pub fn individuals_chart(sample: &Sample) -> Estimate<IndividualsChart> {
    let observations = sample.values();
    if observations.len() < 2 {
        return Estimate::too_few(2, observations.len());
    }

    let moving_ranges: Vec<f64> = observations
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .collect();

    let (Some(x_bar), Some(mr_bar)) = (stats::mean(observations), stats::mean(&moving_ranges))
    else {
        return Estimate::too_few(2, observations.len());
    };

    let limits = ControlLimits {
        ucl: x_bar + E2 * mr_bar,
        cl: x_bar,
        lcl: (x_bar - E2 * mr_bar).max(0.0),
    };

    // MR chart LCL is always 0 for n=2.
    let mr_limits = ControlLimits {
        ucl: D4_MR * mr_bar,
        cl: mr_bar,
        lcl: 0.0,
    };

    let out_of_control = observations
        .iter()
        .enumerate()
        .filter(|&(_, &x)| limits.is_beyond(x))
        .map(|(i, _)| i)
        .collect();

    Estimate::Available(IndividualsChart {
        limits,
        mr_limits,
        mr_bar,
        moving_ranges,
        out_of_control,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn limits_are_ordered_and_non_negative(
            data in proptest::collection::vec(0.01_f64..1e3, 2..=60)
        ) {
            let c = individuals_chart(&Sample::from_values(data)).into_option().expect("n >= 2");
            prop_assert!(c.limits.lcl >= 0.0);
            prop_assert!(c.limits.lcl <= c.limits.cl);
            prop_assert!(c.limits.cl <= c.limits.ucl);
            prop_assert!(c.moving_ranges.iter().all(|mr| *mr >= 0.0));
        }
    }
}
