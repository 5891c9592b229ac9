//! Process capability indices (Cp, Cpk, Cpu, Cpl, Cpm).
//!
//! A time study has no rational subgroups, so every index is scaled by the
//! overall sample standard deviation.
//!
//! # References
//!
//! - Montgomery (2019), *Introduction to Statistical Quality Control*, 8th ed.,
//!   Chapter 8.
//! - Kane (1986), "Process Capability Indices", *Journal of Quality Technology*
//!   18(1), pp. 41--52.
//! - Chan, Cheng & Spiring (1988), "A New Measure of Process Capability: Cpm",
//!   *Journal of Quality Technology* 20(3), pp. 162--175.

use u_numflow::stats;

use super::limits::SpecLimits;
use crate::estimate::{Estimate, Shortfall};
use crate::sample::Sample;

/// Minimum Cpk for a process to be judged capable.
///
/// Reference: Montgomery (2019), Chapter 8, Table 8.5.
pub const CAPABLE_CPK: f64 = 1.33;

/// Capability judgement derived from Cpk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CapabilityVerdict {
    /// `Cpk >= CAPABLE_CPK`.
    Capable,
    /// `Cpk < CAPABLE_CPK`.
    NotCapable,
}

impl CapabilityVerdict {
    /// Classifies a Cpk value against [`CAPABLE_CPK`].
    pub fn from_cpk(cpk: f64) -> Self {
        if cpk >= CAPABLE_CPK {
            CapabilityVerdict::Capable
        } else {
            CapabilityVerdict::NotCapable
        }
    }
}

/// Computed capability indices.
///
/// # Index interpretation
///
/// | Index | Value | Interpretation |
/// |-------|-------|----------------|
/// | Cp | >= 1.33 | Spread fits the tolerance |
/// | Cpk | >= 1.33 | Process is capable and centered |
/// | Cpm | >= 1.33 | Process meets Taguchi loss criterion |
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapabilityIndices {
    /// Cp = (USL - LSL) / (6 * s).
    pub cp: f64,
    /// Cpk = min(Cpu, Cpl).
    pub cpk: f64,
    /// Cpu = (USL - mean) / (3 * s).
    pub cpu: f64,
    /// Cpl = (mean - LSL) / (3 * s).
    pub cpl: f64,
    /// Cpm = Cp / sqrt(1 + ((mean - target) / s)^2).
    pub cpm: f64,
    /// Verdict from Cpk.
    pub verdict: CapabilityVerdict,
    /// Sample mean.
    pub mean: f64,
    /// Sample standard deviation.
    pub std_dev: f64,
}

/// Computes capability indices of the sample against `limits`.
///
/// # Returns
///
/// - `Insufficient(TooFewObservations)` if the sample has fewer than 2 values
/// - `Insufficient(ZeroSpread)` if every value is identical, since every
///   index would divide by zero
///
/// # Examples
///
/// ```
/// use u_timestudy::capability::{process_capability, CapabilityVerdict, SpecLimits};
/// use u_timestudy::sample::Sample;
///
/// let limits = SpecLimits::new(9.0, 11.0).unwrap();
/// let sample = Sample::from_values([9.5, 10.0, 10.2, 9.8, 10.1, 10.3, 9.9, 10.0]);
///
/// let indices = process_capability(&sample, &limits).into_option().unwrap();
/// assert!(indices.cp > 0.0);
/// assert_eq!(indices.cpk, indices.cpu.min(indices.cpl));
/// assert_eq!(indices.verdict, CapabilityVerdict::from_cpk(indices.cpk));
/// ```
pub fn process_capability(sample: &Sample, limits: &SpecLimits) -> Estimate<CapabilityIndices> {
    let sorted = sample.sorted_values();
    let data = sorted.as_slice();
    let (Some(x_bar), Some(sigma)) = (stats::mean(data), stats::std_dev(data)) else {
        return Estimate::too_few(2, data.len());
    };
    if sigma <= 0.0 {
        return Estimate::Insufficient(Shortfall::ZeroSpread);
    }
    Estimate::Available(compute_indices(limits, x_bar, sigma))
}

fn compute_indices(limits: &SpecLimits, x_bar: f64, sigma: f64) -> CapabilityIndices {
    let cp = limits.tolerance() / (6.0 * sigma);
    let cpu = (limits.usl() - x_bar) / (3.0 * sigma);
    let cpl = (x_bar - limits.lsl()) / (3.0 * sigma);
    let cpk = cpu.min(cpl);

    let deviation_ratio = (x_bar - limits.target()) / sigma;
    let cpm = cp / (1.0 + deviation_ratio * deviation_ratio).sqrt();

    CapabilityIndices {
        cp,
        cpk,
        cpu,
        cpl,
        cpm,
        verdict: CapabilityVerdict::from_cpk(cpk),
        mean: x_bar,
        std_dev: sigma,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn cpk_is_min_of_one_sided_indices(
            data in proptest::collection::vec(0.1_f64..100.0, 2..=40),
            lsl in 0.0_f64..50.0,
            width in 0.1_f64..100.0,
        ) {
            let spec = SpecLimits::new(lsl, lsl + width).expect("lsl < usl");
            if let Estimate::Available(c) = process_capability(&Sample::from_values(data), &spec) {
                prop_assert_eq!(c.cpk, c.cpu.min(c.cpl));
                prop_assert!(c.cpk <= c.cp + 1e-9);
                prop_assert!(c.cpm <= c.cp + 1e-12);
            }
        }
    }
}
