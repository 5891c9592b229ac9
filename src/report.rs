//! Whole-study analysis: validated configuration in, report bundle out.
//!
//! Every component runs on the same validated [`Sample`] and none depends on
//! another's output, so each slot of the [`TimeStudyReport`] is filled (or
//! marked insufficient) independently.

use std::num::NonZeroUsize;

use crate::capability::{process_capability, CapabilityIndices, SpecLimits};
use crate::confidence::{confidence_interval, ConfidenceInterval, ConfidenceLevel};
use crate::descriptive::{summarize, SummaryStatistics};
use crate::distribution::{histogram, Histogram, DEFAULT_BUCKET_COUNT};
use crate::error::ConfigError;
use crate::estimate::Estimate;
use crate::outlier::{detect_outliers, OutlierReport};
use crate::sample::Sample;
use crate::spc::{individuals_chart, IndividualsChart};

/// Validated analysis configuration.
///
/// # Examples
///
/// ```
/// use u_timestudy::capability::SpecLimits;
/// use u_timestudy::confidence::ConfidenceLevel;
/// use u_timestudy::report::AnalysisConfig;
///
/// let config = AnalysisConfig::new(SpecLimits::new(0.0, 30.0).unwrap())
///     .with_confidence_level(ConfidenceLevel::P99)
///     .with_bucket_count(8)
///     .unwrap();
/// assert_eq!(config.bucket_count(), 8);
/// assert!(AnalysisConfig::new(SpecLimits::new(0.0, 30.0).unwrap())
///     .with_bucket_count(0)
///     .is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisConfig {
    confidence_level: ConfidenceLevel,
    spec_limits: SpecLimits,
    bucket_count: NonZeroUsize,
}

impl AnalysisConfig {
    /// Configuration with 95% confidence and 10 histogram buckets.
    pub fn new(spec_limits: SpecLimits) -> Self {
        Self {
            confidence_level: ConfidenceLevel::default(),
            spec_limits,
            bucket_count: DEFAULT_BUCKET_COUNT,
        }
    }

    /// Sets the confidence level.
    pub fn with_confidence_level(mut self, level: ConfidenceLevel) -> Self {
        self.confidence_level = level;
        self
    }

    /// Sets the histogram bucket count.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidBucketCount`] if `bucket_count` is zero.
    pub fn with_bucket_count(mut self, bucket_count: usize) -> Result<Self, ConfigError> {
        self.bucket_count =
            NonZeroUsize::new(bucket_count).ok_or(ConfigError::InvalidBucketCount(bucket_count))?;
        Ok(self)
    }

    /// Confidence level for the interval on the mean.
    pub fn confidence_level(&self) -> ConfidenceLevel {
        self.confidence_level
    }

    /// Specification limits for capability.
    pub fn spec_limits(&self) -> &SpecLimits {
        &self.spec_limits
    }

    /// Histogram bucket count.
    pub fn bucket_count(&self) -> usize {
        self.bucket_count.get()
    }

    /// Histogram bucket count as the validated non-zero value.
    pub fn buckets(&self) -> NonZeroUsize {
        self.bucket_count
    }
}

/// Loose option bag as supplied by a host application.
///
/// Converted to [`AnalysisConfig`] with `try_from`, which validates each
/// field and rejects out-of-range values instead of coercing them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct AnalysisOptions {
    /// One of 0.90, 0.95, 0.99.
    pub confidence_level: f64,
    /// Lower specification limit.
    pub lsl: f64,
    /// Upper specification limit.
    pub usl: f64,
    /// Nominal duration for Cpm; midpoint when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub target: Option<f64>,
    /// Histogram buckets.
    #[cfg_attr(feature = "serde", serde(default = "default_bucket_count"))]
    pub bucket_count: usize,
}

#[cfg(feature = "serde")]
fn default_bucket_count() -> usize {
    DEFAULT_BUCKET_COUNT.get()
}

impl TryFrom<AnalysisOptions> for AnalysisConfig {
    type Error = ConfigError;

    fn try_from(options: AnalysisOptions) -> Result<Self, Self::Error> {
        let confidence_level = ConfidenceLevel::try_from(options.confidence_level)?;
        let mut spec_limits = SpecLimits::new(options.lsl, options.usl)?;
        if let Some(target) = options.target {
            spec_limits = spec_limits.with_target(target)?;
        }
        AnalysisConfig::new(spec_limits)
            .with_confidence_level(confidence_level)
            .with_bucket_count(options.bucket_count)
    }
}

/// Results of every analysis component for one sample.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeStudyReport {
    /// Valid durations analysed.
    pub sample_size: usize,
    /// Raw entries dropped by validation.
    pub discarded: usize,
    /// Descriptive summary.
    pub summary: Estimate<SummaryStatistics>,
    /// Interval on the mean.
    pub confidence_interval: Estimate<ConfidenceInterval>,
    /// Capability against the spec limits.
    pub process_capability: Estimate<CapabilityIndices>,
    /// I-MR chart limits (order-sensitive).
    pub control_limits: Estimate<IndividualsChart>,
    /// Frequency distribution.
    pub histogram: Estimate<Histogram>,
    /// IQR outlier flags.
    pub outliers: Estimate<OutlierReport>,
}

/// Validates raw durations and runs every component.
///
/// # Examples
///
/// ```
/// use u_timestudy::capability::SpecLimits;
/// use u_timestudy::report::{analyze, AnalysisConfig};
///
/// let config = AnalysisConfig::new(SpecLimits::new(0.0, 15.0).unwrap());
/// let report = analyze([5.0, 6.0, f64::NAN, 7.0, 8.0, -1.0, 9.0, 10.0, 50.0], &config);
///
/// assert_eq!(report.sample_size, 7);
/// assert_eq!(report.discarded, 2);
/// let outliers = report.outliers.available().unwrap();
/// assert_eq!(outliers.values(), vec![50.0]);
/// ```
pub fn analyze<I>(durations: I, config: &AnalysisConfig) -> TimeStudyReport
where
    I: IntoIterator<Item = f64>,
{
    analyze_sample(&Sample::from_values(durations), config)
}

/// Validates the option bag, then runs [`analyze`].
///
/// # Errors
///
/// Returns the first invalid configuration field; no statistics are computed.
///
/// # Examples
///
/// ```
/// use u_timestudy::report::{analyze_with_options, AnalysisOptions};
///
/// let options = AnalysisOptions {
///     confidence_level: 0.95,
///     lsl: 5.0,
///     usl: 5.0,
///     target: None,
///     bucket_count: 10,
/// };
/// let err = analyze_with_options([1.0, 2.0], options).unwrap_err();
/// assert_eq!(err.field(), "spec_limits");
/// ```
pub fn analyze_with_options<I>(
    durations: I,
    options: AnalysisOptions,
) -> Result<TimeStudyReport, ConfigError>
where
    I: IntoIterator<Item = f64>,
{
    let config = AnalysisConfig::try_from(options).map_err(|err| {
        tracing::debug!(field = err.field(), %err, "rejected analysis options");
        err
    })?;
    Ok(analyze(durations, &config))
}

/// Runs every component on an already validated sample.
pub fn analyze_sample(sample: &Sample, config: &AnalysisConfig) -> TimeStudyReport {
    tracing::debug!(
        retained = sample.len(),
        discarded = sample.discarded(),
        confidence = config.confidence_level().probability(),
        bucket_count = config.bucket_count(),
        "analyzing time-study sample"
    );

    TimeStudyReport {
        sample_size: sample.len(),
        discarded: sample.discarded(),
        summary: logged("summary", summarize(sample)),
        confidence_interval: logged(
            "confidence_interval",
            confidence_interval(sample, config.confidence_level()),
        ),
        process_capability: logged(
            "process_capability",
            process_capability(sample, config.spec_limits()),
        ),
        control_limits: logged("control_limits", individuals_chart(sample)),
        histogram: logged("histogram", histogram(sample, config.buckets())),
        outliers: logged("outliers", detect_outliers(sample)),
    }
}

fn logged<T>(component: &'static str, estimate: Estimate<T>) -> Estimate<T> {
    if let Estimate::Insufficient(shortfall) = &estimate {
        tracing::debug!(component, %shortfall, "component unavailable");
    }
    estimate
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn reordering_only_changes_control_limits(
            data in proptest::collection::vec(0.5_f64..100.0, 2..=40)
        ) {
            let c = AnalysisConfig::new(SpecLimits::new(0.0, 120.0).expect("valid"));
            let mut sorted = data.clone();
            sorted.sort_by(f64::total_cmp);
            let a = analyze(data.iter().copied(), &c);
            let b = analyze(sorted.iter().copied(), &c);

            prop_assert_eq!(a.summary, b.summary);
            prop_assert_eq!(a.confidence_interval, b.confidence_interval);
            prop_assert_eq!(a.process_capability, b.process_capability);
            prop_assert_eq!(a.histogram, b.histogram);

            let (oa, ob) = (a.outliers.into_option().expect("n>=2"), b.outliers.into_option().expect("n>=2"));
            prop_assert_eq!(oa.q1, ob.q1);
            prop_assert_eq!(oa.median, ob.median);
            prop_assert_eq!(oa.q3, ob.q3);
            let (mut va, mut vb) = (oa.values(), ob.values());
            va.sort_by(f64::total_cmp);
            vb.sort_by(f64::total_cmp);
            prop_assert_eq!(va, vb);
        }

        #[test]
        fn analysis_is_deterministic(
            data in proptest::collection::vec(-10.0_f64..100.0, 0..=40),
            buckets in 1_usize..=15,
        ) {
            let c = AnalysisConfig::new(SpecLimits::new(1.0, 50.0).expect("valid"))
                .with_bucket_count(buckets)
                .expect("buckets >= 1");
            prop_assert_eq!(analyze(data.iter().copied(), &c), analyze(data.iter().copied(), &c));
        }
    }
}
