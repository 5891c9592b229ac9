//! Configuration errors.
//!
//! Only caller mistakes in the analysis configuration are errors. Thin or
//! noisy data never is: invalid entries are dropped by [`Sample`] and
//! components without enough data report [`Estimate::Insufficient`].
//!
//! [`Sample`]: crate::sample::Sample
//! [`Estimate::Insufficient`]: crate::estimate::Estimate::Insufficient

use thiserror::Error;

/// An invalid analysis configuration field.
///
/// # Examples
///
/// ```
/// use u_timestudy::capability::SpecLimits;
/// use u_timestudy::error::ConfigError;
///
/// let err = SpecLimits::new(5.0, 5.0).unwrap_err();
/// assert_eq!(err.field(), "spec_limits");
/// assert!(matches!(err, ConfigError::InvertedSpecLimits { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Confidence level outside the supported set {0.90, 0.95, 0.99}.
    #[error("confidence_level must be one of 0.90, 0.95 or 0.99, got {0}")]
    UnsupportedConfidenceLevel(f64),

    /// A specification limit (or target) is NaN or infinite.
    #[error("spec_limits: {limit} must be finite, got {value}")]
    NonFiniteSpecLimit {
        /// Which limit: `"lsl"`, `"usl"` or `"target"`.
        limit: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// `LSL >= USL`.
    #[error("spec_limits: LSL ({lsl}) must be less than USL ({usl})")]
    InvertedSpecLimits {
        /// Lower specification limit.
        lsl: f64,
        /// Upper specification limit.
        usl: f64,
    },

    /// Histogram bucket count of zero.
    #[error("bucket_count must be at least 1, got {0}")]
    InvalidBucketCount(usize),
}

impl ConfigError {
    /// Name of the configuration field that was rejected.
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::UnsupportedConfidenceLevel(_) => "confidence_level",
            ConfigError::NonFiniteSpecLimit { .. } | ConfigError::InvertedSpecLimits { .. } => {
                "spec_limits"
            }
            ConfigError::InvalidBucketCount(_) => "bucket_count",
        }
    }
}
