//! Customer specification limits.

use crate::error::ConfigError;

/// Two-sided specification limits on an element duration.
///
/// # Invariants
///
/// - `lsl` and `usl` are finite and `lsl < usl`.
/// - `target`, when set, is finite.
///
/// # Examples
///
/// ```
/// use u_timestudy::capability::SpecLimits;
///
/// let limits = SpecLimits::new(9.0, 11.0).unwrap();
/// assert_eq!(limits.target(), 10.0);
///
/// assert!(SpecLimits::new(11.0, 9.0).is_err());
/// assert!(SpecLimits::new(5.0, 5.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpecLimits {
    lsl: f64,
    usl: f64,
    target: Option<f64>,
}

impl SpecLimits {
    /// Creates validated limits.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NonFiniteSpecLimit`] if either limit is NaN or infinite
    /// - [`ConfigError::InvertedSpecLimits`] if `lsl >= usl`
    pub fn new(lsl: f64, usl: f64) -> Result<Self, ConfigError> {
        if !lsl.is_finite() {
            return Err(ConfigError::NonFiniteSpecLimit {
                limit: "lsl",
                value: lsl,
            });
        }
        if !usl.is_finite() {
            return Err(ConfigError::NonFiniteSpecLimit {
                limit: "usl",
                value: usl,
            });
        }
        if lsl >= usl {
            return Err(ConfigError::InvertedSpecLimits { lsl, usl });
        }
        Ok(Self {
            lsl,
            usl,
            target: None,
        })
    }

    /// Sets the nominal duration used by Cpm.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NonFiniteSpecLimit`] if `target` is NaN or infinite.
    pub fn with_target(mut self, target: f64) -> Result<Self, ConfigError> {
        if !target.is_finite() {
            return Err(ConfigError::NonFiniteSpecLimit {
                limit: "target",
                value: target,
            });
        }
        self.target = Some(target);
        Ok(self)
    }

    /// Lower specification limit.
    pub fn lsl(&self) -> f64 {
        self.lsl
    }

    /// Upper specification limit.
    pub fn usl(&self) -> f64 {
        self.usl
    }

    /// Nominal duration; the midpoint of the limits unless set explicitly.
    pub fn target(&self) -> f64 {
        self.target.unwrap_or((self.lsl + self.usl) / 2.0)
    }

    /// `usl - lsl`.
    pub fn tolerance(&self) -> f64 {
        self.usl - self.lsl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_and_equal() {
        assert_eq!(
            SpecLimits::new(10.0, 5.0),
            Err(ConfigError::InvertedSpecLimits {
                lsl: 10.0,
                usl: 5.0
            })
        );
        assert!(SpecLimits::new(5.0, 5.0).is_err());
    }

    #[test]
    fn rejects_non_finite() {
        assert!(matches!(
            SpecLimits::new(f64::NAN, 1.0),
            Err(ConfigError::NonFiniteSpecLimit { limit: "lsl", .. })
        ));
        assert!(matches!(
            SpecLimits::new(0.0, f64::INFINITY),
            Err(ConfigError::NonFiniteSpecLimit { limit: "usl", .. })
        ));
        let limits = SpecLimits::new(0.0, 1.0).expect("valid");
        assert!(matches!(
            limits.with_target(f64::NAN),
            Err(ConfigError::NonFiniteSpecLimit {
                limit: "target",
                ..
            })
        ));
    }

    #[test]
    fn accepts_zero_lower_limit() {
        let limits = SpecLimits::new(0.0, 30.0).expect("valid");
        assert_eq!(limits.lsl(), 0.0);
        assert_eq!(limits.usl(), 30.0);
        assert_eq!(limits.tolerance(), 30.0);
    }

    #[test]
    fn explicit_target_overrides_midpoint() {
        let limits = SpecLimits::new(8.0, 12.0).expect("valid");
        assert_eq!(limits.target(), 10.0);
        let limits = limits.with_target(9.5).expect("finite");
        assert_eq!(limits.target(), 9.5);
    }
}
