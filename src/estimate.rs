//! Tagged per-component results.
//!
//! Every analysis component either produces its value or explains why the
//! sample could not support it. Callers match on both arms instead of
//! probing for missing fields.

/// Why a component produced no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shortfall {
    /// The sample has fewer observations than the component needs.
    TooFewObservations {
        /// Minimum sample size for this component.
        needed: usize,
        /// Observations actually available.
        actual: usize,
    },
    /// Every observation is identical, so no index scaled by the standard
    /// deviation is defined.
    ZeroSpread,
}

impl std::fmt::Display for Shortfall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shortfall::TooFewObservations { needed, actual } => {
                write!(f, "needs at least {needed} observations, got {actual}")
            }
            Shortfall::ZeroSpread => f.write_str("standard deviation is zero"),
        }
    }
}

/// Result of one analysis component.
///
/// # Examples
///
/// ```
/// use u_timestudy::estimate::{Estimate, Shortfall};
///
/// let e: Estimate<f64> = Estimate::too_few(2, 1);
/// assert!(!e.is_available());
/// assert_eq!(
///     e.shortfall(),
///     Some(Shortfall::TooFewObservations { needed: 2, actual: 1 })
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", content = "value", rename_all = "snake_case"))]
pub enum Estimate<T> {
    /// The component's value.
    Available(T),
    /// The sample could not support the component.
    Insufficient(Shortfall),
}

impl<T> Estimate<T> {
    /// Shorthand for `Insufficient(TooFewObservations { .. })`.
    pub fn too_few(needed: usize, actual: usize) -> Self {
        Estimate::Insufficient(Shortfall::TooFewObservations { needed, actual })
    }

    /// Returns `true` for `Available`.
    pub fn is_available(&self) -> bool {
        matches!(self, Estimate::Available(_))
    }

    /// Borrows the value if available.
    pub fn available(&self) -> Option<&T> {
        match self {
            Estimate::Available(v) => Some(v),
            Estimate::Insufficient(_) => None,
        }
    }

    /// Converts into an `Option`, discarding the shortfall reason.
    pub fn into_option(self) -> Option<T> {
        match self {
            Estimate::Available(v) => Some(v),
            Estimate::Insufficient(_) => None,
        }
    }

    /// The shortfall reason, if any.
    pub fn shortfall(&self) -> Option<Shortfall> {
        match self {
            Estimate::Available(_) => None,
            Estimate::Insufficient(s) => Some(*s),
        }
    }

    /// Maps the available value, keeping the shortfall untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Estimate<U> {
        match self {
            Estimate::Available(v) => Estimate::Available(f(v)),
            Estimate::Insufficient(s) => Estimate::Insufficient(s),
        }
    }
}
