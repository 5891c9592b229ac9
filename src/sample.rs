//! Duration sample validation.
//!
//! Raw capture data can contain gaps, negative or zero timings and parse
//! failures. A [`Sample`] keeps only strictly positive finite durations, in
//! their original order, and remembers how many entries it dropped.
//! Construction never fails: an all-invalid input yields an empty sample.

/// A validated, time-ordered sequence of element durations (seconds).
///
/// # Invariants
///
/// - Every value is finite and `> 0`.
/// - Values keep the relative order of the raw input.
///
/// # Examples
///
/// ```
/// use u_timestudy::sample::Sample;
///
/// let sample = Sample::from_values([4.2, f64::NAN, -1.0, 0.0, 3.9, f64::INFINITY]);
/// assert_eq!(sample.values(), &[4.2, 3.9]);
/// assert_eq!(sample.discarded(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sample {
    values: Vec<f64>,
    discarded: usize,
}

impl Sample {
    /// Validates numeric entries, dropping NaN, infinite and non-positive values.
    pub fn from_values<I>(raw: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        Self::from_entries(raw.into_iter().map(Some))
    }

    /// Validates possibly-missing entries. `None` counts as a dropped entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_timestudy::sample::Sample;
    ///
    /// let sample = Sample::from_entries([Some(1.5), None, Some(2.0)]);
    /// assert_eq!(sample.len(), 2);
    /// assert_eq!(sample.discarded(), 1);
    /// ```
    pub fn from_entries<I>(raw: I) -> Self
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let mut values = Vec::new();
        let mut discarded = 0;
        for (index, entry) in raw.into_iter().enumerate() {
            match entry {
                Some(v) if is_valid_duration(v) => values.push(v),
                _ => {
                    tracing::trace!(index, ?entry, "dropping invalid duration entry");
                    discarded += 1;
                }
            }
        }
        Self { values, discarded }
    }

    /// Validates textual entries. Anything that does not parse as `f64`
    /// (after trimming whitespace) is dropped like any other invalid entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_timestudy::sample::Sample;
    ///
    /// let sample = Sample::parse_entries(["1.25", " 2.5 ", "n/a", "-3", ""]);
    /// assert_eq!(sample.values(), &[1.25, 2.5]);
    /// assert_eq!(sample.discarded(), 3);
    /// ```
    pub fn parse_entries<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_entries(
            raw.into_iter()
                .map(|s| s.as_ref().trim().parse::<f64>().ok()),
        )
    }

    /// The retained durations in input order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of retained durations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no entry survived validation.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of raw entries that were dropped.
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    /// The retained durations in ascending order.
    ///
    /// Accumulating over this view makes sums, means and variances
    /// bit-identical for any permutation of the same durations.
    pub fn sorted_values(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_unstable_by(f64::total_cmp);
        sorted
    }
}

impl AsRef<[f64]> for Sample {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl FromIterator<f64> for Sample {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

fn is_valid_duration(v: f64) -> bool {
    v.is_finite() && v > 0.0
}
