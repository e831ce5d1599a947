/// Measures of central tendency for a dataset.
///
/// This structure holds the arithmetic mean, the median and the mode of a
/// dataset of `f64` values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralTendency {
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The median value of the dataset.
    pub median: f64,
    /// The most frequent value of the dataset (smallest one on ties).
    pub mode: f64,
}

impl CentralTendency {
    /// Computes central tendency measures from unsorted values.
    ///
    /// The mean is summed in input order; the values are then sorted
    /// internally for the median and the mode.
    ///
    /// # Returns
    ///
    /// * `Some(CentralTendency)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use tendency_stats::descriptive::CentralTendency;
    /// let values = [3.0, 1.0, 2.0, 2.0];
    /// let stats = CentralTendency::new(values).unwrap();
    /// assert_eq!(stats.mean, 2.0);
    /// assert_eq!(stats.median, 2.0);
    /// assert_eq!(stats.mode, 2.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        let mean = mean(&values)?;
        values.sort_by(f64::total_cmp);
        Some(Self {
            mean,
            median: median_sorted(&values)?,
            mode: mode_sorted(&values)?,
        })
    }

    /// Computes central tendency measures from pre-sorted values.
    ///
    /// Use this when the data is already sorted to skip the sorting step.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted by [`f64::total_cmp`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use tendency_stats::descriptive::CentralTendency;
    /// let stats = CentralTendency::from_sorted(&[1.0, 1.0, 2.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(stats.median, 2.0);
    /// assert_eq!(stats.mode, 1.0);
    /// ```
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
            "values must be sorted in ascending order"
        );

        Some(Self {
            mean: mean(sorted_values)?,
            median: median_sorted(sorted_values)?,
            mode: mode_sorted(sorted_values)?,
        })
    }
}

/// Computes the arithmetic mean of `values`.
///
/// Returns `None` if `values` is empty.
///
/// # Examples
///
/// ```
/// # use tendency_stats::descriptive::mean;
/// assert_eq!(mean(&[1.0, 2.0, 6.0]), Some(3.0));
/// assert_eq!(mean(&[]), None);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum = values.iter().copied().sum::<f64>();
    Some(sum / values.len() as f64)
}

/// Computes the median of pre-sorted values.
///
/// For an odd number of values this is the middle element; for an even
/// number it is the average of the two central elements.
///
/// Returns `None` if `sorted_values` is empty.
///
/// # Examples
///
/// ```
/// # use tendency_stats::descriptive::median_sorted;
/// assert_eq!(median_sorted(&[1.0, 2.0, 10.0]), Some(2.0));
/// assert_eq!(median_sorted(&[1.0, 2.0, 4.0, 10.0]), Some(3.0));
/// ```
#[must_use]
pub fn median_sorted(sorted_values: &[f64]) -> Option<f64> {
    let n = sorted_values.len();
    if n == 0 {
        return None;
    }
    let mid = n / 2;
    if n % 2 == 1 {
        Some(sorted_values[mid])
    } else {
        Some(f64::midpoint(sorted_values[mid - 1], sorted_values[mid]))
    }
}

/// Computes the mode of pre-sorted values.
///
/// Equal values are adjacent after sorting, so each run of equal values is
/// one distinct value and its length is the occurrence count. Only a strictly
/// longer run replaces the current best, so among values sharing the highest
/// count the smallest one is returned.
///
/// Values are compared with `==`: `-0.0` and `0.0` form a single run, reported
/// as `0.0`, and every `NaN` is a run of its own.
///
/// Returns `None` if `sorted_values` is empty.
///
/// # Examples
///
/// ```
/// # use tendency_stats::descriptive::mode_sorted;
/// assert_eq!(mode_sorted(&[1.0, 2.0, 2.0, 3.0]), Some(2.0));
/// // 1 and 2 both occur twice: the smaller one wins
/// assert_eq!(mode_sorted(&[1.0, 1.0, 2.0, 2.0, 3.0]), Some(1.0));
/// ```
#[must_use]
pub fn mode_sorted(sorted_values: &[f64]) -> Option<f64> {
    let mut best: Option<(f64, usize)> = None;
    for run in sorted_values.chunk_by(|a, b| a == b) {
        if best.is_none_or(|(_, count)| run.len() > count) {
            // Adding `0.0` turns `-0.0` into `0.0` and leaves every other value unchanged
            best = Some((run[0] + 0.0, run.len()));
        }
    }
    best.map(|(value, _)| value)
}
