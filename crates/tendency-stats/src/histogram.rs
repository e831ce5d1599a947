use std::ops::Range;

/// A histogram representation of a dataset's distribution.
///
/// The range between the smallest and the largest value is split into bins of
/// equal width, and each bin counts the values falling into it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Histogram {
    /// The bins comprising the histogram, in ascending order.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive end).
    ///
    /// The last bin of a histogram also contains its `end` value.
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

impl HistogramBin {
    /// Returns the midpoint of the bin's range.
    #[must_use]
    pub fn center(&self) -> f64 {
        f64::midpoint(self.range.start, self.range.end)
    }
}

impl Histogram {
    /// Creates a histogram with `num_bins` equal-width bins.
    ///
    /// Bins span `[min, max]` of the finite input values; non-finite values are
    /// skipped. If every value is equal, the range is widened to
    /// `[v - 0.5, v + 0.5]` so the bins keep a positive width.
    ///
    /// Returns an empty histogram if there are no finite values, if `num_bins`
    /// is zero, or if the span of the values cannot be split into bins of a
    /// finite, positive width (for example when `max - min` overflows `f64`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use tendency_stats::histogram::Histogram;
    /// let histogram = Histogram::new([1.0, 2.0, 2.5, 4.0, 5.0], 4);
    /// let counts = histogram.bins.iter().map(|bin| bin.count).collect::<Vec<_>>();
    /// assert_eq!(counts, [1, 2, 0, 2]);
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    #[must_use]
    pub fn new<I>(values: I, num_bins: usize) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values
            .into_iter()
            .filter(|v| v.is_finite())
            .collect::<Vec<_>>();
        if values.is_empty() || num_bins == 0 {
            return Self::default();
        }

        let mut min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let mut max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if max - min <= 0.0 {
            min -= 0.5;
            max += 0.5;
        }
        let width = (max - min) / num_bins as f64;
        // Overflow of `max - min`, or a `±0.5` widening lost to rounding
        if !(width.is_finite() && width > 0.0) {
            return Self::default();
        }

        let mut bins = (0..num_bins)
            .map(|idx| {
                // Recompute each boundary from `min` to avoid accumulating error
                let start = min + idx as f64 * width;
                let end = if idx + 1 == num_bins {
                    max
                } else {
                    min + (idx + 1) as f64 * width
                };
                HistogramBin {
                    range: start..end,
                    count: 0,
                }
            })
            .collect::<Vec<_>>();

        for value in values {
            let idx = (((value - min) / width).floor() as usize).min(num_bins - 1);
            bins[idx].count += 1;
        }

        Self { bins }
    }

    /// Returns the largest bin count, or zero for an empty histogram.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// Returns the total number of values counted in the histogram.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values() {
        assert!(Histogram::new([], 10).bins.is_empty());
        assert!(Histogram::new([1.0, 2.0], 0).bins.is_empty());
        assert!(Histogram::new([f64::NAN, f64::INFINITY], 10).bins.is_empty());
    }

    #[test]
    fn test_counts_sum_to_finite_values() {
        let values = (0..1000).map(|i| f64::from(i).sin() * 50.0);
        let histogram = Histogram::new(values.chain([f64::NAN]), 20);
        assert_eq!(histogram.bins.len(), 20);
        assert_eq!(histogram.total_count(), 1000);
    }

    #[test]
    fn test_max_value_lands_in_last_bin() {
        let histogram = Histogram::new([0.0, 10.0], 5);
        assert_eq!(histogram.bins[0].count, 1);
        assert_eq!(histogram.bins[4].count, 1);
        assert_eq!(histogram.bins[4].range.end, 10.0);
    }

    #[test]
    fn test_bins_are_contiguous() {
        let histogram = Histogram::new([-3.0, 1.0, 7.5], 7);
        for pair in histogram.bins.windows(2) {
            assert_eq!(pair[0].range.end, pair[1].range.start);
        }
        assert_eq!(histogram.bins[0].range.start, -3.0);
    }

    #[test]
    fn test_constant_values_widen_range() {
        let histogram = Histogram::new([2.0, 2.0, 2.0], 4);
        assert_eq!(histogram.bins.first().unwrap().range.start, 1.5);
        assert_eq!(histogram.bins.last().unwrap().range.end, 2.5);
        assert_eq!(histogram.total_count(), 3);
        assert_eq!(histogram.max_count(), 3);
    }

    #[test]
    fn test_overflowing_span_gives_empty_histogram() {
        assert!(Histogram::new([-f64::MAX, f64::MAX], 4).bins.is_empty());
        assert!(Histogram::new([f64::MAX, f64::MAX], 4).bins.is_empty());
    }

    #[test]
    fn test_large_finite_span() {
        let histogram = Histogram::new([-f64::MAX, 0.0], 4);
        assert!(
            histogram
                .bins
                .iter()
                .all(|bin| bin.range.start.is_finite() && bin.range.end.is_finite())
        );
        let counts = histogram.bins.iter().map(|bin| bin.count).collect::<Vec<_>>();
        assert_eq!(counts, [1, 0, 0, 1]);
    }

    #[test]
    fn test_bin_center() {
        let bin = HistogramBin {
            range: 1.0..3.0,
            count: 0,
        };
        assert_eq!(bin.center(), 2.0);
    }
}
