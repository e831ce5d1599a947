//! Per-column central-tendency computation
//!
//! [`StatisticsEngine::compute`] turns a [`Dataset`] into a
//! [`StatisticsResult`]: one [`ColumnStatistics`] entry per column, in dataset
//! column order.
//!
//! # Mode tie-break
//!
//! When several values share the highest occurrence count, the smallest of
//! them is the mode. For continuous data, where each value usually occurs
//! once, this makes the mode the column minimum.
//!
//! # Examples
//!
//! ```
//! use tendency_analysis::{dataset::Dataset, engine::StatisticsEngine};
//!
//! let dataset = Dataset::from_columns([("A", vec![1.0, 2.0, 3.0])]).unwrap();
//! let result = StatisticsEngine::new().compute(&dataset).unwrap();
//!
//! let stats = result.get("A").unwrap();
//! assert_eq!(stats.mean(), 2.0);
//! assert_eq!(stats.median(), 2.0);
//! assert_eq!(stats.mode(), 1.0);
//! ```

use serde::{Deserialize, Serialize};
use tendency_stats::descriptive::CentralTendency;

use crate::dataset::Dataset;

/// Error raised when a dataset cannot be summarized.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidInputError {
    #[display("Dataset has no columns")]
    NoColumns,
    #[display("Column '{column}' is empty")]
    EmptyColumn { column: String },
}

/// A statistic reported for each column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Statistic {
    #[display("mean")]
    Mean,
    #[display("median")]
    Median,
    #[display("mode")]
    Mode,
}

impl Statistic {
    pub const ALL: [Self; 3] = [Self::Mean, Self::Median, Self::Mode];

    /// Label used in reports and chart legends.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Mean => "Media",
            Self::Median => "Mediana",
            Self::Mode => "Moda",
        }
    }
}

/// Mean, median and mode of one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnStatistics {
    mean: f64,
    median: f64,
    mode: f64,
}

impl ColumnStatistics {
    #[must_use]
    pub fn new(mean: f64, median: f64, mode: f64) -> Self {
        Self { mean, median, mode }
    }

    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    #[must_use]
    pub fn median(&self) -> f64 {
        self.median
    }

    #[must_use]
    pub fn mode(&self) -> f64 {
        self.mode
    }

    #[must_use]
    pub fn get(&self, statistic: Statistic) -> f64 {
        match statistic {
            Statistic::Mean => self.mean,
            Statistic::Median => self.median,
            Statistic::Mode => self.mode,
        }
    }

    /// Returns `(statistic, value)` pairs in mean, median, mode order.
    pub fn iter(&self) -> impl Iterator<Item = (Statistic, f64)> + '_ {
        Statistic::ALL.into_iter().map(|s| (s, self.get(s)))
    }
}

impl From<CentralTendency> for ColumnStatistics {
    fn from(stats: CentralTendency) -> Self {
        Self::new(stats.mean, stats.median, stats.mode)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct NamedStatistics {
    name: String,
    #[serde(flatten)]
    stats: ColumnStatistics,
}

/// Column name to [`ColumnStatistics`], in dataset column order.
///
/// Serializes as an array of `{"name", "mean", "median", "mode"}` objects.
/// There is no way to modify a result once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatisticsResult {
    entries: Vec<NamedStatistics>,
}

impl StatisticsResult {
    /// Returns the statistics of the column called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ColumnStatistics> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.stats)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &ColumnStatistics)> + '_ {
        self.entries.iter().map(|e| (e.name.as_str(), &e.stats))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S> FromIterator<(S, ColumnStatistics)> for StatisticsResult
where
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (S, ColumnStatistics)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, stats)| NamedStatistics {
                    name: name.into(),
                    stats,
                })
                .collect(),
        }
    }
}

/// Computes mean, median and mode for every column of a dataset.
///
/// The engine holds no state: every call to [`compute`](Self::compute)
/// returns a fresh result derived only from the dataset passed in.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticsEngine;

impl StatisticsEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Computes the statistics of every column, in dataset column order.
    ///
    /// # Errors
    ///
    /// * [`InvalidInputError::NoColumns`] if the dataset has no columns
    /// * [`InvalidInputError::EmptyColumn`] for the first column with no values
    pub fn compute(&self, dataset: &Dataset) -> Result<StatisticsResult, InvalidInputError> {
        if dataset.is_empty() {
            return Err(InvalidInputError::NoColumns);
        }

        let entries = dataset
            .columns()
            .map(|column| {
                let stats = CentralTendency::new(column.values().iter().copied())
                    .ok_or_else(|| InvalidInputError::EmptyColumn {
                        column: column.name().to_owned(),
                    })?;
                tracing::debug!(
                    column = column.name(),
                    count = column.values().len(),
                    mean = stats.mean,
                    median = stats.median,
                    mode = stats.mode,
                    "computed column statistics"
                );
                Ok(NamedStatistics {
                    name: column.name().to_owned(),
                    stats: stats.into(),
                })
            })
            .collect::<Result<Vec<_>, InvalidInputError>>()?;

        Ok(StatisticsResult { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compute(columns: Vec<(&str, Vec<f64>)>) -> Result<StatisticsResult, InvalidInputError> {
        let dataset = Dataset::from_columns(columns).unwrap();
        StatisticsEngine::new().compute(&dataset)
    }

    #[test]
    fn test_single_column_all_distinct() {
        let result = compute(vec![("A", vec![1.0, 2.0, 3.0])]).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(
            result.get("A"),
            Some(&ColumnStatistics::new(2.0, 2.0, 1.0))
        );
    }

    #[test]
    fn test_mode_tie_break_smallest_wins() {
        let result = compute(vec![("A", vec![2.0, 1.0, 3.0, 2.0, 1.0])]).unwrap();
        assert_eq!(result.get("A").unwrap().mode(), 1.0);
    }

    #[test]
    fn test_mean_within_relative_tolerance() {
        let values = [0.1, 0.7, 12.5, 3.3, 1e-3, 250.0, 9.9];
        let result = compute(vec![("A", values.to_vec())]).unwrap();
        let expected = values.iter().sum::<f64>() / 7.0;
        let mean = result.get("A").unwrap().mean();
        assert!((mean - expected).abs() <= expected.abs() * 1e-9);
    }

    #[test]
    fn test_even_length_median() {
        let result = compute(vec![("A", vec![4.0, 1.0, 3.0, 2.0])]).unwrap();
        assert_eq!(result.get("A").unwrap().median(), 2.5);
    }

    #[test]
    fn test_every_column_in_dataset_order() {
        let result = compute(vec![
            ("z", vec![1.0]),
            ("a", vec![2.0, 4.0]),
            ("m", vec![5.0, 5.0, 6.0]),
        ])
        .unwrap();
        let names = result.iter().map(|(name, _)| name).collect::<Vec<_>>();
        assert_eq!(names, ["z", "a", "m"]);
        assert_eq!(result.get("a"), Some(&ColumnStatistics::new(3.0, 3.0, 2.0)));
        assert_eq!(result.get("m").unwrap().mode(), 5.0);
    }

    #[test]
    fn test_columns_of_different_lengths() {
        let result = compute(vec![("A", vec![1.0, 2.0, 3.0, 4.0, 5.0]), ("B", vec![7.0])]).unwrap();
        assert_eq!(result.get("A").unwrap().median(), 3.0);
        assert_eq!(result.get("B"), Some(&ColumnStatistics::new(7.0, 7.0, 7.0)));
    }

    #[test]
    fn test_no_columns() {
        let err = StatisticsEngine::new().compute(&Dataset::new()).unwrap_err();
        assert_eq!(err, InvalidInputError::NoColumns);
    }

    #[test]
    fn test_empty_column() {
        let err = compute(vec![("A", vec![1.0]), ("B", vec![]), ("C", vec![])]).unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::EmptyColumn {
                column: "B".to_owned()
            }
        );
        assert_eq!(err.to_string(), "Column 'B' is empty");
    }

    #[test]
    fn test_compute_is_idempotent() {
        let dataset = Dataset::from_columns([
            ("A", vec![0.1, 0.2, 0.30000000000000004, 1e-12, 5.5]),
            ("B", vec![-3.0, 8.25, 8.25, 1.0]),
        ])
        .unwrap();
        let engine = StatisticsEngine::new();
        let first = engine.compute(&dataset).unwrap();
        let second = engine.compute(&dataset).unwrap();
        for ((_, a), (_, b)) in first.iter().zip(second.iter()) {
            for (x, y) in a.iter().zip(b.iter()) {
                assert_eq!(x.1.to_bits(), y.1.to_bits());
            }
        }
    }

    #[test]
    fn test_nan_input_propagates_to_mean() {
        let result = compute(vec![("A", vec![1.0, f64::NAN])]).unwrap();
        assert!(result.get("A").unwrap().mean().is_nan());
    }

    #[test]
    fn test_result_json_shape() {
        let result = compute(vec![("A", vec![1.0, 2.0, 3.0])]).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "name": "A", "mean": 2.0, "median": 2.0, "mode": 1.0 }])
        );
    }

    #[test]
    fn test_statistic_labels() {
        let stats = ColumnStatistics::new(1.0, 2.0, 3.0);
        let labels = stats
            .iter()
            .map(|(s, v)| (s.label(), v))
            .collect::<Vec<_>>();
        assert_eq!(labels, [("Media", 1.0), ("Mediana", 2.0), ("Moda", 3.0)]);
        assert_eq!(Statistic::Median.to_string(), "median");
    }
}
