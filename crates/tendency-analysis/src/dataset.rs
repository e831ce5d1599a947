//! Column-oriented numeric datasets
//!
//! A [`Dataset`] is an ordered collection of named numeric columns. Column
//! order is insertion order and is preserved through serialization, so every
//! consumer (statistics, report, viewer) sees the columns in the same order.
//!
//! # Serialization
//!
//! ```json
//! {
//!   "columns": [
//!     { "name": "Variabile1", "values": [98.2, 101.7, 87.9] },
//!     { "name": "Variabile2", "values": [12.0, 75.3, 40.1] }
//!   ]
//! }
//! ```
//!
//! Deserialization rejects duplicate column names.

use serde::{Deserialize, Serialize};

/// Error raised when building a [`Dataset`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DatasetError {
    #[display("Duplicate column name '{column}'")]
    DuplicateColumn { column: String },
}

/// One named sequence of observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    values: Vec<f64>,
}

impl Column {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// An ordered mapping from unique column names to numeric sequences.
///
/// Columns may have different lengths, and may be empty; checking that a
/// column holds data is left to the consumer.
///
/// # Examples
///
/// ```
/// use tendency_analysis::dataset::Dataset;
///
/// let dataset = Dataset::from_columns([("A", vec![1.0, 2.0]), ("B", vec![3.0])]).unwrap();
/// assert_eq!(dataset.names().collect::<Vec<_>>(), ["A", "B"]);
/// assert_eq!(dataset.column("B"), Some(&[3.0][..]));
///
/// assert!(Dataset::from_columns([("A", vec![]), ("A", vec![])]).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DatasetRepr", into = "DatasetRepr")]
pub struct Dataset {
    columns: Vec<Column>,
}

#[derive(Serialize, Deserialize)]
struct DatasetRepr {
    columns: Vec<Column>,
}

impl TryFrom<DatasetRepr> for Dataset {
    type Error = DatasetError;

    fn try_from(repr: DatasetRepr) -> Result<Self, Self::Error> {
        Self::from_columns(repr.columns.into_iter().map(|c| (c.name, c.values)))
    }
}

impl From<Dataset> for DatasetRepr {
    fn from(dataset: Dataset) -> Self {
        Self {
            columns: dataset.columns,
        }
    }
}

impl Dataset {
    /// Creates an empty dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dataset from `(name, values)` pairs, keeping their order.
    pub fn from_columns<I, S>(columns: I) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        let mut dataset = Self::new();
        for (name, values) in columns {
            dataset.push_column(name, values)?;
        }
        Ok(dataset)
    }

    /// Appends a column after the existing ones.
    ///
    /// Fails if a column with the same name already exists.
    pub fn push_column<S>(&mut self, name: S, values: Vec<f64>) -> Result<(), DatasetError>
    where
        S: Into<String>,
    {
        let name = name.into();
        if self.column(&name).is_some() {
            return Err(DatasetError::DuplicateColumn { column: name });
        }
        self.columns.push(Column { name, values });
        Ok(())
    }

    /// Returns the values of the column called `name`.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(Column::values)
    }

    pub fn columns(&self) -> impl ExactSizeIterator<Item = &Column> + '_ {
        self.columns.iter()
    }

    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.columns.iter().map(Column::name)
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
