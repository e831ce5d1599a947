//! Dataset loading
//!
//! Files ending in `.csv` are read as CSV with a header row; anything else is
//! read as a JSON [`DatasetFile`].

use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

use anyhow::{Context, bail};
use tendency_analysis::dataset::Dataset;

use crate::{schema::dataset_file::DatasetFile, util};

/// Reads a dataset from `path`, choosing the format by file extension.
pub fn load_dataset(path: &Path) -> anyhow::Result<Dataset> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let dataset = if is_csv {
        let file = File::open(path)
            .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;
        read_csv(io::BufReader::new(file))
            .with_context(|| format!("Failed to parse CSV file: {}", path.display()))?
    } else {
        util::read_json_file::<DatasetFile, _>("dataset", path)?.dataset
    };

    tracing::info!(
        path = %path.display(),
        columns = dataset.len(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Parses CSV data with a header row into a dataset.
///
/// Every header names one column and must not be empty. Every cell must be a
/// number; empty or non-numeric cells are rejected.
pub fn read_csv<R>(reader: R) -> anyhow::Result<Dataset>
where
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let names = reader
        .headers()
        .context("Failed to read CSV header")?
        .iter()
        .map(str::to_owned)
        .collect::<Vec<_>>();
    if names.is_empty() {
        bail!("CSV header has no column names");
    }
    if let Some(idx) = names.iter().position(String::is_empty) {
        bail!("CSV header has an empty column name at position {}", idx + 1);
    }

    let mut columns = vec![Vec::new(); names.len()];
    for (row_idx, record) in reader.records().enumerate() {
        // Header is line 1
        let line = row_idx + 2;
        let record = record.with_context(|| format!("Failed to read CSV line {line}"))?;
        for ((name, column), cell) in names.iter().zip(&mut columns).zip(record.iter()) {
            let value = cell.parse::<f64>().with_context(|| {
                format!("Invalid number {cell:?} in column '{name}' at line {line}")
            })?;
            column.push(value);
        }
    }

    Ok(Dataset::from_columns(names.into_iter().zip(columns))?)
}
