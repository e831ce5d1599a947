use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tendency_analysis::dataset::Dataset;

/// Dataset stored as JSON, with optional provenance metadata.
///
/// The metadata fields are written by the `generate` command and are optional
/// on input, so a bare `{"columns": [...]}` document is also accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetFile {
    /// Timestamp when the dataset was generated (ISO 8601 format)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
    /// Random seed used to generate the dataset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// The columns themselves
    #[serde(flatten)]
    pub dataset: Dataset,
}
