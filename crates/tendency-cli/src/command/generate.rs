use std::path::PathBuf;

use chrono::Utc;

use crate::{demo, schema::dataset_file::DatasetFile, util::Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GenerateArg {
    /// Rows per column
    #[arg(long, default_value_t = demo::DEFAULT_ROWS)]
    rows: usize,
    /// Random seed
    #[arg(long, default_value_t = demo::DEFAULT_SEED)]
    seed: u64,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    let GenerateArg { rows, seed, output } = arg;

    let file = DatasetFile {
        generated_at: Some(Utc::now()),
        seed: Some(*seed),
        dataset: demo::generate(*rows, *seed)?,
    };

    let mut output = Output::from_output_path(output.clone())?;
    output.write_json(&file)?;
    tracing::info!(
        output = %output.display_path(),
        columns = file.dataset.len(),
        rows,
        "dataset saved"
    );

    Ok(())
}
