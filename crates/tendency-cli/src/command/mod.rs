use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tendency_analysis::dataset::Dataset;

use crate::{demo, input};

use self::{generate::GenerateArg, report::ReportArg, visualize::VisualizeArg};

mod generate;
mod report;
mod visualize;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Maximum level of diagnostics written to stderr
    #[arg(long, global = true, default_value_t = tracing::Level::WARN)]
    log_level: tracing::Level,

    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print mean, median and mode of every column (default)
    Report(#[clap(flatten)] ReportArg),
    /// Generate the example dataset as JSON
    Generate(#[clap(flatten)] GenerateArg),
    /// Show column distributions with TUI
    Visualize(#[clap(flatten)] VisualizeArg),
}

/// Where the analyzed dataset comes from.
#[derive(Debug, Clone, Args)]
pub(crate) struct DatasetSourceArg {
    /// Dataset file path (`.csv` or JSON); uses the example dataset if omitted
    #[arg(long)]
    input: Option<PathBuf>,

    /// Rows per column of the example dataset
    #[arg(long, default_value_t = demo::DEFAULT_ROWS)]
    rows: usize,

    /// Random seed of the example dataset
    #[arg(long, default_value_t = demo::DEFAULT_SEED)]
    seed: u64,
}

impl Default for DatasetSourceArg {
    fn default() -> Self {
        Self {
            input: None,
            rows: demo::DEFAULT_ROWS,
            seed: demo::DEFAULT_SEED,
        }
    }
}

impl DatasetSourceArg {
    pub(crate) fn load(&self) -> anyhow::Result<Dataset> {
        match &self.input {
            Some(path) => input::load_dataset(path),
            None => demo::generate(self.rows, self.seed),
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(args.log_level)
        .init();

    match args.mode.unwrap_or(Mode::Report(ReportArg::default())) {
        Mode::Report(arg) => report::run(&arg)?,
        Mode::Generate(arg) => generate::run(&arg)?,
        Mode::Visualize(arg) => visualize::run(&arg)?,
    }
    Ok(())
}
