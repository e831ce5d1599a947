use tendency_analysis::engine::StatisticsEngine;

use crate::command::DatasetSourceArg;

use self::app::DistributionViewer;

mod app;
mod chart;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct VisualizeArg {
    #[clap(flatten)]
    pub(super) source: DatasetSourceArg,

    /// Number of histogram bins per column
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(1..))]
    bins: u16,
}

pub(crate) fn run(arg: &VisualizeArg) -> anyhow::Result<()> {
    let VisualizeArg { source, bins } = arg;

    let dataset = source.load()?;
    let result = StatisticsEngine::new().compute(&dataset)?;
    tracing::info!(columns = result.len(), "computed statistics");

    let viewer = DistributionViewer::new(&dataset, &result, usize::from(*bins));
    viewer.run()?;

    Ok(())
}
