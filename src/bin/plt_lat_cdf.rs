//! Plot WIMA vs Baseline latency CDFs, one per connection count.

use anyhow::{Context, Result};
use clap::Parser;

use wima_plots::cli::{init_tracing, CommonArgs};
use wima_plots::{plot_latency_cdfs, ChartKind};

#[derive(Parser, Debug)]
#[command(name = "plt-lat-cdf")]
#[command(about = "Plot and save WIMA vs Baseline latency CDF graphs")]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let settings = args.common.settings()?;
    let inputs = args.common.inputs(&settings, &settings.inputs.latency);

    let rendered = plot_latency_cdfs(&inputs, &args.common.graphs_dir, &settings.style)
        .context("plotting latency CDFs")?;

    args.common.finish(&ChartKind::LatencyCdf.to_string(), &rendered)
}
