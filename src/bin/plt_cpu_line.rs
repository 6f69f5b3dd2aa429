//! Plot WIMA vs Baseline CPU usage line charts, one per connection count.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use wima_plots::cli::{init_tracing, CommonArgs};
use wima_plots::{plot_cpu_lines, ChartKind, CpuSource, FileSource, NetdataSource};

#[derive(Parser, Debug)]
#[command(name = "plt-cpu-line")]
#[command(about = "Plot and save WIMA vs Baseline CPU line graphs (agents excluded)")]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Netdata data API URL; `container_name` is replaced by --container
    #[arg(long, conflicts_with = "replay")]
    url: Option<String>,

    /// cgroup container whose CPU chart is queried
    #[arg(long, conflicts_with = "replay")]
    container: Option<String>,

    /// Replay saved Netdata responses (<dir>/0.csv, 1.csv, ...) instead of querying
    #[arg(long)]
    replay: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let mut settings = args.common.settings()?;
    if let Some(url) = args.url {
        settings.netdata.url = url;
    }
    if let Some(container) = args.container {
        settings.netdata.container = container;
    }

    let source: Box<dyn CpuSource> = match &args.replay {
        Some(dir) => Box::new(FileSource::new(dir)),
        None => Box::new(
            NetdataSource::from_settings(&settings.netdata)
                .context("building the Netdata client")?,
        ),
    };
    let inputs = args.common.inputs(&settings, &settings.inputs.timestamps);

    // Build a tokio runtime for the HTTP requests
    let rt = tokio::runtime::Runtime::new()?;
    let rendered = rt
        .block_on(plot_cpu_lines(
            &inputs,
            &*source,
            &args.common.graphs_dir,
            &settings.style,
        ))
        .context("plotting CPU line charts")?;

    args.common.finish(&ChartKind::CpuLine.to_string(), &rendered)
}
