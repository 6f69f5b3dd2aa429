//! Command-line plumbing shared by the three binaries.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::plot::{Rendered, SweepInputs};
use crate::report::SweepReport;

/// Arguments every plotting binary accepts.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Directory the charts are written to
    pub graphs_dir: PathBuf,

    /// Run summary with the connection sweep in fields 4-6
    #[arg(short, long)]
    pub summary: Option<PathBuf>,

    /// Records file (latency samples or measurement windows)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output resolution in dots per inch
    #[arg(long)]
    pub dpi: Option<u32>,

    /// Write a JSON report of the rendered charts
    #[arg(short, long)]
    pub export: Option<PathBuf>,
}

impl CommonArgs {
    /// Load settings and apply command-line overrides.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings =
            Settings::load(self.config.as_deref()).with_context(|| match &self.config {
                Some(path) => format!("loading settings from {}", path.display()),
                None => "loading settings".to_string(),
            })?;
        if let Some(dpi) = self.dpi {
            settings.style.dpi = dpi;
        }
        if let Some(summary) = &self.summary {
            settings.inputs.summary = summary.clone();
        }
        Ok(settings)
    }

    /// Sweep inputs, using `default_records` unless `--input` was given.
    pub fn inputs(&self, settings: &Settings, default_records: &Path) -> SweepInputs {
        SweepInputs {
            summary: settings.inputs.summary.clone(),
            records: self
                .input
                .clone()
                .unwrap_or_else(|| default_records.to_path_buf()),
        }
    }

    /// Log the outcome and write the report if `--export` was given.
    pub fn finish(&self, chart: &str, rendered: &[Rendered]) -> Result<()> {
        info!(
            "Rendered {} {} chart(s) into {}",
            rendered.len(),
            chart,
            self.graphs_dir.display()
        );
        if let Some(path) = &self.export {
            SweepReport::new(chart, rendered)
                .write(path)
                .with_context(|| format!("exporting report to {}", path.display()))?;
            info!("Exported report to {}", path.display());
        }
        Ok(())
    }
}

/// Install the stderr log subscriber; `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        common: CommonArgs,
    }

    #[test]
    fn test_positional_graphs_dir() {
        let cli = TestCli::try_parse_from(["plt", "graphs"]).unwrap();
        assert_eq!(cli.common.graphs_dir, PathBuf::from("graphs"));
        assert!(cli.common.input.is_none());
    }

    #[test]
    fn test_graphs_dir_is_required() {
        assert!(TestCli::try_parse_from(["plt"]).is_err());
    }

    #[test]
    fn test_overrides_apply_to_settings() {
        let cli = TestCli::try_parse_from([
            "plt",
            "out",
            "--dpi",
            "150",
            "--summary",
            "runs/summary.csv",
            "--input",
            "runs/latency.raw",
        ])
        .unwrap();
        let settings = cli.common.settings().unwrap();
        assert_eq!(settings.style.dpi, 150);

        let inputs = cli.common.inputs(&settings, &settings.inputs.latency);
        assert_eq!(inputs.summary, PathBuf::from("runs/summary.csv"));
        assert_eq!(inputs.records, PathBuf::from("runs/latency.raw"));
    }

    #[test]
    fn test_default_records() {
        let cli = TestCli::try_parse_from(["plt", "out"]).unwrap();
        let settings = Settings::default();
        let inputs = cli.common.inputs(&settings, &settings.inputs.timestamps);
        assert_eq!(inputs.records, PathBuf::from("timestamps.txt"));
    }
}
