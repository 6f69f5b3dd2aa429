//! Sweep pipelines: one chart per connection count.
//!
//! Every pipeline walks the connection sweep from the run summary and pairs
//! it with consecutive WIMA/Baseline records. It stops at the end of the
//! sweep or when the records run out, whichever comes first.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::chart::{boxplot, cdf, line, ChartKind, ChartStyle};
use crate::data::samples::{read_input, sample_records};
use crate::data::{pairs, Paired, RunSummary, SeriesSummary};
use crate::error::{PlotError, Result};
use crate::source::CpuSource;

/// Input files of a sweep.
#[derive(Debug, Clone)]
pub struct SweepInputs {
    /// Run summary holding the connection sweep.
    pub summary: PathBuf,
    /// Records to pair: latency samples or measurement windows.
    pub records: PathBuf,
}

/// One chart written to disk.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub kind: ChartKind,
    pub connections: u64,
    pub path: PathBuf,
    /// Statistics of the series drawn for each condition.
    pub summary: Paired<Option<SeriesSummary>>,
}

impl Rendered {
    fn new(kind: ChartKind, connections: u64, path: PathBuf, series: &Paired<Vec<f64>>) -> Self {
        Self {
            kind,
            connections,
            path,
            summary: series.each_ref().map(|s| SeriesSummary::from_samples(s)),
        }
    }
}

/// Signature shared by the latency chart renderers.
type RenderFn = fn(&Path, &Paired<Vec<f64>>, &ChartStyle) -> Result<()>;

fn prepare_out_dir(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir).map_err(|e| PlotError::io(out_dir, e))
}

fn out_path(out_dir: &Path, kind: ChartKind, connections: u64) -> PathBuf {
    out_dir.join(kind.file_name(connections))
}

/// Render latency boxplots (`latency-boxplot-<conn>.png`).
pub fn plot_latency_boxplots(
    inputs: &SweepInputs,
    out_dir: &Path,
    style: &ChartStyle,
) -> Result<Vec<Rendered>> {
    plot_latency(ChartKind::LatencyBoxplot, boxplot::render, inputs, out_dir, style)
}

/// Render latency CDF scatters (`latency-cdf-<conn>.png`).
pub fn plot_latency_cdfs(
    inputs: &SweepInputs,
    out_dir: &Path,
    style: &ChartStyle,
) -> Result<Vec<Rendered>> {
    plot_latency(ChartKind::LatencyCdf, cdf::render, inputs, out_dir, style)
}

fn plot_latency(
    kind: ChartKind,
    render: RenderFn,
    inputs: &SweepInputs,
    out_dir: &Path,
    style: &ChartStyle,
) -> Result<Vec<Rendered>> {
    let sweep = RunSummary::load(&inputs.summary)?.sweep()?;
    let content = read_input(&inputs.records)?;
    prepare_out_dir(out_dir)?;

    let mut records = pairs(sample_records(&content));
    let mut rendered = Vec::new();

    for connections in sweep {
        let Some(pair) = records.next() else {
            warn!(
                "{} ran out of records before {} connections",
                inputs.records.display(),
                connections
            );
            break;
        };
        let samples = pair.try_map(|record| record)?;

        let path = out_path(out_dir, kind, connections);
        render(&path, &samples, style)?;
        info!("Wrote {} ({} connections)", path.display(), connections);
        rendered.push(Rendered::new(kind, connections, path, &samples));
    }

    Ok(rendered)
}

/// Render CPU line charts (`cpu-line-<conn>.png`) from a series source.
///
/// Each line of the records file is a measurement window; the WIMA window
/// is fetched before its Baseline partner.
pub async fn plot_cpu_lines(
    inputs: &SweepInputs,
    source: &dyn CpuSource,
    out_dir: &Path,
    style: &ChartStyle,
) -> Result<Vec<Rendered>> {
    let kind = ChartKind::CpuLine;
    let sweep = RunSummary::load(&inputs.summary)?.sweep()?;
    let content = read_input(&inputs.records)?;
    prepare_out_dir(out_dir)?;

    info!("Fetching CPU series from {}", source.description());
    let mut windows = pairs(content.lines());
    let mut rendered = Vec::new();

    for connections in sweep {
        let Some(window) = windows.next() else {
            warn!(
                "{} ran out of windows before {} connections",
                inputs.records.display(),
                connections
            );
            break;
        };
        let series = Paired {
            wima: source.fetch(window.wima).await?,
            baseline: source.fetch(window.baseline).await?,
        };

        let path = out_path(out_dir, kind, connections);
        line::render(&path, &series, style)?;
        info!("Wrote {} ({} connections)", path.display(), connections);
        rendered.push(Rendered::new(kind, connections, path, &series));
    }

    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{file_names, test_style};
    use crate::source::FileSource;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    /// Sorted names of the files in a directory.
    fn written(dir: &Path) -> Vec<String> {
        let paths: Vec<PathBuf> = fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        let mut names = file_names(paths.iter().map(|p| p.as_path()));
        names.sort();
        names
    }

    fn write_inputs(summary: &str, records: &str) -> (TempDir, SweepInputs) {
        let dir = tempdir().unwrap();
        let inputs = SweepInputs {
            summary: dir.path().join("summary.csv"),
            records: dir.path().join("records"),
        };
        fs::write(&inputs.summary, summary).unwrap();
        fs::write(&inputs.records, records).unwrap();
        (dir, inputs)
    }

    #[test]
    fn test_zero_step_is_rejected_before_output() {
        let (dir, inputs) = write_inputs("a,b,c,d,1,5,0", "1,2\n3,4\n");
        let out = dir.path().join("graphs");
        let err = plot_latency_boxplots(&inputs, &out, &ChartStyle::default()).unwrap_err();
        assert!(matches!(err, PlotError::InvalidSweep(_)));
        assert!(!out.exists());
    }

    #[test]
    fn test_missing_records_file() {
        let dir = tempdir().unwrap();
        let inputs = SweepInputs {
            summary: dir.path().join("summary.csv"),
            records: dir.path().join("latency.raw"),
        };
        fs::write(&inputs.summary, "a,b,c,d,1,5,1").unwrap();
        let err = plot_latency_cdfs(&inputs, dir.path(), &ChartStyle::default()).unwrap_err();
        assert!(matches!(err, PlotError::Io { .. }));
    }

    #[test]
    fn test_malformed_record_aborts() {
        let (dir, inputs) = write_inputs("a,b,c,d,1,5,1", "1,2\n3,oops\n");
        let err =
            plot_latency_cdfs(&inputs, &dir.path().join("g"), &ChartStyle::default()).unwrap_err();
        match err {
            PlotError::Samples { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_no_records_renders_nothing() {
        let (dir, inputs) = write_inputs("a,b,c,d,1,5,1", "");
        let out = dir.path().join("graphs");
        let rendered = plot_latency_boxplots(&inputs, &out, &ChartStyle::default()).unwrap();
        assert!(rendered.is_empty());
        assert!(out.is_dir());
    }

    #[test]
    fn test_latency_sweep_stops_at_end() {
        // Three pairs of records, but the sweep only covers 10 and 20
        let (dir, inputs) = write_inputs(
            "run,x,y,z,10,25,10\n",
            "1,2,3\n4,5,6\n1,2\n3,4\n5,6\n7,8\n",
        );
        let out = dir.path().join("graphs");
        let Some(style) = test_style() else { return };

        let rendered = plot_latency_boxplots(&inputs, &out, &style).unwrap();
        assert_eq!(
            file_names(rendered.iter().map(|r| r.path.as_path())),
            vec!["latency-boxplot-10.png", "latency-boxplot-20.png"]
        );
        assert_eq!(
            written(&out),
            vec!["latency-boxplot-10.png", "latency-boxplot-20.png"]
        );
        assert!(out.join("latency-boxplot-20.png").exists());
        assert!(!out.join("latency-boxplot-30.png").exists());
        assert_eq!(rendered[0].summary.wima.unwrap().count, 3);
    }

    #[test]
    fn test_latency_sweep_stops_when_records_run_out() {
        // Sweep covers 1..=5 but only one full pair exists
        let (dir, inputs) = write_inputs("a,b,c,d,1,5,1", "1,2\n3,4\n5,6\n");
        let out = dir.path().join("graphs");
        let Some(style) = test_style() else { return };

        let rendered = plot_latency_cdfs(&inputs, &out, &style).unwrap();
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].connections, 1);
        assert_eq!(written(&out), vec!["latency-cdf-1.png"]);
    }

    #[test]
    fn test_cpu_sweep_from_replay() {
        let (dir, inputs) = write_inputs("a,b,c,d,2,4,2", "&w=0\n&w=1\n&w=2\n&w=3\n");
        let responses = dir.path().join("responses");
        fs::create_dir(&responses).unwrap();
        for i in 0..4 {
            fs::write(responses.join(format!("{i}.csv")), "time,cpu\n1,5\n2,7\n").unwrap();
        }
        let source = FileSource::new(&responses);
        let out = dir.path().join("graphs");
        let Some(style) = test_style() else { return };

        let rendered =
            tokio_test::block_on(plot_cpu_lines(&inputs, &source, &out, &style)).unwrap();
        assert_eq!(
            file_names(rendered.iter().map(|r| r.path.as_path())),
            vec!["cpu-line-2.png", "cpu-line-4.png"]
        );
        assert_eq!(written(&out), vec!["cpu-line-2.png", "cpu-line-4.png"]);
        assert_eq!(rendered[0].summary.baseline.unwrap().mean, 6.0);
    }

    #[test]
    fn test_cpu_sweep_propagates_fetch_errors() {
        let (dir, inputs) = write_inputs("a,b,c,d,1,1,1", "&w=0\n&w=1\n");
        // No saved responses
        let source = FileSource::new(dir.path().join("responses"));

        let err = tokio_test::block_on(plot_cpu_lines(
            &inputs,
            &source,
            &dir.path().join("graphs"),
            &ChartStyle::default(),
        ))
        .unwrap_err();
        assert!(matches!(err, PlotError::Io { .. }));
    }
}
