//! Chart rendering with plotters.
//!
//! Every chart compares WIMA (black) with Baseline (red) and shares the same
//! axis treatment: grid under the data, a twin y axis on the right carrying
//! the same ticks, and tick marks along the top edge.
//!
//! - [`line`]: CPU usage over time
//! - [`boxplot`]: latency distribution per condition
//! - [`cdf`]: fitted normal CDF evaluated at every latency sample

pub mod boxplot;
pub mod cdf;
pub mod line;
mod style;

use std::fmt;
use std::ops::Range;
use std::path::Path;

pub use style::ChartStyle;

use crate::error::PlotError;

/// Fraction of the data span added on each side of an axis.
const AXIS_MARGIN: f64 = 0.05;

/// The three chart types, each named by its metric and graph type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    CpuLine,
    LatencyBoxplot,
    LatencyCdf,
}

impl ChartKind {
    pub const FILE_EXTENSION: &'static str = "png";

    /// Measured quantity.
    pub fn data_type(&self) -> &'static str {
        match self {
            ChartKind::CpuLine => "cpu",
            ChartKind::LatencyBoxplot | ChartKind::LatencyCdf => "latency",
        }
    }

    /// Kind of graph.
    pub fn graph_type(&self) -> &'static str {
        match self {
            ChartKind::CpuLine => "line",
            ChartKind::LatencyBoxplot => "boxplot",
            ChartKind::LatencyCdf => "cdf",
        }
    }

    /// Output file name, e.g. `latency-cdf-200.png`.
    pub fn file_name(&self, connections: u64) -> String {
        format!(
            "{}-{}-{}.{}",
            self.data_type(),
            self.graph_type(),
            connections,
            Self::FILE_EXTENSION
        )
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.data_type(), self.graph_type())
    }
}

/// Map any plotters error into [`PlotError::Render`].
pub(crate) fn render_err<E: std::error::Error>(err: E) -> PlotError {
    PlotError::Render(err.to_string())
}

/// Smallest and largest finite value, if any.
pub(crate) fn bounds<'a>(values: impl IntoIterator<Item = &'a f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Axis range covering `lo..hi` with a margin on both sides.
///
/// A zero-width span is widened around its value so the axis stays valid.
pub(crate) fn padded_range(lo: f64, hi: f64) -> Range<f64> {
    let span = hi - lo;
    if span > 0.0 {
        let pad = span * AXIS_MARGIN;
        (lo - pad)..(hi + pad)
    } else if lo == 0.0 {
        -AXIS_MARGIN..AXIS_MARGIN
    } else {
        let pad = lo.abs() * AXIS_MARGIN;
        (lo - pad)..(hi + pad)
    }
}

/// Compact tick label: integers without decimals, otherwise up to three.
pub(crate) fn tick_label(value: &f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        let text = format!("{:.3}", value);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Make sure the parent directory of an output path exists.
pub(crate) fn ensure_parent(path: &Path) -> crate::error::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            std::fs::create_dir_all(dir).map_err(|e| PlotError::io(dir, e))
        }
        _ => Ok(()),
    }
}

/// Small style for rendering tests, or `None` when no font can be laid
/// out on this machine.
#[cfg(test)]
pub(crate) fn test_style() -> Option<ChartStyle> {
    let style = ChartStyle {
        dpi: 72,
        ..ChartStyle::default()
    };
    if style.font().layout_box("WIMA").is_ok() {
        Some(style)
    } else {
        eprintln!("skipping chart output: no {} font", style.font_family);
        None
    }
}

/// Names of the files written, in order.
#[cfg(test)]
pub(crate) fn file_names<'a>(paths: impl IntoIterator<Item = &'a Path>) -> Vec<String> {
    paths
        .into_iter()
        .filter_map(|p| p.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect()
}
