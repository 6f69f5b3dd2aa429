//! JSON export of a finished sweep.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::data::{Paired, SeriesSummary};
use crate::error::{PlotError, Result};
use crate::plot::Rendered;

/// Everything written during one sweep.
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    /// Chart type, e.g. `latency-boxplot`.
    pub chart: String,
    pub charts: Vec<ChartEntry>,
}

/// One rendered chart and the statistics of its two series.
#[derive(Debug, Clone, Serialize)]
pub struct ChartEntry {
    pub connections: u64,
    pub file: PathBuf,
    pub series: Paired<Option<SeriesSummary>>,
}

impl SweepReport {
    /// Build a report for charts of a single kind.
    pub fn new(chart: impl Into<String>, rendered: &[Rendered]) -> Self {
        Self {
            chart: chart.into(),
            charts: rendered
                .iter()
                .map(|r| ChartEntry {
                    connections: r.connections,
                    file: r.path.clone(),
                    series: r.summary.clone(),
                })
                .collect(),
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| PlotError::Parse(e.to_string()))
    }

    /// Write the report to a file.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| PlotError::io(path, e))
    }
}
