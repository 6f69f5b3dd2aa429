//! Run-configuration summary and the connection-count sweep it describes.

use std::fs;
use std::path::Path;

use crate::error::{PlotError, Result};

/// Field positions of begin/end/step in `summary.csv`.
const BEGIN_FIELD: usize = 4;
const END_FIELD: usize = 5;
const STEP_FIELD: usize = 6;

/// Connection-count parameters of a benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// First connection count of the sweep.
    pub begin: u64,
    /// Last connection count that may still be plotted.
    pub end: u64,
    /// Increment between consecutive configurations.
    pub step: u64,
}

impl RunSummary {
    /// Load the summary from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| PlotError::io(path, e))?;
        Self::parse(&content)
    }

    /// Parse the summary text.
    ///
    /// The whole text is split on `,` (line breaks are not field
    /// separators), and fields 4, 5 and 6 hold begin, end and step.
    pub fn parse(content: &str) -> Result<Self> {
        let fields: Vec<&str> = content.split(',').collect();

        let field = |index: usize| -> Result<u64> {
            let raw = fields.get(index).ok_or_else(|| {
                PlotError::Summary(format!(
                    "expected at least {} fields, found {}",
                    index + 1,
                    fields.len()
                ))
            })?;
            raw.trim().parse().map_err(|e| {
                PlotError::Summary(format!("field {} ({:?}) is not a count: {}", index, raw.trim(), e))
            })
        };

        Ok(Self {
            begin: field(BEGIN_FIELD)?,
            end: field(END_FIELD)?,
            step: field(STEP_FIELD)?,
        })
    }

    /// Iterate the connection counts to plot.
    pub fn sweep(&self) -> Result<ConnectionSweep> {
        if self.step == 0 {
            return Err(PlotError::InvalidSweep(format!(
                "step is 0 (begin {}, end {})",
                self.begin, self.end
            )));
        }
        Ok(ConnectionSweep {
            next: Some(self.begin),
            end: self.end,
            step: self.step,
        })
    }
}

/// Connection counts from `begin` in `step` increments.
///
/// `begin` is always yielded, even when it is already past `end`; every
/// later value must be `<= end`.
#[derive(Debug, Clone)]
pub struct ConnectionSweep {
    next: Option<u64>,
    end: u64,
    step: u64,
}

impl Iterator for ConnectionSweep {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.next?;
        self.next = current
            .checked_add(self.step)
            .filter(|following| *following <= self.end);
        Some(current)
    }
}
