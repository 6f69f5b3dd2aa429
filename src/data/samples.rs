//! Sample records and the WIMA/Baseline pairing applied to them.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{PlotError, Result};

/// One of the two experimental conditions compared in every chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Wima,
    Baseline,
}

impl Condition {
    /// Both conditions, in the order their records appear in the inputs.
    pub const ALL: [Condition; 2] = [Condition::Wima, Condition::Baseline];

    /// Legend and tick label.
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Wima => "WIMA",
            Condition::Baseline => "Baseline",
        }
    }
}

/// A WIMA record and the Baseline record that follows it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paired<T> {
    pub wima: T,
    pub baseline: T,
}

impl<T> Paired<T> {
    /// Borrow the record of a condition.
    pub fn get(&self, condition: Condition) -> &T {
        match condition {
            Condition::Wima => &self.wima,
            Condition::Baseline => &self.baseline,
        }
    }

    /// Borrow both records.
    pub fn each_ref(&self) -> Paired<&T> {
        Paired {
            wima: &self.wima,
            baseline: &self.baseline,
        }
    }

    /// Apply `f` to both records.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Paired<U> {
        Paired {
            wima: f(self.wima),
            baseline: f(self.baseline),
        }
    }

    /// Apply a fallible `f` to both records, WIMA first.
    pub fn try_map<U, E>(
        self,
        mut f: impl FnMut(T) -> std::result::Result<U, E>,
    ) -> std::result::Result<Paired<U>, E> {
        Ok(Paired {
            wima: f(self.wima)?,
            baseline: f(self.baseline)?,
        })
    }
}

/// Take records two at a time: WIMA first, then Baseline.
///
/// A trailing record without a partner is dropped.
pub fn pairs<I>(records: I) -> Pairs<I::IntoIter>
where
    I: IntoIterator,
{
    Pairs {
        inner: records.into_iter(),
    }
}

/// Iterator returned by [`pairs`].
#[derive(Debug, Clone)]
pub struct Pairs<I> {
    inner: I,
}

impl<I: Iterator> Iterator for Pairs<I> {
    type Item = Paired<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let wima = self.inner.next()?;
        let baseline = self.inner.next()?;
        Some(Paired { wima, baseline })
    }
}

/// Parse one comma-separated record of floating-point samples.
pub fn parse_sample_line(line: &str) -> std::result::Result<Vec<f64>, String> {
    line.split(',')
        .enumerate()
        .map(|(i, field)| {
            let field = field.trim();
            if field.is_empty() {
                return Err(format!("field {} is empty", i));
            }
            field
                .parse::<f64>()
                .map_err(|e| format!("field {} ({:?}): {}", i, field, e))
        })
        .collect()
}

/// Lazily parse newline-delimited sample records.
///
/// Errors name the 1-based line number of the offending record. Lines
/// after the last one consumed are never parsed.
pub fn sample_records(content: &str) -> impl Iterator<Item = Result<Vec<f64>>> + '_ {
    content.lines().enumerate().map(|(i, line)| {
        parse_sample_line(line).map_err(|reason| PlotError::Samples {
            line: i + 1,
            reason,
        })
    })
}

/// Parse every sample record.
pub fn parse_sample_sets(content: &str) -> Result<Vec<Vec<f64>>> {
    sample_records(content).collect()
}

/// Read a measurement file (e.g. `latency.raw`) into memory.
pub fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| PlotError::io(path, e))
}

/// Load and parse every sample record of a file.
pub fn load_sample_sets(path: &Path) -> Result<Vec<Vec<f64>>> {
    parse_sample_sets(&read_input(path)?)
}

/// Load measurement windows (e.g. `timestamps.txt`), one per line, verbatim.
pub fn load_windows(path: &Path) -> Result<Vec<String>> {
    let content = read_input(path)?;
    Ok(content.lines().map(str::to_string).collect())
}
