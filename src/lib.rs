//! # wima-plots
//!
//! Comparison charts for WIMA vs Baseline benchmark runs.
//!
//! A benchmark run sweeps the number of connections from `begin` to `end`
//! in `step` increments (fields 4-6 of `summary.csv`). For every
//! configuration the inputs hold one WIMA record followed by one Baseline
//! record, and each binary renders one chart per configuration:
//!
//! | binary         | records          | chart                          |
//! |----------------|------------------|--------------------------------|
//! | `plt-cpu-line` | `timestamps.txt` | CPU usage over time (Netdata)  |
//! | `plt-lat-bp`   | `latency.raw`    | latency boxplot                |
//! | `plt-lat-cdf`  | `latency.raw`    | fitted normal CDF of latencies |
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌───────────┐  │
//! │  │  data   │───▶│   plot   │───▶│  chart  │───▶│ PNG files │  │
//! │  │(inputs) │    │ (sweeps) │    │(render) │    └───────────┘  │
//! │  └─────────┘    └────┬─────┘    └─────────┘                   │
//! │                      │                                        │
//! │                 ┌────┴────┐                                   │
//! │                 │ source  │◀── NetdataSource | FileSource     │
//! │                 └─────────┘                                   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`data`]**: run summary, sample records, pairing and statistics
//! - **[`source`]**: CPU series sources ([`CpuSource`] trait)
//! - **[`chart`]**: plotters rendering of the line, boxplot and CDF charts
//! - **[`plot`]**: the sweep pipelines tying inputs to charts
//! - **[`config`]**: layered settings (defaults, TOML file, environment)
//! - **[`report`]**: JSON export of a finished sweep
//!
//! ## Usage
//!
//! ### As CLI tools
//!
//! ```bash
//! # Latency boxplots from ./summary.csv and ./latency.raw
//! plt-lat-bp graphs/
//!
//! # CPU line charts from a saved set of Netdata responses
//! plt-cpu-line graphs/ --replay responses/
//! ```
//!
//! ### As a library
//!
//! ```no_run
//! use std::path::Path;
//! use wima_plots::{plot_latency_cdfs, ChartStyle, SweepInputs};
//!
//! let inputs = SweepInputs {
//!     summary: "summary.csv".into(),
//!     records: "latency.raw".into(),
//! };
//! let rendered = plot_latency_cdfs(&inputs, Path::new("graphs"), &ChartStyle::default())?;
//! println!("{} charts", rendered.len());
//! # Ok::<_, wima_plots::PlotError>(())
//! ```

pub mod chart;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod plot;
pub mod report;
pub mod source;

// Re-export main types for convenience
pub use chart::{ChartKind, ChartStyle};
pub use config::Settings;
pub use data::{BoxStats, Condition, Paired, RunSummary, SeriesSummary};
pub use error::PlotError;
pub use plot::{plot_cpu_lines, plot_latency_boxplots, plot_latency_cdfs, Rendered, SweepInputs};
pub use report::SweepReport;
pub use source::{CpuSource, FileSource, NetdataSource};
