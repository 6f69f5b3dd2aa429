//! Sources of CPU usage series.
//!
//! A series is fetched per measurement window (one line of
//! `timestamps.txt`). The live source queries Netdata over HTTP; the file
//! source replays responses saved earlier.

mod file;
mod netdata;

pub use file::FileSource;
pub use netdata::{parse_netdata_csv, NetdataSource};

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::Result;

/// Trait for fetching one CPU usage series per measurement window.
///
/// # Example
///
/// ```no_run
/// use wima_plots::{CpuSource, FileSource};
///
/// # tokio_test::block_on(async {
/// let source = FileSource::new("saved-responses");
/// let series = source.fetch("&after=1700000000&before=1700000060").await?;
/// println!("{} samples from {}", series.len(), source.description());
/// # Ok::<_, wima_plots::PlotError>(())
/// # });
/// ```
#[async_trait]
pub trait CpuSource: Send + Sync + Debug {
    /// Fetch the CPU usage samples of a window.
    async fn fetch(&self, window: &str) -> Result<Vec<f64>>;

    /// Returns a human-readable description of the source.
    fn description(&self) -> &str;
}
