//! File-based replay source.
//!
//! Reads Netdata CSV responses saved to a directory, one file per window.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tracing::debug;

use super::{parse_netdata_csv, CpuSource};
use crate::error::{PlotError, Result};

/// A source that replays saved Netdata responses.
///
/// The n-th call to `fetch` (counting from zero) reads `<dir>/<n>.csv`,
/// whatever the window text is, so the files follow the order of
/// `timestamps.txt`.
#[derive(Debug)]
pub struct FileSource {
    dir: PathBuf,
    description: String,
    next_index: AtomicUsize,
}

impl FileSource {
    /// Create a replay source for the given directory.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref().to_path_buf();
        let description = format!("replay: {}", dir.display());
        Self {
            dir,
            description,
            next_index: AtomicUsize::new(0),
        }
    }

    /// Returns the directory being replayed.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the response for the n-th window.
    pub fn response_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}.csv", index))
    }
}

#[async_trait]
impl CpuSource for FileSource {
    async fn fetch(&self, window: &str) -> Result<Vec<f64>> {
        let index = self.next_index.fetch_add(1, Ordering::Relaxed);
        let path = self.response_path(index);
        debug!("Replaying window {:?} from {}", window, path.display());

        let body = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| PlotError::io(&path, e))?;
        parse_netdata_csv(&body)
    }

    fn description(&self) -> &str {
        &self.description
    }
}
