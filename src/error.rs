//! Error types for loading measurements and rendering charts.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading inputs, fetching series or
/// rendering charts.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The run summary is missing a field or holds a non-integer value.
    #[error("Invalid run summary: {0}")]
    Summary(String),

    /// A sample record could not be parsed.
    #[error("Invalid samples on line {line}: {reason}")]
    Samples { line: usize, reason: String },

    /// The connection sweep cannot make progress.
    #[error("Invalid connection sweep: {0}")]
    InvalidSweep(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Timeout waiting for response.
    #[error("Request timed out")]
    Timeout,

    /// Connection failed.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Failed to parse a series response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Drawing or encoding the chart failed.
    #[error("Failed to render chart: {0}")]
    Render(String),

    /// Settings could not be loaded.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl PlotError {
    /// Wrap an I/O error together with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PlotError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<reqwest::Error> for PlotError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PlotError::Timeout
        } else if err.is_connect() {
            PlotError::Connection(err.to_string())
        } else {
            PlotError::Http(err.to_string())
        }
    }
}

impl From<csv::Error> for PlotError {
    fn from(err: csv::Error) -> Self {
        PlotError::Parse(err.to_string())
    }
}

impl From<config::ConfigError> for PlotError {
    fn from(err: config::ConfigError) -> Self {
        PlotError::Config(err.to_string())
    }
}

/// Convenience alias used across the library.
pub type Result<T> = std::result::Result<T, PlotError>;
