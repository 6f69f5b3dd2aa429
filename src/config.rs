//! Settings for inputs, the Netdata endpoint and chart styling.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! environment variables prefixed with `WIMA_PLOTS` (nested keys use `__`).
//!
//! ```toml
//! [inputs]
//! summary = "summary.csv"
//! latency = "latency.raw"
//! timestamps = "timestamps.txt"
//!
//! [netdata]
//! url = "http://10.7.229.175:19999/api/v1/data?chart=cgroup_container_name.cpu_limit&format=csv"
//! container = "wima_master"
//! timeout = "15s"
//!
//! [style]
//! dpi = 600
//! ```
//!
//! ```bash
//! WIMA_PLOTS_NETDATA__CONTAINER=wima_worker plt-cpu-line graphs/
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::chart::ChartStyle;
use crate::data::duration::parse_duration;
use crate::error::Result;

/// Environment variable prefix for settings overrides.
pub const ENV_PREFIX: &str = "WIMA_PLOTS";

/// All settings used by the plotting entry points.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub inputs: InputPaths,
    pub netdata: NetdataSettings,
    pub style: ChartStyle,
}

impl Settings {
    /// Load settings, optionally reading a TOML file first.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        let config = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("_").separator("__"))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}

/// Locations of the measurement files.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputPaths {
    /// Run-configuration summary with the connection sweep.
    pub summary: PathBuf,
    /// Latency samples, one record per line.
    pub latency: PathBuf,
    /// Netdata query windows, one per line.
    pub timestamps: PathBuf,
}

impl Default for InputPaths {
    fn default() -> Self {
        Self {
            summary: PathBuf::from("summary.csv"),
            latency: PathBuf::from("latency.raw"),
            timestamps: PathBuf::from("timestamps.txt"),
        }
    }
}

/// Netdata data API settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NetdataSettings {
    /// Request URL; `container_name` is replaced by [`Self::container`].
    pub url: String,
    /// cgroup container whose CPU limit chart is queried.
    pub container: String,
    /// Request timeout (e.g. "15s").
    pub timeout: String,
}

impl NetdataSettings {
    /// Placeholder in [`Self::url`] substituted with the container.
    pub const CONTAINER_PLACEHOLDER: &'static str = "container_name";

    /// Parsed request timeout.
    pub fn timeout(&self) -> Result<Duration> {
        parse_duration(&self.timeout)
    }

    /// URL with the container substituted, before the window is appended.
    pub fn chart_url(&self) -> String {
        self.url.replace(Self::CONTAINER_PLACEHOLDER, &self.container)
    }
}

impl Default for NetdataSettings {
    fn default() -> Self {
        Self {
            url: "http://10.7.229.175:19999/api/v1/data?chart=cgroup_container_name.cpu_limit&format=csv"
                .to_string(),
            container: "wima_master".to_string(),
            timeout: "15s".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.inputs.summary, PathBuf::from("summary.csv"));
        assert_eq!(settings.netdata.timeout().unwrap(), Duration::from_secs(15));
        assert_eq!(
            settings.netdata.chart_url(),
            "http://10.7.229.175:19999/api/v1/data?chart=cgroup_wima_master.cpu_limit&format=csv"
        );
        assert_eq!(settings.style.dpi, 600);
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[inputs]
latency = "runs/latency.raw"

[netdata]
container = "wima_worker"
timeout = "2s"

[style]
dpi = 100
"#
        )
        .unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.inputs.latency, PathBuf::from("runs/latency.raw"));
        assert_eq!(settings.inputs.summary, PathBuf::from("summary.csv"));
        assert_eq!(settings.netdata.container, "wima_worker");
        assert_eq!(settings.netdata.timeout().unwrap(), Duration::from_secs(2));
        assert_eq!(settings.style.dpi, 100);
        assert_eq!(settings.style.num_ticks, 12);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = Settings::load(Some(Path::new("/nonexistent/wima.toml"))).unwrap_err();
        assert!(err.to_string().contains("configuration"));
    }
}
