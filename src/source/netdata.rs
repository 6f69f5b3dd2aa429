//! Netdata data API source.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::CpuSource;
use crate::config::NetdataSettings;
use crate::data::duration::format_duration;
use crate::error::{PlotError, Result};

/// Column of the Netdata CSV response holding the charted value.
const VALUE_COLUMN: usize = 1;

/// Fetches CPU usage from the Netdata `/api/v1/data` endpoint.
///
/// The window is appended verbatim to the chart URL, so a window line such
/// as `&after=1700000000&before=1700000060` selects the time range.
#[derive(Debug, Clone)]
pub struct NetdataSource {
    client: Client,
    chart_url: String,
    description: String,
}

impl NetdataSource {
    /// Create a source for a fully resolved chart URL.
    pub fn new(chart_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let chart_url = chart_url.into();
        let client = Client::builder().timeout(timeout).build()?;
        let description = format!("netdata: {} (timeout {})", chart_url, format_duration(timeout));
        Ok(Self {
            client,
            chart_url,
            description,
        })
    }

    /// Create a source from settings (container substituted into the URL).
    pub fn from_settings(settings: &NetdataSettings) -> Result<Self> {
        Self::new(settings.chart_url(), settings.timeout()?)
    }

    /// Full request URL for a window.
    pub fn url_for(&self, window: &str) -> String {
        format!("{}{}", self.chart_url, window)
    }
}

#[async_trait]
impl CpuSource for NetdataSource {
    async fn fetch(&self, window: &str) -> Result<Vec<f64>> {
        let url = self.url_for(window);
        debug!("Fetching {}", url);

        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_netdata_csv(&body)
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Extract the value column from a Netdata CSV response.
///
/// The first row is the header; every following row contributes its
/// second column.
pub fn parse_netdata_csv(body: &str) -> Result<Vec<f64>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    reader
        .records()
        .enumerate()
        .map(|(i, record)| {
            let record = record?;
            let row = i + 2;
            let raw = record.get(VALUE_COLUMN).ok_or_else(|| {
                PlotError::Parse(format!("row {} has no column {}", row, VALUE_COLUMN))
            })?;
            raw.trim().parse::<f64>().map_err(|e| {
                PlotError::Parse(format!("row {} value {:?}: {}", row, raw.trim(), e))
            })
        })
        .collect()
}
