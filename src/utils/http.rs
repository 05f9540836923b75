//! Spreadsheet download
//!
//! Fetches a Google Sheets tab as CSV through the public export endpoint.

use crate::error::{Result, ShienError};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Build the CSV export URL for a spreadsheet tab
pub fn export_url(key: &str, gid: &str) -> String {
    format!("https://docs.google.com/spreadsheets/d/{key}/export?format=csv&gid={gid}")
}

/// Blocking client for the spreadsheet export endpoint
#[derive(Debug)]
pub struct SheetClient {
    client: Client,
}

impl SheetClient {
    /// Create a client whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ShienError::config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Download the tab `gid` of spreadsheet `key` as CSV bytes
    ///
    /// Transport errors and non-success statuses are both errors.
    #[instrument(skip(self, key))]
    pub fn fetch_csv(&self, key: &str, gid: &str) -> Result<Vec<u8>> {
        info!("Fetching schedule (gid {})", gid);
        self.fetch_url(&export_url(key, gid))
    }

    /// Download the body at `url`
    pub fn fetch_url(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ShienError::fetch(url, e))?;

        let status = response.status();
        debug!("Export endpoint answered {}", status);
        if !status.is_success() {
            return Err(ShienError::http_status(url, status.as_u16()));
        }

        let body = response.bytes().map_err(|e| ShienError::fetch(url, e))?;
        debug!("Downloaded {} bytes", body.len());
        Ok(body.to_vec())
    }
}
