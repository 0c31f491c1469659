//! HTTP fetch of the two frab source documents

use std::time::Duration;

use crate::{Error, Result};

/// Per-request timeout. A fetch that exceeds it fails the whole run; there
/// are no retries.
const FETCH_TIMEOUT: Duration = Duration::from_secs(2);

/// Client for a frab instance's public JSON endpoints.
pub struct FrabClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl FrabClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch `{base}/public/schedule.json`, fully read.
    pub async fn schedule(&self) -> Result<Vec<u8>> {
        self.get("public/schedule.json").await
    }

    /// Fetch `{base}/public/speakers.json`, fully read.
    pub async fn speakers(&self) -> Result<Vec<u8>> {
        self.get("public/speakers.json").await
    }

    async fn get(&self, path: &str) -> Result<Vec<u8>> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(url = %url, "Fetching frab document");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Network(format!("GET {} returned {}", url, status)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        tracing::debug!(url = %url, bytes = body.len(), "Fetched frab document");
        Ok(body.to_vec())
    }
}
