use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for a SearXNG instance's JSON search API.
pub struct SearxClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request timed out")]
    Timeout,
    #[error("upstream responded with {status} {text}")]
    Status { status: u16, text: String },
    #[error("upstream request failed: {0}")]
    Other(reqwest::Error),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout
        } else {
            UpstreamError::Other(err)
        }
    }
}

/// Shape of the SearXNG `format=json` response. Fields SearXNG returns
/// beyond these (scores, positions, suggestions, ...) are ignored.
#[derive(Debug, Deserialize)]
pub struct UpstreamSearch {
    #[serde(default)]
    pub results: Vec<UpstreamResult>,
    #[serde(default)]
    pub number_of_results: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct UpstreamResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub engine: String,
}

impl SearxClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<SearxClient> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build upstream HTTP client")?;

        Ok(SearxClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Issue a search against the upstream instance. `page` and `lang` are
    /// forwarded verbatim; the upstream does its own validation.
    pub async fn search(
        &self,
        query: &str,
        page: &str,
        lang: &str,
    ) -> Result<UpstreamSearch, UpstreamError> {
        let url = format!("{}/search", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", query),
                ("pageno", page),
                ("lang", lang),
                ("format", "json"),
                ("results_on_new_tab", "1"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        Ok(response.json::<UpstreamSearch>().await?)
    }
}
