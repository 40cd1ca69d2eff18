//! HTTP client for the video search endpoint.

use reqwest::header::AUTHORIZATION;
use reqwest::Client;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::video::{SearchResponse, VideoSummary};

/// Search client. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct VideoApi {
    client: Client,
    config: ClientConfig,
}

impl VideoApi {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(Error::ClientSetup)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Run one search. An empty query lists everything the endpoint offers.
    ///
    /// Any non-2xx status is reported as [`Error::Status`]; the body of such
    /// responses is not inspected.
    pub async fn search(&self, query: &str) -> Result<Vec<VideoSummary>> {
        let url = self.config.search_url()?;
        tracing::debug!(%url, query, "Searching videos");

        let mut request = self.client.get(url).query(&[("search", query)]);
        match &self.config.token {
            Some(token) => request = request.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => tracing::warn!("No credential configured, sending unauthenticated search"),
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), query, "Search request rejected");
            return Err(Error::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let parsed: SearchResponse = serde_json::from_slice(&body)?;
        let videos = parsed.into_summaries();
        tracing::debug!(count = videos.len(), query, "Search completed");
        Ok(videos)
    }
}
