use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;
use thiserror::Error;

use crate::config::FeedConfig;

/// Failure while retrieving the feed document.
///
/// Transport errors and unsuccessful HTTP statuses collapse into this
/// one type; callers never see partial data.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to retrieve weather feed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather feed request failed with status {0}")]
    Status(reqwest::StatusCode),
}

/// Source of raw feed documents. The HTTP implementation below is the
/// only production source; tests substitute stubs.
#[async_trait]
pub trait FeedSource: Send + Sync + Debug {
    async fn fetch_feed(&self, location_code: &str, metric: bool) -> Result<String, FetchError>;
}

/// Fetches the forecastrss document over HTTP. One GET per call, no
/// retries, platform-default timeout and redirect handling.
#[derive(Debug, Clone, Default)]
pub struct HttpFeedSource {
    config: FeedConfig,
    http: Client,
}

impl HttpFeedSource {
    pub fn new(config: FeedConfig) -> Self {
        Self { config, http: Client::new() }
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch_feed(&self, location_code: &str, metric: bool) -> Result<String, FetchError> {
        let url = self.config.forecast_url(location_code, metric);
        log::debug!("fetching weather feed from {url}");

        let res = self.http.get(&url).send().await?;

        let status = res.status();
        if !status.is_success() {
            log::warn!("weather feed request to {url} returned {status}");
            return Err(FetchError::Status(status));
        }

        // Read the whole body before handing it to the parser.
        let body = res.text().await?;

        Ok(body)
    }
}
