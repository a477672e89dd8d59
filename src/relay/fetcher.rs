//! Authenticated fetch against the configured target.

use std::sync::Arc;

use axum::body::Bytes;

use crate::config::RelayConfig;

/// Content type attached to every relayed body, whatever the remote sent.
pub const RSS_CONTENT_TYPE: &str = "application/rss+xml";

/// Errors that can occur while fetching the remote feed.
///
/// The wrapped errors have their URL stripped: the target path carries the
/// username, and these errors end up in logs.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connecting to or talking with the remote failed.
    #[error("unable to execute request: {0}")]
    Request(#[source] reqwest::Error),

    /// The connection succeeded but reading the body failed.
    #[error("unable to read body: {0}")]
    Body(#[source] reqwest::Error),
}

/// Issues the single outbound GET with HTTP Basic credentials.
///
/// No timeout and no retry are applied. The body is returned whatever the
/// remote status was; non-2xx statuses are only logged.
#[derive(Clone)]
pub struct FeedFetcher {
    client: reqwest::Client,
    config: Arc<RelayConfig>,
}

impl FeedFetcher {
    pub fn new(config: Arc<RelayConfig>) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    fn with_client(client: reqwest::Client, config: Arc<RelayConfig>) -> Self {
        Self { client, config }
    }

    pub async fn fetch_remote(&self) -> Result<Bytes, FetchError> {
        let response = self
            .client
            .get(&self.config.target_url)
            .basic_auth(self.config.username(), Some(self.config.password()))
            .send()
            .await
            .map_err(|e| FetchError::Request(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "Remote returned non-success status, relaying body anyway");
        }

        let body = response.bytes().await.map_err(|e| FetchError::Body(e.without_url()))?;

        tracing::debug!(status = %status, bytes = body.len(), "Fetched remote feed");
        Ok(body)
    }
}
