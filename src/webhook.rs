//! Outbound client for the n8n webhook.

use std::time::Duration;

use reqwest::{Client, ClientBuilder, StatusCode};
use tracing::{debug, info, info_span, warn, Instrument};

use crate::api::models::JobPayload;
use crate::fallback::{webhook_test_fallback, FallbackPolicy};

#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered {status}")]
    Status { url: String, status: StatusCode },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Sends job payloads to a single configured webhook URL.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: Client,
    url: String,
    fallback: FallbackPolicy,
}

impl WebhookClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, WebhookError> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .build()
            .map_err(WebhookError::Client)?;

        Ok(WebhookClient {
            client,
            url: url.into(),
            fallback: webhook_test_fallback,
        })
    }

    /// Replaces the retry policy applied after the first attempt.
    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    /// Posts the payload, retrying once if the fallback policy names a URL.
    ///
    /// Succeeds when the final response is neither a client nor a server
    /// error.
    pub async fn forward(&self, payload: &JobPayload) -> Result<(), WebhookError> {
        let span = info_span!("forward", session_id = %payload.session_id);

        async move {
            let mut status = self.post(&self.url, payload).await?;
            let mut url = self.url.clone();

            if let Some(fallback_url) = (self.fallback)(&self.url, status) {
                info!(from = %self.url, to = %fallback_url, %status, "retrying on fallback URL");
                status = self.post(&fallback_url, payload).await?;
                url = fallback_url;
            }

            if status.is_client_error() || status.is_server_error() {
                return Err(WebhookError::Status { url, status });
            }

            info!(%url, %status, "webhook accepted job");
            Ok(())
        }
        .instrument(span)
        .await
    }

    async fn post(&self, url: &str, payload: &JobPayload) -> Result<StatusCode, WebhookError> {
        debug!(%url, "posting job payload");
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|source| {
                warn!(%url, error = %source, "webhook request failed");
                WebhookError::Transport {
                    url: url.to_string(),
                    source,
                }
            })?;

        Ok(response.status())
    }
}
