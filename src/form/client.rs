use std::time::Duration;

use reqwest::{Client, ClientBuilder, StatusCode};

use crate::api::models::{ArticleRequest, ProcessResponse};

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("relay answered {0}")]
    Status(StatusCode),

    #[error("relay unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

impl RelayError {
    /// Message shown on the form.
    pub fn user_message(&self) -> &'static str {
        match self {
            RelayError::Status(_) => "Could not process request right now. Please try again.",
            RelayError::Transport(_) => "Could not connect to backend server.",
        }
    }
}

/// Posts form submissions to the relay's `/process` endpoint.
#[derive(Debug, Clone)]
pub struct RelayClient {
    client: Client,
    process_url: String,
}

impl RelayClient {
    pub fn new(process_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = ClientBuilder::new().timeout(timeout).build()?;
        Ok(RelayClient {
            client,
            process_url: process_url.into(),
        })
    }

    pub async fn submit(&self, req: &ArticleRequest) -> Result<ProcessResponse, RelayError> {
        let response = self
            .client
            .post(&self.process_url)
            .json(&req.trimmed())
            .send()
            .await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(RelayError::Status(status));
        }

        Ok(response.json::<ProcessResponse>().await?)
    }
}
