pub mod api;
pub mod config;
pub mod error;
pub mod fallback;
pub mod form;
pub mod telemetry;
pub mod validation;
pub mod webhook;

use config::Config;
use webhook::WebhookClient;

/// Application state that will be shared across relay handlers
#[derive(Clone)]
pub struct AppState {
    pub webhook: WebhookClient,
}

impl AppState {
    pub fn new(config: &Config) -> error::Result<Self> {
        let webhook = WebhookClient::new(config.webhook_url.clone(), config.webhook_timeout)
            .map_err(|e| error::AppError::ConfigError(e.to_string()))?;
        Ok(AppState { webhook })
    }
}
