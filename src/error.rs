use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::response;
use crate::validation::ValidationError;
use crate::webhook::WebhookError;

pub const FORWARD_FAILED_MESSAGE: &str =
    "Could not send the request to n8n right now. Please check webhook settings and try again.";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Forwarding error: {0}")]
    Forward(#[from] WebhookError),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Template rendering error: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::Validation(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            AppError::Forward(err) => {
                tracing::warn!(error = %err, "webhook forwarding failed");
                (StatusCode::BAD_GATEWAY, FORWARD_FAILED_MESSAGE.to_string())
            }
            AppError::InvalidBody(rejection) => (rejection.status(), rejection.body_text()),
            AppError::ConfigError(msg) => {
                tracing::error!("Config error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::Render(err) => {
                tracing::error!(error = %err, "failed to render page");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Could not render page".to_string(),
                )
            }
        };

        response::error(status, detail).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
