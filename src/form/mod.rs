//! Server-rendered submission form that talks to the relay API.

pub mod client;
pub mod page;

use askama::Template;
use axum::{
    Form, Router,
    extract::{State, rejection::FormRejection},
    response::{Html, IntoResponse},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::api::models::{ArticleRequest, HealthResponse};
use crate::api::response;
use crate::config::FormConfig;
use crate::error::{AppError, Result};
use crate::validation::{ValidationError, validate_form};
use client::RelayClient;
use page::FormPage;

#[derive(Clone)]
pub struct FormState {
    pub relay: RelayClient,
}

impl FormState {
    pub fn new(config: &FormConfig) -> Result<Self> {
        let relay = RelayClient::new(config.backend_process_url.clone(), config.backend_timeout)
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;
        Ok(FormState { relay })
    }
}

pub fn create_router(state: FormState) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_form))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    response::success(HealthResponse::ok())
}

async fn show_form() -> Result<Html<String>> {
    Ok(Html(FormPage::default().render()?))
}

async fn submit_form(
    State(state): State<FormState>,
    form: std::result::Result<Form<ArticleRequest>, FormRejection>,
) -> Result<Html<String>> {
    // A post without both fields is treated like an empty submission.
    let Ok(Form(req)) = form else {
        let page = FormPage::failed(
            String::new(),
            String::new(),
            ValidationError::EmptyFields.form_message(),
        );
        return Ok(Html(page.render()?));
    };

    let page = match validate_form(&req) {
        Err(err) => FormPage::failed(req.email, req.article_url, err.form_message()),
        Ok(()) => match state.relay.submit(&req).await {
            Ok(accepted) => {
                info!(session_id = %accepted.session_id, "relay accepted submission");
                FormPage::submitted(req.email, req.article_url, accepted.session_id)
            }
            Err(err) => {
                warn!(error = %err, "submission to relay failed");
                FormPage::failed(req.email, req.article_url, err.user_message())
            }
        },
    };

    Ok(Html(page.render()?))
}
