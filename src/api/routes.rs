use axum::{
    Router,
    extract::{Json, State, rejection::JsonRejection},
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppState;
use crate::api::models::{ArticleRequest, HealthResponse, JobPayload, ProcessResponse, SUBMITTED_MESSAGE};
use crate::api::response;
use crate::error::Result;
use crate::validation::validate;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/process", post(process_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn health_handler() -> impl IntoResponse {
    response::success(HealthResponse::ok())
}

async fn process_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ArticleRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(req) = payload?;
    validate(&req)?;

    let job = JobPayload::new(&req);
    info!(session_id = %job.session_id, "accepted article request");

    state.webhook.forward(&job).await?;

    Ok(response::success(ProcessResponse {
        message: SUBMITTED_MESSAGE.to_string(),
        session_id: job.session_id.to_string(),
    }))
}
