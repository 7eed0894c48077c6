use axum::Json;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Body of every non-2xx response.
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

pub fn success<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn error(status: StatusCode, detail: String) -> (StatusCode, Json<ErrorBody>) {
    (status, Json(ErrorBody { detail }))
}
