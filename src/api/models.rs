use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const SUBMITTED_MESSAGE: &str = "Submitted successfully. n8n workflow has started.";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArticleRequest {
    pub email: String,
    pub article_url: String,
}

impl ArticleRequest {
    pub fn trimmed(&self) -> ArticleRequest {
        ArticleRequest {
            email: self.email.trim().to_string(),
            article_url: self.article_url.trim().to_string(),
        }
    }
}

/// Job sent to the n8n webhook.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct JobPayload {
    pub email: String,
    pub article_url: String,
    pub session_id: Uuid,
}

impl JobPayload {
    /// Creates a payload from trimmed inputs under a fresh session id.
    pub fn new(req: &ArticleRequest) -> Self {
        let req = req.trimmed();
        JobPayload {
            email: req.email,
            article_url: req.article_url,
            session_id: Uuid::new_v4(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProcessResponse {
    pub message: String,
    pub session_id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        HealthResponse {
            status: "ok".to_string(),
        }
    }
}
