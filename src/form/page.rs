use askama::Template;

use crate::api::models::SUBMITTED_MESSAGE;

pub const RESULTS_NOTE: &str = "Check your email and Google Sheet for results.";

#[derive(Template, Default)]
#[template(path = "form.html")]
pub struct FormPage {
    pub email: String,
    pub article_url: String,
    pub error: Option<String>,
    pub session_id: Option<String>,
}

impl FormPage {
    pub fn failed(email: String, article_url: String, error: impl Into<String>) -> Self {
        FormPage {
            email,
            article_url,
            error: Some(error.into()),
            session_id: None,
        }
    }

    pub fn submitted(email: String, article_url: String, session_id: String) -> Self {
        FormPage {
            email,
            article_url,
            error: None,
            session_id: Some(session_id),
        }
    }

    fn notice(&self) -> &'static str {
        SUBMITTED_MESSAGE
    }

    fn note(&self) -> &'static str {
        RESULTS_NOTE
    }
}
