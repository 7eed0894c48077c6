//! Input checks shared by the relay API and the form.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::api::models::ArticleRequest;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("Failed to compile email pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in both fields.")]
    EmptyFields,

    #[error("Please provide a valid email address.")]
    InvalidEmail,

    #[error("Article URL must start with http:// or https://")]
    InvalidArticleUrl,
}

impl ValidationError {
    /// Wording shown on the form page.
    pub fn form_message(&self) -> String {
        match self {
            ValidationError::InvalidEmail => "Please enter a valid email address.".to_string(),
            other => other.to_string(),
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

pub fn is_valid_article_url(url: &str) -> bool {
    let normalized = url.trim().to_lowercase();
    normalized.starts_with("http://") || normalized.starts_with("https://")
}

/// Checks the email, then the URL. The first failure wins.
pub fn validate(req: &ArticleRequest) -> Result<(), ValidationError> {
    if !is_valid_email(&req.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !is_valid_article_url(&req.article_url) {
        return Err(ValidationError::InvalidArticleUrl);
    }
    Ok(())
}

/// Form-side validation: empty fields are reported before the shared checks.
pub fn validate_form(req: &ArticleRequest) -> Result<(), ValidationError> {
    if req.email.is_empty() || req.article_url.is_empty() {
        return Err(ValidationError::EmptyFields);
    }
    validate(req)
}
