//! Retry target selection for a failed webhook call.
//!
//! n8n serves test workflows under `/webhook-test/` only while the editor is
//! listening; once the workflow is activated the same path answers 404 and
//! the production route lives under `/webhook/`.

use reqwest::StatusCode;

/// Picks the URL for a single retry, or `None` when no retry applies.
pub type FallbackPolicy = fn(url: &str, status: StatusCode) -> Option<String>;

const TEST_SEGMENT: &str = "/webhook-test/";
const PRODUCTION_SEGMENT: &str = "/webhook/";

/// Retries a 404 from an n8n test URL against its production URL.
pub fn webhook_test_fallback(url: &str, status: StatusCode) -> Option<String> {
    if status != StatusCode::NOT_FOUND || !url.contains(TEST_SEGMENT) {
        return None;
    }
    Some(url.replacen(TEST_SEGMENT, PRODUCTION_SEGMENT, 1))
}

/// Never retries.
pub fn no_fallback(_url: &str, _status: StatusCode) -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_test_url_on_404() {
        assert_eq!(
            webhook_test_fallback(
                "http://localhost:5678/webhook-test/article-agent",
                StatusCode::NOT_FOUND
            ),
            Some("http://localhost:5678/webhook/article-agent".to_string())
        );
    }

    #[test]
    fn only_first_occurrence_is_replaced() {
        assert_eq!(
            webhook_test_fallback(
                "http://n8n/webhook-test/a/webhook-test/b",
                StatusCode::NOT_FOUND
            ),
            Some("http://n8n/webhook/a/webhook-test/b".to_string())
        );
    }

    #[test]
    fn ignores_other_statuses() {
        for status in [
            StatusCode::OK,
            StatusCode::GONE,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::BAD_GATEWAY,
        ] {
            assert_eq!(
                webhook_test_fallback("http://n8n/webhook-test/a", status),
                None
            );
        }
    }

    #[test]
    fn ignores_production_urls() {
        assert_eq!(
            webhook_test_fallback("http://n8n/webhook/a", StatusCode::NOT_FOUND),
            None
        );
        // No trailing slash after the segment.
        assert_eq!(
            webhook_test_fallback("http://n8n/webhook-test", StatusCode::NOT_FOUND),
            None
        );
    }

    #[test]
    fn no_fallback_never_retries() {
        assert_eq!(
            no_fallback("http://n8n/webhook-test/a", StatusCode::NOT_FOUND),
            None
        );
    }
}
