//! Maps an `ApiError` to a category and the text shown to the user.
//!
//! # Design
//! Classification is a pure, exhaustive match over `ApiError`. Server-supplied
//! `detail` text wins over catalog text for 400 and unrecognized statuses,
//! because the backend phrases its validation failures for end users.
//! Diagnostic logging happens in `handle_api_error`, never in `classify`.

use tracing::error;

use crate::error::ApiError;
use crate::messages::ErrorCategory;

/// Category plus the display string chosen for one failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: ErrorCategory,
    pub message: String,
}

impl Classification {
    fn catalog(category: ErrorCategory) -> Self {
        Self {
            category,
            message: category.message().to_string(),
        }
    }

    fn with_detail(category: ErrorCategory, detail: &Option<String>) -> Self {
        match detail {
            Some(detail) if !detail.is_empty() => Self {
                category,
                message: detail.clone(),
            },
            _ => Self::catalog(category),
        }
    }
}

pub fn classify(error: &ApiError) -> Classification {
    match error {
        ApiError::Network(_) => Classification::catalog(ErrorCategory::NetworkError),
        ApiError::Timeout(_) => Classification::catalog(ErrorCategory::TimeoutError),
        ApiError::Http { status, detail } => match *status {
            400 => Classification::with_detail(ErrorCategory::ValidationError, detail),
            404 => Classification::catalog(ErrorCategory::NotFound),
            500 => Classification::catalog(ErrorCategory::ServerError),
            _ => Classification::with_detail(ErrorCategory::UnknownError, detail),
        },
        ApiError::Unknown(message) if !message.is_empty() => Classification {
            category: ErrorCategory::UnknownError,
            message: message.clone(),
        },
        ApiError::Unknown(_) | ApiError::Parse(_) | ApiError::Serialization(_) => {
            Classification::catalog(ErrorCategory::UnknownError)
        }
    }
}

/// Log `error` under `context` and return the text to show the user.
pub fn handle_api_error(error: &ApiError, context: &str) -> String {
    let classification = classify(error);
    error!(
        context,
        category = %classification.category,
        error = %error,
        "API call failed"
    );
    classification.message
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn http(status: u16, detail: Option<&str>) -> ApiError {
        ApiError::Http {
            status,
            detail: detail.map(str::to_string),
        }
    }

    #[test]
    fn connectivity_failures() {
        let c = classify(&ApiError::Network("connection refused".into()));
        assert_eq!(c.category, ErrorCategory::NetworkError);
        assert_eq!(c.message, ErrorCategory::NetworkError.message());

        let c = classify(&ApiError::Timeout("deadline elapsed".into()));
        assert_eq!(c.category, ErrorCategory::TimeoutError);
        assert_eq!(c.message, ErrorCategory::TimeoutError.message());
    }

    #[test]
    fn not_found_ignores_detail() {
        let c = classify(&http(404, Some("message not found")));
        assert_eq!(c.category, ErrorCategory::NotFound);
        assert_eq!(c.message, ErrorCategory::NotFound.message());
    }

    #[test]
    fn bad_request_prefers_server_detail() {
        let c = classify(&http(400, Some("bad input")));
        assert_eq!(c.category, ErrorCategory::ValidationError);
        assert_eq!(c.message, "bad input");

        let c = classify(&http(400, None));
        assert_eq!(c.message, ErrorCategory::ValidationError.message());
    }

    #[test]
    fn internal_server_error() {
        let c = classify(&http(500, Some("stack trace")));
        assert_eq!(c.category, ErrorCategory::ServerError);
        assert_eq!(c.message, ErrorCategory::ServerError.message());
    }

    #[test]
    fn other_statuses_fall_back_to_detail_then_unknown() {
        let c = classify(&http(503, Some("maintenance window")));
        assert_eq!(c.category, ErrorCategory::UnknownError);
        assert_eq!(c.message, "maintenance window");

        let c = classify(&http(422, None));
        assert_eq!(c.category, ErrorCategory::UnknownError);
        assert_eq!(c.message, ErrorCategory::UnknownError.message());

        let c = classify(&http(418, Some("")));
        assert_eq!(c.message, ErrorCategory::UnknownError.message());
    }

    #[test]
    fn plain_messages_are_used_verbatim() {
        let c = classify(&ApiError::Unknown("something odd".into()));
        assert_eq!(c.category, ErrorCategory::UnknownError);
        assert_eq!(c.message, "something odd");
    }

    #[test]
    fn everything_else_is_unknown() {
        for err in [
            ApiError::Unknown(String::new()),
            ApiError::Parse("expected value at line 1".into()),
            ApiError::Serialization("key must be a string".into()),
        ] {
            let c = classify(&err);
            assert_eq!(c.category, ErrorCategory::UnknownError);
            assert_eq!(c.message, ErrorCategory::UnknownError.message());
        }
    }

    #[test]
    #[traced_test]
    fn handle_api_error_logs_and_returns_text() {
        let text = handle_api_error(&http(404, None), "loading message");
        assert_eq!(text, ErrorCategory::NotFound.message());
        assert!(logs_contain("API call failed"));
        assert!(logs_contain("loading message"));
        assert!(logs_contain("NOT_FOUND"));
    }
}
