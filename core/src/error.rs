//! Error types for the board API client.
//!
//! # Design
//! Every failure a call can produce is one tagged variant, so the classifier
//! and the retry predicate are plain matches. Non-2xx responses keep the
//! status code and the server's `detail` text (when the body carried one).

use thiserror::Error;

/// Errors returned by `BoardClient` parse methods and `BoardApi` calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The connection could not be established or was dropped mid-request.
    #[error("network failure: {0}")]
    Network(String),

    /// The request exceeded the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}{}", detail_suffix(.detail))]
    Http { status: u16, detail: Option<String> },

    /// The response body was not the JSON the caller expected.
    #[error("invalid response body: {0}")]
    Parse(String),

    /// The request payload could not be serialized to JSON.
    #[error("request serialization failed: {0}")]
    Serialization(String),

    /// Anything else, carrying a free-form message.
    #[error("{0}")]
    Unknown(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

impl ApiError {
    /// Whether the retry orchestrator may try the call again.
    ///
    /// Only connectivity failures and 5xx responses are transient. Timeouts,
    /// 4xx responses and body errors are terminal.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Network(_) => true,
            ApiError::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout(err.to_string())
        } else if err.is_decode() {
            ApiError::Parse(err.to_string())
        } else if err.is_builder() {
            ApiError::Unknown(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> ApiError {
        ApiError::Http {
            status,
            detail: None,
        }
    }

    #[test]
    fn network_and_5xx_are_retryable() {
        assert!(ApiError::Network("connection refused".into()).is_retryable());
        assert!(http(500).is_retryable());
        assert!(http(503).is_retryable());
        assert!(http(599).is_retryable());
    }

    #[test]
    fn client_errors_and_local_failures_are_terminal() {
        assert!(!http(400).is_retryable());
        assert!(!http(404).is_retryable());
        assert!(!http(429).is_retryable());
        assert!(!ApiError::Timeout("10s".into()).is_retryable());
        assert!(!ApiError::Parse("eof".into()).is_retryable());
        assert!(!ApiError::Serialization("bad".into()).is_retryable());
        assert!(!ApiError::Unknown("??".into()).is_retryable());
    }

    #[test]
    fn display_includes_detail_when_present() {
        let err = ApiError::Http {
            status: 400,
            detail: Some("bad input".into()),
        };
        assert_eq!(err.to_string(), "HTTP 400: bad input");
        assert_eq!(http(502).to_string(), "HTTP 502");
    }

    #[test]
    fn status_only_for_http_variant() {
        assert_eq!(http(404).status(), Some(404));
        assert_eq!(ApiError::Network("x".into()).status(), None);
    }
}
