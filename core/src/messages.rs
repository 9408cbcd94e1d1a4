//! User-facing text for error categories and successful operations.

use std::fmt;

/// Fixed set of categories an observed failure is mapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    NetworkError,
    TimeoutError,
    ServerError,
    ValidationError,
    NotFound,
    UnknownError,
}

impl ErrorCategory {
    pub fn message(self) -> &'static str {
        match self {
            ErrorCategory::NetworkError => {
                "Network connection failed, please check your network settings"
            }
            ErrorCategory::TimeoutError => "The request timed out, please try again later",
            ErrorCategory::ServerError => "Server error, please try again later",
            ErrorCategory::ValidationError => "The submitted data is invalid",
            ErrorCategory::NotFound => "The requested resource does not exist",
            ErrorCategory::UnknownError => "An unknown error occurred, please try again later",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            ErrorCategory::NetworkError => "NETWORK_ERROR",
            ErrorCategory::TimeoutError => "TIMEOUT_ERROR",
            ErrorCategory::ServerError => "SERVER_ERROR",
            ErrorCategory::ValidationError => "VALIDATION_ERROR",
            ErrorCategory::NotFound => "NOT_FOUND",
            ErrorCategory::UnknownError => "UNKNOWN_ERROR",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Confirmation shown after a write succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessMessage {
    MessageCreated,
    MessageLiked,
    MessageDisliked,
}

impl SuccessMessage {
    pub fn text(self) -> &'static str {
        match self {
            SuccessMessage::MessageCreated => "Message posted!",
            SuccessMessage::MessageLiked => "Liked!",
            SuccessMessage::MessageDisliked => "Disliked!",
        }
    }
}
