//! Presentation seam for user-facing notifications.
//!
//! A UI implements `Notifier` to show toasts; `TracingNotifier` is the
//! headless default and simply logs.

use tracing::{error, info, warn};

use crate::classify::handle_api_error;
use crate::error::ApiError;
use crate::messages::SuccessMessage;

pub trait Notifier {
    fn success(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(notification = "success", "{message}");
    }

    fn warning(&self, message: &str) {
        warn!(notification = "warning", "{message}");
    }

    fn error(&self, message: &str) {
        error!(notification = "error", "{message}");
    }
}

/// Classify `err`, log it under `context`, and show the result.
pub fn show_error_message<N: Notifier + ?Sized>(notifier: &N, err: &ApiError, context: &str) {
    notifier.error(&handle_api_error(err, context));
}

pub fn show_success_message<N: Notifier + ?Sized>(notifier: &N, message: SuccessMessage) {
    notifier.success(message.text());
}

pub fn show_warning_message<N: Notifier + ?Sized>(notifier: &N, message: &str) {
    notifier.warning(message);
}
