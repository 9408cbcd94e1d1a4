//! Client core for the TreeHole anonymous message board.
//!
//! # Overview
//! Endpoint definitions, a request builder / response parser, an async HTTP
//! client, error classification into user-facing text, retry with
//! exponential backoff, and content-length validation.
//!
//! # Design
//! - `BoardClient` is stateless and I/O-free: `build_*` produces an
//!   `HttpRequest`, `parse_*` consumes an `HttpResponse`.
//! - `BoardApi` executes those requests with `reqwest`; it never retries or
//!   translates errors on its own.
//! - `ApiError` is a tagged enum, so `classify` and the retry predicate are
//!   exhaustive matches.
//! - `Configuration` is loaded once from the environment and is the only
//!   place that parses strings into settings.

pub mod api;
pub mod classify;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod messages;
pub mod notify;
pub mod retry;
pub mod types;
pub mod validate;

pub use api::BoardApi;
pub use classify::{classify, handle_api_error, Classification};
pub use client::BoardClient;
pub use config::{ConfigError, Configuration};
pub use endpoints::{build_url, Endpoint, MessageId};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use messages::{ErrorCategory, SuccessMessage};
pub use notify::{Notifier, TracingNotifier};
pub use retry::with_retry;
pub use types::{Envelope, Message, NewMessage, PingStatus, ServiceInfo};
pub use validate::{validate, ValidationResult};
