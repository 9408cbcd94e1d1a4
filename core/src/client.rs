//! Stateless HTTP request builder and response parser for the board API.
//!
//! # Design
//! `BoardClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the HTTP round-trip, so this half stays deterministic
//! and free of I/O.

use serde::de::DeserializeOwned;

use crate::endpoints::{Endpoint, MessageId};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Envelope, Message, NewMessage, PingStatus, ServiceInfo};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Synchronous, stateless client for the board API.
///
/// The base URL is used verbatim: paths are appended with no slash
/// normalization.
#[derive(Debug, Clone)]
pub struct BoardClient {
    base_url: String,
}

impl BoardClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_messages(&self) -> HttpRequest {
        self.get(Endpoint::Messages)
    }

    pub fn build_get_message(&self, id: impl Into<MessageId>) -> HttpRequest {
        self.get(Endpoint::MessageById(id.into()))
    }

    pub fn build_list_replies(&self, id: impl Into<MessageId>) -> HttpRequest {
        self.get(Endpoint::Replies(id.into()))
    }

    pub fn build_create_message(&self, input: &NewMessage) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: Endpoint::Messages.url(&self.base_url),
            headers: vec![("content-type".to_string(), JSON_CONTENT_TYPE.to_string())],
            body: Some(body),
        })
    }

    pub fn build_like_message(&self, id: impl Into<MessageId>) -> HttpRequest {
        self.post_empty(Endpoint::Like(id.into()))
    }

    pub fn build_dislike_message(&self, id: impl Into<MessageId>) -> HttpRequest {
        self.post_empty(Endpoint::Dislike(id.into()))
    }

    pub fn build_ping(&self) -> HttpRequest {
        self.get(Endpoint::Ping)
    }

    pub fn build_service_info(&self) -> HttpRequest {
        self.get(Endpoint::Root)
    }

    pub fn parse_list_messages(&self, response: HttpResponse) -> Result<Vec<Message>, ApiError> {
        parse_envelope(response)
    }

    pub fn parse_get_message(&self, response: HttpResponse) -> Result<Message, ApiError> {
        parse_envelope(response)
    }

    pub fn parse_list_replies(&self, response: HttpResponse) -> Result<Vec<Message>, ApiError> {
        parse_envelope(response)
    }

    pub fn parse_create_message(&self, response: HttpResponse) -> Result<Message, ApiError> {
        parse_envelope(response)
    }

    pub fn parse_like_message(&self, response: HttpResponse) -> Result<Message, ApiError> {
        parse_envelope(response)
    }

    pub fn parse_dislike_message(&self, response: HttpResponse) -> Result<Message, ApiError> {
        parse_envelope(response)
    }

    pub fn parse_ping(&self, response: HttpResponse) -> Result<PingStatus, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_service_info(&self, response: HttpResponse) -> Result<ServiceInfo, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    fn get(&self, endpoint: Endpoint) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: endpoint.url(&self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn post_empty(&self, endpoint: Endpoint) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            url: endpoint.url(&self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }
}

fn parse_envelope<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    let envelope: Envelope<T> = decode(&response.body)?;
    Ok(envelope.data)
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Map non-2xx responses to `ApiError::Http`, keeping the server's `detail`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        detail: extract_detail(&response.body),
    })
}

/// Pull a string `detail` field out of an error body, if there is one.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("detail")?.as_str().map(str::to_string)
}
