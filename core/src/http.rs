//! HTTP transport types for the host-does-IO split.
//!
//! # Design
//! Requests and responses are plain data. `BoardClient` builds `HttpRequest`
//! values and parses `HttpResponse` values without touching the network;
//! `BoardApi` (or any other host) performs the round-trip in between.
//!
//! All fields use owned types so values can be stored in test vectors and
//! moved across tasks freely.

/// HTTP method for a request. The board API only reads and posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// An HTTP request described as plain data.
///
/// `url` is the absolute URL produced by the URL builder.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
