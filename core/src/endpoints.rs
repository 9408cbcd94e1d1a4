//! Endpoint registry and URL builder for the board API.
//!
//! Paths are relative to the configured base URL and always start with `/`.
//! Identifiers are rendered as-is; a malformed id produces a malformed URL
//! that the server rejects.

use std::fmt;

/// One logical server operation, identified by its path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /` service information.
    Root,
    /// `GET /ping` health check.
    Ping,
    /// `GET /messages/` list and `POST /messages/` create.
    Messages,
    MessageById(MessageId),
    Replies(MessageId),
    Like(MessageId),
    Dislike(MessageId),
}

/// Identifier segment of a parameterized path.
///
/// The server uses integers, but any displayable value is accepted here so
/// callers can pass ids through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageId(String);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for MessageId {
    fn from(id: u64) -> Self {
        MessageId(id.to_string())
    }
}

impl From<&str> for MessageId {
    fn from(id: &str) -> Self {
        MessageId(id.to_string())
    }
}

impl From<String> for MessageId {
    fn from(id: String) -> Self {
        MessageId(id)
    }
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Endpoint::Root => "/".to_string(),
            Endpoint::Ping => "/ping".to_string(),
            Endpoint::Messages => "/messages/".to_string(),
            Endpoint::MessageById(id) => format!("/messages/{id}"),
            Endpoint::Replies(id) => format!("/messages/{id}/replies"),
            Endpoint::Like(id) => format!("/messages/{id}/like"),
            Endpoint::Dislike(id) => format!("/messages/{id}/dislike"),
        }
    }

    pub fn url(&self, base: &str) -> String {
        build_url(base, &self.path())
    }
}

/// Join a base URL and an endpoint path by plain concatenation.
///
/// No slash reconciliation happens: `build_url("http://h/", "/x")` yields
/// `http://h//x`.
pub fn build_url(base: &str, path: &str) -> String {
    format!("{base}{path}")
}
