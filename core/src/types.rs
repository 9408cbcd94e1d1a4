//! Wire DTOs for the board API.
//!
//! # Design
//! These mirror the backend schema but are defined independently of the
//! mock-server crate; the integration tests catch drift between the two.

use serde::{Deserialize, Serialize};

/// A message as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub id: u64,
    pub content: String,
    pub timestamp: String,
    pub like_count: u64,
    pub dislike_count: u64,
    #[serde(default)]
    pub reply_count: u64,
    #[serde(default)]
    pub parent_id: Option<u64>,
}

/// Request payload for creating a message, or a reply when `parent_id` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMessage {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
}

impl NewMessage {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            parent_id: None,
        }
    }

    pub fn reply(parent_id: u64, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            parent_id: Some(parent_id),
        }
    }
}

/// Success wrapper the server puts around every message payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    pub message: String,
    pub data: T,
}

/// Body of `GET /ping`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PingStatus {
    pub status: String,
    pub message: String,
}

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}
