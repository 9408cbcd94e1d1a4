use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 140;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub content: String,
    pub timestamp: String,
    pub like_count: u64,
    pub dislike_count: u64,
    pub reply_count: u64,
    pub parent_id: Option<u64>,
}

#[derive(Deserialize)]
pub struct CreateMessage {
    pub content: String,
    #[serde(default)]
    pub parent_id: Option<u64>,
}

#[derive(Default)]
pub struct Board {
    next_id: u64,
    messages: BTreeMap<u64, Message>,
}

#[derive(Clone)]
pub struct AppState {
    board: Arc<RwLock<Board>>,
    max_content_length: usize,
}

/// Error body in the backend's `{"detail": ...}` shape.
pub struct ApiFailure {
    status: StatusCode,
    detail: String,
}

impl ApiFailure {
    fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            detail: detail.into(),
        }
    }

    fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            detail: "message not found".to_string(),
        }
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

/// Success body in the backend's `{"code", "message", "data"}` envelope.
fn envelope<T: Serialize>(data: T) -> Json<serde_json::Value> {
    Json(json!({ "code": 0, "message": "success", "data": data }))
}

pub fn app() -> Router {
    app_with_max_length(DEFAULT_MAX_CONTENT_LENGTH)
}

pub fn app_with_max_length(max_content_length: usize) -> Router {
    let state = AppState {
        board: Arc::new(RwLock::new(Board::default())),
        max_content_length,
    };
    Router::new()
        .route("/", get(root))
        .route("/ping", get(ping))
        .route("/messages/", get(list_messages).post(create_message))
        .route("/messages/{id}", get(get_message))
        .route("/messages/{id}/replies", get(list_replies))
        .route("/messages/{id}/like", post(like_message))
        .route("/messages/{id}/dislike", post(dislike_message))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with_max_length(listener, DEFAULT_MAX_CONTENT_LENGTH).await
}

pub async fn run_with_max_length(
    listener: TcpListener,
    max_content_length: usize,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_max_length(max_content_length)).await
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "name": "TreeHole API",
        "version": "1.0.0",
        "description": "Anonymous message board",
    }))
}

async fn ping() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "message": "service is running" }))
}

async fn list_messages(State(state): State<AppState>) -> Json<serde_json::Value> {
    let board = state.board.read().await;
    let newest_first: Vec<&Message> = board
        .messages
        .values()
        .rev()
        .filter(|m| m.parent_id.is_none())
        .collect();
    envelope(newest_first)
}

async fn create_message(
    State(state): State<AppState>,
    Json(input): Json<CreateMessage>,
) -> Result<Json<serde_json::Value>, ApiFailure> {
    let content = input.content.trim();
    if content.is_empty() {
        return Err(ApiFailure::bad_request("content must not be empty"));
    }
    if content.chars().count() > state.max_content_length {
        return Err(ApiFailure::bad_request(format!(
            "content must not exceed {} characters",
            state.max_content_length
        )));
    }

    let mut board = state.board.write().await;
    if let Some(parent_id) = input.parent_id {
        let parent = board
            .messages
            .get_mut(&parent_id)
            .ok_or_else(ApiFailure::not_found)?;
        parent.reply_count += 1;
    }

    board.next_id += 1;
    let message = Message {
        id: board.next_id,
        content: content.to_string(),
        timestamp: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
        like_count: 0,
        dislike_count: 0,
        reply_count: 0,
        parent_id: input.parent_id,
    };
    board.messages.insert(message.id, message.clone());
    info!(id = message.id, "message created");
    Ok(envelope(message))
}

async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<serde_json::Value>, ApiFailure> {
    let board = state.board.read().await;
    board
        .messages
        .get(&id)
        .map(envelope)
        .ok_or_else(ApiFailure::not_found)
}

async fn list_replies(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<serde_json::Value>, ApiFailure> {
    let board = state.board.read().await;
    if !board.messages.contains_key(&id) {
        return Err(ApiFailure::not_found());
    }
    let replies: Vec<&Message> = board
        .messages
        .values()
        .filter(|m| m.parent_id == Some(id))
        .collect();
    Ok(envelope(replies))
}

async fn like_message(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<serde_json::Value>, ApiFailure> {
    let mut board = state.board.write().await;
    let message = board.messages.get_mut(&id).ok_or_else(ApiFailure::not_found)?;
    message.like_count += 1;
    Ok(envelope(&*message))
}

async fn dislike_message(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<serde_json::Value>, ApiFailure> {
    let mut board = state.board.write().await;
    let message = board.messages.get_mut(&id).ok_or_else(ApiFailure::not_found)?;
    message.dislike_count += 1;
    Ok(envelope(&*message))
}
