//! Board API tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises every `BoardApi`
//! operation over real HTTP. Validates request building, transport mapping
//! and response parsing end-to-end, plus the error paths callers classify.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use treehole_core::{
    classify, ApiError, BoardApi, Configuration, ErrorCategory, NewMessage,
};

async fn start_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run(listener));
    format!("http://{addr}")
}

fn api(base_url: String) -> BoardApi {
    BoardApi::new(Configuration {
        base_url,
        timeout: Duration::from_secs(5),
        retry_initial_delay: Duration::from_millis(10),
        ..Configuration::default()
    })
    .unwrap()
}

#[tokio::test]
async fn board_lifecycle() {
    let api = api(start_server().await);

    // Step 1: health check.
    let ping = api.ping().await.unwrap();
    assert_eq!(ping.status, "ok");
    let info = api.service_info().await.unwrap();
    assert_eq!(info.name, "TreeHole API");

    // Step 2: list: should be empty.
    let messages = api.fetch_messages().await.unwrap();
    assert!(messages.is_empty(), "expected empty list");

    // Step 3: validate and post.
    let content = "Integration test";
    assert!(api.config().validate_content(content).is_valid);
    let created = api.post_message(&NewMessage::new(content)).await.unwrap();
    assert_eq!(created.content, content);
    assert_eq!(created.like_count, 0);
    let id = created.id;

    // Step 4: like and dislike.
    let liked = api.like_message(id).await.unwrap();
    assert_eq!(liked.like_count, 1);
    let disliked = api.dislike_message(id).await.unwrap();
    assert_eq!(disliked.like_count, 1);
    assert_eq!(disliked.dislike_count, 1);

    // Step 5: reply and list replies.
    let reply = api.post_message(&NewMessage::reply(id, "Reply")).await.unwrap();
    let replies = api.fetch_replies(id).await.unwrap();
    assert_eq!(replies, vec![reply]);

    // Step 6: get reflects the counters.
    let fetched = api.get_message(id).await.unwrap();
    assert_eq!(fetched.like_count, 1);
    assert_eq!(fetched.dislike_count, 1);
    assert_eq!(fetched.reply_count, 1);

    // Step 7: list: one top-level message, read through the retry wrapper.
    let messages = api
        .with_configured_retry(|| api.fetch_messages())
        .await
        .unwrap();
    assert_eq!(messages, vec![fetched]);
}

#[tokio::test]
async fn unknown_message_classifies_as_not_found() {
    let api = api(start_server().await);

    let err = api.like_message(999u64).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(classify(&err).category, ErrorCategory::NotFound);
}

#[tokio::test]
async fn rejected_content_surfaces_server_detail() {
    let api = api(start_server().await);

    let err = api.post_message(&NewMessage::new("   ")).await.unwrap_err();
    let classification = classify(&err);
    assert_eq!(classification.category, ErrorCategory::ValidationError);
    assert_eq!(classification.message, "content must not be empty");
}

#[tokio::test]
async fn client_errors_are_attempted_once() {
    let api = api(start_server().await);
    let calls = AtomicU32::new(0);

    let result = api
        .with_configured_retry(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            api.get_message(42u64)
        })
        .await;

    assert!(matches!(result, Err(ApiError::Http { status: 404, .. })));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn refused_connections_are_retried_until_exhausted() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = api(format!("http://{addr}"));
    let calls = AtomicU32::new(0);

    let result = api
        .with_configured_retry(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            api.fetch_messages()
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)), "got {err:?}");
    assert_eq!(classify(&err).category, ErrorCategory::NetworkError);
    assert_eq!(calls.load(Ordering::SeqCst), api.config().max_retries + 1);
}

#[tokio::test]
async fn unresponsive_server_times_out() {
    // Accepts connections but never answers.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let api = BoardApi::new(Configuration {
        base_url: format!("http://{addr}"),
        timeout: Duration::from_millis(200),
        ..Configuration::default()
    })
    .unwrap();

    let err = api.fetch_messages().await.unwrap_err();
    assert!(matches!(err, ApiError::Timeout(_)), "got {err:?}");
    assert!(!err.is_retryable());
    assert_eq!(classify(&err).category, ErrorCategory::TimeoutError);
}
