//! Async board API client over a real HTTP transport.
//!
//! # Design
//! `BoardApi` pairs the stateless `BoardClient` with a `reqwest::Client`
//! configured from `Configuration`. Every operation is one request: build,
//! execute, parse. Nothing here retries or translates errors; callers opt in
//! with `with_configured_retry` and map failures with `handle_api_error`.
//!
//! Both halves are cheap to clone and hold no per-call state, so concurrent
//! tasks may share one instance. Duplicate writes (double likes) are the
//! caller's concern.

use std::future::Future;

use tracing::debug;

use crate::client::BoardClient;
use crate::config::Configuration;
use crate::endpoints::MessageId;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::retry::with_retry;
use crate::types::{Message, NewMessage, PingStatus, ServiceInfo};

#[derive(Debug, Clone)]
pub struct BoardApi {
    client: BoardClient,
    http: reqwest::Client,
    config: Configuration,
}

impl BoardApi {
    /// Build a client whose requests time out after `config.timeout`.
    pub fn new(config: Configuration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client: BoardClient::new(&config.base_url),
            http,
            config,
        })
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn client(&self) -> &BoardClient {
        &self.client
    }

    /// Perform one HTTP round-trip. Non-2xx statuses are returned as data.
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), url = %request.url, "sending request");

        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(&request.url),
            HttpMethod::Post => self.http.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.text().await?;

        debug!(status, url = %request.url, "received response");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    pub async fn fetch_messages(&self) -> Result<Vec<Message>, ApiError> {
        let response = self.execute(self.client.build_list_messages()).await?;
        self.client.parse_list_messages(response)
    }

    pub async fn post_message(&self, input: &NewMessage) -> Result<Message, ApiError> {
        let request = self.client.build_create_message(input)?;
        let response = self.execute(request).await?;
        self.client.parse_create_message(response)
    }

    pub async fn like_message(&self, id: impl Into<MessageId>) -> Result<Message, ApiError> {
        let response = self.execute(self.client.build_like_message(id)).await?;
        self.client.parse_like_message(response)
    }

    pub async fn dislike_message(&self, id: impl Into<MessageId>) -> Result<Message, ApiError> {
        let response = self.execute(self.client.build_dislike_message(id)).await?;
        self.client.parse_dislike_message(response)
    }

    pub async fn get_message(&self, id: impl Into<MessageId>) -> Result<Message, ApiError> {
        let response = self.execute(self.client.build_get_message(id)).await?;
        self.client.parse_get_message(response)
    }

    pub async fn fetch_replies(&self, id: impl Into<MessageId>) -> Result<Vec<Message>, ApiError> {
        let response = self.execute(self.client.build_list_replies(id)).await?;
        self.client.parse_list_replies(response)
    }

    pub async fn ping(&self) -> Result<PingStatus, ApiError> {
        let response = self.execute(self.client.build_ping()).await?;
        self.client.parse_ping(response)
    }

    pub async fn service_info(&self) -> Result<ServiceInfo, ApiError> {
        let response = self.execute(self.client.build_service_info()).await?;
        self.client.parse_service_info(response)
    }

    /// Run `call` under the configured retry count and initial backoff.
    ///
    /// Writes are not idempotent on the server: retrying `post_message` after
    /// a 5xx can create the message twice. Prefer wrapping reads.
    pub async fn with_configured_retry<F, Fut, T>(&self, call: F) -> Result<T, ApiError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        with_retry(call, self.config.max_retries, self.config.retry_initial_delay).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_uses_configured_base_url() {
        let config = Configuration {
            base_url: "http://test.example.com".to_string(),
            ..Configuration::default()
        };
        let api = BoardApi::new(config).unwrap();
        assert_eq!(api.client().base_url(), "http://test.example.com");
        assert_eq!(
            api.client().build_list_messages().url,
            "http://test.example.com/messages/"
        );
    }

    #[tokio::test]
    async fn refused_connection_is_a_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = BoardApi::new(Configuration {
            base_url: format!("http://{addr}"),
            timeout: Duration::from_secs(5),
            ..Configuration::default()
        })
        .unwrap();

        let err = api.fetch_messages().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)), "got {err:?}");
        assert!(err.is_retryable());
    }
}
