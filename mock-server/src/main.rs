use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let max_length = max_content_length(std::env::var("MAX_CONTENT_LENGTH").ok());

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, max_length, "listening");
    mock_server::run_with_max_length(listener, max_length).await
}

fn max_content_length(raw: Option<String>) -> usize {
    let Some(raw) = raw else {
        return mock_server::DEFAULT_MAX_CONTENT_LENGTH;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(
                value = %raw,
                default = mock_server::DEFAULT_MAX_CONTENT_LENGTH,
                "ignoring malformed MAX_CONTENT_LENGTH"
            );
            mock_server::DEFAULT_MAX_CONTENT_LENGTH
        }
    }
}
