//! Bounded retry with exponential backoff around an async API call.
//!
//! The call is attempted at most `max_retries + 1` times. Only failures for
//! which `ApiError::is_retryable` holds are retried; the delay starts at
//! `initial_delay` and doubles after every retry. Per-attempt timeouts are
//! the transport's job.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::error::ApiError;

pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_millis(1000);

pub async fn with_retry<F, Fut, T>(
    mut call: F,
    max_retries: u32,
    initial_delay: Duration,
) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut delay = initial_delay;
    let mut attempt = 0;

    loop {
        match call().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() && attempt < max_retries => {
                attempt += 1;
                warn!(
                    error = %err,
                    attempt,
                    max_retries,
                    delay_ms = saturating_millis(delay),
                    "API call failed, retrying"
                );
                tokio::time::sleep(delay).await;
                delay = delay.saturating_mul(2);
            }
            Err(err) => return Err(err),
        }
    }
}

fn saturating_millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}
