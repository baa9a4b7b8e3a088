//! Retry and timeout helpers for RPC operations

use crate::errors::{RpcError, RpcResult};
use std::time::Duration;
use tokio::time::timeout;

/// Calculate the next backoff duration using exponential backoff with a
/// maximum cap: `min(current * multiplier, max_backoff_seconds)`
pub fn calculate_next_backoff(
    current_backoff: Duration,
    multiplier: f64,
    max_backoff_seconds: u64,
) -> Duration {
    Duration::from_millis((current_backoff.as_millis() as f64 * multiplier) as u64)
        .min(Duration::from_secs(max_backoff_seconds))
}

/// Run a blocking RPC call on the blocking pool with a timeout
///
/// Task failures and elapsed timeouts are folded into `RpcError` so the
/// caller only handles one error type.
pub async fn call_blocking<T, F>(operation: &str, timeout_seconds: u64, call: F) -> RpcResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> RpcResult<T> + Send + 'static,
{
    match timeout(
        Duration::from_secs(timeout_seconds),
        tokio::task::spawn_blocking(call),
    )
    .await
    {
        Ok(Ok(result)) => result,
        Ok(Err(join_error)) => Err(RpcError::CallFailed {
            method: operation.to_string(),
            message: format!("Task execution error: {}", join_error),
        }),
        Err(_) => Err(RpcError::Timeout {
            timeout_seconds,
            operation: operation.to_string(),
        }),
    }
}
