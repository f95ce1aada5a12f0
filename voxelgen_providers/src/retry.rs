use std::fmt::Display;
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

/// Delay in seconds between the fixed-interval retries after the
/// exponential-backoff phase is exhausted.
const FINAL_DELAY_SECS: u64 = 10;

/// Retry an async operation with exponential backoff.
///
/// # Arguments
/// * `operation` - The async operation to retry
/// * `base_delays` - Delays in seconds between the first attempts
/// * `final_retries` - Number of additional retries at the fixed interval
///
/// # Returns
/// The first successful result, or the error of the last attempt when every
/// attempt (`base_delays.len() + final_retries` in total) has failed.
pub async fn retry_with_backoff<F, Fut, T, E>(
    mut operation: F,
    base_delays: &[u64],
    final_retries: usize,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: Display,
{
    let total_attempts = base_delays.len() + final_retries;

    for attempt in 1..total_attempts {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(e) => {
                let delay_secs = base_delays
                    .get(attempt - 1)
                    .copied()
                    .unwrap_or(FINAL_DELAY_SECS);
                warn!(
                    "Request failed (attempt {attempt}/{total_attempts}): {e}. \
                     Retrying after {delay_secs}s..."
                );
                sleep(Duration::from_secs(delay_secs)).await;
            }
        }
    }

    // Last attempt; its result is final either way.
    operation().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn retry_succeeds_on_first_attempt() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let result = retry_with_backoff(
            || {
                let attempts = attempts.clone();
                async move {
                    attempts.fetch_add(1, Ordering::SeqCst);
                    Ok::<(), String>(())
                }
            },
            &[1, 2],
            2,
        )
        .await;
        assert!(result.is_ok());
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn retry_succeeds_after_failures() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let result: std::result::Result<(), String> = retry_with_backoff(
            || {
                let attempts = attempts.clone();
                async move {
                    let count = attempts.fetch_add(1, Ordering::SeqCst) + 1;
                    if count < 3 {
                        Err(String::from("fail"))
                    } else {
                        Ok(())
                    }
                }
            },
            &[1, 2],
            2,
        )
        .await;
        assert!(result.is_ok());
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn retry_fails_after_all_attempts() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let result: std::result::Result<(), String> = retry_with_backoff(
            || {
                let attempts = attempts.clone();
                async move {
                    attempts.fetch_add(1, Ordering::SeqCst);
                    Err(String::from("fail"))
                }
            },
            &[1, 2],
            2,
        )
        .await;
        assert!(result.is_err());
        assert_eq!(attempts.load(Ordering::SeqCst), 4); // 2 base + 2 final
    }
}
