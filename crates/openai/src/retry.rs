//! Explicit retry-with-backoff policy for generator calls.
//!
//! Composable around any fallible async operation: [`retry`] takes the
//! policy and a closure producing the future, so both the text and image
//! call sites share one implementation. Delays are randomized exponential:
//! attempt `n` sleeps a uniform duration in `0..=min(cap, base * 2^(n-1))`.

use std::future::Future;
use std::time::Duration;

use rand::Rng;

use crate::error::GeneratorError;

/// Tunable parameters for the retry strategy.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, including the first call.
    pub max_attempts: u32,
    /// Backoff for the first retry; doubles per attempt.
    pub base_delay: Duration,
    /// Upper bound on any single backoff delay.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
        }
    }
}

/// Compute the randomized backoff delay after a failed attempt (1-based).
pub fn backoff_delay<R: Rng + ?Sized>(policy: &RetryPolicy, attempt: u32, rng: &mut R) -> Duration {
    let exp = policy
        .base_delay
        .saturating_mul(1u32 << attempt.saturating_sub(1).min(31));
    let cap = exp.min(policy.max_delay);
    Duration::from_millis(rng.random_range(0..=cap.as_millis() as u64))
}

/// Run `op` under the policy, retrying transport and service failures with
/// randomized exponential backoff. Parse failures and exhausted attempts
/// return the final error to the caller.
pub async fn retry<T, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T, GeneratorError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, GeneratorError>>,
{
    let mut attempt = 0u32;
    loop {
        attempt += 1;
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if !err.is_retryable() || attempt >= policy.max_attempts => {
                tracing::warn!(error = %err, attempt, "Generator call failed, giving up");
                return Err(err);
            }
            Err(err) => {
                let delay = backoff_delay(policy, attempt, &mut rand::rng());
                tracing::warn!(
                    error = %err,
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "Generator call failed, retrying",
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast_policy() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(4),
        }
    }

    #[test]
    fn backoff_doubles_and_clamps() {
        let policy = RetryPolicy {
            max_attempts: 5,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
        };
        let mut rng = rand::rng();
        for attempt in 1..=10 {
            let cap = Duration::from_secs(1 << (attempt - 1)).min(Duration::from_secs(60));
            let delay = backoff_delay(&policy, attempt as u32, &mut rng);
            assert!(delay <= cap, "attempt {attempt}: {delay:?} > {cap:?}");
        }
    }

    #[tokio::test]
    async fn returns_first_success() {
        let calls = AtomicU32::new(0);
        let result = retry(&fast_policy(), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, GeneratorError>(42) }
        })
        .await;
        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn retries_transport_failures_until_success() {
        let calls = AtomicU32::new(0);
        let result = retry(&fast_policy(), || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n < 2 {
                    Err(GeneratorError::Transport("unreachable".into()))
                } else {
                    Ok("done")
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), "done");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = retry(&fast_policy(), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(GeneratorError::Service("503".into())) }
        })
        .await;
        assert!(matches!(result, Err(GeneratorError::Service(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn parse_failures_short_circuit() {
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = retry(&fast_policy(), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(GeneratorError::Parse("not json".into())) }
        })
        .await;
        assert!(matches!(result, Err(GeneratorError::Parse(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
