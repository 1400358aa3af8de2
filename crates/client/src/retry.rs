//! Retry with exponential backoff.
//!
//! Unlike the API client, which reports failures through the response
//! envelope, the retry helpers raise the last error once their attempts
//! run out. The two contracts are deliberately different: the envelope
//! suits callers branching on outcomes, the helpers suit callers
//! composing with `?`.

use std::future::Future;
use std::time::Duration;

/// Default number of attempts, the first call included.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default wait before the first retry.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(1000);

/// Backoff schedule for [`retry_with_backoff`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
}

impl RetryPolicy {
    /// Creates a policy.
    ///
    /// `max_attempts` counts the initial call as well as retries. Zero
    /// is treated as one: the operation always runs at least once.
    #[must_use]
    pub const fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// Total number of attempts the policy allows.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Wait before the first retry.
    #[must_use]
    pub const fn base_delay(&self) -> Duration {
        self.base_delay
    }

    /// Returns the wait after the failed attempt with the given
    /// zero-based index: `base_delay * 2^attempt`, saturating instead of
    /// overflowing.
    #[must_use]
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let multiplier = 1_u64 << attempt.min(63);
        let base = u64::try_from(self.base_delay.as_millis()).unwrap_or(u64::MAX);
        Duration::from_millis(base.saturating_mul(multiplier))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_BASE_DELAY)
    }
}

/// Runs `operation` until it succeeds or the policy's attempts run out.
///
/// Waits `base_delay * 2^k` after the k-th failure. There is no wait
/// after the final failure; its error is returned as-is.
///
/// # Errors
///
/// Returns the last attempt's error once every attempt has failed.
pub async fn retry_with_backoff<T, E, F, Fut>(policy: RetryPolicy, operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    retry_with_backoff_observed(policy, operation, |_, _| {}).await
}

/// Like [`retry_with_backoff`], additionally reporting every failed
/// attempt to `on_failure` together with its zero-based index.
///
/// The observer sees intermediate failures as they happen; the retry
/// contract is unchanged and the final error still reaches the caller.
///
/// # Errors
///
/// Returns the last attempt's error once every attempt has failed.
pub async fn retry_with_backoff_observed<T, E, F, Fut, O>(
    policy: RetryPolicy,
    mut operation: F,
    mut on_failure: O,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    O: FnMut(u32, &E),
{
    let attempts = policy.max_attempts().max(1);
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                on_failure(attempt, &error);
                attempt += 1;
                if attempt >= attempts {
                    return Err(error);
                }
                tokio::time::sleep(policy.delay_for_attempt(attempt - 1)).await;
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;
    use tokio::time::Instant;

    use super::*;

    #[test]
    fn starts_with_the_base_delay() {
        let policy = RetryPolicy::new(3, Duration::from_millis(100));

        assert_eq!(policy.delay_for_attempt(0), Duration::from_millis(100));
    }

    #[test]
    fn scales_exponentially_per_attempt() {
        let policy = RetryPolicy::new(5, Duration::from_millis(100));

        assert_eq!(policy.delay_for_attempt(1), Duration::from_millis(200));
        assert_eq!(policy.delay_for_attempt(2), Duration::from_millis(400));
        assert_eq!(policy.delay_for_attempt(3), Duration::from_millis(800));
    }

    #[test]
    fn saturates_for_large_attempts() {
        let policy = RetryPolicy::new(3, Duration::from_millis(u64::MAX));

        assert_eq!(
            policy.delay_for_attempt(10),
            Duration::from_millis(u64::MAX)
        );
        assert_eq!(
            policy.delay_for_attempt(200),
            Duration::from_millis(u64::MAX)
        );
    }

    #[test]
    fn default_policy_matches_the_documented_values() {
        let policy = RetryPolicy::default();

        assert_eq!(policy.max_attempts(), 3);
        assert_eq!(policy.base_delay(), Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn returns_the_first_success_immediately() {
        let calls = Cell::new(0_u32);

        let result = retry_with_backoff(RetryPolicy::default(), || {
            calls.set(calls.get() + 1);
            async { Ok::<_, String>("done") }
        })
        .await;

        assert_eq!(result, Ok("done"));
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn retries_until_success_with_exponential_waits() {
        let policy = RetryPolicy::new(3, Duration::from_millis(100));
        let calls = Cell::new(0_u32);

        let started = Instant::now();
        let result = retry_with_backoff(policy, || {
            let n = calls.get() + 1;
            calls.set(n);
            async move {
                if n < 3 {
                    Err(format!("boom {n}"))
                } else {
                    Ok(n)
                }
            }
        })
        .await;

        assert_eq!(result, Ok(3));
        assert_eq!(calls.get(), 3);
        assert_eq!(started.elapsed(), Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn exhausts_attempts_and_returns_the_last_error() {
        let policy = RetryPolicy::new(3, Duration::from_millis(100));
        let calls = Cell::new(0_u32);

        let started = Instant::now();
        let result = retry_with_backoff(policy, || {
            let n = calls.get() + 1;
            calls.set(n);
            async move { Err::<(), String>(format!("boom {n}")) }
        })
        .await;

        assert_eq!(result, Err("boom 3".to_string()));
        assert_eq!(calls.get(), 3);
        assert_eq!(started.elapsed(), Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_attempts_still_run_the_operation_once() {
        let policy = RetryPolicy::new(0, Duration::from_millis(100));
        let calls = Cell::new(0_u32);

        let started = Instant::now();
        let result = retry_with_backoff(policy, || {
            calls.set(calls.get() + 1);
            async { Err::<(), String>("boom".to_string()) }
        })
        .await;

        assert_eq!(result, Err("boom".to_string()));
        assert_eq!(calls.get(), 1);
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn reports_each_failure_to_the_observer() {
        let policy = RetryPolicy::new(3, Duration::from_millis(10));
        let calls = Cell::new(0_u32);
        let mut seen: Vec<(u32, String)> = Vec::new();

        let result = retry_with_backoff_observed(
            policy,
            || {
                let n = calls.get() + 1;
                calls.set(n);
                async move { Err::<(), String>(format!("boom {n}")) }
            },
            |attempt, error| seen.push((attempt, error.clone())),
        )
        .await;

        assert_eq!(result, Err("boom 3".to_string()));
        assert_eq!(
            seen,
            vec![
                (0, "boom 1".to_string()),
                (1, "boom 2".to_string()),
                (2, "boom 3".to_string()),
            ]
        );
    }
}
