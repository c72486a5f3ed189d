//! Re-execution of whole units of work after transient store errors
//!
//! A transfer that loses a lock race under REPEATABLE READ is aborted by
//! PostgreSQL with a serialization failure. Replaying individual statements
//! is unsafe, so the service call is started again from scratch.

use rand::Rng;
use std::future::Future;
use std::time::Duration;

use crate::config::RetryConfig;
use crate::error::LedgerResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
    max_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration, max_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
            max_delay: max_delay.max(base_delay),
        }
    }

    /// Run once, never retry
    pub fn none() -> Self {
        Self::new(1, Duration::ZERO, Duration::ZERO)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Randomized delay before the next attempt, growing with `attempt`
    fn backoff(&self, attempt: u32) -> Duration {
        let base = self.base_delay.as_millis() as u64;
        let ceiling = base
            .saturating_mul(1u64 << attempt.min(16))
            .min(self.max_delay.as_millis() as u64);
        if ceiling <= base {
            return self.base_delay;
        }
        Duration::from_millis(rand::thread_rng().gen_range(base..=ceiling))
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self::new(
            config.max_attempts,
            Duration::from_millis(config.base_delay_ms),
            Duration::from_millis(config.max_delay_ms),
        )
    }
}

/// Call `op` until it succeeds, fails with a non-transient error, or the
/// policy runs out of attempts. The last error is returned as-is.
pub async fn with_retry<T, F, Fut>(policy: &RetryPolicy, op_name: &str, mut op: F) -> LedgerResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = LedgerResult<T>>,
{
    let mut attempt = 1;
    loop {
        match op().await {
            Err(e) if e.is_transient() && attempt < policy.max_attempts => {
                let delay = policy.backoff(attempt);
                tracing::debug!(op = op_name, attempt, error = %e, "Transient store error, retrying");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) if e.is_transient() => {
                tracing::warn!(op = op_name, attempt, error = %e, "Retries exhausted");
                return Err(e);
            }
            result => return result,
        }
    }
}
