//! Backoff policy for rate-limited tracker calls.

use std::time::Duration;

/// Upper bound on any single backoff wait (1 hour).
const MAX_WAIT_SECS: u64 = 3600;

/// Bounded exponential backoff applied when the tracker reports a rate limit.
///
/// Attempts are counted from 1. Only rate-limited calls are retried; any
/// other failure is reported once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
    max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(2), Duration::from_secs(60))
    }
}

impl RetryPolicy {
    /// Creates a policy. `max_delay` is capped at one hour.
    #[must_use]
    pub fn new(max_attempts: u32, base_delay: Duration, max_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
            max_delay: max_delay.min(Duration::from_secs(MAX_WAIT_SECS)),
        }
    }

    /// A policy that never retries.
    #[must_use]
    pub fn no_retry() -> Self {
        Self::new(1, Duration::ZERO, Duration::ZERO)
    }

    /// Total attempts allowed, including the first.
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay before the second attempt.
    #[must_use]
    pub fn base_delay(&self) -> Duration {
        self.base_delay
    }

    /// Cap on any backoff delay.
    #[must_use]
    pub fn max_delay(&self) -> Duration {
        self.max_delay
    }

    /// Returns true if another attempt may follow `attempt`.
    #[must_use]
    pub fn allows_retry_after(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }

    /// Backoff to wait after failed `attempt`: `base * 2^(attempt - 1)`, capped.
    #[must_use]
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31);
        self.base_delay
            .checked_mul(1u32 << exponent)
            .map_or(self.max_delay, |delay| delay.min(self.max_delay))
    }
}
