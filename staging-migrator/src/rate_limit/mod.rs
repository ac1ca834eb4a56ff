//! Pacing for tracker calls.
//!
//! Every external call is followed by a fixed pause so a batch run stays under
//! the tracker's abuse detection. Calls the tracker rejects as rate limited are
//! retried with the bounded backoff of [`RetryPolicy`].

mod policy;

pub use policy::RetryPolicy;

use std::time::Duration;
use tracing::info;

/// Fixed inter-call delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimiter {
    delay: Duration,
}

impl RateLimiter {
    /// Creates a limiter pausing for `delay` after each call.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Sleeps for the configured delay.
    pub async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

/// Waits out the backoff for a rate-limited `attempt`.
pub async fn wait_for_retry(policy: &RetryPolicy, attempt: u32) {
    let wait = policy.backoff(attempt);
    info!(
        attempt,
        wait_ms = wait.as_millis() as u64,
        "Rate limited, backing off"
    );
    if !wait.is_zero() {
        tokio::time::sleep(wait).await;
    }
}
