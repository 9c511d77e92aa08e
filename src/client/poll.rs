//! Poll-until-found retry loop
//!
//! Newly created resources (apps, recovery points) take a while to become
//! visible. Lookups that return "not found yet" are retried on a fixed
//! interval until a deadline; real errors are returned immediately.

use std::future::Future;
use std::time::Duration;

use tokio::time::{Instant, sleep};

use crate::error::Result;

/// Default interval between app lookups
pub const APP_POLL_PERIOD: Duration = Duration::from_secs(5);

/// Default interval between recovery point lookups
pub const RECOVERY_POINT_POLL_PERIOD: Duration = Duration::from_secs(5);

/// How long to keep looking for a resource, and how often.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Zero means a single attempt with no retry.
    pub timeout: Duration,
    pub interval: Duration,
}

impl PollPolicy {
    pub fn once() -> Self {
        Self::with_timeout(Duration::ZERO)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            interval: APP_POLL_PERIOD,
        }
    }

    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn is_single_attempt(&self) -> bool {
        self.timeout.is_zero()
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::once()
    }
}

/// Call `lookup` until it finds something, errors, or the deadline passes.
///
/// Returns `Ok(None)` when the deadline passes without a result; callers turn
/// that into an error that fits what they were looking for.
pub async fn poll_until_found<T, F, Fut>(
    policy: PollPolicy,
    what: &str,
    mut lookup: F,
) -> Result<Option<T>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>>>,
{
    // None when the timeout is too large to represent: wait without limit
    let deadline = Instant::now().checked_add(policy.timeout);

    loop {
        if let Some(found) = lookup().await? {
            return Ok(Some(found));
        }

        if policy.is_single_attempt() {
            break;
        }
        if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            break;
        }

        log::debug!("Waiting for a matching {} to exist", what);
        sleep(policy.interval).await;
    }

    Ok(None)
}
