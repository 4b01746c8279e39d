//! Status polling for long-lived resources
//!
//! Databases, columnar clusters, app services, and network peers report a
//! server-defined status string. [`poll_status`] re-fetches it on a fixed
//! interval until it matches (or stops matching) a target, the timeout
//! elapses, or the caller's cancellation future completes.

use std::future::Future;
use std::time::Duration;

use log::debug;
use tokio::time::Instant;

use crate::error::{ApiError, Result};

const DEFAULT_INTERVAL_SECS: u64 = 10;
const DEFAULT_TIMEOUT_SECS: u64 = 3600;

/// How the target status is compared against the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaitMode {
    /// Wait while the status equals the target (for a transition away)
    #[default]
    While,
    /// Wait until the status equals the target
    Until,
}

impl WaitMode {
    /// `true`/`false` flag form: `until == true` means [`WaitMode::Until`].
    pub fn from_until(until: bool) -> Self {
        if until { WaitMode::Until } else { WaitMode::While }
    }

    /// Whether `current` satisfies the wait. `None` means the resource is gone.
    fn is_satisfied(self, current: Option<&str>, target: &str) -> Result<bool> {
        match (self, current) {
            (WaitMode::While, Some(status)) => Ok(status != target),
            (WaitMode::While, None) => Ok(true),
            (WaitMode::Until, Some(status)) => Ok(status == target),
            (WaitMode::Until, None) => Err(ApiError::NotFound(format!(
                "resource disappeared while waiting for status \"{}\"",
                target
            ))
            .into()),
        }
    }
}

/// Poll interval and overall deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitOptions {
    pub interval: Duration,
    pub timeout: Duration,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_INTERVAL_SECS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl WaitOptions {
    pub fn new(interval: Duration, timeout: Duration) -> Self {
        Self { interval, timeout }
    }

    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Result of a wait. Every variant carries the last observed status
/// (`None` once the resource is gone) and the number of fetches made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitOutcome {
    Reached { status: Option<String>, polls: u32 },
    TimedOut { status: Option<String>, polls: u32 },
    Cancelled { status: Option<String>, polls: u32 },
}

impl WaitOutcome {
    pub fn is_reached(&self) -> bool {
        matches!(self, WaitOutcome::Reached { .. })
    }

    pub fn status(&self) -> Option<&str> {
        match self {
            WaitOutcome::Reached { status, .. }
            | WaitOutcome::TimedOut { status, .. }
            | WaitOutcome::Cancelled { status, .. } => status.as_deref(),
        }
    }

    pub fn polls(&self) -> u32 {
        match self {
            WaitOutcome::Reached { polls, .. }
            | WaitOutcome::TimedOut { polls, .. }
            | WaitOutcome::Cancelled { polls, .. } => *polls,
        }
    }
}

/// Poll `fetch` until the status condition holds.
///
/// `fetch` returns the current status, or `None` if the resource no longer
/// exists. A vanished resource satisfies [`WaitMode::While`] and is an error
/// for [`WaitMode::Until`]. Fetch errors propagate immediately; nothing is
/// retried. Pass `std::future::pending()` as `cancel` to wait without a
/// cancellation signal.
///
/// The timeout bounds in-flight fetches as well as the pauses between them.
/// A timeout too large to represent as an instant means no deadline.
pub async fn poll_status<F, Fut, C>(
    mut fetch: F,
    target: &str,
    mode: WaitMode,
    options: WaitOptions,
    cancel: C,
) -> Result<WaitOutcome>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<String>>>,
    C: Future<Output = ()>,
{
    let deadline = Instant::now().checked_add(options.timeout);
    tokio::pin!(cancel);

    let mut polls = 0;
    let mut last: Option<String> = None;

    loop {
        let status = tokio::select! {
            biased;
            _ = &mut cancel => return Ok(WaitOutcome::Cancelled { status: last, polls }),
            result = fetch() => result?,
            _ = expiry(deadline) => return Ok(WaitOutcome::TimedOut { status: last, polls }),
        };
        polls += 1;
        debug!(
            "poll {}: status {:?} ({:?} \"{}\")",
            polls, status, mode, target
        );

        if mode.is_satisfied(status.as_deref(), target)? {
            return Ok(WaitOutcome::Reached { status, polls });
        }
        last = status;

        let pause = match deadline {
            Some(deadline) => {
                let now = Instant::now();
                if now >= deadline {
                    return Ok(WaitOutcome::TimedOut { status: last, polls });
                }
                options.interval.min(deadline - now)
            }
            None => options.interval,
        };
        tokio::select! {
            biased;
            _ = &mut cancel => return Ok(WaitOutcome::Cancelled { status: last, polls }),
            _ = tokio::time::sleep(pause) => {}
        }
    }
}

/// Completes at `deadline`; never completes without one.
async fn expiry(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    fn fast() -> WaitOptions {
        WaitOptions::new(Duration::from_millis(5), Duration::from_secs(5))
    }

    /// Fetcher that replays a script of statuses; the last one repeats.
    fn scripted(
        statuses: &[Option<&str>],
    ) -> impl FnMut() -> std::future::Ready<Result<Option<String>>> {
        let script: Arc<Mutex<VecDeque<Option<String>>>> = Arc::new(Mutex::new(
            statuses.iter().map(|s| s.map(str::to_string)).collect(),
        ));
        move || {
            let mut script = script.lock().unwrap();
            let next = if script.len() > 1 {
                script.pop_front().flatten()
            } else {
                script.front().cloned().flatten()
            };
            std::future::ready(Ok(next))
        }
    }

    #[test]
    fn test_mode_from_until() {
        assert_eq!(WaitMode::from_until(true), WaitMode::Until);
        assert_eq!(WaitMode::from_until(false), WaitMode::While);
        assert_eq!(WaitMode::default(), WaitMode::While);
    }

    #[tokio::test]
    async fn test_until_waits_for_transition() {
        let fetch = scripted(&[
            Some("deploying"),
            Some("deploying"),
            Some("deploying"),
            Some("healthy"),
        ]);

        let outcome = poll_status(fetch, "healthy", WaitMode::Until, fast(), std::future::pending())
            .await
            .unwrap();

        assert_eq!(
            outcome,
            WaitOutcome::Reached {
                status: Some("healthy".to_string()),
                polls: 4
            }
        );
    }

    #[tokio::test]
    async fn test_while_returns_on_first_difference() {
        let fetch = scripted(&[Some("deploying"), Some("deploying"), Some("healthy"), Some("x")]);

        let outcome = poll_status(fetch, "deploying", WaitMode::While, fast(), std::future::pending())
            .await
            .unwrap();

        assert!(outcome.is_reached());
        assert_eq!(outcome.status(), Some("healthy"));
        assert_eq!(outcome.polls(), 3);
    }

    #[tokio::test]
    async fn test_while_already_satisfied() {
        let fetch = scripted(&[Some("healthy")]);
        let outcome = poll_status(fetch, "deploying", WaitMode::While, fast(), std::future::pending())
            .await
            .unwrap();
        assert_eq!(outcome.polls(), 1);
    }

    #[tokio::test]
    async fn test_while_destroying_until_gone() {
        let fetch = scripted(&[Some("destroying"), Some("destroying"), None]);
        let outcome = poll_status(
            fetch,
            "destroying",
            WaitMode::While,
            fast(),
            std::future::pending(),
        )
        .await
        .unwrap();

        assert_eq!(
            outcome,
            WaitOutcome::Reached {
                status: None,
                polls: 3
            }
        );
    }

    #[tokio::test]
    async fn test_until_fails_when_resource_disappears() {
        let fetch = scripted(&[Some("deploying"), None]);
        let result =
            poll_status(fetch, "healthy", WaitMode::Until, fast(), std::future::pending()).await;
        assert!(matches!(result, Err(Error::Api(ApiError::NotFound(_)))));
    }

    #[tokio::test]
    async fn test_timeout_outcome() {
        let fetch = scripted(&[Some("deploying")]);
        let options = WaitOptions::new(Duration::from_millis(10), Duration::from_millis(35));

        let outcome = poll_status(fetch, "healthy", WaitMode::Until, options, std::future::pending())
            .await
            .unwrap();

        match outcome {
            WaitOutcome::TimedOut { status, polls } => {
                assert_eq!(status.as_deref(), Some("deploying"));
                assert!(polls >= 2);
            }
            other => panic!("Expected timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unrepresentable_timeout_means_no_deadline() {
        for timeout in [Duration::MAX, Duration::from_secs(u64::MAX)] {
            let fetch = scripted(&[Some("deploying"), Some("healthy")]);
            let options = WaitOptions::default()
                .interval(Duration::from_millis(5))
                .timeout(timeout);

            let outcome =
                poll_status(fetch, "healthy", WaitMode::Until, options, std::future::pending())
                    .await
                    .unwrap();

            assert!(outcome.is_reached());
            assert_eq!(outcome.polls(), 2);
        }
    }

    #[tokio::test]
    async fn test_timeout_bounds_slow_fetch() {
        let fetch = || async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok::<_, Error>(Some("healthy".to_string()))
        };
        let options = WaitOptions::new(Duration::from_millis(10), Duration::from_millis(50));

        let outcome = tokio::time::timeout(
            Duration::from_secs(5),
            poll_status(fetch, "healthy", WaitMode::Until, options, std::future::pending()),
        )
        .await
        .expect("timeout should interrupt the fetch")
        .unwrap();

        match outcome {
            WaitOutcome::TimedOut { status, polls } => {
                assert_eq!(status, None);
                assert_eq!(polls, 0);
            }
            other => panic!("Expected timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_cancellation_outcome() {
        let fetch = scripted(&[Some("deploying")]);
        let options = WaitOptions::new(Duration::from_millis(10), Duration::from_secs(60));
        let cancel = tokio::time::sleep(Duration::from_millis(30));

        let outcome = poll_status(fetch, "healthy", WaitMode::Until, options, cancel)
            .await
            .unwrap();

        match outcome {
            WaitOutcome::Cancelled { status, polls } => {
                assert_eq!(status.as_deref(), Some("deploying"));
                assert!(polls >= 1);
            }
            other => panic!("Expected cancellation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_error_propagates_immediately() {
        let calls = Arc::new(Mutex::new(0));
        let counter = calls.clone();
        let fetch = move || {
            *counter.lock().unwrap() += 1;
            std::future::ready(Err::<Option<String>, Error>(
                ApiError::ServerError("boom".to_string()).into(),
            ))
        };

        let result =
            poll_status(fetch, "healthy", WaitMode::Until, fast(), std::future::pending()).await;

        assert!(matches!(result, Err(Error::Api(ApiError::ServerError(_)))));
        assert_eq!(*calls.lock().unwrap(), 1);
    }
}
