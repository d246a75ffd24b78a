// Condition polling helpers
//
// The page objects never sleep for a fixed duration; every wait is a
// time-boxed poll that either observes the condition or fails with a
// descriptive Timeout error.

use std::future::Future;
use std::time::Duration;

use playwright_rs::{Locator, Page};

use crate::error::{Error, Result};

/// Default timeout for waits (5 seconds, matching Playwright's assertions)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default polling interval (100ms)
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Polls `predicate` until it returns true or `timeout` elapses.
///
/// `what` names the awaited condition in the timeout error.
pub async fn until<F, Fut>(what: &str, timeout: Duration, mut predicate: F) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    let start = std::time::Instant::now();
    loop {
        if predicate().await? {
            return Ok(());
        }
        if start.elapsed() >= timeout {
            return Err(Error::Timeout {
                what: what.to_string(),
                timeout,
            });
        }
        tokio::time::sleep(DEFAULT_POLL_INTERVAL).await;
    }
}

/// Waits for the element to become visible.
pub async fn visible(locator: &Locator, timeout: Duration) -> Result<()> {
    let start = std::time::Instant::now();
    loop {
        if locator.is_visible().await? {
            return Ok(());
        }
        if start.elapsed() >= timeout {
            return Err(Error::Timeout {
                what: format!("element '{}' to be visible", locator.selector()),
                timeout,
            });
        }
        tokio::time::sleep(DEFAULT_POLL_INTERVAL).await;
    }
}

/// Waits for the element to become hidden (or detached).
pub async fn hidden(locator: &Locator, timeout: Duration) -> Result<()> {
    let start = std::time::Instant::now();
    loop {
        if !locator.is_visible().await.unwrap_or(false) {
            return Ok(());
        }
        if start.elapsed() >= timeout {
            return Err(Error::Timeout {
                what: format!("element '{}' to be hidden", locator.selector()),
                timeout,
            });
        }
        tokio::time::sleep(DEFAULT_POLL_INTERVAL).await;
    }
}

/// Tolerant variant of [`visible`]: true if the element showed up in time.
pub async fn is_eventually_visible(locator: &Locator, timeout: Duration) -> bool {
    visible(locator, timeout).await.is_ok()
}

/// Tolerant variant of [`hidden`]: true if the element went away in time.
pub async fn is_eventually_hidden(locator: &Locator, timeout: Duration) -> bool {
    hidden(locator, timeout).await.is_ok()
}

/// Waits until the page URL contains `fragment`.
pub async fn url_contains(page: &Page, fragment: &str, timeout: Duration) -> Result<()> {
    let what = format!("URL to contain '{fragment}'");
    until(&what, timeout, || {
        let url = page.url();
        let fragment = fragment.to_string();
        async move { Ok(url.contains(&fragment)) }
    })
    .await
}
