// Bounded condition-polling.
//
// Where the driver's own `expect()` vocabulary covers a condition
// (visibility, exact text, enabled state) the scenarios use `expect()`
// directly; this module handles the rest: element counts, attribute
// values, text that must change, and arbitrary page observations. A poll
// either resolves or fails with what was actually seen, never with a
// bare timeout.

use crate::error::{Error, Result};
use crate::{POLL_INTERVAL, POLL_TIMEOUT};
use playwright_rs::Locator;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

/// One observation of a polled target.
pub enum Probe<T> {
    /// The target is not in the DOM at all.
    Missing,
    /// The target exists but the condition does not hold yet; carries
    /// what was seen, for the failure message.
    Pending(String),
    /// The condition holds.
    Ready(T),
}

/// Runs `probe` until it reports [`Probe::Ready`] or `timeout` elapses.
///
/// Distinguishes "never appeared" from "appeared but never satisfied" in
/// the returned error. Probes must not block: check `count()` before
/// calling element operations that wait for presence themselves.
pub async fn until<T, F, Fut>(what: &str, timeout: Duration, mut probe: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Probe<T>>>,
{
    let started = Instant::now();
    let mut appeared = false;
    let mut last = String::new();

    loop {
        match probe().await? {
            Probe::Ready(value) => return Ok(value),
            Probe::Pending(seen) => {
                appeared = true;
                last = seen;
            }
            Probe::Missing => {}
        }

        if started.elapsed() >= timeout {
            let waited_ms = timeout.as_millis() as u64;
            return Err(if appeared {
                Error::NeverSatisfied {
                    what: what.to_string(),
                    waited_ms,
                    last,
                }
            } else {
                Error::NeverAppeared {
                    what: what.to_string(),
                    waited_ms,
                }
            });
        }

        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

/// Polls until the locator matches exactly `expected` elements.
pub async fn count_is(locator: &Locator, expected: usize, what: &str) -> Result<()> {
    until(what, POLL_TIMEOUT, || {
        let target = locator.clone();
        async move {
            let count = target.count().await?;
            Ok(if count == expected {
                Probe::Ready(())
            } else if count == 0 {
                Probe::Missing
            } else {
                Probe::Pending(format!("count {count}"))
            })
        }
    })
    .await
}

/// Polls until the locator is present with non-empty text; returns it.
pub async fn text_nonempty(locator: &Locator, what: &str) -> Result<String> {
    until(what, POLL_TIMEOUT, || {
        let target = locator.clone();
        async move {
            if target.count().await? == 0 {
                return Ok(Probe::Missing);
            }
            let text = target.text_content().await?.unwrap_or_default();
            let text = text.trim().to_string();
            Ok(if text.is_empty() {
                Probe::Pending("empty text".into())
            } else {
                Probe::Ready(text)
            })
        }
    })
    .await
}

/// Polls until the locator's trimmed text equals `expected`.
pub async fn text_is(locator: &Locator, expected: &str, what: &str) -> Result<()> {
    until(what, POLL_TIMEOUT, || {
        let target = locator.clone();
        let expected = expected.to_string();
        async move {
            if target.count().await? == 0 {
                return Ok(Probe::Missing);
            }
            let text = target.text_content().await?.unwrap_or_default();
            let text = text.trim().to_string();
            Ok(if text == expected {
                Probe::Ready(())
            } else {
                Probe::Pending(format!("text '{text}'"))
            })
        }
    })
    .await
}

/// Polls until the locator's trimmed text differs from `initial`;
/// returns the new text. Used when an interaction must visibly change
/// something, like the track title after skipping.
pub async fn text_differs(locator: &Locator, initial: &str, what: &str) -> Result<String> {
    until(what, POLL_TIMEOUT, || {
        let target = locator.clone();
        let initial = initial.to_string();
        async move {
            if target.count().await? == 0 {
                return Ok(Probe::Missing);
            }
            let text = target.text_content().await?.unwrap_or_default();
            let text = text.trim().to_string();
            Ok(if text != initial {
                Probe::Ready(text)
            } else {
                Probe::Pending(format!("still '{initial}'"))
            })
        }
    })
    .await
}

/// Polls until the locator carries `expected` in attribute `name`.
pub async fn attribute_is(
    locator: &Locator,
    name: &str,
    expected: &str,
    what: &str,
) -> Result<()> {
    until(what, POLL_TIMEOUT, || {
        let target = locator.clone();
        let name = name.to_string();
        let expected = expected.to_string();
        async move {
            if target.count().await? == 0 {
                return Ok(Probe::Missing);
            }
            let value = target.get_attribute(&name).await?;
            Ok(match value {
                Some(value) if value == expected => Probe::Ready(()),
                Some(value) => Probe::Pending(format!("{name}='{value}'")),
                None => Probe::Pending(format!("{name} unset")),
            })
        }
    })
    .await
}

/// Polls until the locator matches nothing, e.g. a deleted row.
pub async fn gone(locator: &Locator, what: &str) -> Result<()> {
    until(what, POLL_TIMEOUT, || {
        let target = locator.clone();
        async move {
            let count = target.count().await?;
            Ok(if count == 0 {
                Probe::Ready(())
            } else {
                Probe::Pending(format!("still {count} present"))
            })
        }
    })
    .await
}
