// Waiters for one-shot browser events.
//
// A download or popup fires on its own schedule; listening must start
// before the interaction that triggers it or the event is lost. Both
// waiters split arming from waiting so call sites read in that order:
// arm, click, wait.

use crate::EVENT_TIMEOUT;
use crate::error::{Error, Result};
use playwright_rs::protocol::Download;
use playwright_rs::{BrowserContext, Page};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Captures the next download started on a page.
pub struct DownloadWaiter {
    slot: Arc<Mutex<Option<Download>>>,
}

impl DownloadWaiter {
    /// Registers the download listener. Must run before the click that
    /// starts the download.
    pub async fn arm(page: &Page) -> Result<DownloadWaiter> {
        let slot = Arc::new(Mutex::new(None));
        let captured = Arc::clone(&slot);
        page.on_download(move |download| {
            let captured = Arc::clone(&captured);
            async move {
                *captured.lock().unwrap() = Some(download);
                Ok(())
            }
        })
        .await?;
        Ok(DownloadWaiter { slot })
    }

    /// Waits for the captured download, up to [`EVENT_TIMEOUT`].
    pub async fn wait(self) -> Result<Download> {
        self.wait_for(EVENT_TIMEOUT).await
    }

    pub async fn wait_for(self, timeout: Duration) -> Result<Download> {
        let started = Instant::now();
        loop {
            if let Some(download) = self.slot.lock().unwrap().take() {
                return Ok(download);
            }
            if started.elapsed() >= timeout {
                return Err(Error::EventTimeout {
                    event: "download",
                    waited_ms: timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(EVENT_POLL_INTERVAL).await;
        }
    }
}

/// Captures the next page opened in a context, e.g. a target="_blank"
/// share link.
pub struct PopupWaiter {
    context: BrowserContext,
    baseline: usize,
}

impl PopupWaiter {
    /// Snapshots the current page count. Must run before the click that
    /// opens the new tab.
    pub fn arm(context: &BrowserContext) -> PopupWaiter {
        PopupWaiter {
            context: context.clone(),
            baseline: context.pages().len(),
        }
    }

    /// Waits until the context holds more pages than when armed and
    /// returns the newest one.
    pub async fn wait(self) -> Result<Page> {
        self.wait_for(EVENT_TIMEOUT).await
    }

    pub async fn wait_for(self, timeout: Duration) -> Result<Page> {
        let started = Instant::now();
        loop {
            let pages = self.context.pages();
            if pages.len() > self.baseline {
                // New pages are appended to the context's list.
                if let Some(page) = pages.into_iter().last() {
                    return Ok(page);
                }
            }
            if started.elapsed() >= timeout {
                return Err(Error::EventTimeout {
                    event: "popup",
                    waited_ms: timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(EVENT_POLL_INTERVAL).await;
        }
    }
}
