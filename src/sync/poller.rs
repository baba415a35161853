//! Periodic sync task
//!
//! Polls on tokio's clock, so tests can pause time and advance it
//! instead of waiting. Each tick starts a poll without waiting for the
//! previous one; the merge lock in `sync_once` keeps overlapping polls
//! from appending the same quote twice.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::{JoinHandle, JoinSet};
use tokio_util::sync::CancellationToken;

use crate::core::ports::RemoteSource;

use super::{SharedBook, SyncReport, sync_once};

/// Shortest allowed gap between polls
pub const MIN_INTERVAL: Duration = Duration::from_secs(1);

/// A running poller
#[derive(Debug)]
pub struct SyncTask {
    token: CancellationToken,
    handle: JoinHandle<()>,
    reports: mpsc::UnboundedReceiver<SyncReport>,
}

impl SyncTask {
    /// Start polling: once immediately, then every `interval`
    ///
    /// Intervals shorter than [`MIN_INTERVAL`] are raised to it. Must be
    /// called from within a tokio runtime.
    #[must_use]
    pub fn spawn(book: SharedBook, remote: Arc<dyn RemoteSource>, interval: Duration) -> Self {
        let token = CancellationToken::new();
        let (tx, reports) = mpsc::unbounded_channel();
        let cancelled = token.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval.max(MIN_INTERVAL));
            let mut polls = JoinSet::new();

            loop {
                tokio::select! {
                    () = cancelled.cancelled() => break,
                    _ = ticker.tick() => {
                        let book = Arc::clone(&book);
                        let remote = Arc::clone(&remote);
                        let tx = tx.clone();
                        polls.spawn(async move {
                            match sync_once(&book, remote.as_ref()).await {
                                Ok(report) if report.added > 0 => {
                                    // Receiver gone just means nobody listens
                                    let _ = tx.send(report);
                                },
                                Ok(_) => {},
                                Err(err) => log::error!("Failed to fetch from server: {err}"),
                            }
                        });
                    },
                    Some(_) = polls.join_next(), if !polls.is_empty() => {},
                }
            }

            polls.shutdown().await;
            log::debug!("Sync task stopped");
        });

        Self {
            token,
            handle,
            reports,
        }
    }

    /// Wait for the next round that added quotes
    ///
    /// Returns `None` once the task has stopped.
    pub async fn next_report(&mut self) -> Option<SyncReport> {
        self.reports.recv().await
    }

    /// Whether `stop` or `cancel` has been requested
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Request cancellation without waiting
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Cancel the task, including in-flight polls, and wait for it to end
    pub async fn stop(self) {
        self.token.cancel();
        if let Err(err) = self.handle.await {
            log::error!("Sync task ended abnormally: {err}");
        }
    }
}
