//! Server synchronization
//!
//! Wires a shared [`QuoteBook`] to a [`RemoteSource`]:
//!
//! - [`sync_once`] - Fetch and merge one batch
//! - [`push_quote`] - Best-effort upload of a new quote
//! - [`SyncTask`] - Cancellable periodic polling
//!
//! Remote failures never reach the user: they are logged and dropped,
//! and a quote that failed to upload stays valid locally.

mod poller;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::book::QuoteBook;
use crate::core::models::Quote;
use crate::core::ports::RemoteSource;

pub use poller::{MIN_INTERVAL, SyncTask};

/// A quote book shared between the front end and the poller
pub type SharedBook = Arc<Mutex<QuoteBook>>;

/// Outcome of one fetch-and-merge round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// Quotes returned by the server
    pub fetched: usize,
    /// Quotes that were new locally and got appended
    pub added: usize,
}

/// Wrap a book for sharing with the poller
#[must_use]
pub fn share(book: QuoteBook) -> SharedBook {
    Arc::new(Mutex::new(book))
}

/// Fetch server quotes and merge them into the book
///
/// The fetch runs without holding the lock. The merge then re-checks
/// against the latest collection under the lock, so overlapping calls
/// carrying the same new quote append it only once.
pub async fn sync_once(book: &SharedBook, remote: &dyn RemoteSource) -> anyhow::Result<SyncReport> {
    let incoming = remote.fetch_quotes().await?;

    let added = {
        let mut book = book.lock().map_err(|_| anyhow::anyhow!("quote book lock poisoned"))?;
        book.merge_remote(&incoming)?
    };

    if added > 0 {
        log::info!("Quotes synced with server: {added} new");
    } else {
        log::debug!("Server returned {} quote(s), none new", incoming.len());
    }

    Ok(SyncReport {
        fetched: incoming.len(),
        added,
    })
}

/// Upload a quote, logging and swallowing failure
///
/// Returns whether the upload succeeded.
pub async fn push_quote(remote: &dyn RemoteSource, quote: &Quote) -> bool {
    match remote.push_quote(quote).await {
        Ok(()) => true,
        Err(err) => {
            log::error!("Error posting quote: {err}");
            false
        },
    }
}
