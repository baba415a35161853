//! Remote source port
//!
//! Defines the interface for the quote server used by sync.

use async_trait::async_trait;

use crate::core::error::QuoteError;
use crate::core::models::Quote;

/// A remote list of quotes that can be fetched and appended to
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Fetch the current server-side quotes
    ///
    /// Failures are reported as [`QuoteError::Remote`].
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, QuoteError>;

    /// Send one locally created quote to the server
    async fn push_quote(&self, quote: &Quote) -> Result<(), QuoteError>;
}
