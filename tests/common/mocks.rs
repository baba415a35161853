//! Mock implementations of port traits for testing

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use quotebook::core::ports::RemoteSource;
use quotebook::{Quote, QuoteError};

/// How the mock answers `fetch_quotes`
enum FetchMode {
    /// Always the same batch
    Fixed(Vec<Quote>),
    /// A new "Post N" quote per call
    Fresh,
    /// Always fail
    Failing,
}

/// Scriptable remote source
pub struct MockRemote {
    mode: FetchMode,
    delay: Option<Duration>,
    fail_push: bool,
    fetches: AtomicUsize,
    pushed: Mutex<Vec<Quote>>,
}

impl MockRemote {
    fn with_mode(mode: FetchMode) -> Self {
        Self {
            mode,
            delay: None,
            fail_push: false,
            fetches: AtomicUsize::new(0),
            pushed: Mutex::new(Vec::new()),
        }
    }

    pub fn returning(quotes: Vec<Quote>) -> Self {
        Self::with_mode(FetchMode::Fixed(quotes))
    }

    pub fn fresh_each_call() -> Self {
        Self::with_mode(FetchMode::Fresh)
    }

    pub fn failing() -> Self {
        let mut mock = Self::with_mode(FetchMode::Failing);
        mock.fail_push = true;
        mock
    }

    /// Sleep (on tokio's clock) before answering a fetch
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn pushed(&self) -> Vec<Quote> {
        self.pushed.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteSource for MockRemote {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, QuoteError> {
        let call = self.fetches.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.mode {
            FetchMode::Fixed(quotes) => Ok(quotes.clone()),
            FetchMode::Fresh => Ok(vec![Quote::new(&format!("Post {call}"), "Server").unwrap()]),
            FetchMode::Failing => Err(QuoteError::Remote("HTTP error: 503".to_string())),
        }
    }

    async fn push_quote(&self, quote: &Quote) -> Result<(), QuoteError> {
        if self.fail_push {
            return Err(QuoteError::Remote("HTTP error: 500".to_string()));
        }
        self.pushed.lock().unwrap().push(quote.clone());
        Ok(())
    }
}
