//! HTTP remote quote source
//!
//! Implements `RemoteSource` against a JSONPlaceholder-style posts
//! endpoint: each post's `title` becomes a quote filed under a fixed
//! server category.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::core::error::QuoteError;
use crate::core::models::Quote;
use crate::core::ports::RemoteSource;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One item of the posts listing; only `title` is used
#[derive(Debug, Deserialize)]
struct ServerPost {
    #[serde(default)]
    title: Option<serde_json::Value>,
}

/// Remote source speaking plain JSON over HTTP
#[derive(Debug, Clone)]
pub struct HttpRemoteSource {
    client: reqwest::Client,
    endpoint: String,
    limit: usize,
    category: String,
}

impl HttpRemoteSource {
    /// Create a source for the given endpoint
    ///
    /// `limit` caps how many posts one fetch asks for; `category` labels
    /// every fetched quote.
    pub fn new(endpoint: &str, limit: usize, category: &str) -> Result<Self, QuoteError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| QuoteError::Remote(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            limit,
            category: category.to_string(),
        })
    }

    fn to_quotes(&self, posts: Vec<ServerPost>) -> Vec<Quote> {
        posts
            .into_iter()
            .filter_map(|post| {
                let quote = match post.title {
                    Some(serde_json::Value::String(title)) => Quote::new(&title, &self.category).ok(),
                    _ => None,
                };
                if quote.is_none() {
                    log::debug!("Skipping server post without a usable title");
                }
                quote
            })
            .collect()
    }
}

#[async_trait]
impl RemoteSource for HttpRemoteSource {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, QuoteError> {
        let url = format!("{}?_limit={}", self.endpoint, self.limit);
        log::debug!("Fetching quotes from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| QuoteError::Remote(format!("failed to fetch {url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Remote(format!("HTTP error: {}", status.as_u16())));
        }

        let posts: Vec<ServerPost> = response
            .json()
            .await
            .map_err(|e| QuoteError::Remote(format!("invalid response body: {e}")))?;

        Ok(self.to_quotes(posts))
    }

    async fn push_quote(&self, quote: &Quote) -> Result<(), QuoteError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(quote)
            .send()
            .await
            .map_err(|e| QuoteError::Remote(format!("failed to post quote: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Remote(format!(
                "Failed to post quote to server: HTTP {}",
                status.as_u16()
            )));
        }

        let body = response.text().await.unwrap_or_default();
        log::info!("Quote posted to server: {body}");
        Ok(())
    }
}
