//! Error taxonomy for quote operations

use thiserror::Error;

/// Errors raised by the quote store and its remote collaborators
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// Malformed persisted or imported JSON
    #[error("invalid quote data: {0}")]
    Parse(String),

    /// Rejected input (empty text or category, malformed import element)
    #[error("{0}")]
    Validation(String),

    /// Network failure or non-success status from the remote source
    #[error("remote source failed: {0}")]
    Remote(String),
}

impl From<serde_json::Error> for QuoteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
