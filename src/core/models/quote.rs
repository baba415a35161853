//! Quote model
//!
//! A quote is a piece of text filed under a free-text category.
//! Quotes are immutable once created.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::QuoteError;

/// A quote - the atomic unit of content
///
/// Deserialization goes through [`Quote::new`], so blank fields are
/// rejected wherever quotes enter from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawQuote")]
pub struct Quote {
    text: String,
    category: String,
}

/// Unvalidated wire shape of a quote
#[derive(Deserialize)]
struct RawQuote {
    text: String,
    category: String,
}

impl TryFrom<RawQuote> for Quote {
    type Error = QuoteError;

    fn try_from(raw: RawQuote) -> Result<Self, Self::Error> {
        Self::new(&raw.text, &raw.category)
    }
}

impl Quote {
    /// Create a quote from user input
    ///
    /// Both values are trimmed; either one being empty afterwards is a
    /// validation error.
    pub fn new(text: &str, category: &str) -> Result<Self, QuoteError> {
        let text = text.trim();
        let category = category.trim();

        if text.is_empty() || category.is_empty() {
            return Err(QuoteError::Validation(
                "Please enter both quote and category.".to_string(),
            ));
        }

        Ok(Self {
            text: text.to_string(),
            category: category.to_string(),
        })
    }

    /// The quote text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The category label
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" — {}", self.text, self.category)
    }
}

/// Ordered sequence of quotes, insertion order preserved
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteCollection {
    quotes: Vec<Quote>,
}

impl QuoteCollection {
    /// Create an empty collection
    #[must_use]
    pub const fn new() -> Self {
        Self { quotes: Vec::new() }
    }

    /// Number of quotes
    #[must_use]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Whether the collection holds no quotes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Iterate quotes in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Quote> {
        self.quotes.iter()
    }

    /// Borrow the quotes as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[Quote] {
        &self.quotes
    }

    /// Whether any quote has exactly this text
    #[must_use]
    pub fn contains_text(&self, text: &str) -> bool {
        self.quotes.iter().any(|q| q.text == text)
    }

    pub(crate) fn push(&mut self, quote: Quote) {
        self.quotes.push(quote);
    }
}

impl From<Vec<Quote>> for QuoteCollection {
    fn from(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }
}

impl FromIterator<Quote> for QuoteCollection {
    fn from_iter<I: IntoIterator<Item = Quote>>(iter: I) -> Self {
        Self {
            quotes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a QuoteCollection {
    type Item = &'a Quote;
    type IntoIter = std::slice::Iter<'a, Quote>;

    fn into_iter(self) -> Self::IntoIter {
        self.quotes.iter()
    }
}
