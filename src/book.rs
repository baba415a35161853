//! Quote book - the application service around the quote store
//!
//! Owns the live [`QuoteCollection`] and wires it to a persistent
//! key-value store (collection blob, selected filter) and a session
//! store (last displayed quote). Every mutation is computed on a copy,
//! persisted, and only then swapped in, so a rejected or failed write
//! leaves the book unchanged.

use std::fmt;

use crate::core::error::QuoteError;
use crate::core::models::{CategoryFilter, CategoryMatching, CategoryOption, Quote, QuoteCollection};
use crate::core::ports::{KeyValueStore, RandomSource};
use crate::core::services::{self, quote_store};
use crate::paths::{LAST_QUOTE_KEY, QUOTES_KEY, SELECTED_CATEGORY_KEY};

/// Demonstration quotes written by `seed`
const SEED_QUOTES: [(&str, &str); 4] = [
    ("The only limit to our realization of tomorrow is our doubts of today.", "Motivation"),
    ("Imagination is more important than knowledge.", "Inspiration"),
    ("Stay hungry, stay foolish.", "Motivation"),
    ("Life is really simple, but we insist on making it complicated.", "Philosophy"),
];

/// The four demonstration quotes as a collection
#[must_use]
pub fn seed_quotes() -> QuoteCollection {
    SEED_QUOTES
        .iter()
        .filter_map(|(text, category)| Quote::new(text, category).ok())
        .collect()
}

/// A quote collection bound to its stores
pub struct QuoteBook {
    quotes: QuoteCollection,
    persistent: Box<dyn KeyValueStore>,
    session: Box<dyn KeyValueStore>,
    matching: CategoryMatching,
}

impl fmt::Debug for QuoteBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuoteBook")
            .field("quotes", &self.quotes.len())
            .field("matching", &self.matching)
            .finish_non_exhaustive()
    }
}

impl QuoteBook {
    /// Open a book from its stores
    ///
    /// A malformed blob is logged and treated as an empty collection;
    /// a storage read failure is returned.
    pub fn open(
        persistent: Box<dyn KeyValueStore>,
        session: Box<dyn KeyValueStore>,
        matching: CategoryMatching,
    ) -> anyhow::Result<Self> {
        let raw = persistent.get(QUOTES_KEY)?;
        let quotes = quote_store::load(raw.as_deref()).unwrap_or_else(|err| {
            log::warn!("Stored quotes are unreadable, starting empty: {err}");
            QuoteCollection::new()
        });
        log::debug!("Opened quote book with {} quote(s)", quotes.len());

        Ok(Self {
            quotes,
            persistent,
            session,
            matching,
        })
    }

    /// The current collection
    #[must_use]
    pub const fn quotes(&self) -> &QuoteCollection {
        &self.quotes
    }

    /// The configured category matching mode
    #[must_use]
    pub const fn matching(&self) -> CategoryMatching {
        self.matching
    }

    /// Distinct categories, recomputed from the collection
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        quote_store::categories(&self.quotes)
    }

    /// The filter that should be active right now
    pub fn active_filter(&self) -> anyhow::Result<CategoryFilter> {
        let persisted = self.persistent.get(SELECTED_CATEGORY_KEY)?;
        Ok(services::resolve_active_filter(persisted.as_deref(), &self.quotes, self.matching))
    }

    /// Picker options with the active filter selected
    pub fn category_options(&self) -> anyhow::Result<Vec<CategoryOption>> {
        let active = self.active_filter()?;
        Ok(services::category_options(&self.quotes, &active, self.matching))
    }

    /// Pick a random quote and remember it for this session
    pub fn show_random(
        &self,
        filter: &CategoryFilter,
        rng: &mut dyn RandomSource,
    ) -> anyhow::Result<Option<Quote>> {
        let Some(quote) = quote_store::random_quote(&self.quotes, filter, self.matching, rng) else {
            return Ok(None);
        };

        self.session.set(LAST_QUOTE_KEY, &quote.to_string())?;
        Ok(Some(quote.clone()))
    }

    /// The last quote line shown in this session
    pub fn last_viewed(&self) -> anyhow::Result<Option<String>> {
        self.session.get(LAST_QUOTE_KEY)
    }

    /// Persist a filter selection and return the quotes it lets through
    pub fn select_filter(&self, filter: &CategoryFilter) -> anyhow::Result<Vec<Quote>> {
        self.persistent.set(SELECTED_CATEGORY_KEY, filter.as_str())?;
        Ok(self.filtered(filter))
    }

    /// Quotes passing a filter, without touching storage
    #[must_use]
    pub fn filtered(&self, filter: &CategoryFilter) -> Vec<Quote> {
        quote_store::filter_quotes(&self.quotes, filter, self.matching)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Add a user-entered quote
    ///
    /// Invalid input fails with [`QuoteError::Validation`] and changes
    /// nothing.
    pub fn add(&mut self, text: &str, category: &str) -> anyhow::Result<Quote> {
        let (next, quote) = quote_store::add_quote(&self.quotes, text, category)?;
        self.commit(next)?;
        log::debug!("Added quote in category {}", quote.category());
        Ok(quote)
    }

    /// Import a JSON document of quotes, returning how many were added
    ///
    /// The whole batch is rejected if any element is invalid.
    pub fn import_json(&mut self, raw: &str) -> anyhow::Result<usize> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|e| QuoteError::Parse(format!("Error parsing JSON: {e}")))?;
        let next = quote_store::import_batch(&self.quotes, &value)?;
        let imported = next.len() - self.quotes.len();
        self.commit(next)?;
        Ok(imported)
    }

    /// The collection as an exportable JSON document
    #[must_use]
    pub fn export_json(&self) -> String {
        quote_store::serialize(&self.quotes)
    }

    /// Merge fetched quotes, persisting only if something was added
    pub fn merge_remote(&mut self, incoming: &[Quote]) -> anyhow::Result<usize> {
        let (next, added) = quote_store::merge_remote(&self.quotes, incoming);
        if added > 0 {
            self.commit(next)?;
        }
        Ok(added)
    }

    /// Write the demonstration quotes
    ///
    /// Does nothing on a non-empty book unless `force` is set, in which
    /// case the collection is replaced. Returns the number written.
    pub fn seed(&mut self, force: bool) -> anyhow::Result<usize> {
        if !self.quotes.is_empty() && !force {
            return Ok(0);
        }
        let seeded = seed_quotes();
        let count = seeded.len();
        self.commit(seeded)?;
        Ok(count)
    }

    fn commit(&mut self, next: QuoteCollection) -> anyhow::Result<()> {
        self.persistent.set(QUOTES_KEY, &quote_store::serialize(&next))?;
        self.quotes = next;
        Ok(())
    }
}
