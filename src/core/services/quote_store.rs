//! Quote store - value-in/value-out operations over a collection
//!
//! Every function takes the collection by reference and returns a new
//! value. Nothing here touches storage or the network.

use std::collections::HashSet;

use serde_json::Value;

use crate::core::error::QuoteError;
use crate::core::models::{CategoryFilter, CategoryMatching, Quote, QuoteCollection};
use crate::core::ports::RandomSource;

/// Parse a persisted quote blob
///
/// `None` yields an empty collection. Anything that is not a JSON array of
/// `{text, category}` objects is a [`QuoteError::Parse`]; the caller must
/// then treat the store as empty.
pub fn load(raw: Option<&str>) -> Result<QuoteCollection, QuoteError> {
    let Some(raw) = raw else {
        return Ok(QuoteCollection::new());
    };

    let value: Value = serde_json::from_str(raw)?;
    if !value.is_array() {
        return Err(QuoteError::Parse("expected a JSON array of quotes".to_string()));
    }

    Ok(serde_json::from_value(value)?)
}

/// Serialize a collection as a pretty-printed JSON array
///
/// Only `text` and `category` are written.
#[must_use]
pub fn serialize(collection: &QuoteCollection) -> String {
    // Vec<Quote> of plain strings cannot fail to serialize
    serde_json::to_string_pretty(collection).unwrap_or_else(|_| "[]".to_string())
}

/// Append a user-entered quote
///
/// Returns the new collection and the created quote, so callers can hand
/// the quote to other collaborators (e.g. push it to the server).
pub fn add_quote(
    collection: &QuoteCollection,
    text: &str,
    category: &str,
) -> Result<(QuoteCollection, Quote), QuoteError> {
    let quote = Quote::new(text, category)?;
    let mut next = collection.clone();
    next.push(quote.clone());
    Ok((next, quote))
}

/// Distinct categories in order of first appearance
#[must_use]
pub fn categories(collection: &QuoteCollection) -> Vec<String> {
    let mut seen = HashSet::new();
    collection
        .iter()
        .filter(|q| seen.insert(q.category()))
        .map(|q| q.category().to_string())
        .collect()
}

/// Quotes passing the filter, in collection order
#[must_use]
pub fn filter_quotes<'a>(
    collection: &'a QuoteCollection,
    filter: &CategoryFilter,
    matching: CategoryMatching,
) -> Vec<&'a Quote> {
    collection.iter().filter(|q| filter.accepts(q.category(), matching)).collect()
}

/// Pick one quote uniformly at random among those passing the filter
///
/// Returns `None` when no quote passes.
pub fn random_quote<'a>(
    collection: &'a QuoteCollection,
    filter: &CategoryFilter,
    matching: CategoryMatching,
    rng: &mut dyn RandomSource,
) -> Option<&'a Quote> {
    let candidates = filter_quotes(collection, filter, matching);
    if candidates.is_empty() {
        return None;
    }

    // Clamp so a misbehaving source cannot index out of bounds
    let index = rng.pick(candidates.len()).min(candidates.len() - 1);
    Some(candidates[index])
}

/// Append remote quotes whose text is not already present
///
/// Texts added earlier in the same call count as present, so the
/// incoming batch cannot introduce duplicates of itself either. Applying
/// the same batch twice adds nothing the second time.
#[must_use]
pub fn merge_remote(
    collection: &QuoteCollection,
    incoming: &[Quote],
) -> (QuoteCollection, usize) {
    let mut known: HashSet<String> = collection.iter().map(|q| q.text().to_string()).collect();
    let mut next = collection.clone();
    let mut added = 0;

    for quote in incoming {
        if known.insert(quote.text().to_string()) {
            next.push(quote.clone());
            added += 1;
        }
    }

    (next, added)
}

/// Validate and append an imported batch
///
/// Strict: the batch must be an array and every element must be an
/// object with non-empty string `text` and `category`. The first invalid
/// element rejects the whole batch. The page scripts accepted any array
/// verbatim; this is an intentional tightening.
pub fn import_batch(
    collection: &QuoteCollection,
    incoming: &Value,
) -> Result<QuoteCollection, QuoteError> {
    let Some(items) = incoming.as_array() else {
        return Err(QuoteError::Validation(
            "Invalid file format: expected a JSON array of quotes.".to_string(),
        ));
    };

    let mut next = collection.clone();
    for (index, item) in items.iter().enumerate() {
        next.push(coerce_quote(index, item)?);
    }

    Ok(next)
}

fn coerce_quote(index: usize, item: &Value) -> Result<Quote, QuoteError> {
    let field = |name: &str| item.get(name).and_then(Value::as_str);

    match (field("text"), field("category")) {
        (Some(text), Some(category)) => Quote::new(text, category).map_err(|_| {
            QuoteError::Validation(format!(
                "Invalid quote at index {index}: text and category must not be empty."
            ))
        }),
        _ => Err(QuoteError::Validation(format!(
            "Invalid quote at index {index}: expected an object with string \"text\" and \"category\"."
        ))),
    }
}
