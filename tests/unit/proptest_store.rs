//! Property-based tests for the quote store
//!
//! Uses proptest to verify properties that should hold for all inputs.

use proptest::prelude::*;
use quotebook::adapters::SeededRandom;
use quotebook::core::services::{add_quote, categories, load, merge_remote, random_quote, serialize};
use quotebook::{CategoryFilter, CategoryMatching, Quote, QuoteCollection};

fn arb_quote() -> impl Strategy<Value = Quote> {
    ("[a-zA-Z0-9 ,.!?'\"]{0,40}[a-zA-Z]", "[A-Z][a-z]{0,8}")
        .prop_map(|(text, category)| Quote::new(&text, &category).unwrap())
}

fn arb_collection() -> impl Strategy<Value = QuoteCollection> {
    prop::collection::vec(arb_quote(), 0..20).prop_map(QuoteCollection::from)
}

proptest! {
    /// Serialize then load is the identity, order included
    #[test]
    fn serialize_load_roundtrip(collection in arb_collection()) {
        let restored = load(Some(&serialize(&collection))).unwrap();
        prop_assert_eq!(restored, collection);
    }

    /// A successfully added category always shows up in the category set
    #[test]
    fn added_category_is_listed(
        collection in arb_collection(),
        text in "[a-z]{1,20}",
        category in "[A-Za-z]{1,10}"
    ) {
        let (next, created) = add_quote(&collection, &text, &category).unwrap();
        prop_assert!(categories(&next).contains(&created.category().to_string()));
    }

    /// "all" only comes back empty for an empty collection
    #[test]
    fn all_filter_empty_only_when_collection_empty(collection in arb_collection(), seed in any::<u64>()) {
        let mut rng = SeededRandom::new(seed);
        let picked = random_quote(&collection, &CategoryFilter::All, CategoryMatching::Exact, &mut rng);
        prop_assert_eq!(picked.is_none(), collection.is_empty());
    }

    /// A category filter only ever returns quotes of that category
    #[test]
    fn category_filter_only_returns_category(
        collection in arb_collection(),
        wanted in "[A-Z][a-z]{0,8}",
        seed in any::<u64>()
    ) {
        let mut rng = SeededRandom::new(seed);
        let filter = CategoryFilter::parse(&wanted);
        for _ in 0..8 {
            if let Some(quote) = random_quote(&collection, &filter, CategoryMatching::Exact, &mut rng) {
                prop_assert_eq!(quote.category(), wanted.as_str());
            }
        }
    }

    /// Merging the same batch twice adds nothing the second time
    #[test]
    fn merge_idempotent(collection in arb_collection(), incoming in prop::collection::vec(arb_quote(), 0..10)) {
        let (once, _) = merge_remote(&collection, &incoming);
        let (twice, added_again) = merge_remote(&once, &incoming);
        prop_assert_eq!(added_again, 0);
        prop_assert_eq!(twice, once);
    }

    /// Merging never introduces a duplicate text from the incoming batch
    #[test]
    fn merge_adds_no_duplicate_texts(incoming in prop::collection::vec(arb_quote(), 0..15)) {
        let (merged, added) = merge_remote(&QuoteCollection::new(), &incoming);
        let mut texts: Vec<&str> = merged.iter().map(Quote::text).collect();
        texts.sort_unstable();
        texts.dedup();
        prop_assert_eq!(texts.len(), added);
        prop_assert_eq!(merged.len(), added);
    }
}

#[cfg(test)]
mod deterministic_tests {
    use super::*;

    #[test]
    fn seeded_selection_is_repeatable() {
        let collection = crate::common::fixtures::seed();
        let pick = |seed| {
            let mut rng = SeededRandom::new(seed);
            random_quote(&collection, &CategoryFilter::All, CategoryMatching::Exact, &mut rng)
                .map(|q| q.text().to_string())
        };
        assert_eq!(pick(11), pick(11));
    }
}
