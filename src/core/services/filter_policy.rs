//! Category filter policy
//!
//! Decides which filter is active and builds the option list every
//! category picker renders from.

use crate::core::models::{
    ALL_CATEGORIES, CategoryFilter, CategoryMatching, CategoryOption, QuoteCollection,
};

use super::quote_store::categories;

/// Resolve the active filter from the persisted value
///
/// The persisted value wins if it is `all` or still names a category in
/// the collection; otherwise the filter falls back to `all`.
#[must_use]
pub fn resolve_active_filter(
    persisted: Option<&str>,
    collection: &QuoteCollection,
    matching: CategoryMatching,
) -> CategoryFilter {
    match persisted.map(CategoryFilter::parse) {
        Some(CategoryFilter::Category(wanted)) => categories(collection)
            .into_iter()
            .find(|c| matching.matches(&wanted, c))
            .map_or(CategoryFilter::All, |_| CategoryFilter::Category(wanted)),
        _ => CategoryFilter::All,
    }
}

/// Build the picker options: `all` first, then each category
///
/// Every picker renders from this one list, so they stay consistent with
/// the active filter.
#[must_use]
pub fn category_options(
    collection: &QuoteCollection,
    active: &CategoryFilter,
    matching: CategoryMatching,
) -> Vec<CategoryOption> {
    let mut options = vec![CategoryOption {
        value: ALL_CATEGORIES.to_string(),
        label: "All Categories".to_string(),
        selected: active.is_all(),
    }];

    // Only one option may be selected, even when several categories
    // differ only by case under IgnoreCase.
    let mut claimed = active.is_all();
    for category in categories(collection) {
        let selected = !claimed && active.accepts(&category, matching);
        claimed |= selected;
        options.push(CategoryOption {
            selected,
            label: category.clone(),
            value: category,
        });
    }

    options
}
