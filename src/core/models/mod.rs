//! Domain models for quotebook
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Quote`] - A text/category pair
//! - [`QuoteCollection`] - Ordered list of quotes
//! - [`CategoryFilter`] - `all` or a single category
//! - [`CategoryMatching`] - How a filter compares against categories

mod filter;
mod quote;

pub use filter::{ALL_CATEGORIES, CategoryFilter, CategoryMatching, CategoryOption};
pub use quote::{Quote, QuoteCollection};
