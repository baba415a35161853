//! Business logic services
//!
//! Pure logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`quote_store`] - Load, serialize, add, select, merge and import quotes
//! - [`filter_policy`] - Decide the active category filter

pub mod filter_policy;
pub mod quote_store;

pub use filter_policy::{category_options, resolve_active_filter};
pub use quote_store::{
    add_quote, categories, filter_quotes, import_batch, load, merge_remote, random_quote, serialize,
};
