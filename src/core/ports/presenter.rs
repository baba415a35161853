//! Presentation port
//!
//! Rendering surface for quotes, category pickers and user notices.
//! The core never calls into it; front ends feed it data returned from
//! the store.

use crate::core::models::{CategoryOption, Quote};

/// Renders quote data to the user
pub trait Presenter {
    /// Show a single quote
    fn quote(&self, quote: &Quote);

    /// Tell the user no quote matched the active filter
    fn no_quotes(&self);

    /// Show a list of quotes
    fn quote_list(&self, quotes: &[Quote]);

    /// Show a category picker
    fn category_options(&self, options: &[CategoryOption]);

    /// Show a short notice
    fn notify(&self, message: &str);
}
