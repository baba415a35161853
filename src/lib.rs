//! quotebook - A quote collection with category filtering, JSON
//! import/export and server sync
//!
//! This library provides the quote store, its storage and remote adapters,
//! and the periodic sync task used by the `quotebook` CLI.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces
)]
#![warn(missing_copy_implementations, unused_qualifications)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod book;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
#[cfg(feature = "remote")]
pub mod sync;

pub use book::QuoteBook;
pub use crate::core::error::QuoteError;
pub use crate::core::models::{CategoryFilter, CategoryMatching, Quote, QuoteCollection};
