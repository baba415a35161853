//! Core domain logic for quotebook
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Quote, QuoteCollection, CategoryFilter)
//! - `services/` - Quote store operations and filter policy
//! - `ports/` - Trait definitions for storage, remote, randomness and rendering
//! - `error` - The [`QuoteError`](error::QuoteError) taxonomy

pub mod error;
pub mod models;
pub mod ports;
pub mod services;
