//! Persistence port
//!
//! Defines the string key-value interface used for the quote blob, the
//! last selected filter, and the last displayed quote.

/// String key-value storage
///
/// Persistent and session-scoped stores share this shape; they differ
/// only in how long their contents live.
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` when the key was never written
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}
