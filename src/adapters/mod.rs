//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `file/` - Key-value storage as one file per key
//! - `memory/` - In-process key-value storage
//! - `random/` - `rand`-backed random sources
//! - `http/` - HTTP remote quote source (feature `remote`)

pub mod file;
#[cfg(feature = "remote")]
pub mod http;
pub mod memory;
pub mod random;

pub use file::FileKeyValueStore;
#[cfg(feature = "remote")]
pub use http::HttpRemoteSource;
pub use memory::MemoryKeyValueStore;
pub use random::{SeededRandom, ThreadRandom};
