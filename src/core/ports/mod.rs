//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the quote store and the
//! outside world (storage, network, randomness, rendering).
//!
//! Implementations live in the `adapters` module and in `output`.
//!
//! ## Design Principle
//!
//! The core depends only on these traits, never on concrete
//! implementations. This enables:
//!
//! - **Testability**: Scripted implementations for unit tests
//! - **Flexibility**: Swap implementations without changing business logic
//! - **Clarity**: Clear boundaries between layers

mod key_value_store;
mod presenter;
mod random_source;
mod remote_source;

pub use key_value_store::KeyValueStore;
pub use presenter::Presenter;
pub use random_source::RandomSource;
pub use remote_source::RemoteSource;
