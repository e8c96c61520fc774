//! Adapters - Implementations of port interfaces.
//!
//! - `storage` - file and in-memory key-value stores

pub mod storage;

pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
