//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application layer and storage. Adapters implement these ports.
//!
//! - `KeyValueStore` - string values persisted under string keys

mod key_value_store;

pub use key_value_store::{validate_key, KeyValueStore, KeyValueStoreError};
