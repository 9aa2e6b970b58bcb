//! Key/value store adapters.

pub mod file_key_value_store;
pub mod memory_key_value_store;

pub use file_key_value_store::{FileKeyValueStore, StorageError, DEFAULT_STORE_FILE};
pub use memory_key_value_store::InMemoryKeyValueStore;
