//! # wt-infra
//!
//! Infrastructure adapters for WalkTour: the durable key/value store
//! implementations, the JSON step catalog loader, and the no-op haptics
//! adapter.

pub mod catalog;
pub mod haptics;
pub mod storage;

pub use catalog::JsonFileStepCatalog;
pub use haptics::NoopHaptics;
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore, StorageError};
