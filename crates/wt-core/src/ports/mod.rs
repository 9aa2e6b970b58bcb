//! Port interfaces for the application layer
//!
//! Ports define the contract between the walkthrough logic and
//! infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! external dependencies: the durable key/value store, the platform
//! haptics engine, and the step content catalog are all injected.

pub mod haptics;
pub mod key_value_store;
pub mod step_catalog;

pub use haptics::HapticsPort;
pub use key_value_store::KeyValueStorePort;
pub use step_catalog::StepCatalogPort;
