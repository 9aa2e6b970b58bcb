//! Walkthrough use cases
//!
//! This module hosts the walkthrough orchestrator (the injectable,
//! observable state container exposed to the UI layer), its shared
//! context, and the persistence gateway over the key/value store port.

pub mod context;
pub mod gateway;
pub mod orchestrator;

pub use context::WalkthroughContext;
pub use gateway::{OnboardingGateway, PersistedOnboarding};
pub use orchestrator::WalkthroughOrchestrator;
