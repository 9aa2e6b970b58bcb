//! WalkTour Application Orchestration Layer
//!
//! This crate contains the observable walkthrough state container, the
//! persistence gateway, and the effect runner that turns pure state
//! machine actions into storage writes and haptic cues.

pub mod usecases;

pub use usecases::walkthrough::{OnboardingGateway, PersistedOnboarding, WalkthroughOrchestrator};
